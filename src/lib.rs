//! Renders LLM-generated plan markup into styled, paginated PDF documents.
//!
//! The crate implements a one-pass pipeline: [`normalize`] strips
//! renderer-irrelevant markup tokens, [`segment`] groups the resulting lines
//! into typed [`Block`]s (buffering contiguous pipe-table lines into table
//! blocks), and [`render`] maps the block sequence to styled `genpdf`
//! elements framed by a fixed banner and disclaimer footer.
//!
//! ```no_run
//! let source = "## Rutina\n- Peso: 80kg\n1. Haz sentadillas";
//! let bytes = plan_pdf::render_plan_pdf("Plan GymAI", source)?;
//! # Ok::<(), genpdf::error::Error>(())
//! ```
//!
//! The pipeline is stateless across calls and has no I/O besides the returned
//! byte buffer; fonts are resolved once per call through [`fonts`].

pub mod classify;
pub mod elements;
pub mod fonts;
pub mod model;
pub mod normalize;
pub mod render;
pub mod segment;
pub mod theme;

pub use model::{Block, Table};
pub use render::{render_plan_pdf, render_plan_pdf_on};
