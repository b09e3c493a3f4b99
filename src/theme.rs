//! The fixed visual theme applied by the renderer.
//!
//! Colors, font sizes and spacing form a closed constant table; the crate
//! exposes no configuration surface for overriding them.

use genpdf::style::Color;

/// Background of the opening banner band.
pub const BANNER_BACKGROUND: Color = Color::Rgb(0x1b, 0x5e, 0x20);
/// Primary fill used for ordinal badges and table header rows.
pub const PRIMARY: Color = Color::Rgb(0x2e, 0x7d, 0x32);
/// Accent used for section heading text, the accent bar and bullet glyphs.
pub const ACCENT: Color = Color::Rgb(0x1b, 0x5e, 0x20);
/// Tinted background of section heading bands.
pub const SECTION_TINT: Color = Color::Rgb(0xe8, 0xf5, 0xe9);
/// Alternating background of odd table rows.
pub const ZEBRA_TINT: Color = Color::Rgb(0xf1, 0xf8, 0xe9);
/// Background of label cells in label/value rows.
pub const LABEL_TINT: Color = Color::Rgb(0xf0, 0xf0, 0xf0);
/// Thin neutral border around cells and the footer rule.
pub const CELL_BORDER: Color = Color::Rgb(0xbd, 0xbd, 0xbd);
/// Text on solid primary or banner backgrounds.
pub const ON_PRIMARY: Color = Color::Rgb(0xff, 0xff, 0xff);
/// Muted gray for the disclaimer footer.
pub const MUTED: Color = Color::Rgb(0x75, 0x75, 0x75);

pub const TITLE_SIZE: u8 = 18;
pub const SUBTITLE_SIZE: u8 = 10;
pub const SECTION_SIZE: u8 = 14;
pub const SUBSECTION_SIZE: u8 = 12;
pub const BODY_SIZE: u8 = 11;
pub const FOOTER_SIZE: u8 = 8;

/// Uniform page margin on all four sides.
pub const PAGE_MARGIN_MM: f64 = 15.0;
/// Inner padding of table and label/value cells.
pub const CELL_PADDING_MM: f64 = 1.6;
/// Inner padding of the section band and the banner.
pub const BAND_PADDING_MM: f64 = 2.2;
/// Width of the accent bar on the left edge of section bands.
pub const ACCENT_BAR_WIDTH_MM: f64 = 1.4;
/// Width reserved for bullet glyphs and ordinal badges.
pub const MARKER_COLUMN_MM: f64 = 9.0;
/// Width of the filled ordinal badge.
pub const BADGE_WIDTH_MM: f64 = 6.5;
/// Vertical distance between stacked hairline strokes when emulating fills.
pub const FILL_STEP_MM: f64 = 0.3;
