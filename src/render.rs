//! Assembly of the classified block sequence into the final PDF document.
//!
//! The renderer consumes blocks in order and appends styled elements to a
//! one-pass, append-only document stream: no block is revisited and no
//! backward edits happen.  Only the backend finalization step can fail; in
//! that case the whole call fails and no partial bytes are returned.

use chrono::{Local, NaiveDate};
use genpdf::elements::{Break, Paragraph};
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{Element, Margins, SimplePageDecorator};
use log::debug;

use crate::elements::{DataTable, LabelValueRow, ListItemRow, Rule, SectionBand, TitleBanner};
use crate::model::Block;
use crate::{fonts, normalize, segment, theme};

/// Case-insensitive marker in the title that switches the banner subtitle to
/// the nutrition variant; matches both "diet" and "dieta".
const DIET_KEYWORD: &str = "diet";
const SUBTITLE_DIET: &str = "Plan de nutrición personalizado";
const SUBTITLE_TRAINING: &str = "Plan de entrenamiento personalizado";

const DISCLAIMER_LINE_1: &str =
    "Documento generado automáticamente a partir de una conversación con GymAI.";
const DISCLAIMER_LINE_2: &str =
    "Consulta con un profesional antes de seguir un plan de entrenamiento o dieta.";

/// Renders plan markup into a complete PDF, dated today.
///
/// The title may be empty and the source may be empty; an empty source still
/// yields a document with the banner and the disclaimer footer.
pub fn render_plan_pdf(title: &str, source: &str) -> Result<Vec<u8>, Error> {
    render_plan_pdf_on(title, source, Local::now().date_naive())
}

/// Renders plan markup into a complete PDF with an explicit generated date.
///
/// Equal inputs produce equal documents up to PDF metadata, which makes this
/// variant the one exercised by determinism tests.
pub fn render_plan_pdf_on(
    title: &str,
    source: &str,
    generated: NaiveDate,
) -> Result<Vec<u8>, Error> {
    let blocks = segment::segment(&normalize::normalize(source));
    debug!("rendering {} blocks under title {:?}", blocks.len(), title);

    let font_family = fonts::default_font_family()?;
    let mut document = genpdf::Document::new(font_family);
    document.set_title(title);
    document.set_paper_size(genpdf::PaperSize::A4);
    document.set_font_size(theme::BODY_SIZE);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(
        theme::PAGE_MARGIN_MM,
        theme::PAGE_MARGIN_MM,
        theme::PAGE_MARGIN_MM,
        theme::PAGE_MARGIN_MM,
    ));
    document.set_page_decorator(decorator);

    document.push(TitleBanner::new(
        title,
        subtitle_for(title),
        format!("Generado el {}", generated.format("%d/%m/%Y")),
    ));
    document.push(Break::new(1));

    for block in blocks {
        push_block(&mut document, block);
    }

    push_footer(&mut document);

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

fn subtitle_for(title: &str) -> &'static str {
    if title.to_lowercase().contains(DIET_KEYWORD) {
        SUBTITLE_DIET
    } else {
        SUBTITLE_TRAINING
    }
}

fn push_block(document: &mut genpdf::Document, block: Block) {
    match block {
        Block::SectionHeader(text) => {
            document.push(SectionBand::new(text).padded(Margins::trbl(2.5, 0.0, 1.5, 0.0)));
        }
        Block::SubsectionHeader(text) => {
            let mut style = Style::new();
            style.set_bold();
            style.set_font_size(theme::SUBSECTION_SIZE);
            document.push(
                Paragraph::new(text)
                    .styled(style)
                    .padded(Margins::trbl(1.5, 0.0, 0.8, 0.0)),
            );
        }
        Block::BulletItem(text) => {
            document.push(ListItemRow::bullet(&text).padded(Margins::trbl(0.0, 0.0, 0.6, 0.0)));
        }
        Block::NumberedItem { ordinal, text } => {
            document.push(
                ListItemRow::numbered(&ordinal, &text).padded(Margins::trbl(0.0, 0.0, 0.6, 0.0)),
            );
        }
        Block::LabelValue { label, value } => {
            document.push(LabelValueRow::new(label, value).padded(Margins::trbl(0.0, 0.0, 0.8, 0.0)));
        }
        Block::ParagraphText(text) => {
            document.push(Paragraph::new(text).padded(Margins::trbl(0.0, 0.0, 0.8, 0.0)));
        }
        Block::Table(table) => {
            document.push(DataTable::new(&table).padded(Margins::trbl(1.0, 0.0, 1.5, 0.0)));
        }
    }
}

/// The ruled divider and two-line disclaimer every document closes with.
fn push_footer(document: &mut genpdf::Document) {
    document.push(Break::new(1));
    document.push(Rule::new(theme::CELL_BORDER));

    let mut footer_style = Style::new();
    footer_style.set_italic();
    footer_style.set_font_size(theme::FOOTER_SIZE);
    footer_style.set_color(theme::MUTED);
    document.push(
        Paragraph::new(DISCLAIMER_LINE_1)
            .styled(footer_style)
            .padded(Margins::trbl(1.0, 0.0, 0.0, 0.0)),
    );
    document.push(Paragraph::new(DISCLAIMER_LINE_2).styled(footer_style));
}

#[cfg(test)]
mod tests {
    use super::subtitle_for;

    #[test]
    fn diet_keyword_switches_the_subtitle() {
        assert_eq!(subtitle_for("Plan de Dieta semanal"), super::SUBTITLE_DIET);
        assert_eq!(subtitle_for("DIETA"), super::SUBTITLE_DIET);
        assert_eq!(subtitle_for("Plan GymAI"), super::SUBTITLE_TRAINING);
        assert_eq!(subtitle_for(""), super::SUBTITLE_TRAINING);
    }
}
