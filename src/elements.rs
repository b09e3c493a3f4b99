//! Custom element implementations built on top of `genpdf` primitives.
//!
//! This module adds the styled visual units the upstream crate does not ship
//! with: the banner and section bands, marker rows for list items, bordered
//! label/value rows and the zebra-striped data table.  `genpdf` only exposes
//! stroked polylines on [`render::Area`], so solid fills are emulated by
//! stacking hairline strokes at sub-line-width spacing.

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::fonts::FontCache;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

use crate::model::Table;
use crate::theme;

const ELLIPSIS: &str = "\u{2026}";

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Paints a solid rectangle by stacking horizontal hairline strokes.
fn fill_rect(area: &render::Area<'_>, x: Mm, y: Mm, width: Mm, height: Mm, color: Color) {
    let stroke = Style::new().with_color(color);
    let step = mm_from_f64(theme::FILL_STEP_MM);
    let mut offset = Mm::default();
    while offset < height {
        area.draw_line(
            vec![
                Position::new(x, y + offset),
                Position::new(x + width, y + offset),
            ],
            stroke,
        );
        offset += step;
    }
    area.draw_line(
        vec![
            Position::new(x, y + height),
            Position::new(x + width, y + height),
        ],
        stroke,
    );
}

/// Strokes a rectangle outline.
fn stroke_rect(area: &render::Area<'_>, x: Mm, y: Mm, width: Mm, height: Mm, color: Color) {
    let stroke = Style::new().with_color(color);
    area.draw_line(
        vec![
            Position::new(x, y),
            Position::new(x + width, y),
            Position::new(x + width, y + height),
            Position::new(x, y + height),
            Position::new(x, y),
        ],
        stroke,
    );
}

/// Returns the text as a styled string clipped to `max_width`, appending an
/// ellipsis when it does not fit.
fn clipped(text: &str, style: Style, font_cache: &FontCache, max_width: Mm) -> StyledString {
    let full = StyledString::new(text.to_owned(), style);
    if full.width(font_cache) <= max_width {
        return full;
    }
    let mut kept = String::new();
    for ch in text.chars() {
        let candidate = StyledString::new(format!("{kept}{ch}{ELLIPSIS}"), style);
        if candidate.width(font_cache) > max_width {
            break;
        }
        kept.push(ch);
    }
    let trimmed = kept.trim_end();
    StyledString::new(format!("{trimmed}{ELLIPSIS}"), style)
}

/// Prints a single pre-clipped line at the given offset inside `area`.
fn print_line(
    area: &render::Area<'_>,
    font_cache: &FontCache,
    x: Mm,
    y: Mm,
    string: &StyledString,
) -> Result<bool, Error> {
    if string.s.is_empty() {
        return Ok(true);
    }
    let mut text_area = area.clone();
    text_area.add_offset(Position::new(x, y));
    // The text section borrows `text_area`; keep it in an inner scope so the
    // borrow ends before `text_area` is dropped.
    let printed = match text_area.text_section(font_cache, Position::new(0, 0), string.style) {
        Some(mut section) => {
            section.print_str(&string.s, string.style)?;
            true
        }
        None => false,
    };
    Ok(printed)
}

/// The fixed dark banner the document opens with: title, a context-dependent
/// subtitle and the generated date, on a solid background band.
pub struct TitleBanner {
    title: String,
    subtitle: String,
    date_line: String,
}

impl TitleBanner {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        date_line: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            date_line: date_line.into(),
        }
    }
}

impl Element for TitleBanner {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut title_style = Style::new();
        title_style.set_bold();
        title_style.set_font_size(theme::TITLE_SIZE);
        title_style.set_color(theme::ON_PRIMARY);

        let mut line_style = Style::new();
        line_style.set_font_size(theme::SUBTITLE_SIZE);
        line_style.set_color(theme::ON_PRIMARY);

        let pad = mm_from_f64(theme::BAND_PADDING_MM);
        let title_height = title_style.line_height(&context.font_cache);
        let line_height = line_style.line_height(&context.font_cache);
        let band_height = pad + title_height + line_height + line_height + pad;

        let mut result = RenderResult::default();
        if band_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let width = area.size().width;
        fill_rect(&area, Mm::default(), Mm::default(), width, band_height, theme::BANNER_BACKGROUND);

        let font_cache = &context.font_cache;
        let text_width = width - pad - pad;
        let title = clipped(&self.title, title_style, font_cache, text_width);
        let subtitle = clipped(&self.subtitle, line_style, font_cache, text_width);
        let date_line = clipped(&self.date_line, line_style, font_cache, text_width);

        print_line(&area, font_cache, pad, pad, &title)?;
        print_line(&area, font_cache, pad, pad + title_height, &subtitle)?;
        print_line(&area, font_cache, pad, pad + title_height + line_height, &date_line)?;

        result.size = Size::new(width, band_height);
        Ok(result)
    }
}

/// A full-width tinted band with a left accent bar and bold heading text.
pub struct SectionBand {
    text: String,
}

impl SectionBand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Element for SectionBand {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut heading = Style::new();
        heading.set_bold();
        heading.set_font_size(theme::SECTION_SIZE);
        heading.set_color(theme::ACCENT);

        let pad = mm_from_f64(theme::BAND_PADDING_MM);
        let band_height = heading.line_height(&context.font_cache) + pad + pad;

        let mut result = RenderResult::default();
        if band_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let width = area.size().width;
        let bar_width = mm_from_f64(theme::ACCENT_BAR_WIDTH_MM);
        fill_rect(&area, Mm::default(), Mm::default(), width, band_height, theme::SECTION_TINT);
        fill_rect(&area, Mm::default(), Mm::default(), bar_width, band_height, theme::ACCENT);

        let text_x = bar_width + pad;
        let string = clipped(
            &self.text,
            heading,
            &context.font_cache,
            width - text_x - pad,
        );
        print_line(&area, &context.font_cache, text_x, pad, &string)?;

        result.size = Size::new(width, band_height);
        Ok(result)
    }
}

enum ListMarker {
    Bullet,
    Ordinal(String),
}

/// A two-column list row: a marker in a narrow column and wrapped item text
/// in the wide column.
///
/// The marker is drawn once; when the text continues on the next page the
/// continuation renders with the same indent and no repeated marker.
pub struct ListItemRow {
    marker: ListMarker,
    text: Paragraph,
    marker_done: bool,
}

impl ListItemRow {
    fn new(marker: ListMarker, text: &str) -> Self {
        Self {
            marker,
            text: Paragraph::new(text),
            marker_done: false,
        }
    }

    /// A row with a round accent-colored bullet glyph.
    pub fn bullet(text: &str) -> Self {
        Self::new(ListMarker::Bullet, text)
    }

    /// A row with the ordinal on a filled primary-color badge.
    pub fn numbered(ordinal: &str, text: &str) -> Self {
        Self::new(ListMarker::Ordinal(ordinal.to_owned()), text)
    }
}

impl Element for ListItemRow {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let width = area.size().width;
        let line_height = style.line_height(&context.font_cache);
        if line_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        if !self.marker_done {
            match &self.marker {
                ListMarker::Bullet => {
                    let mut glyph_style = style;
                    glyph_style.set_bold();
                    glyph_style.set_color(theme::ACCENT);
                    let glyph = StyledString::new("\u{2022}".to_owned(), glyph_style);
                    self.marker_done = print_line(
                        &area,
                        &context.font_cache,
                        mm_from_f64(2.0),
                        Mm::default(),
                        &glyph,
                    )?;
                }
                ListMarker::Ordinal(ordinal) => {
                    let mut badge_style = style;
                    badge_style.set_bold();
                    badge_style.set_color(theme::ON_PRIMARY);
                    let badge_x = mm_from_f64(1.0);
                    let badge_width = mm_from_f64(theme::BADGE_WIDTH_MM);
                    fill_rect(
                        &area,
                        badge_x,
                        Mm::default(),
                        badge_width,
                        line_height,
                        theme::PRIMARY,
                    );
                    let string =
                        clipped(ordinal, badge_style, &context.font_cache, badge_width);
                    let text_width = string.width(&context.font_cache);
                    let text_x = badge_x + (badge_width - text_width) / 2.0;
                    self.marker_done = print_line(
                        &area,
                        &context.font_cache,
                        text_x,
                        Mm::default(),
                        &string,
                    )?;
                }
            }
            if !self.marker_done {
                result.has_more = true;
                return Ok(result);
            }
        }

        let mut text_area = area.clone();
        text_area.add_offset(Position::new(mm_from_f64(theme::MARKER_COLUMN_MM), 0));
        let text_result = self.text.render(context, text_area, style)?;

        result.size = Size::new(width, text_result.size.height.max(line_height));
        result.has_more = text_result.has_more;
        Ok(result)
    }
}

/// A bordered two-cell row: a bold label on a light tint and the value on
/// white.  Both cells are single clipped lines.
pub struct LabelValueRow {
    label: String,
    value: String,
}

impl LabelValueRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Element for LabelValueRow {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut label_style = style;
        label_style.set_bold();

        let pad = mm_from_f64(theme::CELL_PADDING_MM);
        let row_height = style.line_height(&context.font_cache) + pad + pad;

        let mut result = RenderResult::default();
        if row_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let width = area.size().width;
        let label_width = width / 3.0;
        let value_width = width - label_width;

        fill_rect(
            &area,
            Mm::default(),
            Mm::default(),
            label_width,
            row_height,
            theme::LABEL_TINT,
        );

        let font_cache = &context.font_cache;
        let label = clipped(&self.label, label_style, font_cache, label_width - pad - pad);
        let value = clipped(&self.value, style, font_cache, value_width - pad - pad);
        print_line(&area, font_cache, pad, pad, &label)?;
        print_line(&area, font_cache, label_width + pad, pad, &value)?;

        stroke_rect(
            &area,
            Mm::default(),
            Mm::default(),
            label_width,
            row_height,
            theme::CELL_BORDER,
        );
        stroke_rect(
            &area,
            label_width,
            Mm::default(),
            value_width,
            row_height,
            theme::CELL_BORDER,
        );

        result.size = Size::new(width, row_height);
        Ok(result)
    }
}

/// A full-width data table: a solid primary header row with centered white
/// bold cells, bordered left-aligned data cells and an alternating tint on
/// every other row.
///
/// Rows are rendered through a cursor so a long table continues on following
/// pages; the header row is repeated at the top of each continuation.
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    next_row: usize,
}

impl DataTable {
    /// Builds the element from a parsed table, reconciling every data row to
    /// the header width.
    pub fn new(table: &Table) -> Self {
        Self {
            headers: table.headers().to_vec(),
            rows: table.normalized_rows(),
            next_row: 0,
        }
    }

    fn render_header(
        &self,
        context: &genpdf::Context,
        area: &render::Area<'_>,
        col_width: Mm,
        header_height: Mm,
    ) -> Result<(), Error> {
        let mut header_style = Style::new();
        header_style.set_bold();
        header_style.set_font_size(theme::BODY_SIZE);
        header_style.set_color(theme::ON_PRIMARY);

        let pad = mm_from_f64(theme::CELL_PADDING_MM);
        let width = area.size().width;
        fill_rect(
            area,
            Mm::default(),
            Mm::default(),
            width,
            header_height,
            theme::PRIMARY,
        );

        let font_cache = &context.font_cache;
        let mut x = Mm::default();
        for cell in &self.headers {
            let string = clipped(cell, header_style, font_cache, col_width - pad - pad);
            let text_width = string.width(font_cache);
            let centered = x + (col_width - text_width) / 2.0;
            print_line(area, font_cache, centered, pad, &string)?;
            x += col_width;
        }
        Ok(())
    }

    fn render_row(
        &self,
        context: &genpdf::Context,
        area: &render::Area<'_>,
        index: usize,
        col_width: Mm,
        row_height: Mm,
        style: Style,
    ) -> Result<(), Error> {
        let pad = mm_from_f64(theme::CELL_PADDING_MM);
        let width = area.size().width;
        if index % 2 == 1 {
            fill_rect(
                area,
                Mm::default(),
                Mm::default(),
                width,
                row_height,
                theme::ZEBRA_TINT,
            );
        }

        let font_cache = &context.font_cache;
        let mut x = Mm::default();
        for cell in &self.rows[index] {
            let string = clipped(cell, style, font_cache, col_width - pad - pad);
            print_line(area, font_cache, x + pad, pad, &string)?;
            stroke_rect(area, x, Mm::default(), col_width, row_height, theme::CELL_BORDER);
            x += col_width;
        }
        Ok(())
    }
}

impl Element for DataTable {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let pad = mm_from_f64(theme::CELL_PADDING_MM);
        let width = area.size().width;
        let col_width = width / (self.headers.len() as f64);

        let mut header_style = Style::new();
        header_style.set_bold();
        header_style.set_font_size(theme::BODY_SIZE);
        let header_height = header_style.line_height(&context.font_cache) + pad + pad;
        let row_height = style.line_height(&context.font_cache) + pad + pad;

        // The header is only worth drawing when at least one data row (or the
        // end of the table) fits underneath it.
        let first_chunk = if self.next_row < self.rows.len() {
            header_height + row_height
        } else {
            header_height
        };

        let mut result = RenderResult::default();
        if first_chunk > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        self.render_header(context, &area, col_width, header_height)?;
        area.add_offset(Position::new(0, header_height));
        let mut consumed = header_height;

        while self.next_row < self.rows.len() {
            if row_height > area.size().height {
                result.has_more = true;
                break;
            }
            self.render_row(context, &area, self.next_row, col_width, row_height, style)?;
            area.add_offset(Position::new(0, row_height));
            consumed += row_height;
            self.next_row += 1;
        }

        result.size = Size::new(width, consumed);
        Ok(result)
    }
}

/// A thin full-width horizontal rule.
pub struct Rule {
    color: Color,
}

impl Rule {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Element for Rule {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let height = mm_from_f64(0.8);
        let mut result = RenderResult::default();
        if height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let y = height / 2.0;
        area.draw_line(
            vec![
                Position::new(Mm::default(), y),
                Position::new(area.size().width, y),
            ],
            Style::new().with_color(self.color),
        );
        result.size = Size::new(area.size().width, height);
        Ok(result)
    }
}
