//! Data structures describing the classified content of a plan document.
//!
//! The types in this module form the intermediate model between the parsing
//! stages and the renderer.  They carry plain owned strings so the pipeline
//! stays independent of the PDF backend; every value is created fresh per
//! render call and discarded when the call returns.

/// A parsed pipe-delimited table.
///
/// The header row fixes the column count.  Data rows are stored with their
/// raw cell counts; [`Table::normalized_rows`] reconciles them to the header
/// width before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from a non-empty header row and raw data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(!headers.is_empty());
        Self { headers, rows }
    }

    /// Returns the header cells.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the raw data rows; cell counts may differ from the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the column count fixed by the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the data rows reconciled to the header width.
    ///
    /// Missing trailing cells are padded with empty strings and extra cells
    /// are dropped, so every returned row has exactly
    /// [`Table::column_count`] cells.  Mismatched rows are a lenient case,
    /// never an error.
    pub fn normalized_rows(&self) -> Vec<Vec<String>> {
        let width = self.column_count();
        self.rows
            .iter()
            .map(|row| {
                let mut cells = row.clone();
                cells.resize(width, String::new());
                cells
            })
            .collect()
    }
}

/// One classified unit of source text.
///
/// Every non-blank normalized line maps to exactly one block; blank lines
/// are consumed as separators and never produce a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// A `## ` heading, rendered as a tinted full-width band.
    SectionHeader(String),
    /// A `### ` heading, rendered as bold medium text.
    SubsectionHeader(String),
    /// A list item without an early colon.
    BulletItem(String),
    /// A list item numbered `1.`, `2.`, ... with its ordinal preserved as
    /// written.
    NumberedItem {
        /// The digits before the first `.`.
        ordinal: String,
        /// The item text after the ordinal.
        text: String,
    },
    /// A list item split at an early colon into a short label and a value.
    LabelValue {
        /// The text before the colon; at most 40 characters.
        label: String,
        /// The text after the colon.
        value: String,
    },
    /// Any line not matching a more specific kind.
    ParagraphText(String),
    /// A contiguous run of pipe-table lines.
    Table(Table),
}

#[cfg(test)]
mod tests {
    use super::Table;

    fn sample() -> Table {
        Table::new(
            vec!["Dia".into(), "Ejercicio".into(), "Series".into()],
            vec![
                vec!["Lunes".into(), "Press banca".into()],
                vec![
                    "Martes".into(),
                    "Sentadilla".into(),
                    "4".into(),
                    "extra".into(),
                ],
            ],
        )
    }

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let rows = sample().normalized_rows();
        assert_eq!(rows[0], vec!["Lunes", "Press banca", ""]);
    }

    #[test]
    fn long_rows_are_truncated_to_header_width() {
        let rows = sample().normalized_rows();
        assert_eq!(rows[1], vec!["Martes", "Sentadilla", "4"]);
    }

    #[test]
    fn every_normalized_row_matches_the_column_count() {
        let table = sample();
        for row in table.normalized_rows() {
            assert_eq!(row.len(), table.column_count());
        }
    }
}
