//! Line segmentation: groups pipe-table runs and classifies everything else.
//!
//! The segmenter holds the only cross-line state in the pipeline.  It is an
//! explicit two-state machine so the flush-on-exit obligation (a table must
//! be emitted when a non-table line or the end of input follows it) stays
//! visible and testable.

use log::debug;

use crate::classify::classify;
use crate::model::{Block, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    AccumulatingTable,
}

/// Splits normalized text into an ordered sequence of typed blocks.
///
/// Lines whose trimmed form starts with `|` are buffered; the buffer is
/// flushed into a single [`Block::Table`] when a non-table line or the end of
/// input is reached.  Blank lines are dropped unconditionally and do not
/// flush an open table buffer on their own.  All other non-blank lines are
/// classified independently.
pub fn segment(normalized: &str) -> Vec<Block> {
    let mut state = State::Scanning;
    let mut table_lines: Vec<&str> = Vec::new();
    let mut blocks = Vec::new();

    for raw_line in normalized.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            // Blank lines inside a table run are skipped without flushing;
            // the buffer stays open for subsequent `|` lines.
            continue;
        }
        if line.starts_with('|') {
            table_lines.push(line);
            state = State::AccumulatingTable;
            continue;
        }
        if state == State::AccumulatingTable {
            flush_table(&mut table_lines, &mut blocks);
            state = State::Scanning;
        }
        blocks.push(classify(line));
    }

    if state == State::AccumulatingTable {
        flush_table(&mut table_lines, &mut blocks);
    }

    debug!("segmented source into {} blocks", blocks.len());
    blocks
}

fn flush_table(table_lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if let Some(table) = parse_table(table_lines) {
        blocks.push(Block::Table(table));
    }
    table_lines.clear();
}

/// Parses buffered `|` lines into a table.
///
/// The first line's non-empty trimmed segments become the header cells and
/// fix the column count.  Separator rows are dropped.  Returns `None` when
/// the header yields no cells; the buffered run carries no renderable data
/// in that case.
fn parse_table(lines: &[&str]) -> Option<Table> {
    let (header_line, data_lines) = lines.split_first()?;
    let headers: Vec<String> = header_line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_owned)
        .collect();
    if headers.is_empty() {
        return None;
    }

    let rows = data_lines
        .iter()
        .filter(|line| !is_separator_row(line))
        .map(|line| split_row(line))
        .collect();

    Some(Table::new(headers, rows))
}

/// A separator row contains nothing but `|`, `-`, `:` and whitespace.
fn is_separator_row(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Splits a data line on `|` after stripping one optional leading and one
/// optional trailing pipe, trimming each cell.
fn split_row(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::segment;
    use crate::model::Block;

    fn only_table(blocks: &[Block]) -> &crate::model::Table {
        assert_eq!(blocks.len(), 1, "expected a single table block");
        match &blocks[0] {
            Block::Table(table) => table,
            other => panic!("expected a table block, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_produce_no_blocks() {
        assert!(segment("\n\n   \n").is_empty());
    }

    #[test]
    fn non_table_lines_are_classified_in_order() {
        let blocks = segment("## Rutina\n- Corre 5km\nTexto libre");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::SectionHeader(_)));
        assert!(matches!(blocks[1], Block::BulletItem(_)));
        assert!(matches!(blocks[2], Block::ParagraphText(_)));
    }

    #[test]
    fn table_lines_form_a_single_block_without_the_separator() {
        let blocks = segment("| A | B |\n|---|---|\n| 1 | 2 |");
        let table = only_table(&blocks);
        assert_eq!(table.headers(), ["A", "B"]);
        assert_eq!(table.rows(), [vec!["1".to_owned(), "2".to_owned()]]);
    }

    #[test]
    fn a_following_line_flushes_the_table_first() {
        let blocks = segment("| A | B |\n| 1 | 2 |\nTexto libre");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Table(_)));
        assert!(matches!(blocks[1], Block::ParagraphText(_)));
    }

    #[test]
    fn end_of_input_flushes_an_open_table() {
        let blocks = segment("Intro\n| A |\n| 1 |");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], Block::Table(_)));
    }

    #[test]
    fn blank_line_inside_a_table_keeps_the_buffer_open() {
        // Deliberate behavior: only a non-table line or end of input flushes.
        let blocks = segment("| A | B |\n\n| 1 | 2 |");
        let table = only_table(&blocks);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn rows_keep_raw_cell_counts() {
        let blocks = segment("| A | B | C |\n| 1 |\n| 1 | 2 | 3 | 4 |");
        let table = only_table(&blocks);
        assert_eq!(table.rows()[0].len(), 1);
        assert_eq!(table.rows()[1].len(), 4);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn separator_variants_are_dropped() {
        let blocks = segment("| A | B |\n| :--- | ---: |\n|- - -|:-:|\n| 1 | 2 |");
        let table = only_table(&blocks);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn header_only_line_without_cells_yields_no_block() {
        assert!(segment("| |").is_empty());
    }
}
