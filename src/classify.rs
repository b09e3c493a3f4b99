//! Classification of single normalized lines into block kinds.

use crate::model::Block;

/// A colon must appear within this many characters of a list item's text for
/// the item to split into a label/value pair.
const LABEL_SPLIT_LIMIT: usize = 40;

/// Assigns a trimmed, non-empty, non-pipe line to exactly one block kind.
///
/// The rules are tested in precedence order and the paragraph fallback is
/// total, so classification can never fail and is idempotent for a given
/// line.
pub fn classify(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::SectionHeader(rest.trim().to_owned());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::SubsectionHeader(rest.trim().to_owned());
    }
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return classify_list_item(rest.trim());
    }
    if let Some((ordinal, text)) = split_numbered(line) {
        return Block::NumberedItem {
            ordinal: ordinal.to_owned(),
            text: text.to_owned(),
        };
    }
    Block::ParagraphText(line.to_owned())
}

/// Splits a list item at an early colon into a label/value pair, or keeps it
/// as a plain bullet.  A colon at offset 0 leaves the label empty and does
/// not split.
fn classify_list_item(text: &str) -> Block {
    let colon = text
        .char_indices()
        .take(LABEL_SPLIT_LIMIT)
        .find(|(_, c)| *c == ':');
    match colon {
        Some((at, _)) if at > 0 => {
            let (label, value) = text.split_at(at);
            Block::LabelValue {
                label: label.trim().to_owned(),
                value: value[1..].trim().to_owned(),
            }
        }
        _ => Block::BulletItem(text.to_owned()),
    }
}

/// Matches "one or more digits, `.`, whitespace, content" and returns the
/// ordinal digits and the trimmed remainder.
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((&line[..digits_end], text))
}
