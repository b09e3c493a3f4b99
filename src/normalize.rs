//! Normalization of raw model output before line segmentation.

/// Strips markup tokens the renderer does not interpret and canonicalizes
/// bullet glyphs.
///
/// Three rewrites are applied, in order: code fence markers
/// (```` ```markdown ```` and ```` ``` ````) are removed so fenced content is
/// treated as plain text, literal `**` bold markers are dropped without
/// altering the enclosed text, and every `•` glyph becomes a newline followed
/// by the canonical `- ` bullet prefix.
///
/// The function is total: any input string, including the empty string,
/// produces a result.
pub fn normalize(raw: &str) -> String {
    raw.replace("```markdown", "")
        .replace("```", "")
        .replace("**", "")
        .replace('•', "\n- ")
}
