//! Line classification for markdown pipe tables
//!
//! Shared helpers that decide what a single line of text is: a data row, a
//! header/data separator, or neither. These are deliberately looser than the
//! CommonMark table extension. Alignment markers, escaped pipes, and spans
//! are not supported; a cell is simply the content between two pipes.

use once_cell::sync::Lazy;
use regex::Regex;

/// A separator cell: a pipe, three or more hyphens allowing surrounding
/// whitespace, then a pipe. Two hyphens or fewer do not separate.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|\s*-{3,}\s*\|").expect("hardcoded separator pattern is valid"));

/// Extract the cell values of one line.
///
/// A cell is the content between an adjacent pair of pipes, trimmed of
/// surrounding whitespace. Text before the first pipe and after the last
/// pipe is ignored, and a line that never closes a cell (`|Foo`) has none.
pub fn extract_cells(line: &str) -> Vec<String> {
    let pieces: Vec<&str> = line.split('|').collect();
    if pieces.len() < 3 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// True when the line holds at least one closed `|...|` cell.
pub fn is_row(line: &str) -> bool {
    !extract_cells(line).is_empty()
}

/// True when the line contains a header/data separator cell.
///
/// Trailing characters after the last closed cell are ignored, so
/// `|---|--` still separates.
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR.is_match(line)
}
