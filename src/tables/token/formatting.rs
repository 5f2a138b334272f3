//! Markdown rendering for tokens and recognized tables
//!
//! This module converts recognizer output back into markdown text. Unlike the
//! preview renderer (which resolves references against the store), this
//! rendering is purely textual and is useful for:
//!
//! - Round-trip testing (table -> markdown -> recognizer -> table)
//! - Debugging and visualization of assembled streams
//!
//! Reference tokens and reference cells render as `{{id}}` placeholders; the
//! preview layer is the one that substitutes real values.

use super::core::ContentToken;
use super::element::{ContentItem, TableCell, TableElement};

/// Trait for converting a recognizer value to its markdown representation.
pub trait ToMarkdownString {
    fn to_markdown_string(&self) -> String;
}

impl ToMarkdownString for TableCell {
    fn to_markdown_string(&self) -> String {
        match self {
            TableCell::Text(text) => text.clone(),
            TableCell::Reference(reference) => format!("{{{{{}}}}}", reference.id),
        }
    }
}

impl ToMarkdownString for TableElement {
    /// Renders the table as a pipe table: header row, a `---` separator row,
    /// then one line per data row, with a trailing newline.
    fn to_markdown_string(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(render_row_line(&self.headers));
        lines.push(render_row_line(&vec!["---".to_string(); self.headers.len()]));
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_markdown_string()).collect();
            lines.push(render_row_line(&cells));
        }
        let mut rendered = lines.join("\n");
        rendered.push('\n');
        rendered
    }
}

impl ToMarkdownString for ContentToken {
    fn to_markdown_string(&self) -> String {
        match self {
            ContentToken::Text(token) => token.text.clone(),
            ContentToken::Reference(token) => format!("{{{{{}}}}}", token.id),
        }
    }
}

impl ToMarkdownString for ContentItem {
    fn to_markdown_string(&self) -> String {
        match self {
            ContentItem::Token(token) => token.to_markdown_string(),
            ContentItem::Table(table) => table.to_markdown_string(),
        }
    }
}

/// Render an assembled stream as one markdown string.
pub fn render_items(items: &[ContentItem]) -> String {
    items
        .iter()
        .map(|item| item.to_markdown_string())
        .collect::<Vec<_>>()
        .concat()
}

fn render_row_line(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
