//! Structured table output types

use super::core::{ContentToken, ReferenceToken, TokenId};

/// One cell of a recognized table row.
///
/// A cell is either trimmed literal text or the reference token that was
/// typed inline where a cell value would go. The two cases stay distinct
/// because downstream rendering resolves a reference cell exactly as it would
/// resolve a standalone reference token.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TableCell {
    Text(String),
    Reference(ReferenceToken),
}

impl TableCell {
    /// The literal text of this cell, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TableCell::Text(text) => Some(text),
            TableCell::Reference(_) => None,
        }
    }
}

/// A recognized markdown pipe table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableElement {
    /// Id of the token in the original sequence at which the table begins.
    /// The assembler splices the table into the output at this token's
    /// position.
    pub starting_token_id: TokenId,

    /// Trimmed header cell texts, order preserving. The header fixes the
    /// cell arity for the whole table.
    pub headers: Vec<String>,

    pub rows: Vec<Vec<TableCell>>,
}

/// One element of assembled section output: an untouched content token, or a
/// table spliced in where its source tokens were.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ContentItem {
    Token(ContentToken),
    Table(TableElement),
}
