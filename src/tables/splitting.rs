//! Line splitting for multi-line text tokens
//!
//!     Table detection wants to see one line at a time, but a text token can
//!     carry any number of physical lines: authors paste whole tables into a
//!     single value, and the editor also emits one value per line with the
//!     newline still attached. This stage expands every multi-line text token
//!     into one fragment per non-empty line so that everything downstream can
//!     assume "one item = at most one line".
//!
//!     Every fragment keeps the id of the token it came from. Identity, not
//!     content, is what later stages use to decide which tokens a table
//!     consumed and which original token a table starts at, so splitting must
//!     never mint new ids.
//!
//!     Empty lines are dropped rather than becoming fragments: an empty line
//!     contributes nothing to table detection, and a spurious empty fragment
//!     would end row collection early.

use crate::tables::token::{ContentItem, ContentToken, ReferenceToken, TableElement, TokenId};

/// One logical line of one original text token.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineFragment {
    /// Id of the text token this line came from. Fragments of one token all
    /// share it.
    pub source_id: TokenId,

    /// Position of this line within its token's expansion.
    pub fragment_index: usize,

    pub text: String,
}

/// One element of the preprocessed stream fed to table collection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StreamItem {
    Line(LineFragment),

    Reference(ReferenceToken),

    /// An already-recognized table. Inert to detection, but it occupies its
    /// position in the stream so that re-running the pipeline over assembled
    /// output changes nothing.
    Table(TableElement),
}

impl StreamItem {
    /// Id of the original token behind this item, if it has one.
    pub fn source_id(&self) -> Option<TokenId> {
        match self {
            StreamItem::Line(fragment) => Some(fragment.source_id),
            StreamItem::Reference(reference) => Some(reference.id),
            StreamItem::Table(_) => None,
        }
    }
}

/// Expand multi-line text tokens into per-line fragments.
///
/// Text containing a line break splits on `\n` with empty lines dropped; text
/// without one passes through as a single fragment, even when empty.
/// References and tables pass through unchanged. The result is the
/// concatenation, in original order, of each input item's expansion.
pub fn split_into_lines(items: &[ContentItem]) -> Vec<StreamItem> {
    let mut stream = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ContentItem::Token(ContentToken::Text(token)) => {
                if token.text.contains('\n') {
                    let lines = token.text.split('\n').filter(|line| !line.is_empty());
                    for (fragment_index, line) in lines.enumerate() {
                        stream.push(StreamItem::Line(LineFragment {
                            source_id: token.id,
                            fragment_index,
                            text: line.to_string(),
                        }));
                    }
                } else {
                    stream.push(StreamItem::Line(LineFragment {
                        source_id: token.id,
                        fragment_index: 0,
                        text: token.text.clone(),
                    }));
                }
            }
            ContentItem::Token(ContentToken::Reference(reference)) => {
                stream.push(StreamItem::Reference(reference.clone()));
            }
            ContentItem::Table(table) => {
                stream.push(StreamItem::Table(table.clone()));
            }
        }
    }
    stream
}
