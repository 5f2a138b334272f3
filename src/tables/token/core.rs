//! Content token types for section value streams
//!
//!     A section's stored value list arrives as a sequence of content tokens.
//!     Each token is either literal text the author typed or an inline
//!     variable reference injected into the text. The storage layer assigns
//!     every value a stable identifier and an ordering position before the
//!     recognizer ever sees it, and both are reused here verbatim.
//!
//!     Identity is the load-bearing part of this model. When a multi-line
//!     text token is split for detection, every resulting line keeps the
//!     original token's id, and the recognizer decides what a table consumed
//!     purely by id. Content equality is never used for tracking.

use std::fmt;

/// Stable identifier of one stored section value.
///
/// Assigned by the storage layer before recognition runs; the only thing the
/// recognizer uses to track which tokens a table consumed and where a table
/// starts in the original sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Literal text authored into a section.
///
/// May span multiple physical lines and may contain markdown table syntax.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextToken {
    pub id: TokenId,

    /// Position in the original value list. Strictly increasing across the
    /// input sequence; the recognizer never reorders tokens relative to it.
    pub order: u32,

    pub text: String,
}

/// An inline variable reference injected into a section's text.
///
/// The payload is whatever the store recorded for the reference. The
/// recognizer never inspects it and passes it through unchanged, whether the
/// reference survives as a standalone token or becomes a table cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceToken {
    pub id: TokenId,

    /// Position in the original value list.
    pub order: u32,

    pub payload: serde_json::Value,
}

/// One unit of a section's authored content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ContentToken {
    Text(TextToken),
    Reference(ReferenceToken),
}

impl ContentToken {
    pub fn id(&self) -> TokenId {
        match self {
            ContentToken::Text(token) => token.id,
            ContentToken::Reference(token) => token.id,
        }
    }

    pub fn order(&self) -> u32 {
        match self {
            ContentToken::Text(token) => token.order,
            ContentToken::Reference(token) => token.order,
        }
    }
}
