//! # section-tables
//!
//! Table recognition for report section content streams.
//!
//! Report sections are authored as a sequence of content tokens: literal text
//! segments and inline variable references that get resolved at render time.
//! Authors paste markdown pipe tables straight into that text, and the rows of
//! one table routinely end up spread over several tokens or packed into a
//! single multi-line token, sometimes with a reference standing in for a cell
//! value mid-row. Before the preview renderer runs, this crate finds every
//! such table and replaces it with one structured table element, leaving
//! every other token untouched and in original order.
//!
//! The work happens in three stages (see [tables::pipeline]): multi-line text
//! tokens are split into per-line fragments that keep their token identity,
//! a single scan collects header/separator pairs and their rows, and a final
//! pass splices the recognized tables back into the original sequence.
//!
//! The transform is pure and total. Malformed table syntax is never an error;
//! it degrades to no table, or to a table with fewer rows than the author
//! meant, because a preview must always render something.

pub mod tables;

pub use tables::pipeline::{recognize_in_items, recognize_tables, Pipeline};
pub use tables::token::{
    ContentItem, ContentToken, ReferenceToken, TableCell, TableElement, TextToken, TokenId,
};
