//! Main module for section table recognition

pub mod assembling;
pub mod collecting;
pub mod pipeline;
pub mod rows;
pub mod splitting;
pub mod testing;
pub mod token;

pub use assembling::assemble;
pub use collecting::{collect_tables, CollectedTable};
pub use pipeline::{recognize_in_items, recognize_tables, Pipeline};
pub use splitting::{split_into_lines, LineFragment, StreamItem};
pub use token::{
    ContentItem, ContentToken, ReferenceToken, TableCell, TableElement, TextToken, TokenId,
};
