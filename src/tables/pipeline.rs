//! Table recognition pipeline
//!
//! This module wires the three stages together:
//!
//! 1. **Line splitting** - expand multi-line text tokens into per-line
//!    fragments that keep their token identity
//! 2. **Collection** - scan the fragment stream for header/separator pairs
//!    and greedily gather rows, tracking consumed token ids
//! 3. **Assembly** - walk the original sequence and splice each table in at
//!    its starting token, eliding the rest of what it consumed
//!
//! The whole pipeline is a pure, synchronous function over an in-memory
//! sequence. It performs no I/O, cannot fail, and never mutates its input;
//! each call owns its working state and discards it on return.

use crate::tables::assembling::assemble;
use crate::tables::collecting::collect_tables;
use crate::tables::splitting::split_into_lines;
use crate::tables::token::{ContentItem, ContentToken};

/// The table recognition pipeline.
///
/// A unit struct that encodes the stage sequence. For most callers the
/// convenience functions [`recognize_tables`] and [`recognize_in_items`] are
/// the entry points.
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run recognition over a section's raw token sequence.
    pub fn run(&self, tokens: Vec<ContentToken>) -> Vec<ContentItem> {
        self.run_items(tokens.into_iter().map(ContentItem::Token).collect())
    }

    /// Run recognition over a sequence that may already contain tables.
    ///
    /// Existing table elements are inert: they cannot start or extend a
    /// table and they come back in place, so running the pipeline over its
    /// own output is a no-op.
    pub fn run_items(&self, items: Vec<ContentItem>) -> Vec<ContentItem> {
        let stream = split_into_lines(&items);
        let tables = collect_tables(&stream);
        assemble(&items, tables)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Recognize markdown tables in a section's content token stream.
///
/// Replaces every recognized table with one structured table element and
/// passes every other token through untouched, in original order.
pub fn recognize_tables(tokens: Vec<ContentToken>) -> Vec<ContentItem> {
    Pipeline::new().run(tokens)
}

/// Recognize tables in a stream that may already contain assembled output.
pub fn recognize_in_items(items: Vec<ContentItem>) -> Vec<ContentItem> {
    Pipeline::new().run_items(items)
}
