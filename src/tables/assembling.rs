//! Final re-assembly of recognized tables into the original sequence
//!
//! The collector works over line fragments; this stage goes back to the
//! original, unsplit sequence and produces the output the preview renders.
//! Tokens are matched purely by id: a table's starting token is replaced by
//! the table element, every other token the table consumed is dropped, and
//! everything else passes through untouched, in original order.

use std::collections::{HashMap, HashSet};

use crate::tables::collecting::CollectedTable;
use crate::tables::token::{ContentItem, TableElement, TokenId};

/// Splice recognized tables back into the original sequence.
pub fn assemble(original: &[ContentItem], tables: Vec<CollectedTable>) -> Vec<ContentItem> {
    let mut consumed: HashSet<TokenId> = HashSet::new();
    let mut starts: HashMap<TokenId, TableElement> = HashMap::new();
    for table in tables {
        consumed.extend(table.consumed);
        starts
            .entry(table.element.starting_token_id)
            .or_insert(table.element);
    }

    let mut assembled = Vec::with_capacity(original.len());
    for item in original {
        match item {
            ContentItem::Token(token) => {
                if let Some(element) = starts.remove(&token.id()) {
                    assembled.push(ContentItem::Table(element));
                } else if !consumed.contains(&token.id()) {
                    assembled.push(item.clone());
                }
            }
            // Tables from a previous pass pass through in place.
            ContentItem::Table(_) => assembled.push(item.clone()),
        }
    }
    assembled
}
