//! Test support for building token streams and checking assembled output
//!
//!     Recognizer tests keep drifting toward two failure modes: hand-built
//!     token structs whose ids and order positions disagree with what the
//!     store would ever produce, and assertions that only count items without
//!     looking inside them. The helpers here close both gaps.
//!
//!     Build inputs through [`TokenSeq`], which assigns ids and order
//!     positions the way the storage layer does (stable, strictly
//!     increasing), and verify output through [`assert_items`], which fails
//!     with the full item list in the message instead of a bare index panic.

use crate::tables::token::{
    ContentItem, ContentToken, ReferenceToken, TableCell, TableElement, TextToken, TokenId,
};

/// Builder for content token sequences with store-style ids and ordering.
#[derive(Debug)]
pub struct TokenSeq {
    next_id: u64,
    tokens: Vec<ContentToken>,
}

impl Default for TokenSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSeq {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Seed the id counter, for tests that assert on specific ids.
    pub fn starting_at(id: u64) -> Self {
        Self {
            next_id: id,
            tokens: Vec::new(),
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        let id = self.allocate();
        let order = self.tokens.len() as u32;
        self.tokens.push(ContentToken::Text(TextToken {
            id,
            order,
            text: text.to_string(),
        }));
        self
    }

    /// Append a reference token whose payload names a variable, the shape
    /// the store uses for injected values.
    pub fn reference(mut self, variable: &str) -> Self {
        let id = self.allocate();
        let order = self.tokens.len() as u32;
        self.tokens.push(ContentToken::Reference(ReferenceToken {
            id,
            order,
            payload: serde_json::json!({ "variable": variable }),
        }));
        self
    }

    pub fn build(self) -> Vec<ContentToken> {
        self.tokens
    }

    fn allocate(&mut self) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Entry point for fluent assertions over assembled output.
pub fn assert_items(items: &[ContentItem]) -> ItemsAssert<'_> {
    ItemsAssert { items }
}

pub struct ItemsAssert<'a> {
    items: &'a [ContentItem],
}

impl<'a> ItemsAssert<'a> {
    #[track_caller]
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.items.len(),
            expected,
            "item count mismatch in {:#?}",
            self.items
        );
        self
    }

    #[track_caller]
    pub fn text_at(self, index: usize, expected: &str) -> Self {
        match &self.items[index] {
            ContentItem::Token(ContentToken::Text(token)) => {
                assert_eq!(token.text, expected, "text mismatch at item {index}");
            }
            other => panic!("expected text token at item {index}, got {other:?}"),
        }
        self
    }

    #[track_caller]
    pub fn reference_at(self, index: usize) -> Self {
        match &self.items[index] {
            ContentItem::Token(ContentToken::Reference(_)) => {}
            other => panic!("expected reference token at item {index}, got {other:?}"),
        }
        self
    }

    #[track_caller]
    pub fn table_at(self, index: usize, check: impl FnOnce(TableAssert<'_>)) -> Self {
        match &self.items[index] {
            ContentItem::Table(element) => check(TableAssert { element }),
            other => panic!("expected table at item {index}, got {other:?}"),
        }
        self
    }
}

pub struct TableAssert<'a> {
    element: &'a TableElement,
}

impl<'a> TableAssert<'a> {
    #[track_caller]
    pub fn starting_id(self, expected: TokenId) -> Self {
        assert_eq!(self.element.starting_token_id, expected);
        self
    }

    #[track_caller]
    pub fn headers(self, expected: &[&str]) -> Self {
        assert_eq!(self.element.headers, expected, "header mismatch");
        self
    }

    #[track_caller]
    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(
            self.element.rows.len(),
            expected,
            "row count mismatch in {:#?}",
            self.element.rows
        );
        self
    }

    /// Assert a row made purely of text cells.
    #[track_caller]
    pub fn text_row(self, index: usize, expected: &[&str]) -> Self {
        let texts: Vec<&str> = self.element.rows[index]
            .iter()
            .map(|cell| match cell {
                TableCell::Text(text) => text.as_str(),
                TableCell::Reference(reference) => {
                    panic!("unexpected reference cell {reference:?} in row {index}")
                }
            })
            .collect();
        assert_eq!(texts, expected, "cell mismatch in row {index}");
        self
    }

    /// Assert that one cell of a row is an unresolved reference.
    #[track_caller]
    pub fn reference_cell_at(self, row: usize, column: usize, expected_id: TokenId) -> Self {
        match &self.element.rows[row][column] {
            TableCell::Reference(reference) => assert_eq!(reference.id, expected_id),
            other => panic!("expected reference cell at ({row}, {column}), got {other:?}"),
        }
        self
    }
}
