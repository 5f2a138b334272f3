//! Table detection and greedy row collection
//!
//!     This is a single left-to-right pass over the preprocessed stream. A
//!     table starts at a row line whose immediate successor is a separator
//!     line; rows are then consumed greedily until something disqualifying
//!     appears, at which point the table finalizes with whatever it gathered
//!     and the scan resumes. Nothing here is an error: a header with no rows
//!     is a table with no rows, and the preview renders it as such.
//!
//!     Consumption is tracked by original token id, never by content. The
//!     assembler uses the consumed sets to elide exactly the tokens a table
//!     swallowed, so a fragment consumed here takes its whole source token
//!     with it.
//!
//!     The cursor only advances past an item once that item's fate is
//!     settled. In particular, a separator candidate that fails the check is
//!     left in place so the next outer iteration can evaluate it as a header
//!     candidate of its own.

use std::collections::HashSet;

use crate::tables::rows::{extract_cells, is_separator_row};
use crate::tables::splitting::StreamItem;
use crate::tables::token::{TableCell, TableElement, TokenId};

/// A recognized table together with the ids of every token it consumed.
///
/// The consumed set is owned by one collection pass; the assembler unions
/// the sets of all collected tables and then discards them.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedTable {
    pub element: TableElement,
    pub consumed: HashSet<TokenId>,
}

/// Scan the preprocessed stream and collect every table in it.
pub fn collect_tables(items: &[StreamItem]) -> Vec<CollectedTable> {
    Collector { items, cursor: 0 }.scan()
}

struct Collector<'a> {
    items: &'a [StreamItem],
    cursor: usize,
}

impl<'a> Collector<'a> {
    fn scan(mut self) -> Vec<CollectedTable> {
        let mut tables = Vec::new();
        while self.cursor < self.items.len() {
            match self.try_collect_table() {
                Some(table) => tables.push(table),
                None => self.cursor += 1,
            }
        }
        tables
    }

    /// Try to start a table at the cursor.
    ///
    /// On success the cursor ends up past every token the table consumed; on
    /// failure it is unchanged, and the caller advances past the rejected
    /// header candidate only.
    fn try_collect_table(&mut self) -> Option<CollectedTable> {
        let StreamItem::Line(header) = &self.items[self.cursor] else {
            return None;
        };
        let headers = extract_cells(&header.text);
        if headers.is_empty() {
            return None;
        }
        let Some(StreamItem::Line(separator)) = self.items.get(self.cursor + 1) else {
            return None;
        };
        if !is_separator_row(&separator.text) {
            return None;
        }

        let mut table = CollectedTable {
            element: TableElement {
                starting_token_id: header.source_id,
                headers,
                rows: Vec::new(),
            },
            consumed: HashSet::new(),
        };
        table.consumed.insert(header.source_id);
        table.consumed.insert(separator.source_id);
        self.cursor += 2;
        self.collect_rows(&mut table);
        Some(table)
    }

    /// Greedily consume data rows until something disqualifying appears.
    fn collect_rows(&mut self, table: &mut CollectedTable) {
        let arity = table.element.headers.len();
        loop {
            // Anything that is not a text line ends the table and stays
            // available to the outer scan.
            let Some(StreamItem::Line(line)) = self.items.get(self.cursor) else {
                return;
            };
            let cells = extract_cells(&line.text);
            if cells.is_empty() || cells.len() > arity {
                return;
            }

            if cells.len() == arity {
                table.consumed.insert(line.source_id);
                table
                    .element
                    .rows
                    .push(cells.into_iter().map(TableCell::Text).collect());
                self.cursor += 1;
                continue;
            }

            // Fewer cells than headers: a row interrupted by an inline
            // reference. The leading cells commit this token even if the
            // continuation never materializes.
            table.consumed.insert(line.source_id);
            self.cursor += 1;
            let mut row: Vec<TableCell> = cells.into_iter().map(TableCell::Text).collect();

            let Some(StreamItem::Reference(reference)) = self.items.get(self.cursor) else {
                // Interrupted by something other than a reference: the
                // gathered cells are abandoned with their token.
                return;
            };
            row.push(TableCell::Reference(reference.clone()));
            table.consumed.insert(reference.id);
            self.cursor += 1;

            if row.len() == arity {
                table.element.rows.push(row);
                // The next token is the split row's closing border; it goes
                // with the row no matter what it holds.
                if let Some(border) = self.items.get(self.cursor) {
                    if let Some(id) = border.source_id() {
                        table.consumed.insert(id);
                    }
                    self.cursor += 1;
                }
                continue;
            }

            // Still short: only a border continuation reopens the row.
            let Some(StreamItem::Line(continuation)) = self.items.get(self.cursor) else {
                table.element.rows.push(row);
                return;
            };
            if !continuation.text.trim_start().starts_with('|') {
                table.element.rows.push(row);
                return;
            }
            table.consumed.insert(continuation.source_id);
            self.cursor += 1;
            row.extend(
                extract_cells(&continuation.text)
                    .into_iter()
                    .map(TableCell::Text),
            );
            if row.len() == arity {
                table.element.rows.push(row);
                continue;
            }
            // A second interruption in the same row is not chased further;
            // the row is kept as gathered and the table finishes.
            table.element.rows.push(row);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::splitting::LineFragment;
    use crate::tables::token::ReferenceToken;

    fn line(id: u64, text: &str) -> StreamItem {
        StreamItem::Line(LineFragment {
            source_id: TokenId(id),
            fragment_index: 0,
            text: text.to_string(),
        })
    }

    fn reference(id: u64) -> StreamItem {
        StreamItem::Reference(ReferenceToken {
            id: TokenId(id),
            order: 0,
            payload: serde_json::json!({ "variable": "v" }),
        })
    }

    fn text_cells(row: &[TableCell]) -> Vec<&str> {
        row.iter()
            .map(|cell| cell.as_text().expect("text cell"))
            .collect()
    }

    #[test]
    fn test_no_tables_in_prose() {
        let items = vec![line(1, "just prose"), reference(2), line(3, "more prose")];
        assert!(collect_tables(&items).is_empty());
    }

    #[test]
    fn test_header_and_separator_with_no_rows() {
        let items = vec![line(1, "| A | B |"), line(2, "| --- | --- |")];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].element.headers, vec!["A", "B"]);
        assert!(tables[0].element.rows.is_empty());
        assert_eq!(
            tables[0].consumed,
            HashSet::from([TokenId(1), TokenId(2)])
        );
    }

    #[test]
    fn test_rejected_separator_candidate_can_start_its_own_table() {
        let items = vec![
            line(1, "| A |"),
            line(2, "| A | B |"),
            line(3, "| --- | --- |"),
            line(4, "| x | y |"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].element.starting_token_id, TokenId(2));
        assert_eq!(tables[0].element.headers, vec!["A", "B"]);
        assert_eq!(text_cells(&tables[0].element.rows[0]), vec!["x", "y"]);
        assert!(!tables[0].consumed.contains(&TokenId(1)));
    }

    #[test]
    fn test_row_wider_than_header_ends_the_table_unconsumed() {
        let items = vec![
            line(1, "| A | B |"),
            line(2, "| --- | --- |"),
            line(3, "| x | y | z |"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        assert!(tables[0].element.rows.is_empty());
        assert!(!tables[0].consumed.contains(&TokenId(3)));
    }

    #[test]
    fn test_prose_line_ends_the_table_unconsumed() {
        let items = vec![
            line(1, "| A | B |"),
            line(2, "| --- | --- |"),
            line(3, "| x | y |"),
            line(4, "The table is done"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].element.rows.len(), 1);
        assert!(!tables[0].consumed.contains(&TokenId(4)));
    }

    #[test]
    fn test_reference_interrupted_row_resumes_and_closes() {
        let items = vec![
            line(1, "| Name | Role | City |"),
            line(2, "| --- | --- | --- |"),
            line(3, "| Jane ||"),
            reference(916),
            line(4, " |"),
            line(5, "| Mike |Engineer| |"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        let element = &tables[0].element;
        assert_eq!(element.rows.len(), 2);
        assert_eq!(element.rows[0].len(), 3);
        assert_eq!(element.rows[0][0], TableCell::Text("Jane".to_string()));
        assert_eq!(element.rows[0][1], TableCell::Text("".to_string()));
        assert!(matches!(element.rows[0][2], TableCell::Reference(ref r) if r.id == TokenId(916)));
        assert_eq!(text_cells(&element.rows[1]), vec!["Mike", "Engineer", ""]);
        assert!(tables[0].consumed.contains(&TokenId(916)));
        assert!(tables[0].consumed.contains(&TokenId(4)));
    }

    #[test]
    fn test_partial_row_without_reference_is_abandoned() {
        let items = vec![
            line(1, "| A | B | C |"),
            line(2, "| --- | --- | --- |"),
            line(3, "| x |"),
            line(4, "plain"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        // The partial line is consumed but its cells never become a row.
        assert!(tables[0].element.rows.is_empty());
        assert!(tables[0].consumed.contains(&TokenId(3)));
        assert!(!tables[0].consumed.contains(&TokenId(4)));
    }

    #[test]
    fn test_failed_continuation_keeps_truncated_row() {
        let items = vec![
            line(1, "| A | B | C |"),
            line(2, "| --- | --- | --- |"),
            line(3, "| x |"),
            reference(9),
            line(4, "no border here"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        let element = &tables[0].element;
        assert_eq!(element.rows.len(), 1);
        assert_eq!(element.rows[0].len(), 2);
        assert!(matches!(element.rows[0][1], TableCell::Reference(_)));
        assert!(!tables[0].consumed.contains(&TokenId(4)));
    }

    #[test]
    fn test_border_continuation_supplies_remaining_cells() {
        let items = vec![
            line(1, "| A | B | C |"),
            line(2, "| --- | --- | --- |"),
            line(3, "| x |"),
            reference(9),
            line(4, "| last |"),
            line(5, "| p | q | r |"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 1);
        let element = &tables[0].element;
        assert_eq!(element.rows.len(), 2);
        assert_eq!(element.rows[0].len(), 3);
        assert_eq!(element.rows[0][2], TableCell::Text("last".to_string()));
        assert_eq!(text_cells(&element.rows[1]), vec!["p", "q", "r"]);
    }

    #[test]
    fn test_two_tables_in_one_stream() {
        let items = vec![
            line(1, "| A |"),
            line(2, "| --- |"),
            line(3, "| x |"),
            line(4, "between"),
            line(5, "| B | C |"),
            line(6, "| --- | --- |"),
            line(7, "| y | z |"),
        ];
        let tables = collect_tables(&items);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].element.starting_token_id, TokenId(1));
        assert_eq!(tables[1].element.starting_token_id, TokenId(5));
        assert!(!tables[0].consumed.contains(&TokenId(4)));
        assert!(!tables[1].consumed.contains(&TokenId(4)));
    }

    #[test]
    fn test_existing_table_item_is_inert() {
        let table = TableElement {
            starting_token_id: TokenId(100),
            headers: vec!["A".to_string()],
            rows: Vec::new(),
        };
        let items = vec![
            line(1, "| A | B |"),
            StreamItem::Table(table),
            line(2, "| --- | --- |"),
        ];
        assert!(collect_tables(&items).is_empty());
    }
}
