//! Round-trip tests between recognized tables and their markdown rendering

use section_tables::tables::testing::{assert_items, TokenSeq};
use section_tables::tables::token::{render_items, ContentItem, ToMarkdownString};
use section_tables::recognize_tables;

#[test]
fn test_rendered_table_recognizes_back_to_the_same_shape() {
    let items = recognize_tables(
        TokenSeq::new()
            .text("| Name | Role |\n| --- | --- |\n| John | PM |\n| Jane |  |")
            .build(),
    );
    let rendered = match &items[0] {
        ContentItem::Table(table) => table.to_markdown_string(),
        other => panic!("expected a table, got {other:?}"),
    };

    let reparsed = recognize_tables(TokenSeq::new().text(&rendered).build());

    assert_items(&reparsed).count(1).table_at(0, |table| {
        table
            .headers(&["Name", "Role"])
            .row_count(2)
            .text_row(0, &["John", "PM"])
            .text_row(1, &["Jane", ""]);
    });
}

#[test]
fn test_render_items_flattens_a_mixed_stream() {
    let items = recognize_tables(
        TokenSeq::new()
            .text("Team so far:\n")
            .text("| Name |\n| --- |\n| John |")
            .reference("footer")
            .build(),
    );

    assert_eq!(
        render_items(&items),
        "Team so far:\n| Name |\n| --- |\n| John |\n{{3}}"
    );
}
