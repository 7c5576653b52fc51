//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use rolewright::{Effect, PolicyStatement, TagSet};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    if super::no_color() {
        Cell::new(text)
    } else {
        Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
    }
}

/// Creates a table of permission statements in attachment order.
pub fn statement_table(statements: &[PolicyStatement]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Sid"),
        header_cell("Effect"),
        header_cell("Actions"),
        header_cell("Resources"),
    ]);

    for (index, stmt) in statements.iter().enumerate() {
        let effect = match stmt.effect {
            Effect::Allow => Cell::new("Allow"),
            Effect::Deny if super::no_color() => Cell::new("Deny"),
            Effect::Deny => Cell::new("Deny").fg(Color::Yellow),
        };
        let resources = if stmt.resources.is_empty() {
            "-".to_string()
        } else {
            stmt.resources.join("\n")
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(stmt.sid.as_deref().unwrap_or("-")),
            effect,
            Cell::new(stmt.actions.join("\n")),
            Cell::new(resources),
        ]);
    }

    table
}

/// Creates a key-value info table (two columns: key and value).
pub fn info_table(entries: &[(&str, &str)]) -> Table {
    let mut table = base_table();

    for (key, value) in entries {
        let key_cell = if super::no_color() {
            Cell::new(key)
        } else {
            Cell::new(key).fg(Color::DarkGrey)
        };
        table.add_row(vec![key_cell, Cell::new(value)]);
    }

    table
}

/// Creates a tag table.
pub fn tag_table(tags: &TagSet) -> Table {
    let entries: Vec<(&str, &str)> = tags.iter().collect();
    info_table(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_table_lists_every_statement() {
        super::super::set_no_color(true);
        let statements = vec![
            PolicyStatement::allow(["s3:GetObject", "s3:PutObject"], ["arn:aws:s3:::b/*"])
                .with_sid("Bucket"),
            PolicyStatement::allow(["ec2:DescribeNetworkInterfaces"], Vec::<String>::new()),
        ];

        let rendered = statement_table(&statements).to_string();
        assert!(rendered.contains("Bucket"));
        assert!(rendered.contains("s3:PutObject"));
        assert!(rendered.contains("ec2:DescribeNetworkInterfaces"));
    }

    #[test]
    fn test_tag_table() {
        super::super::set_no_color(true);
        let tags: TagSet = [("Environment", "Development"), ("Project", "OLTP Role")]
            .into_iter()
            .collect();

        let rendered = tag_table(&tags).to_string();
        assert!(rendered.contains("Environment"));
        assert!(rendered.contains("OLTP Role"));
    }
}
