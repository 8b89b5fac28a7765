use anyhow::Result;
use serde_json::Value;

use crate::api::TropyClient;
use crate::models::{Id, Tag};

/// List the project's tags, or a single item's tag values.
pub fn run_tags(client: &TropyClient, item: Option<&Id>) -> Result<()> {
    match item {
        Some(id) => {
            for value in client.get_item_tags(id)? {
                println!("{}", render_value(&value));
            }
        }
        None => {
            for tag in client.list_tags()? {
                println!("{}", render_tag(&tag));
            }
        }
    }
    Ok(())
}

fn render_tag(tag: &Tag) -> String {
    match &tag.color {
        Some(color) if !color.is_empty() => format!("{}\t{}\t{}", tag.id, tag.name, color),
        _ => format!("{}\t{}", tag.id, tag.name),
    }
}

/// Tag values come back as raw JSON; strings print bare, anything else as
/// JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
