use anyhow::Result;

use crate::api::TropyClient;
use crate::models::Id;

/// Attach tags to an item, by name (default, creating missing tags) or by
/// id.
pub fn run_tag(client: &TropyClient, item: &Id, tags: &[String], by_id: bool) -> Result<()> {
    if by_id {
        let ids: Vec<Id> = tags.iter().map(|raw| Id::from(raw.as_str())).collect();
        client.tag_item_by_id(item, &ids)?;
    } else {
        client.tag_item_by_name(item, tags)?;
    }
    println!("Tagged item {}.", item);
    Ok(())
}
