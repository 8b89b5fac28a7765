use anyhow::Result;

use crate::api::TropyClient;
use crate::models::Id;

/// Detach tags from an item, by name or by id.
pub fn run_untag(client: &TropyClient, item: &Id, tags: &[String], by_id: bool) -> Result<()> {
    if by_id {
        let ids: Vec<Id> = tags.iter().map(|raw| Id::from(raw.as_str())).collect();
        client.untag_item_by_id(item, &ids)?;
    } else {
        client.untag_item_by_name(item, tags)?;
    }
    println!("Untagged item {}.", item);
    Ok(())
}
