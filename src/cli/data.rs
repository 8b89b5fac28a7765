use anyhow::Result;

use crate::api::TropyClient;
use crate::models::Id;

/// Print an item's metadata as JSON.
pub fn run_data(client: &TropyClient, id: &Id) -> Result<()> {
    let data = client.get_item_data(id)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
