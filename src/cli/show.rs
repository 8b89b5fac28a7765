use anyhow::Result;

use crate::api::TropyClient;
use crate::models::Id;

/// Print an item's full JSON record.
pub fn run_show(client: &TropyClient, id: &Id) -> Result<()> {
    let item = client.get_item(id)?;
    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
