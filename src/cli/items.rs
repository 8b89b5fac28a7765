use anyhow::Result;

use crate::api::TropyClient;

/// Print every item id in the project, one per line.
pub fn run_items(client: &TropyClient) -> Result<()> {
    for id in client.list_item_ids()? {
        println!("{}", id);
    }
    Ok(())
}
