use anyhow::Result;

use crate::api::TropyClient;
use crate::models::Id;

/// Print an item's photo paths, one per line.
pub fn run_photos(client: &TropyClient, id: &Id) -> Result<()> {
    for path in client.get_item_photos(id)? {
        println!("{}", path);
    }
    Ok(())
}
