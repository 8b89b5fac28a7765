use anyhow::Result;

use crate::api::TropyClient;

/// Create a tag (or reuse an existing one) and print its id.
pub fn run_create(client: &TropyClient, name: &str, color: Option<&str>) -> Result<()> {
    let id = client.create_tag(name, color.unwrap_or(""))?;
    println!("{}", id);
    Ok(())
}
