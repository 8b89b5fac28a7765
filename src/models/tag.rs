use serde::{Deserialize, Serialize};

use super::Id;

/// A named label, optionally colored, attachable to items many-to-many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Tag {
    /// Tag names compare case-insensitively.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
