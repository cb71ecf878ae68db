//! Logged-in officer identity.

use serde::{Deserialize, Serialize};

/// Officer shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub badge_number: String,
}

impl Officer {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Default for Officer {
    fn default() -> Self {
        Self {
            name: "Officer Michael Scott".to_string(),
            rank: "Sergeant".to_string(),
            badge_number: "4521".to_string(),
        }
    }
}

/// First character of each whitespace-separated token, concatenated.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|token| token.chars().next()).collect()
}
