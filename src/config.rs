use serde::{Deserialize, Serialize};

use crate::page::contact::CONTACT_RECIPIENT;
use crate::scene::DEFAULT_CLOUD_COUNT;

/// Page-level configuration. Everything has a sensible default; the demo can
/// load overrides from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Recipient of all composed mailto URIs
    pub recipient: String,
    /// Number of cloud groups in the 3D scene
    pub cloud_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            recipient: CONTACT_RECIPIENT.to_string(),
            cloud_count: DEFAULT_CLOUD_COUNT,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
