use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CARD_ID_KEY: &str = "cardId";
pub const COLUMN_KEY: &str = "column";

/// Entries attached to a drag gesture at drag start and read back on drop.
/// Carries the dragged card between components without shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferPayload {
    entries: BTreeMap<String, String>,
}

impl TransferPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Missing and empty entries both read as `None`.
    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn card_id(&self) -> Option<&str> {
        self.get_data(CARD_ID_KEY)
    }

    pub fn origin_column(&self) -> Option<&str> {
        self.get_data(COLUMN_KEY)
    }
}
