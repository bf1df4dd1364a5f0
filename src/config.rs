//! Application Configuration
//!
//! Built once in `main` and provided to the component tree via context.

use leptos::prelude::*;

/// Storage keys for the persisted collections
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub deleted_cards: String,
    pub expanded_card_ids: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            deleted_cards: "deletedCards".to_string(),
            expanded_card_ids: "expandedCardIds".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL the list query fetches (relative to the page)
    pub data_url: String,
    pub storage_keys: StorageKeys,
    pub list_heading: String,
    pub deleted_heading: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: "items.json".to_string(),
            storage_keys: StorageKeys::default(),
            list_heading: "My Awesome List".to_string(),
            deleted_heading: "Deleted Cards".to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }
}

/// Get the app config from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
