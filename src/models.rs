//! Frontend Models
//!
//! Data structures for list items and their persisted projections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card identifier as delivered by the list endpoint (number or string)
///
/// Numbers are kept as JSON numbers, so fractional, exponent-form and
/// `u64`-range ids survive a round trip through storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Number(n) => write!(f, "{}", n),
            CardId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CardId {
    fn from(n: i64) -> Self {
        CardId::Number(n.into())
    }
}

impl From<serde_json::Number> for CardId {
    fn from(n: serde_json::Number) -> Self {
        CardId::Number(n)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId::Text(s.to_string())
    }
}

/// Item data structure (matches the list endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// What is kept of an item after it has been deleted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedListItem {
    pub id: CardId,
    pub title: String,
}

impl From<&ListItem> for DeletedListItem {
    fn from(item: &ListItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
        }
    }
}
