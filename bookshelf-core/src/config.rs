//! Shelf configuration

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Settings used to build a [`Shelf`](crate::Shelf)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Maximum number of books; absent means unbounded
    pub capacity: Option<usize>,
}

impl ShelfConfig {
    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json).map_err(ConfigError::from)?;
        Ok(config)
    }
}
