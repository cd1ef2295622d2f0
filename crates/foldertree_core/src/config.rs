//! Engine options supplied by the host.
//!
//! # Invariants
//! - Missing fields fall back to defaults, so an empty JSON object is valid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while reading `StoreOptions` from host input.
#[derive(Debug)]
pub enum ConfigError {
    InvalidJson(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "invalid store options: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value)
    }
}

/// Behavior switches for one `TreeStore` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Seed the expansion set with every newly created folder.
    pub expand_created_folders: bool,
    /// Drop expansion ids, rename mode and selection that referred to a
    /// deleted subtree.
    pub prune_view_state_on_delete: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            expand_created_folders: true,
            prune_view_state_on_delete: true,
        }
    }
}

impl StoreOptions {
    /// Parses options from a JSON object.
    pub fn from_json(value: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(value)?)
    }
}
