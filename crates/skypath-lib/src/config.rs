//! Engine configuration.
//!
//! [`EngineConfig`] can be built in code or loaded from a JSON document:
//!
//! ```json
//! { "dimension": 4, "pruning": "skyline" }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the partial skyline index and the result set treat dominated vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PruningMode {
    /// One vector per (source, frontier) pair, overwritten on every accepted
    /// candidate. Accepted result paths are never removed.
    SingleSlot,
    /// A maintained skyline set per (source, frontier) pair. A newly accepted
    /// result path evicts earlier results it dominates.
    #[default]
    Skyline,
}

impl fmt::Display for PruningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PruningMode::SingleSlot => "single_slot",
            PruningMode::Skyline => "skyline",
        };
        f.write_str(value)
    }
}

/// Settings for a [`crate::SkylineEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of attributes on every edge.
    pub dimension: usize,
    #[serde(default)]
    pub pruning: PruningMode,
}

impl EngineConfig {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            pruning: PruningMode::default(),
        }
    }

    pub fn with_pruning(mut self, pruning: PruningMode) -> Self {
        self.pruning = pruning;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
