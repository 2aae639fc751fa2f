//! Conversion and output settings.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one conversion run.
///
/// Read from a JSON file with [`Config::load`]; every field is optional
/// there and falls back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Ceiling on the number of composite states the construction may
    /// discover. `None` means unbounded.
    pub max_states: Option<usize>,
    /// Indentation width of the JSON output.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_states: None,
            indent: 4,
        }
    }
}

impl Config {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
