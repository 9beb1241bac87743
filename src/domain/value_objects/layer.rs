//! Configuration layers
//!
//! A layer is a partial set of raw string tokens from one source. Tokens are
//! normalized against the option registry when layers are merged.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Where a configuration value came from, lowest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSource {
    Defaults,
    Persisted,
    Flags,
    Interactive,
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::Persisted => write!(f, "config file"),
            Self::Flags => write!(f, "command line"),
            Self::Interactive => write!(f, "prompt"),
        }
    }
}

/// Raw, not-yet-normalized settings from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    source: LayerSource,
    entries: BTreeMap<String, String>,
}

impl Layer {
    pub fn new(source: LayerSource) -> Self {
        Self {
            source,
            entries: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> LayerSource {
        self.source
    }

    pub fn set(&mut self, key: impl Into<String>, token: impl Into<String>) {
        self.entries.insert(key.into(), token.into());
    }

    pub fn with(mut self, key: impl Into<String>, token: impl Into<String>) -> Self {
        self.set(key, token);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a `key=value` assignment as given to `--set`
    pub fn parse_assignment(raw: &str) -> Option<(String, String)> {
        let (key, value) = raw.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.to_string()))
    }
}
