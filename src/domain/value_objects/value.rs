//! Setting Value Object
//!
//! A typed setting value plus the token normalization used at the layering
//! boundary. Booleans accept a closed token set; anything else is rejected
//! instead of being coerced.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical token form, as accepted back by the normalizers
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Tokens accepted for a boolean setting (case-insensitive)
pub const BOOL_TOKENS: &[&str] = &["y", "n", "true", "false", "on", "off"];

/// Normalize a boolean-like token
///
/// Returns `None` for anything outside [`BOOL_TOKENS`].
pub fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "true" | "on" => Some(true),
        "n" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Parse an integer token (range checks belong to validation)
pub fn parse_int_token(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
