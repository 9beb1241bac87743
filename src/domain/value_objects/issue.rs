//! Validation issue value object.

use std::fmt;

use serde::Serialize;

/// Category of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Port is not an integer in 1..=65535
    PortOutOfRange,
    /// Two active services publish the same host port
    PortCollision,
    /// Selected engine is not one of the feature's engines
    UnknownEngine,
    /// Selected engine needs a credential or address that is empty
    MissingCredential,
    /// Feature is on but the feature it requires is off
    MissingDependency,
}

/// A single validation finding, naming every key involved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub keys: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, keys: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            keys,
            message: message.into(),
        }
    }

    pub fn mentions(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.keys.join(", "), self.message)
    }
}
