//! Error types for Deckhand
//!
//! Library code returns [`DeckhandResult`]; the binary maps each variant to an
//! exit code via [`DeckhandError::exit_code`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{LayerSource, ValidationIssue};

/// Result type alias for Deckhand operations
pub type DeckhandResult<T> = Result<T, DeckhandError>;

/// A single rejected input, located as precisely as the source allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Where the offending input came from
    pub source: LayerSource,
    /// 1-based line number for file input
    pub line: Option<usize>,
    /// Option key, when the input could be attributed to one
    pub key: Option<String>,
    pub message: String,
}

impl ParseIssue {
    pub fn new(source: LayerSource, message: impl Into<String>) -> Self {
        Self {
            source,
            line: None,
            key: None,
            message: message.into(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(key) = &self.key {
            write!(f, ": {}", key)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Main error type for Deckhand operations
#[derive(Error, Debug)]
pub enum DeckhandError {
    /// A required external tool is not installed
    #[error("required tool '{tool}' is not available ({hint})")]
    MissingPrerequisite { tool: String, hint: String },

    /// Persisted config or command-line input is malformed
    #[error("{}", format_parse_issues(.0))]
    Parse(Vec<ParseIssue>),

    /// A file the command needs does not exist
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Merged configuration failed validation
    #[error("{}", format_validation_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// A block needs a value that cannot be resolved from the configuration
    #[error("cannot render {block}: {message}")]
    Render { block: String, message: String },

    /// The container runtime exited unsuccessfully
    #[error("`{command}` failed{}: {stderr}", format_status(.status))]
    RuntimeInvocation {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// The operator cancelled a prompt that has no fallback value
    #[error("no value for required setting '{key}'; nothing was written")]
    PromptAborted { key: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckhandError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::Validation(_) => 2,
            Self::MissingPrerequisite { .. } => 3,
            Self::RuntimeInvocation { .. } => 4,
            Self::Render { .. } => 5,
            Self::PromptAborted { .. } => 6,
            Self::NotFound { .. } | Self::Io(_) => 1,
        }
    }
}

fn format_parse_issues(issues: &[ParseIssue]) -> String {
    let mut out = format!("{} invalid input value(s):", issues.len());
    for issue in issues {
        out.push_str("\n  - ");
        out.push_str(&issue.to_string());
    }
    out
}

fn format_validation_issues(issues: &[ValidationIssue]) -> String {
    let mut out = format!("configuration has {} problem(s):", issues.len());
    for issue in issues {
        out.push_str("\n  - ");
        out.push_str(&issue.to_string());
    }
    out
}

fn format_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}
