//! TOML-based configuration repository implementation.
//!
//! The persisted file mirrors the option registry: one `[section]` per
//! registry section, keys in registry order. Values read back go through
//! the same normalization as command-line input.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Spanned;
use tracing::{debug, warn};

use crate::domain::ports::ConfigRepository;
use crate::domain::registry;
use crate::domain::services::layering::{normalize_entry, unknown_key_message};
use crate::domain::value_objects::{ConfigValue, LayerSource, Value};
use crate::error::{DeckhandError, DeckhandResult, ParseIssue};
use crate::infrastructure::fs::write_atomic;

pub const DEFAULT_CONFIG_FILE: &str = "deckhand.toml";

const HEADER: &str = "\
# Deckhand configuration
# Written by `deckhand setup` / `deckhand render`. Edit freely; the previous
# version is kept as deckhand.toml.bak on every save.
";

type Document = std::collections::BTreeMap<String, Section>;
type Section = std::collections::BTreeMap<String, Spanned<toml::Value>>;

/// Path of the backup written before each save
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Serialize `config` in registry order
pub fn to_toml_string(config: &ConfigValue) -> String {
    let mut out = String::from(HEADER);
    for section in registry::sections() {
        out.push('\n');
        out.push_str(&format!("[{}]\n", section));
        for option in registry::options().iter().filter(|o| o.section() == section) {
            let Some(value) = config.get(option.key) else {
                continue;
            };
            out.push_str(&format!("{} = {}\n", option.field(), toml_literal(value)));
        }
    }
    out
}

fn toml_literal(value: &Value) -> String {
    match value {
        Value::Bool(b) => toml::Value::Boolean(*b).to_string(),
        Value::Int(n) => toml::Value::Integer(*n).to_string(),
        Value::Text(s) => toml::Value::String(s.clone()).to_string(),
    }
}

/// 1-based line of a byte offset
fn line_of(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}

fn token_of(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Integer(n) => Some(n.to_string()),
        toml::Value::Float(_) => Some(value.to_string()),
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

fn type_name(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}

/// Parse and normalize persisted config text
pub fn parse_config(content: &str) -> DeckhandResult<ConfigValue> {
    let document: Document = toml::from_str(content).map_err(|e| {
        let mut issue = ParseIssue::new(LayerSource::Persisted, e.message().to_string());
        if let Some(span) = e.span() {
            issue = issue.at_line(line_of(content, span.start));
        }
        DeckhandError::Parse(vec![issue])
    })?;

    let mut values = Vec::new();
    let mut issues = Vec::new();

    for (section, entries) in &document {
        for (field, spanned) in entries {
            let key = format!("{}.{}", section, field);
            let line = line_of(content, spanned.span().start);
            let issue = |message: String| {
                ParseIssue::new(LayerSource::Persisted, message)
                    .with_key(key.clone())
                    .at_line(line)
            };

            if registry::lookup(&key).is_none() {
                issues.push(issue(unknown_key_message(&key)));
                continue;
            }
            let Some(token) = token_of(spanned.get_ref()) else {
                issues.push(issue(format!(
                    "unsupported value type {}",
                    type_name(spanned.get_ref())
                )));
                continue;
            };
            match normalize_entry(&key, &token) {
                Ok(value) => values.push((key, value)),
                Err(message) => issues.push(issue(message)),
            }
        }
    }

    if !issues.is_empty() {
        return Err(DeckhandError::Parse(issues));
    }
    Ok(values.into_iter().collect())
}

/// TOML configuration repository implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigRepository;

impl TomlConfigRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load(&self, path: &Path) -> DeckhandResult<ConfigValue> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DeckhandError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "loading persisted config");
        parse_config(&content)
    }

    fn save(&self, config: &ConfigValue, path: &Path) -> DeckhandResult<()> {
        if path.exists() {
            let backup = backup_path(path);
            if let Err(e) = fs::copy(path, &backup) {
                warn!(
                    path = %backup.display(),
                    error = %e,
                    "could not back up previous config, saving anyway"
                );
            }
        }
        write_atomic(path, &to_toml_string(config))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
