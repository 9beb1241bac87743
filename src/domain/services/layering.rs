//! Source layering
//!
//! Merges configuration sources in priority order:
//! defaults < persisted file < command line < interactive answers.
//! A key set by a later layer replaces the earlier value; keys a layer does
//! not mention are untouched. Every rejected token from every layer is
//! reported in a single [`DeckhandError::Parse`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::registry;
use crate::domain::value_objects::{ConfigValue, Layer, LayerSource, Value};
use crate::error::{DeckhandError, DeckhandResult, ParseIssue};

/// Merged configuration plus the layer that supplied each final value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedConfig {
    pub config: ConfigValue,
    pub sources: BTreeMap<String, LayerSource>,
}

impl TracedConfig {
    pub fn source_of(&self, key: &str) -> Option<LayerSource> {
        self.sources.get(key).copied()
    }
}

/// Normalize one raw token against the registry entry for `key`
pub fn normalize_entry(key: &str, token: &str) -> Result<Value, String> {
    let option = registry::lookup(key).ok_or_else(|| unknown_key_message(key))?;
    option.normalize(token)
}

/// "unknown setting" with a typo hint when one is close enough
pub fn unknown_key_message(key: &str) -> String {
    match registry::suggest(key) {
        Some(candidate) => format!("unknown setting (did you mean '{}'?)", candidate),
        None => "unknown setting".to_string(),
    }
}

/// Normalize every entry of a raw layer, collecting all rejections
pub fn normalize_layer(layer: &Layer) -> Result<ConfigValue, Vec<ParseIssue>> {
    let mut values = Vec::with_capacity(layer.len());
    let mut issues = Vec::new();

    for (key, token) in layer.iter() {
        match normalize_entry(key, token) {
            Ok(value) => values.push((key, value)),
            Err(message) => issues.push(ParseIssue::new(layer.source(), message).with_key(key)),
        }
    }

    if issues.is_empty() {
        Ok(values.into_iter().collect())
    } else {
        Err(issues)
    }
}

pub fn merge(
    defaults: &ConfigValue,
    persisted: Option<&ConfigValue>,
    flags: &Layer,
    interactive: Option<&Layer>,
) -> DeckhandResult<ConfigValue> {
    merge_traced(defaults, persisted, flags, interactive).map(|traced| traced.config)
}

pub fn merge_traced(
    defaults: &ConfigValue,
    persisted: Option<&ConfigValue>,
    flags: &Layer,
    interactive: Option<&Layer>,
) -> DeckhandResult<TracedConfig> {
    let mut traced = TracedConfig {
        config: defaults.clone(),
        sources: defaults
            .iter()
            .map(|(key, _)| (key.to_string(), LayerSource::Defaults))
            .collect(),
    };

    if let Some(persisted) = persisted {
        debug!(keys = persisted.len(), "applying persisted layer");
        apply(&mut traced, persisted, LayerSource::Persisted);
    }

    let mut issues = Vec::new();
    for layer in std::iter::once(flags).chain(interactive) {
        match normalize_layer(layer) {
            Ok(values) => {
                debug!(source = %layer.source(), keys = values.len(), "applying layer");
                apply(&mut traced, &values, layer.source());
            }
            Err(mut rejected) => issues.append(&mut rejected),
        }
    }

    if !issues.is_empty() {
        return Err(DeckhandError::Parse(issues));
    }

    Ok(traced)
}

fn apply(traced: &mut TracedConfig, values: &ConfigValue, source: LayerSource) {
    traced.config = traced.config.overlay(values);
    for (key, _) in values.iter() {
        traced.sources.insert(key.to_string(), source);
    }
}
