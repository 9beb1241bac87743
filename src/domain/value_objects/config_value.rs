//! Merged configuration value
//!
//! An ordered, immutable-in-use mapping from option key to [`Value`]. Every
//! pipeline stage that changes it returns a new `ConfigValue`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::value::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigValue {
    values: BTreeMap<String, Value>,
}

impl ConfigValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `key` set to `value`
    pub fn with(&self, key: impl Into<String>, value: Value) -> Self {
        let mut next = self.clone();
        next.values.insert(key.into(), value);
        next
    }

    /// Return a copy where every key of `other` replaces ours
    pub fn overlay(&self, other: &ConfigValue) -> Self {
        let mut next = self.clone();
        for (key, value) in &other.values {
            next.values.insert(key.clone(), value.clone());
        }
        next
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Feature flag state; absent or non-boolean counts as off
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Text value, or `""` when absent
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_text).unwrap_or("")
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Whether the current value of `key` renders as `token`
    pub fn is(&self, key: &str, token: &str) -> bool {
        self.get(key).is_some_and(|v| v.to_token() == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
