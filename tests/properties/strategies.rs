//! Generators for whole configurations.

use proptest::prelude::*;

use deckhand::domain::registry::{self, keys, ConfigOption, Domain};
use deckhand::{ConfigValue, Value};

/// Text that survives token normalization unchanged (no edge whitespace)
pub fn text_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"([A-Za-z0-9/:._$#"'\\=-]([A-Za-z0-9 /:._$#"'\\=-]{0,18}[A-Za-z0-9/:._$#"'\\=-])?)?"#)
        .unwrap()
}

/// Non-empty address-like text
pub fn address() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[a-z][A-Za-z0-9/:._$#"'\\-]{0,24}"#).unwrap()
}

fn value_for(option: &'static ConfigOption) -> BoxedStrategy<Value> {
    match option.domain {
        Domain::Boolean => any::<bool>().prop_map(Value::Bool).boxed(),
        Domain::Port => (1i64..=65535).prop_map(Value::Int).boxed(),
        Domain::Enum(engines) => {
            let names: Vec<&'static str> = engines.iter().map(|e| e.name).collect();
            proptest::sample::select(names)
                .prop_map(Value::text)
                .boxed()
        }
        Domain::Text | Domain::Secret => text_token().prop_map(Value::Text).boxed(),
    }
}

/// Every registry key with an in-domain value; not necessarily valid
pub fn any_config() -> impl Strategy<Value = ConfigValue> {
    let per_option: Vec<BoxedStrategy<(&'static str, Value)>> = registry::options()
        .iter()
        .map(|option| value_for(option).prop_map(move |v| (option.key, v)).boxed())
        .collect();
    per_option.prop_map(|pairs| pairs.into_iter().collect())
}

/// Configurations the renderer accepts
pub fn renderable_config() -> impl Strategy<Value = ConfigValue> {
    (any_config(), address(), address()).prop_map(|(mut cv, ollama_url, searxng_url)| {
        if !cv.flag(keys::OLLAMA_ENABLED) && cv.text(keys::OLLAMA_URL).trim().is_empty() {
            cv = cv.with(keys::OLLAMA_URL, Value::Text(ollama_url));
        }
        if !cv.flag(keys::SEARXNG_ENABLED) && cv.text(keys::SEARXNG_URL).trim().is_empty() {
            cv = cv.with(keys::SEARXNG_URL, Value::Text(searxng_url));
        }
        if cv.flag(keys::WEBSOCKET_ENABLED) {
            cv = cv.with(keys::REDIS_ENABLED, Value::Bool(true));
        }
        cv
    })
}

/// A random subset of registry keys, each with an in-domain value
pub fn partial_config() -> impl Strategy<Value = ConfigValue> {
    (any_config(), proptest::collection::vec(any::<bool>(), registry::options().len())).prop_map(
        |(cv, keep)| {
            cv.iter()
                .zip(keep)
                .filter(|(_, keep)| *keep)
                .map(|((key, value), _)| (key.to_string(), value.clone()))
                .collect()
        },
    )
}
