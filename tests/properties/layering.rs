//! Property tests for source layering.

use proptest::prelude::*;

use deckhand::domain::services::merge_traced;
use deckhand::{get_defaults, ConfigValue, Layer, LayerSource};

use crate::strategies::partial_config;

fn as_layer(cv: &ConfigValue, source: LayerSource) -> Layer {
    let mut layer = Layer::new(source);
    for (key, value) in cv.iter() {
        layer.set(key, value.to_token());
    }
    layer
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each key takes the value of the highest layer that sets it.
    #[test]
    fn property_later_layers_win(
        persisted in partial_config(),
        flags in partial_config(),
        answers in partial_config(),
    ) {
        let defaults = get_defaults();
        let flag_layer = as_layer(&flags, LayerSource::Flags);
        let answer_layer = as_layer(&answers, LayerSource::Interactive);

        let traced = merge_traced(&defaults, Some(&persisted), &flag_layer, Some(&answer_layer))
            .unwrap();

        for (key, default) in defaults.iter() {
            let (expected, source) = if let Some(v) = answers.get(key) {
                (v, LayerSource::Interactive)
            } else if let Some(v) = flags.get(key) {
                (v, LayerSource::Flags)
            } else if let Some(v) = persisted.get(key) {
                (v, LayerSource::Persisted)
            } else {
                (default, LayerSource::Defaults)
            };
            prop_assert_eq!(traced.config.get(key), Some(expected), "key {}", key);
            prop_assert_eq!(traced.source_of(key), Some(source), "key {}", key);
        }
    }

    /// PROPERTY: layering never adds or drops keys.
    #[test]
    fn property_merged_keys_are_the_registry_keys(flags in partial_config()) {
        let defaults = get_defaults();
        let traced = merge_traced(
            &defaults,
            None,
            &as_layer(&flags, LayerSource::Flags),
            None,
        )
        .unwrap();

        let merged: Vec<&str> = traced.config.iter().map(|(k, _)| k).collect();
        let declared: Vec<&str> = defaults.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(merged, declared);
    }
}
