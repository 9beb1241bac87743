//! Property tests for the settings file.

use proptest::prelude::*;

use deckhand::infrastructure::config::{parse_config, to_toml_string};

use crate::strategies::{any_config, partial_config};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: loading a saved configuration gives it back unchanged.
    #[test]
    fn property_saved_config_loads_back(cv in any_config()) {
        let text = to_toml_string(&cv);
        let loaded = parse_config(&text).unwrap();

        prop_assert_eq!(loaded, cv);
    }

    /// PROPERTY: a partial file only yields the keys it mentions.
    #[test]
    fn property_partial_files_stay_partial(cv in partial_config()) {
        let loaded = parse_config(&to_toml_string(&cv)).unwrap();

        prop_assert_eq!(loaded.len(), cv.len());
    }

    /// PROPERTY: arbitrary text never panics the parser.
    #[test]
    fn property_parser_never_panics(text in ".{0,200}") {
        let _ = parse_config(&text);
    }
}
