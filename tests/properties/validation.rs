//! Property tests for the validator.

use proptest::prelude::*;

use deckhand::domain::registry::keys;
use deckhand::domain::value_objects::IssueKind;
use deckhand::{get_defaults, validate, Value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every injected problem is reported, and nothing else.
    #[test]
    fn property_every_problem_is_reported(
        bad_port in prop_oneof![(i64::MIN..=0), (65536i64..=i64::MAX)],
        break_port in any::<bool>(),
        break_credential in any::<bool>(),
        break_dependency in any::<bool>(),
        break_collision in any::<bool>(),
    ) {
        let mut cv = get_defaults();
        let mut expected: Vec<(IssueKind, &str)> = Vec::new();

        if break_port {
            cv = cv.with(keys::WEBUI_PORT, Value::Int(bad_port));
            expected.push((IssueKind::PortOutOfRange, keys::WEBUI_PORT));
        }
        if break_credential {
            cv = cv
                .with(keys::TTS_ENABLED, Value::Bool(true))
                .with(keys::TTS_ENGINE, Value::text("openai"));
            expected.push((IssueKind::MissingCredential, keys::TTS_API_KEY));
        }
        if break_dependency {
            cv = cv.with(keys::WEBSOCKET_ENABLED, Value::Bool(true));
            expected.push((IssueKind::MissingDependency, keys::REDIS_ENABLED));
        }
        if break_collision {
            cv = cv
                .with(keys::SEARCH_ENABLED, Value::Bool(true))
                .with(keys::SEARXNG_ENABLED, Value::Bool(true))
                .with(keys::SEARXNG_PORT, Value::Int(11434));
            expected.push((IssueKind::PortCollision, keys::SEARXNG_PORT));
        }

        let issues = validate(&cv);

        prop_assert_eq!(issues.len(), expected.len(), "{:?}", issues);
        for (kind, key) in expected {
            prop_assert!(
                issues.iter().any(|i| i.kind == kind && i.mentions(key)),
                "no {:?} issue naming {} in {:?}",
                kind,
                key,
                issues
            );
        }
    }

    /// PROPERTY: ports inside 1..=65535 that do not collide are accepted.
    #[test]
    fn property_distinct_ports_in_range_are_valid(
        webui in 1i64..=30000,
        ollama in 30001i64..=65535,
    ) {
        let cv = get_defaults()
            .with(keys::WEBUI_PORT, Value::Int(webui))
            .with(keys::OLLAMA_PORT, Value::Int(ollama));

        prop_assert!(validate(&cv).is_empty());
    }
}
