//! Property tests for the renderer.

use proptest::prelude::*;

use deckhand::domain::registry::keys;
use deckhand::domain::services::{compose_services, expected_containers};
use deckhand::render_all;

use crate::strategies::renderable_config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering the same configuration twice gives identical text.
    #[test]
    fn property_render_is_deterministic(cv in renderable_config()) {
        let first = render_all(&cv).unwrap();
        let second = render_all(&cv).unwrap();

        prop_assert_eq!(first.compose.to_text(), second.compose.to_text());
        prop_assert_eq!(first.env.to_text(), second.env.to_text());
    }

    /// PROPERTY: a companion service block exists exactly when its gate holds.
    #[test]
    fn property_service_blocks_follow_their_gates(cv in renderable_config()) {
        let rendered = render_all(&cv).unwrap();
        let compose = &rendered.compose;

        prop_assert_eq!(compose.has_block("ollama"), cv.flag(keys::OLLAMA_ENABLED));
        prop_assert_eq!(
            compose.has_block("searxng"),
            cv.flag(keys::SEARCH_ENABLED) && cv.flag(keys::SEARXNG_ENABLED)
        );
        prop_assert_eq!(compose.has_block("redis"), cv.flag(keys::REDIS_ENABLED));
        prop_assert_eq!(
            compose.has_block("webui-limits"),
            cv.flag(keys::WEBUI_RESOURCE_LIMITS)
        );
        prop_assert_eq!(
            compose.has_block("ollama-gpu"),
            cv.flag(keys::OLLAMA_ENABLED) && cv.flag(keys::OLLAMA_GPU)
        );
        prop_assert_eq!(rendered.env.has_block("tts"), cv.flag(keys::TTS_ENABLED));
        prop_assert_eq!(rendered.env.has_block("stt"), cv.flag(keys::STT_ENABLED));
        prop_assert_eq!(rendered.env.has_block("images"), cv.flag(keys::IMAGES_ENABLED));
    }

    /// PROPERTY: no rendered block draws on a feature that is switched off.
    #[test]
    fn property_blocks_of_disabled_features_never_render(cv in renderable_config()) {
        let rendered = render_all(&cv).unwrap();
        for feature in [keys::TTS_ENABLED, keys::STT_ENABLED, keys::IMAGES_ENABLED, keys::REDIS_ENABLED] {
            if cv.flag(feature) {
                continue;
            }
            for block in rendered.compose.blocks().iter().chain(rendered.env.blocks()) {
                prop_assert!(
                    !block.depends_on(feature),
                    "block {} renders although {} is off",
                    block.id,
                    feature
                );
            }
        }
    }

    /// PROPERTY: the compose file parses and declares exactly the expected services.
    #[test]
    fn property_compose_declares_expected_services(cv in renderable_config()) {
        let rendered = render_all(&cv).unwrap();
        let declared = compose_services(&rendered.compose.to_text()).unwrap();
        let expected: Vec<String> = expected_containers(&cv)
            .into_iter()
            .map(str::to_string)
            .collect();

        prop_assert_eq!(declared, expected);
    }

    /// PROPERTY: every `${VAR}` in the compose file is assigned in the env file.
    #[test]
    fn property_compose_variables_are_defined(cv in renderable_config()) {
        let rendered = render_all(&cv).unwrap();
        let assigned = rendered.env.assigned_vars();

        for name in rendered.compose.interpolated_vars() {
            prop_assert!(assigned.contains(&name), "${{{}}} is not assigned in .env", name);
        }
    }
}
