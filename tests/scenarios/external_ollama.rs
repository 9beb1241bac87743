//! Scenario: Existing Ollama Server
//!
//! Journey: Ollama already runs on the host; only Open WebUI should be
//! containerised, with web search through a self-hosted SearXNG.
//!
//! Success Criteria:
//! - No ollama service is declared
//! - Open WebUI reaches the host through host-gateway
//! - Leaving out the address fails with a clear message and no files

use crate::common::*;

#[test]
fn scenario_external_ollama_with_searxng() {
    let env = TestEnv::new();

    // Forgetting the address is caught before anything is written
    let result = env.run(&["render", "--no-ollama"]);
    assert_eq!(result.exit_code, 5, "{}", result.combined_output());
    assert!(result.stderr.contains("ollama.url"), "{}", result.stderr);
    assert!(!env.exists("docker-compose.yml"));

    let result = env.run(&[
        "render",
        "--no-ollama",
        "--ollama-url",
        "http://host.docker.internal:11434",
        "--set",
        "search.enabled=y",
        "--set",
        "search.engine=searxng",
        "--set",
        "searxng.enabled=y",
    ]);
    assert!(result.success, "{}", result.combined_output());

    let compose = env.read("docker-compose.yml");
    assert!(!compose.contains("  ollama:"), "{compose}");
    assert!(compose.contains("  searxng:"));
    assert!(compose.contains("host.docker.internal:host-gateway"));
    assert!(compose.contains("      - searxng"), "open-webui should depend on searxng");

    // The choice is remembered
    let settings = env.read("deckhand.toml");
    assert!(settings.contains("enabled = false"));
    assert!(settings.contains("url = \"http://host.docker.internal:11434\""));

    // Turning Ollama back on drops the host gateway again
    let result = env.run(&["render", "--ollama"]);
    assert!(result.success, "{}", result.combined_output());
    let compose = env.read("docker-compose.yml");
    assert!(compose.contains("  ollama:"));
    assert!(!compose.contains("host-gateway"));
}
