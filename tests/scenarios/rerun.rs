//! Scenario: Returning User
//!
//! Journey: An operator edits deckhand.toml by hand months later and reruns
//! render, keeping the session secret and seeing only the intended change.

use crate::common::*;

fn secret_line(env_file: &str) -> String {
    env_file
        .lines()
        .find(|l| l.starts_with("WEBUI_SECRET_KEY="))
        .expect("secret line")
        .to_string()
}

#[test]
fn scenario_hand_edit_then_rerender() {
    let env = TestEnv::new();

    let result = env.run(&["render"]);
    assert!(result.success, "{}", result.combined_output());
    let secret = secret_line(&env.read(".env"));
    assert!(secret.len() > "WEBUI_SECRET_KEY=".len() + 16, "secret too short: {secret}");

    // Hand edit: enable Redis and websockets
    let settings = env
        .read("deckhand.toml")
        .replace("[redis]\nenabled = false", "[redis]\nenabled = true")
        .replace("[websocket]\nenabled = false", "[websocket]\nenabled = true");
    env.write_project_file("deckhand.toml", &settings);

    let result = env.run(&["render", "--diff"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("+++ b/"), "{}", result.stdout);
    assert!(result.stdout.contains("redis:7-alpine"));
    assert!(result.stdout.contains("updated"));

    // Secret survives, previous settings are backed up
    assert_eq!(secret_line(&env.read(".env")), secret);
    assert!(env.exists("deckhand.toml.bak"));
    assert!(env.read("docker-compose.yml").contains("WEBSOCKET_REDIS_URL=redis://redis:6379/0"));

    // A third run is a no-op
    let result = env.run(&["render"]);
    assert!(result.success);
    assert!(!result.stdout.contains("updated"), "{}", result.stdout);
}
