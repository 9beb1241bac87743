//! `deckhand render` end to end: files on disk, idempotence, overrides and
//! the failure exit codes.

mod common;

use common::*;

#[test]
fn render_writes_compose_env_and_settings() {
    let env = TestEnv::new();

    let result = env.run(&["render"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "Stack configured");
    assert_file_contains!(env, "docker-compose.yml", "container_name: open-webui");
    assert_file_contains!(env, "docker-compose.yml", "\"3000:8080\"");
    assert_file_contains!(env, "docker-compose.yml", "container_name: ollama");
    assert_file_contains!(env, ".env", "WEBUI_SECRET_KEY=");
    assert_file_contains!(env, "deckhand.toml", "[webui]");
}

#[test]
fn render_generates_a_secret_once() {
    let env = TestEnv::new();

    let first = env.run(&["render"]);
    assert_exit_code!(first, 0);
    assert_output_contains!(first, "Generated a new session secret");
    let env_file = env.read(".env");

    let second = env.run(&["render"]);
    assert_exit_code!(second, 0);
    assert_output_not_contains!(second, "Generated a new session secret");
    assert_eq!(env.read(".env"), env_file, "secret must survive a rerun");
}

#[test]
fn rerun_without_changes_reports_unchanged() {
    let env = TestEnv::new();
    assert!(env.run(&["render"]).is_success());
    let compose = env.read("docker-compose.yml");

    let result = env.run(&["render"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "unchanged");
    assert_output_not_contains!(result, "updated");
    assert_eq!(env.read("docker-compose.yml"), compose);
}

#[test]
fn dry_run_writes_nothing() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--dry-run"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "Dry run");
    assert_output_contains!(result, "would be created");
    assert_output_contains!(result, "container_name: open-webui");
    assert!(!env.exists("docker-compose.yml"));
    assert!(!env.exists(".env"));
    assert!(!env.exists("deckhand.toml"));
}

#[test]
fn diff_shows_changed_port_mapping() {
    let env = TestEnv::new();
    assert!(env.run(&["render"]).is_success());

    let result = env.run(&["render", "--dry-run", "--diff", "--port", "3100"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "-       - \"3000:8080\"");
    assert_output_contains!(result, "+       - \"3100:8080\"");
    assert_file_contains!(env, "docker-compose.yml", "\"3000:8080\"");
}

#[test]
fn diff_without_changes_says_so() {
    let env = TestEnv::new();
    assert!(env.run(&["render"]).is_success());

    let result = env.run(&["render", "--diff"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "No changes.");
}

#[test]
fn port_flag_is_persisted() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--port", "8081"]);

    assert_exit_code!(result, 0);
    assert_file_contains!(env, "docker-compose.yml", "\"8081:8080\"");
    assert_file_contains!(env, "deckhand.toml", "port = 8081");

    // The saved port is used without repeating the flag
    let result = env.run(&["render"]);
    assert_exit_code!(result, 0);
    assert_file_contains!(env, "docker-compose.yml", "\"8081:8080\"");
}

#[test]
fn external_ollama_uses_host_gateway() {
    let env = TestEnv::new();

    let result = env.run(&[
        "render",
        "--no-ollama",
        "--ollama-url",
        "http://host.docker.internal:11434",
    ]);

    assert_exit_code!(result, 0);
    let compose = env.read("docker-compose.yml");
    assert!(!compose.contains("container_name: ollama"), "{compose}");
    assert!(compose.contains("OLLAMA_BASE_URL=http://host.docker.internal:11434"));
    assert!(compose.contains("host.docker.internal:host-gateway"));
}

#[test]
fn external_ollama_without_address_cannot_render() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--no-ollama"]);

    assert_exit_code!(result, 5);
    assert_output_contains!(result, "cannot render");
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn set_enables_companion_services() {
    let env = TestEnv::new();

    let result = env.run(&[
        "render",
        "--set",
        "search.enabled=on",
        "--set",
        "search.engine=searxng",
        "--set",
        "searxng.enabled=y",
        "--set",
        "redis.enabled=true",
        "--set",
        "websocket.enabled=true",
    ]);

    assert_exit_code!(result, 0);
    let compose = env.read("docker-compose.yml");
    assert!(compose.contains("container_name: searxng"));
    assert!(compose.contains("SEARXNG_QUERY_URL=http://searxng:8080/search?q=<query>"));
    assert!(compose.contains("container_name: redis"));
    assert!(compose.contains("WEBSOCKET_REDIS_URL=redis://redis:6379/0"));
}

#[test]
fn malformed_set_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--set", "webui.port"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "KEY=VALUE");
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn unknown_key_suggests_the_closest_one() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--set", "webui.prot=3000"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "did you mean 'webui.port'?");
}

#[test]
fn invalid_boolean_token_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--set", "webui.auth=maybe"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "webui.auth");
}

#[test]
fn out_of_range_port_fails_validation() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--port", "70000"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "webui.port");
    assert!(!env.exists(".env"));
}

#[test]
fn sub_feature_without_parent_fails_validation() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--set", "websocket.enabled=true"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "redis.enabled");
}

#[test]
fn output_dir_receives_the_artifacts() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--output-dir", "stack"]);

    assert_exit_code!(result, 0);
    assert!(env.exists("stack/docker-compose.yml"));
    assert!(env.exists("stack/.env"));
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn broken_settings_file_points_at_the_line() {
    let env = TestEnv::new();
    env.write_project_file("deckhand.toml", "[webui]\nport = 3000\nauth = \"maybe\"\n");

    let result = env.run(&["render"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "config file:3: webui.auth");
}

#[cfg(unix)]
#[test]
fn env_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    assert!(env.run(&["render"]).is_success());

    let mode = std::fs::metadata(env.project_path(".env"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn json_summary_lists_artifacts() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--json"]);

    assert_exit_code!(result, 0);
    let summary = result.event("complete").expect("complete event");
    assert_eq!(summary["command"], "render");
    assert_eq!(summary["dry_run"], false);
    assert_eq!(summary["artifacts"].as_array().unwrap().len(), 2);
    assert_eq!(summary["containers"][0], "open-webui");
    assert_eq!(summary["secret_generated"], true);
}

#[test]
fn json_errors_carry_exit_code_and_issues() {
    let env = TestEnv::new();

    let result = env.run(&["render", "--json", "--port", "0"]);

    assert_exit_code!(result, 2);
    let error = result.event("error").expect("error event");
    assert_eq!(error["command"], "render");
    assert_eq!(error["exit_code"], 2);
    assert!(!error["issues"].as_array().unwrap().is_empty());
}
