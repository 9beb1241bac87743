mod common;

use common::*;

#[test]
fn defaults_are_valid() {
    let env = TestEnv::new();

    let result = env.run(&["validate"]);

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "configuration is valid");
    // validate never writes
    assert!(!env.exists("deckhand.toml"));
    assert!(!env.exists("docker-compose.yml"));
}

#[test]
fn every_problem_is_reported_at_once() {
    let env = TestEnv::new();

    let result = env.run(&[
        "validate",
        "--port",
        "0",
        "--set",
        "redis.enabled=true",
        "--set",
        "redis.port=11434",
        "--set",
        "tts.enabled=true",
        "--set",
        "tts.engine=openai",
    ]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "3 configuration problem(s)");
    assert_output_contains!(result, "webui.port");
    assert_output_contains!(result, "ollama.port, redis.port");
    assert_output_contains!(result, "tts.api_key");
}

#[test]
fn persisted_settings_are_validated() {
    let env = TestEnv::new();
    env.write_project_file(
        "deckhand.toml",
        "[search]\nenabled = true\nengine = \"brave\"\napi_key = \"\"\n",
    );

    let result = env.run(&["validate"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "search.api_key");
}

#[test]
fn validate_json_reports_setting_count() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "validate"]);

    assert_exit_code!(result, 0);
    let complete = result.event("complete").expect("complete event");
    assert_eq!(complete["valid"], true);
    assert!(complete["settings"].as_u64().unwrap() > 20);
}

#[test]
fn unreachable_external_ollama_is_not_valid() {
    let env = TestEnv::new();

    let result = env.run(&["validate", "--no-ollama"]);

    assert_exit_code!(result, 5);
    assert_output_contains!(result, "cannot render");
    assert_output_contains!(result, "ollama.url");
    assert_output_not_contains!(result, "configuration is valid");

    let fixed = env.run(&["validate", "--no-ollama", "--ollama-url", "http://10.0.0.5:11434"]);
    assert_exit_code!(fixed, 0);
}

#[test]
fn file_and_command_line_mistakes_are_reported_together() {
    let env = TestEnv::new();
    env.write_project_file("deckhand.toml", "[ollama]\nenabled = \"perhaps\"\n");

    let result = env.run(&["validate", "--set", "novalue", "--set", "webui.auth=maybe"]);

    assert_exit_code!(result, 2);
    assert_output_contains!(result, "3 invalid value(s)");
    assert_output_contains!(result, "ollama.enabled");
    assert_output_contains!(result, "KEY=VALUE");
    assert_output_contains!(result, "webui.auth");
}
