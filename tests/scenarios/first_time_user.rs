//! Scenario: First-Time User Setup
//!
//! Journey: Someone with a fresh server wants Open WebUI with a local Ollama.
//!
//! Steps:
//! 1. Checks the configuration before writing anything
//! 2. Previews the files with a dry run
//! 3. Runs setup with the defaults
//! 4. Checks the stack status
//!
//! Success Criteria:
//! - Nothing is written before step 3
//! - The stack comes up with both containers

use crate::common::*;

/// SCENARIO: First run on a host with docker installed
#[cfg(unix)]
#[test]
fn scenario_first_time_user_complete_journey() {
    let env = TestEnv::new();
    env.install_fake_docker(&["open-webui", "ollama"], false);

    // Step 1: validate with nothing on disk
    let result = env.run(&["validate"]);
    assert!(result.success, "Step 1: defaults must be valid\n{}", result.combined_output());

    // Step 2: dry run shows what would be created
    let result = env.run(&["render", "--dry-run", "--diff"]);
    assert!(result.success, "Step 2: dry run failed\n{}", result.combined_output());
    assert!(result.stdout.contains("--- /dev/null"), "Step 2: expected new-file diff");
    assert!(!env.exists("docker-compose.yml"), "Step 2: dry run must not write");

    // Step 3: setup writes and starts
    let result = env.run(&["setup", "--non-interactive"]);
    assert!(result.success, "Step 3: setup failed\n{}", result.combined_output());
    assert!(env.exists("docker-compose.yml"));
    assert!(env.exists(".env"));
    assert!(env.read("deckhand.toml").contains("[ollama]"));

    // Step 4: status agrees
    let result = env.run(&["status"]);
    assert!(result.success);
    assert!(
        result.stdout.contains("all containers running"),
        "Step 4: expected healthy stack\n{}",
        result.stdout
    );
}

/// SCENARIO: docker is missing, so the user prepares files first
#[test]
fn scenario_prepare_files_before_installing_docker() {
    let env = TestEnv::new();

    let result = env.run(&["setup", "--non-interactive"]);
    assert_eq!(result.exit_code, 3, "{}", result.combined_output());
    assert!(!env.exists("docker-compose.yml"));

    let result = env.run(&["setup", "--non-interactive", "--no-start"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("docker-compose.yml"));
    assert!(result.combined_output().contains("deckhand up"));
}
