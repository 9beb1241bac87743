//! Configuration validator
//!
//! Runs every check over a merged configuration and returns all findings.
//! Nothing short-circuits: a config with three problems yields three issues.

use crate::domain::registry::{self, ConfigOption, Domain};
use crate::domain::value_objects::{ConfigValue, IssueKind, ValidationIssue};

pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = 65535;

pub fn validate(cv: &ConfigValue) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_ports(cv, &mut issues);
    check_engines(cv, &mut issues);
    check_credentials(cv, &mut issues);
    check_dependencies(cv, &mut issues);
    issues
}

fn port_options() -> impl Iterator<Item = &'static ConfigOption> {
    registry::options()
        .iter()
        .filter(|o| matches!(o.domain, Domain::Port))
}

fn check_ports(cv: &ConfigValue, issues: &mut Vec<ValidationIssue>) {
    let mut active: Vec<(&'static str, i64)> = Vec::new();

    for option in port_options() {
        let port = cv.int(option.key);
        match port {
            Some(port) if (MIN_PORT..=MAX_PORT).contains(&port) => {
                if option.is_relevant(cv) {
                    active.push((option.key, port));
                }
            }
            Some(port) => issues.push(ValidationIssue::new(
                IssueKind::PortOutOfRange,
                vec![option.key.to_string()],
                format!("port {} is outside {}-{}", port, MIN_PORT, MAX_PORT),
            )),
            None => issues.push(ValidationIssue::new(
                IssueKind::PortOutOfRange,
                vec![option.key.to_string()],
                format!(
                    "'{}' is not a port number",
                    cv.get(option.key).map(|v| v.to_token()).unwrap_or_default()
                ),
            )),
        }
    }

    for (i, (first, port)) in active.iter().enumerate() {
        for (second, other) in &active[i + 1..] {
            if port == other {
                issues.push(ValidationIssue::new(
                    IssueKind::PortCollision,
                    vec![first.to_string(), second.to_string()],
                    format!("both services publish host port {}", port),
                ));
            }
        }
    }
}

/// Engine options whose feature is switched on
fn enabled_engines(cv: &ConfigValue) -> impl Iterator<Item = &'static ConfigOption> + '_ {
    registry::options()
        .iter()
        .filter(|o| matches!(o.domain, Domain::Enum(_)))
        .filter(move |o| o.is_relevant(cv))
}

fn check_engines(cv: &ConfigValue, issues: &mut Vec<ValidationIssue>) {
    for option in enabled_engines(cv) {
        if option.selected_engine(cv).is_none() {
            let names: Vec<&str> = option.domain.engines().iter().map(|e| e.name).collect();
            issues.push(ValidationIssue::new(
                IssueKind::UnknownEngine,
                vec![option.key.to_string()],
                format!(
                    "'{}' is not one of {}",
                    cv.text(option.key),
                    names.join(", ")
                ),
            ));
        }
    }
}

fn check_credentials(cv: &ConfigValue, issues: &mut Vec<ValidationIssue>) {
    for option in enabled_engines(cv) {
        let Some(engine) = option.selected_engine(cv) else {
            continue;
        };
        for required in engine.requires {
            if cv.text(required).trim().is_empty() {
                issues.push(ValidationIssue::new(
                    IssueKind::MissingCredential,
                    vec![option.key.to_string(), required.to_string()],
                    format!("engine '{}' needs {} to be set", engine.name, required),
                ));
            }
        }
    }
}

fn check_dependencies(cv: &ConfigValue, issues: &mut Vec<ValidationIssue>) {
    for option in registry::options() {
        let Some(dep) = option.depends_on.filter(|d| d.hard) else {
            continue;
        };
        if cv.flag(option.key) && !cv.is(dep.key, dep.value) {
            issues.push(ValidationIssue::new(
                IssueKind::MissingDependency,
                vec![option.key.to_string(), dep.key.to_string()],
                format!("{} is on but {} is not {}", option.key, dep.key, dep.value),
            ));
        }
    }
}
