use std::io::{self, Write};

use deckhand::DeckhandError;
use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Terminal `error` event, listing every issue for parse and validation failures
pub fn error_event(command: &str, err: &anyhow::Error) -> serde_json::Value {
    let Some(err) = err.downcast_ref::<DeckhandError>() else {
        return json!({
            "event": "error",
            "command": command,
            "exit_code": 1,
            "message": format!("{:#}", err),
        });
    };

    let mut event = json!({
        "event": "error",
        "command": command,
        "exit_code": err.exit_code(),
        "message": err.to_string(),
    });
    let issues = match err {
        DeckhandError::Parse(issues) => issues
            .iter()
            .map(|i| {
                json!({
                    "source": i.source,
                    "line": i.line,
                    "key": i.key,
                    "message": i.message,
                })
            })
            .collect(),
        DeckhandError::Validation(issues) => issues
            .iter()
            .map(|i| serde_json::to_value(i).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    if !issues.is_empty() {
        event["issues"] = serde_json::Value::Array(issues);
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand::domain::value_objects::{IssueKind, ValidationIssue};
    use deckhand::{LayerSource, ParseIssue};

    #[test]
    fn events_are_newline_terminated() {
        let mut out = Vec::new();
        write_event(&mut out, &json!({"event": "validated"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"event\":\"validated\"}\n");
    }

    #[test]
    fn parse_error_lists_issues_with_lines() {
        let err = anyhow::Error::new(DeckhandError::Parse(vec![ParseIssue::new(
            LayerSource::Persisted,
            "expected an integer port, got 'x'",
        )
        .with_key("webui.port")
        .at_line(2)]));

        let event = error_event("render", &err);
        assert_eq!(event["exit_code"], 2);
        assert_eq!(event["issues"][0]["line"], 2);
        assert_eq!(event["issues"][0]["source"], "persisted");
    }

    #[test]
    fn validation_issue_names_its_keys() {
        let err = anyhow::Error::new(DeckhandError::Validation(vec![ValidationIssue::new(
            IssueKind::PortCollision,
            vec!["webui.port".into(), "ollama.port".into()],
            "both publish host port 3000",
        )]));

        let event = error_event("validate", &err);
        assert_eq!(event["issues"][0]["kind"], "port_collision");
        assert_eq!(event["issues"][0]["keys"][1], "ollama.port");
    }

    #[test]
    fn foreign_errors_exit_with_one() {
        let event = error_event("up", &anyhow::anyhow!("boom"));
        assert_eq!(event["exit_code"], 1);
        assert!(event.get("issues").is_none());
    }
}
