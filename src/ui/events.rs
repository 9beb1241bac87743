//! Human-readable progress for long-running steps.

use std::io::{self, Write};

use deckhand::domain::ports::{EventSink, PipelineEvent};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Prints runtime progress to stderr; everything else is summarized by the views
pub struct TerminalEventSink {
    color: bool,
    unicode: bool,
}

impl TerminalEventSink {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    fn line(&self, event: &PipelineEvent) -> Option<String> {
        match event {
            PipelineEvent::RuntimeStarted { command } => Some(format!(
                "{} {}",
                Icon::Arrow.colored(self.color, self.unicode),
                ColoredText::dim(command.as_str()).render(self.color)
            )),
            PipelineEvent::RuntimeRetry { stderr, .. } => Some(format!(
                "{} failed, retrying once: {}",
                Icon::Warning.colored(self.color, self.unicode),
                stderr.lines().last().unwrap_or("").trim()
            )),
            PipelineEvent::SecretGenerated { key } => Some(format!(
                "{} generated a new {}",
                Icon::Success.colored(self.color, self.unicode),
                key
            )),
            _ => None,
        }
    }
}

impl EventSink for TerminalEventSink {
    fn on_event(&self, event: PipelineEvent) {
        if let Some(line) = self.line(&event) {
            let _ = writeln!(io::stderr(), "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_commands_are_echoed() {
        let sink = TerminalEventSink::new(false, false);
        let line = sink
            .line(&PipelineEvent::RuntimeStarted {
                command: "docker compose up -d".into(),
            })
            .unwrap();
        assert_eq!(line, "-> docker compose up -d");
    }

    #[test]
    fn retry_shows_last_stderr_line() {
        let sink = TerminalEventSink::new(false, true);
        let line = sink
            .line(&PipelineEvent::RuntimeRetry {
                command: "docker compose pull".into(),
                stderr: "pulling\nnet/http: TLS handshake timeout\n".into(),
            })
            .unwrap();
        assert!(line.ends_with("net/http: TLS handshake timeout"));
    }

    #[test]
    fn pipeline_bookkeeping_is_silent() {
        let sink = TerminalEventSink::new(false, true);
        assert!(sink.line(&PipelineEvent::Validated).is_none());
    }
}
