use deckhand::application::StackStatus;
use serde_json::json;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    project: &str,
    status: &StackStatus,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Stack.colored(supports_color, supports_unicode),
        ColoredText::info(format!("Stack '{}'", project))
            .bold()
            .render(supports_color)
    );

    for name in &status.running {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Running.colored(supports_color, supports_unicode),
            name
        ));
    }
    for name in &status.missing {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Stopped.colored(supports_color, supports_unicode),
            name,
            ColoredText::dim("(not running)").render(supports_color)
        ));
    }

    let verdict = if status.is_healthy() {
        ColoredText::success("all containers running")
    } else {
        ColoredText::warning(format!(
            "{} of {} containers not running; see `docker compose logs`",
            status.missing.len(),
            status.running.len() + status.missing.len()
        ))
    };
    out.push_str(&format!("\n{}\n", verdict.render(supports_color)));
    out
}

pub fn status_event(command: &str, status: &StackStatus) -> serde_json::Value {
    json!({
        "event": "complete",
        "command": command,
        "running": status.running,
        "missing": status.missing,
        "healthy": status.is_healthy(),
    })
}
