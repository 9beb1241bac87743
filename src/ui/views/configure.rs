use std::path::Path;

use deckhand::application::{ArtifactPreview, ConfigureResult};
use serde_json::json;

use crate::ui::components::diff::render_artifact_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn render_configure_summary(
    result: &ConfigureResult,
    dry_run: bool,
    next_step: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title, style) = if dry_run {
        (Icon::Diff, "Dry run: nothing was written", PanelStyle::Info)
    } else {
        (Icon::Success, "Stack configured", PanelStyle::Success)
    };
    let mut panel = Panel::titled(
        format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            ColoredText::info(title).bold().render(supports_color)
        ),
        style,
    );
    panel.blank();

    panel.rows(result.previews.iter().map(|preview| {
        (
            file_name(&preview.path),
            artifact_status(preview, dry_run, supports_color),
        )
    }));

    if !result.expected_containers.is_empty() {
        panel.blank();
        panel.line(format!(
            "Containers: {}",
            result.expected_containers.join(", ")
        ));
    }
    if result.secret_generated {
        panel.line(if dry_run {
            "A session secret would be generated".to_string()
        } else {
            "Generated a new session secret".to_string()
        });
    }
    if let Some(saved) = &result.saved_to {
        panel.line(format!("Saved settings to {}", saved.display()));
    }
    if let Some(next) = next_step {
        panel.blank();
        panel.line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            next
        ));
    }

    panel.render(supports_color, supports_unicode)
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("(artifact)")
}

fn artifact_status(preview: &ArtifactPreview, dry_run: bool, supports_color: bool) -> String {
    let text = match (dry_run, preview.current.is_some(), preview.is_changed()) {
        (_, _, false) => return ColoredText::dim("unchanged").render(supports_color),
        (true, false, _) => "would be created",
        (true, true, _) => "would change",
        (false, false, _) => "created",
        (false, true, _) => "updated",
    };
    ColoredText::success(text).render(supports_color)
}

/// Diffs of every changed artifact, or a one-line note when nothing changed
pub fn render_diffs(previews: &[ArtifactPreview], supports_color: bool) -> String {
    let out: String = previews
        .iter()
        .map(|p| {
            let path = p.path.display().to_string();
            render_artifact_diff(&path, p.current.as_deref(), &p.rendered, supports_color)
        })
        .collect();
    if out.is_empty() {
        "No changes.\n".to_string()
    } else {
        out
    }
}

/// Full text of each artifact under a `# path` heading
pub fn render_documents(previews: &[ArtifactPreview], supports_color: bool) -> String {
    let mut out = String::new();
    for (i, preview) in previews.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let heading = format!("# {}", preview.path.display());
        out.push_str(&ColoredText::info(heading).bold().render(supports_color));
        out.push('\n');
        out.push_str(&preview.rendered);
    }
    out
}

pub fn summary_event(command: &str, result: &ConfigureResult, dry_run: bool) -> serde_json::Value {
    let artifacts: Vec<_> = result
        .previews
        .iter()
        .map(|p| {
            json!({
                "path": p.path.display().to_string(),
                "exists": p.current.is_some(),
                "changed": p.is_changed(),
            })
        })
        .collect();
    json!({
        "event": "complete",
        "command": command,
        "dry_run": dry_run,
        "artifacts": artifacts,
        "containers": result.expected_containers,
        "secret_generated": result.secret_generated,
        "saved_to": result.saved_to.as_ref().map(|p| p.display().to_string()),
    })
}
