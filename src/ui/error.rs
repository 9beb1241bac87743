use deckhand::DeckhandError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Human rendering of a command failure
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<DeckhandError>() {
        Some(err) => format_deckhand_error(err, supports_color, supports_unicode),
        None => format!(
            "{} {:#}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            err
        ),
    }
}

fn format_deckhand_error(
    err: &DeckhandError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = |text: String| {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(text).bold().render(supports_color)
        )
    };

    let mut panel = match err {
        DeckhandError::Parse(issues) => {
            let mut p = Panel::titled(
                title(format!("{} invalid value(s)", issues.len())),
                PanelStyle::Error,
            );
            p.blank();
            for issue in issues {
                p.line(format!("{} {}", Icon::Pointer.render(supports_unicode), issue));
            }
            p.blank();
            p.line("FIX: correct the values above; nothing was written.");
            p
        }
        DeckhandError::Validation(issues) => {
            let mut p = Panel::titled(
                title(format!("{} configuration problem(s)", issues.len())),
                PanelStyle::Error,
            );
            p.blank();
            for issue in issues {
                p.line(format!(
                    "{} {}",
                    Icon::Pointer.render(supports_unicode),
                    ColoredText::warning(issue.keys.join(", ")).render(supports_color)
                ));
                p.line(format!("    {}", issue.message));
            }
            p.blank();
            p.line("FIX: adjust deckhand.toml or pass --set key=value; nothing was written.");
            p
        }
        DeckhandError::MissingPrerequisite { tool, hint } => {
            let mut p = Panel::titled(title(format!("{} is not installed", tool)), PanelStyle::Error);
            p.blank();
            p.line(format!("FIX: {}", hint));
            p
        }
        DeckhandError::RuntimeInvocation { stderr, .. } => {
            let mut p = Panel::titled(title("container runtime failed".to_string()), PanelStyle::Error);
            p.blank();
            p.line(err.to_string().lines().next().unwrap_or_default().to_string());
            if !stderr.is_empty() {
                p.blank();
                for line in stderr.lines().take(10) {
                    p.line(ColoredText::dim(line).render(supports_color));
                }
            }
            p
        }
        DeckhandError::Render { .. } => {
            let mut p = Panel::titled(title("cannot render".to_string()), PanelStyle::Error);
            p.blank();
            p.line(err.to_string());
            p.blank();
            p.line("FIX: set the missing value with --set key=value or in deckhand.toml.");
            p
        }
        DeckhandError::PromptAborted { .. }
        | DeckhandError::NotFound { .. }
        | DeckhandError::Io(_) => {
            return format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                err
            );
        }
    };
    panel.blank();
    panel.render(supports_color, supports_unicode)
}
