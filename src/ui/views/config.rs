use deckhand::domain::registry;
use deckhand::domain::services::TracedConfig;
use serde_json::json;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const MASK: &str = "********";

/// Display form of a value; secrets never leave the process unmasked
fn shown_value(key: &str, traced: &TracedConfig) -> String {
    let value = traced
        .config
        .get(key)
        .map(|v| v.to_string())
        .unwrap_or_default();
    let secret = registry::lookup(key).is_some_and(|o| o.is_secret());
    match (secret, value.is_empty()) {
        (_, true) => String::new(),
        (true, false) => MASK.to_string(),
        (false, false) => value,
    }
}

/// Merged values grouped by section, each with the layer it came from.
///
/// Settings whose parent feature is off are left out.
pub fn render_config(traced: &TracedConfig, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Config.colored(supports_color, supports_unicode),
        ColoredText::info("Effective configuration")
            .bold()
            .render(supports_color)
    );

    let relevant: Vec<_> = registry::options()
        .iter()
        .filter(|o| o.is_relevant(&traced.config))
        .collect();
    let width = relevant.iter().map(|o| o.field().len()).max().unwrap_or(0);

    let mut section = "";
    for option in relevant {
        if option.section() != section {
            section = option.section();
            out.push_str(&format!("\n[{}]\n", section));
        }
        let value = shown_value(option.key, traced);
        let value = if value.is_empty() {
            ColoredText::dim("(unset)").render(supports_color)
        } else {
            value
        };
        let source = traced
            .source_of(option.key)
            .map(|s| s.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:<width$}  {}  {}\n",
            option.field(),
            value,
            ColoredText::dim(format!("({})", source)).render(supports_color)
        ));
    }
    out
}

pub fn config_event(traced: &TracedConfig) -> serde_json::Value {
    let settings: Vec<_> = registry::options()
        .iter()
        .map(|o| {
            json!({
                "key": o.key,
                "value": shown_value(o.key, traced),
                "source": traced.source_of(o.key),
                "relevant": o.is_relevant(&traced.config),
            })
        })
        .collect();
    json!({
        "event": "config",
        "command": "config",
        "settings": settings,
    })
}
