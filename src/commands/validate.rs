use anyhow::Result;
use serde_json::json;

use deckhand::presentation::{configure_options, create_configure_use_case, OverrideArgs};

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_validate(overrides: &OverrideArgs, ui: &UiContext) -> Result<()> {
    let options = configure_options(overrides);
    let events = event_sink("validate", ui);

    let traced = create_configure_use_case().check(&options, events.as_ref())?;

    if ui.json {
        crate::ui::json::emit(json!({
            "event": "complete",
            "command": "validate",
            "valid": true,
            "settings": traced.config.len(),
        }))?;
        return Ok(());
    }

    println!(
        "{} configuration is valid ({} settings)",
        Icon::Success.colored(ui.color, ui.unicode),
        traced.config.len()
    );
    Ok(())
}
