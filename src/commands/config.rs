use anyhow::Result;

use deckhand::presentation::{configure_options, create_configure_use_case, OverrideArgs};

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::views::config::{config_event, render_config};

pub fn cmd_config(overrides: &OverrideArgs, ui: &UiContext) -> Result<()> {
    let options = configure_options(overrides);
    let events = event_sink("config", ui);

    let traced = create_configure_use_case().resolve(&options, None, events.as_ref())?;

    if ui.json {
        crate::ui::json::emit(config_event(&traced))?;
    } else {
        print!("{}", render_config(&traced, ui.color, ui.unicode));
    }
    Ok(())
}
