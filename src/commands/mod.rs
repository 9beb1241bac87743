//! Command handlers
//!
//! Each handler wires the use cases to the terminal: human output through the
//! `ui` views, or NDJSON events on stdout with `--json`.

pub mod config;
pub mod render;
pub mod runtime;
pub mod setup;
pub mod validate;

use anyhow::Result;

use deckhand::domain::ports::EventSink;
use deckhand::infrastructure::JsonEventSink;
use deckhand::presentation::Commands;

use crate::ui::context::UiContext;
use crate::ui::events::TerminalEventSink;

pub fn dispatch(command: Commands, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Setup {
            overrides,
            non_interactive,
            no_start,
            project_name,
        } => setup::cmd_setup(&overrides, non_interactive, no_start, &project_name, ui),
        Commands::Render {
            overrides,
            dry_run,
            diff,
        } => render::cmd_render(&overrides, dry_run, diff, ui),
        Commands::Validate { overrides } => validate::cmd_validate(&overrides, ui),
        Commands::Config { overrides } => config::cmd_config(&overrides, ui),
        Commands::Up { stack } => runtime::cmd_up(&stack, ui),
        Commands::Down { stack } => runtime::cmd_down(&stack, ui),
        Commands::Pull { stack } => runtime::cmd_pull(&stack, ui),
        Commands::Status { stack } => runtime::cmd_status(&stack, ui),
    }
}

/// Name used in `--json` events
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Setup { .. } => "setup",
        Commands::Render { .. } => "render",
        Commands::Validate { .. } => "validate",
        Commands::Config { .. } => "config",
        Commands::Up { .. } => "up",
        Commands::Down { .. } => "down",
        Commands::Pull { .. } => "pull",
        Commands::Status { .. } => "status",
    }
}

pub(crate) fn event_sink(command: &'static str, ui: &UiContext) -> Box<dyn EventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(TerminalEventSink::new(ui.color, ui.unicode))
    }
}
