//! Deckhand CLI - configure and run a self-hosted Open WebUI stack
//!
//! Usage: deckhand [COMMAND]
//!
//! Commands:
//!   setup     Check prerequisites, ask questions, write files, start the stack
//!   render    Render docker-compose.yml and .env without questions
//!   validate  Report every problem in the merged configuration
//!   config    Print merged values and where each came from
//!   up / down / pull / status   Runtime operations on the generated files

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use deckhand::presentation::{Cli, Commands};
use deckhand::DeckhandError;

use crate::ui::context::UiContext;

/// Exit status after SIGINT
const INTERRUPTED: i32 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.color);

    if let Err(err) = deckhand::logging::init(cli.verbose, ui.color) {
        eprintln!("warning: diagnostics disabled: {}", err);
    }
    install_interrupt_handler();

    let command = cli.command.unwrap_or_else(Commands::default_setup);
    let name = commands::command_name(&command);
    debug!(command = name, "starting");

    match commands::dispatch(command, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if ui.json {
                let _ = ui::json::emit(ui::json::error_event(name, &err));
            } else {
                eprint!("{}", ui::error::format_error(&err, ui.color, ui.unicode));
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DeckhandError>()
        .map_or(1, DeckhandError::exit_code)
}

/// Prompts hide the cursor; put it back if the operator hits Ctrl+C mid-question
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
        eprintln!();
        std::process::exit(INTERRUPTED);
    });
    if let Err(err) = result {
        warn!("cannot install Ctrl+C handler: {}", err);
    }
}
