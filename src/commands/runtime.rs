//! `up`, `down`, `pull` and `status` on the generated files.

use anyhow::Result;
use serde_json::json;

use deckhand::application::StackUseCase;
use deckhand::infrastructure::SystemRunner;
use deckhand::presentation::{compose_project, StackArgs};

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::stack::{render_status, status_event};

pub fn cmd_up(args: &StackArgs, ui: &UiContext) -> Result<()> {
    let events = event_sink("up", ui);
    let project = compose_project(&args.output_dir, &args.project_name);

    let status = StackUseCase::new(&SystemRunner, events.as_ref()).up(&project)?;

    if ui.json {
        crate::ui::json::emit(status_event("up", &status))?;
    } else {
        print!("{}", render_status(&project.name, &status, ui.color, ui.unicode));
    }
    Ok(())
}

pub fn cmd_status(args: &StackArgs, ui: &UiContext) -> Result<()> {
    let events = event_sink("status", ui);
    let project = compose_project(&args.output_dir, &args.project_name);

    let status = StackUseCase::new(&SystemRunner, events.as_ref()).status(&project)?;

    if ui.json {
        crate::ui::json::emit(status_event("status", &status))?;
    } else {
        print!("{}", render_status(&project.name, &status, ui.color, ui.unicode));
    }
    Ok(())
}

pub fn cmd_down(args: &StackArgs, ui: &UiContext) -> Result<()> {
    let events = event_sink("down", ui);
    let project = compose_project(&args.output_dir, &args.project_name);
    StackUseCase::new(&SystemRunner, events.as_ref()).down(&project)?;
    done("down", &format!("stack '{}' stopped", project.name), ui)
}

pub fn cmd_pull(args: &StackArgs, ui: &UiContext) -> Result<()> {
    let events = event_sink("pull", ui);
    let project = compose_project(&args.output_dir, &args.project_name);
    StackUseCase::new(&SystemRunner, events.as_ref()).pull(&project)?;
    done("pull", "images are up to date", ui)
}

fn done(command: &str, message: &str, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(json!({ "event": "complete", "command": command }))?;
    } else {
        println!("{} {}", Icon::Success.colored(ui.color, ui.unicode), message);
    }
    Ok(())
}
