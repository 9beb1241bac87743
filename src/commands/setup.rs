//! `deckhand setup`: the guided path from nothing to a running stack.

use anyhow::Result;
use dialoguer::Confirm;
use tracing::warn;

use deckhand::application::{ConfigureResult, StackUseCase};
use deckhand::infrastructure::{DialoguerPrompter, LinePrompter, SystemRunner};
use deckhand::presentation::{
    compose_project, configure_options, create_configure_use_case, OverrideArgs,
};
use deckhand::{DeckhandError, DeckhandResult};

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::DeckhandTheme;
use crate::ui::views::configure::{render_configure_summary, summary_event};
use crate::ui::views::stack::{render_status, status_event};

pub fn cmd_setup(
    overrides: &OverrideArgs,
    non_interactive: bool,
    no_start: bool,
    project_name: &str,
    ui: &UiContext,
) -> Result<()> {
    let interactive = ui.interactive && !non_interactive;
    let theme = DeckhandTheme::new(ui.unicode);
    let events = event_sink("setup", ui);
    let runner = SystemRunner;
    let stack = StackUseCase::new(&runner, events.as_ref());

    check_prerequisites(&stack, interactive, no_start, &theme, ui)?;

    let options = configure_options(overrides);
    let use_case = create_configure_use_case();
    let mut rng = rand::thread_rng();
    let result = if interactive {
        if !ui.json {
            println!(
                "{} Answer a few questions; press Enter to keep the value in brackets.\n",
                Icon::Stack.colored(ui.color, ui.unicode)
            );
        }
        if ui.plain_prompts {
            let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stderr());
            use_case.execute(&options, Some(&mut prompter), events.as_ref(), &mut rng)?
        } else {
            let mut prompter = DialoguerPrompter::new(&theme);
            use_case.execute(&options, Some(&mut prompter), events.as_ref(), &mut rng)?
        }
    } else {
        use_case.execute(&options, None, events.as_ref(), &mut rng)?
    };

    report_configured(&result, no_start, ui)?;
    if no_start {
        return Ok(());
    }

    let project = compose_project(&overrides.output_dir, project_name);
    let status = stack.up(&project)?;
    if ui.json {
        crate::ui::json::emit(status_event("setup", &status))?;
    } else {
        println!();
        print!("{}", render_status(project_name, &status, ui.color, ui.unicode));
    }
    Ok(())
}

/// Docker must be present before anything is started.
///
/// With `--no-start` a missing runtime is only reported.
fn check_prerequisites(
    stack: &StackUseCase<'_, SystemRunner>,
    interactive: bool,
    no_start: bool,
    theme: &DeckhandTheme,
    ui: &UiContext,
) -> Result<()> {
    if no_start {
        if let Err(err) = stack.ensure_prerequisites(None) {
            warn!("{}", err);
            if !ui.json {
                eprintln!(
                    "{} {}; the stack will not start until it is installed",
                    Icon::Warning.colored(ui.color, ui.unicode),
                    err
                );
            }
        }
        return Ok(());
    }

    if !interactive {
        stack.ensure_prerequisites(None)?;
        return Ok(());
    }

    let mut ask = |missing: &[&str]| -> DeckhandResult<bool> {
        Confirm::with_theme(theme)
            .with_prompt(format!(
                "{} not found. Install Docker with the official script now?",
                missing.join(" and ")
            ))
            .default(false)
            .interact_opt()
            .map(|answer| answer.unwrap_or(false))
            .map_err(|e| DeckhandError::Io(e.into()))
    };
    stack.ensure_prerequisites(Some(&mut ask))?;
    Ok(())
}

fn report_configured(result: &ConfigureResult, no_start: bool, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(summary_event("setup", result, false))?;
        return Ok(());
    }
    let next = no_start.then_some("Start the stack with `deckhand up`");
    print!(
        "{}",
        render_configure_summary(result, false, next, ui.color, ui.unicode)
    );
    Ok(())
}
