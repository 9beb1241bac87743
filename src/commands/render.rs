use anyhow::Result;

use deckhand::presentation::{configure_options, create_configure_use_case, OverrideArgs};

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::views::configure::{
    render_configure_summary, render_diffs, render_documents, summary_event,
};

pub fn cmd_render(overrides: &OverrideArgs, dry_run: bool, diff: bool, ui: &UiContext) -> Result<()> {
    let options = configure_options(overrides).with_dry_run(dry_run);
    let events = event_sink("render", ui);

    let result = create_configure_use_case().execute(
        &options,
        None,
        events.as_ref(),
        &mut rand::thread_rng(),
    )?;

    if ui.json {
        crate::ui::json::emit(summary_event("render", &result, dry_run))?;
        return Ok(());
    }

    if diff {
        print!("{}", render_diffs(&result.previews, ui.color));
        println!();
    } else if dry_run {
        print!("{}", render_documents(&result.previews, ui.color));
        println!();
    }
    let next = (!dry_run).then_some("Start the stack with `deckhand up`");
    print!(
        "{}",
        render_configure_summary(&result, dry_run, next, ui.color, ui.unicode)
    );
    Ok(())
}
