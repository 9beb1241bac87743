//! Prompter implementations
//!
//! - `DialoguerPrompter`: themed terminal prompts
//! - `LinePrompter`: plain line-based input for dumb terminals and tests

mod line;
mod terminal;

pub use line::LinePrompter;
pub use terminal::DialoguerPrompter;
