//! Terminal prompter built on dialoguer.

use std::io;

use dialoguer::theme::Theme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::domain::ports::{PromptKind, PromptRequest, Prompter};
use crate::domain::value_objects::parse_bool_token;
use crate::error::DeckhandResult;

/// Prompter for interactive terminals.
///
/// Confirm and select prompts can be cancelled with Esc, which the interview
/// treats as "keep the earlier value".
pub struct DialoguerPrompter<'t> {
    theme: &'t dyn Theme,
}

impl<'t> DialoguerPrompter<'t> {
    pub fn new(theme: &'t dyn Theme) -> Self {
        Self { theme }
    }
}

fn io_error(err: dialoguer::Error) -> io::Error {
    io::Error::from(err)
}

fn or_current(answer: String, request: &PromptRequest<'_>) -> String {
    if answer.trim().is_empty() {
        request.current.clone().unwrap_or_default()
    } else {
        answer
    }
}

impl Prompter for DialoguerPrompter<'_> {
    fn ask(&mut self, request: &PromptRequest<'_>) -> DeckhandResult<Option<String>> {
        let current = request.current.as_deref();
        let answer = match request.kind {
            PromptKind::Confirm => Confirm::with_theme(self.theme)
                .with_prompt(request.question)
                .default(current.and_then(parse_bool_token).unwrap_or(false))
                .interact_opt()
                .map_err(io_error)?
                .map(|b| b.to_string()),

            PromptKind::Select(items) => {
                let default = current
                    .and_then(|c| items.iter().position(|item| *item == c))
                    .unwrap_or(0);
                Select::with_theme(self.theme)
                    .with_prompt(request.question)
                    .items(items)
                    .default(default)
                    .interact_opt()
                    .map_err(io_error)?
                    .and_then(|i| items.get(i))
                    .map(|item| item.to_string())
            }

            PromptKind::Text => {
                let mut input = Input::<String>::with_theme(self.theme)
                    .with_prompt(request.question)
                    .allow_empty(true);
                if let Some(current) = current {
                    input = input.default(current.to_string());
                }
                match input.interact_text() {
                    Ok(answer) => Some(or_current(answer, request)),
                    Err(e) => return interrupted_or(e),
                }
            }

            PromptKind::Secret => {
                let prompt = if current.is_some() {
                    format!("{} (leave empty to keep)", request.question)
                } else {
                    request.question.to_string()
                };
                match Password::with_theme(self.theme)
                    .with_prompt(prompt)
                    .allow_empty_password(true)
                    .interact()
                {
                    Ok(answer) => Some(or_current(answer, request)),
                    Err(e) => return interrupted_or(e),
                }
            }
        };
        Ok(answer)
    }

    fn reject(&mut self, request: &PromptRequest<'_>, reason: &str) -> DeckhandResult<()> {
        let mut line = String::new();
        if self
            .theme
            .format_error(&mut line, &format!("{}: {}", request.key, reason))
            .is_err()
        {
            line = format!("{}: {}", request.key, reason);
        }
        eprintln!("{}", line);
        Ok(())
    }
}

/// Text prompts have no cancel key; an interrupted read counts as one
fn interrupted_or(err: dialoguer::Error) -> DeckhandResult<Option<String>> {
    let err = io_error(err);
    if err.kind() == io::ErrorKind::Interrupted {
        Ok(None)
    } else {
        Err(err.into())
    }
}
