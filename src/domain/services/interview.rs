//! Interview
//!
//! Builds the interactive layer by walking promptable options in registry
//! order. An option is only asked when its dependency holds against the
//! configuration so far, including answers already given in this interview.

use tracing::debug;

use crate::domain::ports::{PromptKind, PromptRequest, Prompter};
use crate::domain::registry::{self, ConfigOption, Domain};
use crate::domain::value_objects::{ConfigValue, Layer, LayerSource, Value};
use crate::error::{DeckhandError, DeckhandResult};

/// Outcome of asking one option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Normalized answer
    Provided(Value),
    /// Operator cancelled; the earlier layers' value stands
    Declined,
    /// Operator cancelled a required option that has no earlier value
    NoFallback,
}

/// Ask a single option until the answer normalizes or the operator cancels
pub fn ask_option<P: Prompter + ?Sized>(
    option: &ConfigOption,
    current: &ConfigValue,
    prompter: &mut P,
) -> DeckhandResult<PromptResult> {
    let Some(question) = option.prompt else {
        return Ok(PromptResult::Declined);
    };

    let engine_names: Vec<&str> = option.domain.engines().iter().map(|e| e.name).collect();
    let kind = match option.domain {
        Domain::Boolean => PromptKind::Confirm,
        Domain::Enum(_) => PromptKind::Select(&engine_names),
        Domain::Port | Domain::Text => PromptKind::Text,
        Domain::Secret => PromptKind::Secret,
    };
    let prior = current
        .get(option.key)
        .map(|v| v.to_token())
        .filter(|t| !t.is_empty());
    let request = PromptRequest {
        key: option.key,
        question,
        kind,
        current: prior.clone(),
    };

    loop {
        let Some(answer) = prompter.ask(&request)? else {
            return Ok(if option.required && prior.is_none() {
                PromptResult::NoFallback
            } else {
                PromptResult::Declined
            });
        };

        match option.normalize(&answer) {
            Ok(value) if option.required && value.to_token().is_empty() => {
                prompter.reject(&request, "a value is required")?;
            }
            Ok(value) => return Ok(PromptResult::Provided(value)),
            Err(reason) => prompter.reject(&request, &reason)?,
        }
    }
}

/// Run the interview, skipping options already set by `preset`
pub fn interview<P: Prompter + ?Sized>(
    current: &ConfigValue,
    preset: &Layer,
    prompter: &mut P,
) -> DeckhandResult<Layer> {
    let mut answers = Layer::new(LayerSource::Interactive);
    let mut view = current.clone();

    for option in registry::options() {
        if option.prompt.is_none() || preset.get(option.key).is_some() {
            continue;
        }
        if !option.is_relevant(&view) {
            debug!(key = option.key, "skipping prompt, dependency not met");
            continue;
        }

        match ask_option(option, &view, prompter)? {
            PromptResult::Provided(value) => {
                answers.set(option.key, value.to_token());
                view = view.with(option.key, value);
            }
            PromptResult::Declined => {
                debug!(key = option.key, "prompt declined, keeping prior value");
            }
            PromptResult::NoFallback => {
                return Err(DeckhandError::PromptAborted {
                    key: option.key.to_string(),
                });
            }
        }
    }

    Ok(answers)
}
