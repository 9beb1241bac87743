//! Prompter port
//!
//! How the interview asks the operator a question. The terminal
//! implementation uses dialoguer; a line-based one reads any `BufRead`.

use crate::error::DeckhandResult;

/// Shape of the answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind<'a> {
    Confirm,
    Select(&'a [&'a str]),
    Text,
    /// Text read without echo
    Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest<'a> {
    pub key: &'a str,
    pub question: &'a str,
    pub kind: PromptKind<'a>,
    /// Canonical token of the value in effect before this question
    pub current: Option<String>,
}

pub trait Prompter {
    /// Ask one question.
    ///
    /// An empty answer accepts `request.current`. `Ok(None)` means the
    /// operator cancelled the question.
    fn ask(&mut self, request: &PromptRequest<'_>) -> DeckhandResult<Option<String>>;

    /// Tell the operator why the last answer was rejected
    fn reject(&mut self, request: &PromptRequest<'_>, reason: &str) -> DeckhandResult<()>;
}
