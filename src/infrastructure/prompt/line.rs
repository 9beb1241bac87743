//! Line-based prompter
//!
//! Reads one answer per line. End of input cancels the question, an empty
//! line accepts the current value, and select questions also take a 1-based
//! item number.

use std::io::{BufRead, Write};

use crate::domain::ports::{PromptKind, PromptRequest, Prompter};
use crate::error::DeckhandResult;

pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_question(&mut self, request: &PromptRequest<'_>) -> DeckhandResult<()> {
        if let PromptKind::Select(items) = request.kind {
            for (i, item) in items.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, item)?;
            }
        }
        let hint = match request.kind {
            PromptKind::Confirm => " (y/n)",
            _ => "",
        };
        let shown = match (request.kind, request.current.as_deref()) {
            (PromptKind::Secret, Some(_)) => " [keep]".to_string(),
            (_, Some(current)) => format!(" [{}]", current),
            (_, None) => String::new(),
        };
        write!(self.output, "{}{}{}: ", request.question, hint, shown)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, request: &PromptRequest<'_>) -> DeckhandResult<Option<String>> {
        self.write_question(request)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);

        if answer.trim().is_empty() {
            return Ok(Some(request.current.clone().unwrap_or_default()));
        }
        if let PromptKind::Select(items) = request.kind {
            if let Ok(n) = answer.trim().parse::<usize>() {
                if let Some(item) = n.checked_sub(1).and_then(|i| items.get(i)) {
                    return Ok(Some(item.to_string()));
                }
            }
        }
        Ok(Some(answer.to_string()))
    }

    fn reject(&mut self, request: &PromptRequest<'_>, reason: &str) -> DeckhandResult<()> {
        writeln!(self.output, "  ! {}: {}", request.key, reason)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn request(kind: PromptKind<'static>, current: Option<&str>) -> PromptRequest<'static> {
        PromptRequest {
            key: "search.engine",
            question: "Search engine",
            kind,
            current: current.map(str::to_string),
        }
    }

    fn ask(input: &str, req: &PromptRequest<'_>) -> (Option<String>, String) {
        let mut prompter = LinePrompter::new(Cursor::new(input.to_string()), Vec::new());
        let answer = prompter.ask(req).unwrap();
        (answer, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn empty_line_accepts_current() {
        let (answer, shown) = ask("\n", &request(PromptKind::Text, Some("3000")));
        assert_eq!(answer.as_deref(), Some("3000"));
        assert!(shown.contains("[3000]"));
    }

    #[test]
    fn end_of_input_cancels() {
        let (answer, _) = ask("", &request(PromptKind::Text, Some("3000")));
        assert_eq!(answer, None);
    }

    #[test]
    fn select_accepts_number_or_name() {
        const ITEMS: &[&str] = &["duckduckgo", "searxng", "brave"];
        let (by_number, shown) = ask("2\n", &request(PromptKind::Select(ITEMS), None));
        assert_eq!(by_number.as_deref(), Some("searxng"));
        assert!(shown.contains("  3) brave"));

        let (by_name, _) = ask("Brave\n", &request(PromptKind::Select(ITEMS), None));
        assert_eq!(by_name.as_deref(), Some("Brave"));

        let (out_of_range, _) = ask("9\n", &request(PromptKind::Select(ITEMS), None));
        assert_eq!(out_of_range.as_deref(), Some("9"));
    }

    #[test]
    fn secrets_are_not_echoed_as_current() {
        let (_, shown) = ask("\n", &request(PromptKind::Secret, Some("hunter2")));
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("[keep]"));
    }

    #[test]
    fn reject_writes_reason() {
        let mut prompter = LinePrompter::new(Cursor::new(String::new()), Vec::new());
        prompter
            .reject(&request(PromptKind::Confirm, None), "expected one of y, n")
            .unwrap();
        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(shown, "  ! search.engine: expected one of y, n\n");
    }
}
