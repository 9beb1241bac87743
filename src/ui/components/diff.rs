use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Lines of unchanged context around each hunk
const CONTEXT: usize = 3;

/// Unified diff of `old` (absent for a new file) against `new`, with line numbers.
///
/// Returns an empty string when nothing changed.
pub fn render_artifact_diff(
    path: &str,
    old: Option<&str>,
    new: &str,
    supports_color: bool,
) -> String {
    let before = old.unwrap_or("");
    if before == new && old.is_some() {
        return String::new();
    }

    let diff = TextDiff::from_lines(before, new);
    let width = before.lines().count().max(new.lines().count()).max(1).to_string().len();

    let mut out = String::new();
    let header_a = match old {
        Some(_) => format!("--- a/{}", path),
        None => "--- /dev/null".to_string(),
    };
    push_line(&mut out, &header_a, Style::Header, supports_color);
    push_line(&mut out, &format!("+++ b/{}", path), Style::Header, supports_color);

    for group in diff.grouped_ops(CONTEXT) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let old_start = first.old_range().start + 1;
        let old_len = last.old_range().end + 1 - old_start;
        let new_start = first.new_range().start + 1;
        let new_len = last.new_range().end + 1 - new_start;
        let hunk = format!("@@ -{},{} +{},{} @@", old_start, old_len, new_start, new_len);
        push_line(&mut out, &hunk, Style::Hunk, supports_color);

        for op in &group {
            for change in diff.iter_changes(op) {
                let number = |n: Option<usize>| {
                    n.map(|i| format!("{:>width$}", i + 1))
                        .unwrap_or_else(|| " ".repeat(width))
                };
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", Style::Removed),
                    ChangeTag::Insert => ("+", Style::Added),
                    ChangeTag::Equal => (" ", Style::Context),
                };
                let line = format!(
                    "{} {} {} {}",
                    number(change.old_index()),
                    number(change.new_index()),
                    sign,
                    change.value().trim_end_matches('\n')
                );
                push_line(&mut out, &line, style, supports_color);
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Header,
    Hunk,
    Added,
    Removed,
    Context,
}

fn push_line(out: &mut String, s: &str, style: Style, supports_color: bool) {
    if supports_color {
        let color = match style {
            Style::Header | Style::Hunk => theme::colors::INFO,
            Style::Added => theme::colors::SUCCESS,
            Style::Removed => theme::colors::ERROR,
            Style::Context => theme::colors::DIM,
        };
        out.push_str(&format!("{}", s.with(color)));
    } else {
        out.push_str(s);
    }
    out.push('\n');
}
