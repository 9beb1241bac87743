use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Error,
}

/// Bordered block of text. Lines may carry ANSI styling; widths ignore it.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn titled(title: impl Into<String>, style: PanelStyle) -> Self {
        Self {
            title: Some(title.into()),
            lines: Vec::new(),
            style,
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() {
            self.lines.push(line);
            return;
        }
        self.lines.extend(line.lines().map(str::to_string));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// `label  value` rows with the values aligned
    pub fn rows<'r>(&mut self, rows: impl IntoIterator<Item = (&'r str, String)>) {
        let rows: Vec<(&str, String)> = rows.into_iter().collect();
        let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        for (label, value) in rows {
            let pad = label_width - label.width();
            self.lines
                .push(format!("{}{}  {}", label, " ".repeat(pad), value));
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let body: Vec<&str> = self
            .title
            .iter()
            .map(String::as_str)
            .chain(self.lines.iter().map(String::as_str))
            .collect();
        let inner = body.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2;

        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner);
        let v = self.paint(BorderChar::Vertical.render(supports_unicode), supports_color);

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h,
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        for line in body {
            let pad = inner - 1 - visible_width(line);
            out.push_str(&format!("{v} {line}{}{v}\n", " ".repeat(pad)));
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h,
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // ESC [ ... <final letter>
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }
    Cow::Owned(out)
}
