use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Pointer,
    Running,
    Stopped,
    Stack,
    Config,
    Diff,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};
        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Pointer => (icons::POINTER, icons_ascii::POINTER),
            Icon::Running => (icons::RUNNING, icons_ascii::RUNNING),
            Icon::Stopped => (icons::STOPPED, icons_ascii::STOPPED),
            Icon::Stack => (icons::STACK, icons_ascii::STACK),
            Icon::Config => (icons::CONFIG, icons_ascii::CONFIG),
            Icon::Diff => (icons::DIFF, icons_ascii::DIFF),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Running => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer | Icon::Stopped => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Stack | Icon::Config | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
