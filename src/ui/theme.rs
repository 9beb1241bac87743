use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for the Deckhand CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const POINTER: &str = "↑";

    // Container states.
    pub const RUNNING: &str = "●";
    pub const STOPPED: &str = "○";

    // Command identifiers (used in headers).
    pub const STACK: &str = "⚓";
    pub const CONFIG: &str = "⚙";
    pub const DIFF: &str = "Δ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const POINTER: &str = "^";

    pub const RUNNING: &str = "[up]";
    pub const STOPPED: &str = "[down]";

    pub const STACK: &str = "[STACK]";
    pub const CONFIG: &str = "[CONFIG]";
    pub const DIFF: &str = "[DIFF]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// DeckhandTheme - dialoguer theme with ●/○ select markers
// ----------------------------------------------------------------------------

/// Theme for the setup interview.
///
/// Wraps `ColorfulTheme` and only changes how select items are drawn:
/// `●`/`○` in Unicode mode, `(*)`/`( )` otherwise.
pub struct DeckhandTheme {
    unicode: bool,
    inner: ColorfulTheme,
}

impl DeckhandTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn active_marker(&self) -> &'static str {
        if self.unicode {
            icons::RUNNING
        } else {
            "(*)"
        }
    }

    pub fn inactive_marker(&self) -> &'static str {
        if self.unicode {
            icons::STOPPED
        } else {
            "( )"
        }
    }
}

impl Theme for DeckhandTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_password_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_password_prompt(f, prompt)
    }

    fn format_password_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
    ) -> fmt::Result {
        self.inner.format_password_prompt_selection(f, prompt)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    // Engine choices read better as radio buttons
    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "> {} {}", self.active_marker(), text)
        } else {
            write!(f, "  {} {}", self.inactive_marker(), text)
        }
    }
}
