use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use deckhand::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    /// Questions may be asked on the terminal
    pub interactive: bool,
    /// Ask questions line by line instead of with dialoguer widgets
    pub plain_prompts: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !json,
        };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
            interactive: !json && !caps.is_ci && caps.stdin_tty && caps.is_tty,
            plain_prompts: caps.is_dumb,
        }
    }
}
