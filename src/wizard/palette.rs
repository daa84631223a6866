//! Colors for the full-screen wizard.

use ratatui::style::{Color, Modifier, Style};

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Every color the wizard draws with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardPalette {
    pub accent: Color,
    pub muted: Color,
    pub text: Color,
    pub text_soft: Color,
    pub soft: Color,
    pub background: Color,
    pub panel_bg: Color,
    pub error: Color,
    pub flash: Color,
    /// Border glow, spark center first.
    pub glow: [Color; 6],
    /// One color per art line.
    pub art: [Color; 9],
}

impl Default for WizardPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardPalette {
    pub fn new() -> Self {
        Self {
            accent: hex(0x7aa2f7),
            muted: hex(0x6b7280),
            text: hex(0xc0caf5),
            text_soft: hex(0xa9b1d6),
            soft: hex(0x3b4261),
            background: hex(0x1f2335),
            panel_bg: hex(0x24283b),
            error: hex(0xf7768e),
            flash: hex(0xc0caf5),
            glow: [
                hex(0xbb9af7),
                hex(0x9d8ad4),
                hex(0x7f7ab1),
                hex(0x636a8e),
                hex(0x4f5c78),
                hex(0x3b4261),
            ],
            art: [
                hex(0x7aa2f7),
                hex(0x7aa2f7),
                hex(0x7dcfff),
                hex(0x7dcfff),
                hex(0x24283b),
                hex(0xbb9af7),
                hex(0xbb9af7),
                hex(0x9d7cd8),
                hex(0x9d7cd8),
            ],
        }
    }

    /// Terminal default colors only (for `NO_COLOR` / `--no-color`).
    pub fn plain() -> Self {
        Self {
            accent: Color::Reset,
            muted: Color::Reset,
            text: Color::Reset,
            text_soft: Color::Reset,
            soft: Color::Reset,
            background: Color::Reset,
            panel_bg: Color::Reset,
            error: Color::Reset,
            flash: Color::Reset,
            glow: [Color::Reset; 6],
            art: [Color::Reset; 9],
        }
    }

    /// Plain panel cell.
    pub fn panel(&self) -> Style {
        Style::default().bg(self.panel_bg)
    }

    pub fn fg(&self, color: Color) -> Style {
        self.panel().fg(color)
    }

    pub fn bold(&self, color: Color) -> Style {
        self.fg(color).add_modifier(Modifier::BOLD)
    }
}
