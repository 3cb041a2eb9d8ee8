//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text. The
//! palette follows the stored light/dark theme.

use anyhow::Result;
use taskpad_core::Theme;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    theme: Theme,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        Self {
            rich_enabled,
            theme,
            skin: Self::skin_for(theme),
        }
    }

    fn skin_for(theme: Theme) -> MadSkin {
        match theme {
            Theme::Light => {
                let mut skin = MadSkin::default_light();
                skin.set_headers_fg(Color::DarkBlue);
                skin.bold.set_fg(Color::DarkYellow);
                skin.italic.set_fg(Color::DarkMagenta);
                skin
            }
            Theme::Dark => {
                let mut skin = MadSkin::default_dark();
                skin.set_headers_fg(Color::Cyan);
                skin.bold.set_fg(Color::Yellow);
                skin.italic.set_fg(Color::Magenta);
                skin
            }
        }
    }

    /// Switch palettes after a theme change
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            self.skin = Self::skin_for(theme);
        }
    }

    fn header_color(&self) -> &'static str {
        match self.theme {
            Theme::Light => "\x1b[34m",
            Theme::Dark => "\x1b[36m",
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("{}{line}\x1b[0m", self.header_color());
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, Theme::default())
    }
}
