//! Human-readable status lines for batch runs.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self::new(ColorMode::Never, EmojiMode::Never)
    }

    /// Set the process-wide `colored` override once at startup; formatters
    /// only read it.
    pub fn apply_color_override(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

/// Severity of one status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    fn marker(&self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("✅", "[ok]"),
            Self::Warning => ("⚠️ ", "[warn]"),
            Self::Error => ("❌", "[error]"),
        }
    }
}

/// Renders status lines according to a [`FormattingConfig`].
pub struct StatusFormatter {
    config: FormattingConfig,
}

impl StatusFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        Self { config }
    }

    pub fn line(&self, status: Status, text: &str) -> String {
        let (emoji, fallback) = status.marker();
        let marker = if self.config.emoji.should_use_emoji() {
            emoji
        } else {
            fallback
        };

        if !self.config.color.should_use_color() {
            return format!("{marker} {text}");
        }

        let marker = match status {
            Status::Success => marker.green(),
            Status::Warning => marker.yellow(),
            Status::Error => marker.red().bold(),
        };
        format!("{marker} {text}")
    }
}

fn detect_terminal_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
