use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `base` and apply NO_COLOR / CLICOLOR / CLICOLOR_FORCE.
    pub fn from_env(base: ColorMode) -> Self {
        apply_env_overrides(
            Self::new(base),
            env::var("NO_COLOR").is_ok(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

// Pure function so the precedence can be tested without touching the environment
fn apply_env_overrides(
    mut config: FormattingConfig,
    no_color: bool,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
) -> FormattingConfig {
    // Per no-color.org
    if no_color {
        config.color = ColorMode::Never;
    }

    if clicolor == Some("0") {
        config.color = ColorMode::Never;
    }

    if clicolor_force == Some("1") {
        config.color = ColorMode::Always;
    }

    config
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // colored does its own tty detection, which would drop forced colors
        if config.color == ColorMode::Always {
            colored::control::set_override(true);
        }

        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Renders an amount the way a float literal reads: `10.0`, `12.5`, `-3.0`.
pub fn format_investment(investment: f64) -> String {
    if investment.fract() == 0.0 && investment.abs() < 1e16 {
        format!("{:.1}", investment)
    } else {
        investment.to_string()
    }
}
