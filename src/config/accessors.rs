use std::sync::OnceLock;

use super::core::AdReachConfig;
use super::loader::load_config;
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Cache the configuration
static CONFIG: OnceLock<AdReachConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static AdReachConfig {
    CONFIG.get_or_init(load_config)
}

impl AdReachConfig {
    /// Output format when none is given on the command line (default: terminal)
    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    /// Whether terminal output lists every round (default: false)
    pub fn show_breakdown(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_breakdown)
            .unwrap_or(false)
    }

    /// Color mode before environment overrides (default: auto)
    pub fn color_mode(&self) -> ColorMode {
        self.display
            .as_ref()
            .and_then(|d| d.color)
            .unwrap_or_default()
    }
}
