mod accessors;
mod core;
mod loader;

pub use accessors::get_config;
pub use self::core::{AdReachConfig, DisplayConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};

/// Contents written by `adreach init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# adreach configuration

[output]
# terminal, json or markdown
default_format = "terminal"
show_breakdown = false

[display]
# auto, always or never
color = "auto"
"#;
