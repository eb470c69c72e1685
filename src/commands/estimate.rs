use crate::config::AdReachConfig;
use crate::estimator::estimate_cascade;
use crate::formatting::FormattingConfig;
use crate::input::parse_investment;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::Result;

/// Arguments of the `estimate` subcommand as given on the command line.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub investment: String,
    pub format: Option<OutputFormat>,
    pub breakdown: bool,
    pub plain: bool,
}

/// Effective output settings after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub format: OutputFormat,
    pub show_breakdown: bool,
    pub formatting: FormattingConfig,
}

// Pure function: flags win over the config file
pub fn resolve_output(cmd: &EstimateConfig, config: &AdReachConfig) -> ResolvedOutput {
    let formatting = if cmd.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(config.color_mode())
    };

    ResolvedOutput {
        format: cmd.format.unwrap_or_else(|| config.default_format()),
        show_breakdown: cmd.breakdown || config.show_breakdown(),
        formatting,
    }
}

pub fn handle_estimate(cmd: EstimateConfig, config: &AdReachConfig) -> Result<()> {
    let investment = parse_investment(&cmd.investment)?;
    let output = resolve_output(&cmd, config);
    tracing::info!(investment, format = ?output.format, "estimating views");

    let report = estimate_cascade(investment);
    let mut writer = create_writer(output.format, output.formatting, output.show_breakdown);
    writer.write_report(&report)
}
