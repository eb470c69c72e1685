use adreach::cli::{Cli, Commands};
use adreach::commands::{self, EstimateConfig};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    adreach::observability::init_tracing(cli.verbose);

    match cli.command {
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            commands::run_interactive(&mut stdin.lock(), &mut stdout.lock())
        }
        Some(Commands::Estimate {
            investment,
            format,
            breakdown,
            plain,
        }) => {
            let config = adreach::config::get_config();
            commands::handle_estimate(
                EstimateConfig {
                    investment,
                    format,
                    breakdown,
                    plain,
                },
                config,
            )
        }
        Some(Commands::Init { force }) => commands::init_config(force),
    }
}
