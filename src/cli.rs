use clap::{Parser, Subcommand};

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "adreach")]
#[command(about = "Estimate ad views from an investment, including the share cascade", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Without a subcommand, prompt for the investment on stdin
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate views for an investment given on the command line
    Estimate {
        /// Amount invested, in reais
        #[arg(allow_hyphen_values = true)]
        investment: String,

        /// Output format (defaults to the configured format, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show clicks, shares and views for every cascade round
        #[arg(long)]
        breakdown: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .adreach.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
