// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod estimator;
pub mod formatting;
pub mod input;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{CascadeReport, CascadeRound, ViewCount};

pub use crate::errors::AdReachError;

pub use crate::estimator::{
    clicks_from_views, estimate_cascade, estimate_total_views, shares_from_clicks,
    views_from_investment, views_from_shares, DEFAULT_CASCADE_ROUNDS,
};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
