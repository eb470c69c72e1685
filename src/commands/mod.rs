//! CLI command implementations for adreach operations.
//!
//! Available commands:
//! - **interactive**: Prompt for an investment and print the estimate (default)
//! - **estimate**: Estimate views for an investment passed as an argument
//! - **init**: Initialize a new adreach configuration file

pub mod estimate;
pub mod init;
pub mod interactive;

pub use estimate::{handle_estimate, EstimateConfig};
pub use init::init_config;
pub use interactive::run_interactive;
