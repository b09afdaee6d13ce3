//! CLI command implementations.
//!
//! Each submodule handles one subcommand:
//! - **browse**: filter records and render them card-style (or list distinct
//!   field values)
//! - **breakdown**: filter, aggregate into the per-customer monthly
//!   breakdown, and optionally sort
//! - **init**: write a default configuration file

pub mod breakdown;
pub mod browse;
pub mod init;

pub use breakdown::{run_breakdown, BreakdownConfig};
pub use browse::{run_browse, BrowseConfig};
pub use init::init_config;

use crate::cli::FormatArg;
use crate::config::SalescopeConfig;
use crate::io::output::OutputFormat;

/// Resolve the output format: explicit flag first, then the configured
/// default, then terminal.
pub(crate) fn resolve_format(arg: Option<FormatArg>, config: &SalescopeConfig) -> OutputFormat {
    match arg {
        Some(format) => format.into(),
        None => OutputFormat::parse(&config.output.default_format).unwrap_or_else(|| {
            log::warn!(
                "unknown default_format {:?} in config, falling back to terminal",
                config.output.default_format
            );
            OutputFormat::Terminal
        }),
    }
}
