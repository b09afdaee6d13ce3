use anyhow::Result;
use clap::Parser;
use salescope::cli::{Cli, Commands};
use salescope::commands::{self, BreakdownConfig, BrowseConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            path,
            filters,
            list,
            format,
            output,
        } => commands::run_browse(BrowseConfig {
            path,
            filters,
            list,
            format,
            output,
        }),
        Commands::Breakdown {
            path,
            filters,
            sort,
            desc,
            format,
            output,
        } => commands::run_breakdown(BreakdownConfig {
            path,
            filters,
            sort,
            desc,
            format,
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
