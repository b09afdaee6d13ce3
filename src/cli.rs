use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::{FilterCriteria, SortKey};
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "salescope")]
#[command(about = "Sales record explorer with monthly breakdown reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse raw records matching the active filters
    Browse {
        /// Path to the JSON record file
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// List distinct field values instead of records
        #[arg(long, value_enum)]
        list: Option<ListTarget>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Aggregate matching records into a per-customer monthly breakdown
    Breakdown {
        /// Path to the JSON record file
        path: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Column to sort the breakdown by
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize a .salescope.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Filter flags shared by the browse and breakdown commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive search term (matches description and SKU by default)
    #[arg(short, long)]
    pub term: Option<String>,

    /// Exact customer filter
    #[arg(long)]
    pub customer: Option<String>,

    /// Exact sales rep filter
    #[arg(long)]
    pub rep: Option<String>,

    /// Exact SKU filter
    #[arg(long)]
    pub sku: Option<String>,

    /// Minimum price, inclusive
    #[arg(long = "min-price")]
    pub min_price: Option<f64>,

    /// Maximum price, inclusive
    #[arg(long = "max-price")]
    pub max_price: Option<f64>,
}

impl FilterArgs {
    /// Build the criteria value object the engine consumes.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            term: self.term.clone(),
            customer: self.customer.clone(),
            rep: self.rep.clone(),
            sku: self.sku.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
    Terminal,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Terminal => OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Customer,
    Month,
    TotalQty,
    TotalPrice,
    TotalCost,
    AvgPrice,
    AvgCost,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Customer => SortKey::Customer,
            SortArg::Month => SortKey::Month,
            SortArg::TotalQty => SortKey::TotalQty,
            SortArg::TotalPrice => SortKey::TotalPriceAmount,
            SortArg::TotalCost => SortKey::TotalCostAmount,
            SortArg::AvgPrice => SortKey::AvgPrice,
            SortArg::AvgCost => SortKey::AvgCost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Customers,
    Reps,
}
