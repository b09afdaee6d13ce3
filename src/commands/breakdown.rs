use anyhow::Result;
use std::path::PathBuf;

use crate::aggregation::aggregate;
use crate::cli::{FilterArgs, FormatArg, SortArg};
use crate::config;
use crate::core::SortDirective;
use crate::filters::select_with_fields;
use crate::io::loader::load_records;
use crate::io::output::{create_file_writer, create_writer};
use crate::sorting::sort_rows;

pub struct BreakdownConfig {
    pub path: PathBuf,
    pub filters: FilterArgs,
    pub sort: Option<SortArg>,
    pub desc: bool,
    pub format: Option<FormatArg>,
    pub output: Option<PathBuf>,
}

/// Filter, aggregate, and render the per-customer monthly breakdown.
///
/// One synchronous pass: select → aggregate → (optionally) sort. Unsorted
/// output keeps the aggregator's first-seen group order.
pub fn run_breakdown(config: BreakdownConfig) -> Result<()> {
    let settings = config::load_config();
    let records = load_records(&config.path)?;

    let criteria = config.filters.to_criteria();
    if criteria.is_identity() {
        log::debug!("no active filters; aggregating the full record store");
    }
    let filtered = select_with_fields(&records, &criteria, &settings.search.term_fields);
    let mut rows = aggregate(&filtered);
    log::debug!(
        "{} summary rows from {} matching records",
        rows.len(),
        filtered.len()
    );

    if let Some(sort) = config.sort {
        let directive = SortDirective {
            key: sort.into(),
            ascending: !config.desc,
        };
        rows = sort_rows(&rows, directive);
    }

    let format = super::resolve_format(config.format, &settings);
    let mut writer = match &config.output {
        Some(path) => create_file_writer(format, path)?,
        None => create_writer(format),
    };
    writer.write_breakdown(&rows)
}
