use anyhow::Result;
use std::path::PathBuf;

use crate::aggregation::{distinct_customers, distinct_reps};
use crate::cli::{FilterArgs, FormatArg, ListTarget};
use crate::config;
use crate::core::Record;
use crate::filters::select_with_fields;
use crate::io::loader::load_records;
use crate::io::output::{create_file_writer, create_writer};

pub struct BrowseConfig {
    pub path: PathBuf,
    pub filters: FilterArgs,
    pub list: Option<ListTarget>,
    pub format: Option<FormatArg>,
    pub output: Option<PathBuf>,
}

/// Filter the record store and render the matching records.
pub fn run_browse(config: BrowseConfig) -> Result<()> {
    let settings = config::load_config();
    let records = load_records(&config.path)?;

    if let Some(target) = config.list {
        return print_distinct(&records, target);
    }

    let criteria = config.filters.to_criteria();
    let filtered = select_with_fields(&records, &criteria, &settings.search.term_fields);
    log::debug!("{} of {} records match", filtered.len(), records.len());

    let format = super::resolve_format(config.format, &settings);
    let mut writer = match &config.output {
        Some(path) => create_file_writer(format, path)?,
        None => create_writer(format),
    };
    writer.write_records(&filtered)
}

// One distinct value per line, the data behind selector dropdowns.
fn print_distinct(records: &[Record], target: ListTarget) -> Result<()> {
    let values = match target {
        ListTarget::Customers => distinct_customers(records),
        ListTarget::Reps => distinct_reps(records),
    };
    for value in values {
        println!("{value}");
    }
    Ok(())
}
