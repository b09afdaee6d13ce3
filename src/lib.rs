// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filters;
pub mod io;
pub mod sorting;

// Re-export commonly used types
pub use crate::core::{
    parse_record_date, FilterCriteria, Record, SortDirective, SortKey, SummaryRow, TermField,
};

pub use crate::aggregation::{aggregate, distinct_customers, distinct_reps};
pub use crate::filters::{build_predicate, select, select_with_fields};
pub use crate::sorting::{sort_rows, sort_rows_by_name};

pub use crate::errors::SalescopeError;
pub use crate::io::loader::{load_records, parse_records};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
