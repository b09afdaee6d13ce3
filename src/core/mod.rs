pub mod parsing;
pub mod types;

pub use parsing::{coerce_finite, parse_record_date};
pub use types::{FilterCriteria, Record, SortDirective, SortKey, SummaryRow, TermField};
