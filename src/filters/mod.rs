//! Filter predicate construction and record selection.
//!
//! A criteria object becomes one predicate; the selector applies it over the
//! record store in a single pass, preserving store order.

use crate::core::types::active_text;
use crate::core::{FilterCriteria, Record, TermField};

/// Build a single predicate from a criteria object.
///
/// Each active clause must pass for a record to match; inactive clauses
/// impose no constraint. Exact-match clauses compare case-sensitively since
/// their values come from dropdowns of observed values, while the term
/// clause is a case-insensitive substring match over `term_fields`.
pub fn build_predicate<'a>(
    criteria: &'a FilterCriteria,
    term_fields: &'a [TermField],
) -> impl Fn(&Record) -> bool + 'a {
    move |record| {
        matches_term(record, criteria, term_fields)
            && matches_exact(active_text(&criteria.customer), &record.customer)
            && matches_exact(
                active_text(&criteria.rep),
                record.rep.as_deref().unwrap_or(""),
            )
            && matches_exact(active_text(&criteria.sku), &record.sku)
            && matches_range(record.price, criteria.min_price, criteria.max_price)
    }
}

fn matches_term(record: &Record, criteria: &FilterCriteria, term_fields: &[TermField]) -> bool {
    let Some(term) = active_text(&criteria.term) else {
        return true;
    };
    let needle = term.to_lowercase();
    term_fields
        .iter()
        .any(|field| field.value(record).to_lowercase().contains(&needle))
}

fn matches_exact(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w == actual)
}

// Inclusive on both ends; Option gates the clause, so a bound of exactly 0
// still applies.
fn matches_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

/// Apply `criteria` to `records` using the default term fields.
///
/// Pure and order-preserving. Always returns a fresh vector, even for the
/// identity criteria, so callers can funnel every query through the same
/// grouping path without special-casing "no filters".
pub fn select(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    select_with_fields(records, criteria, TermField::DEFAULT)
}

/// [`select`] with an explicit term-field configuration.
pub fn select_with_fields(
    records: &[Record],
    criteria: &FilterCriteria,
    term_fields: &[TermField],
) -> Vec<Record> {
    let predicate = build_predicate(criteria, term_fields);
    records.iter().filter(|r| predicate(r)).cloned().collect()
}
