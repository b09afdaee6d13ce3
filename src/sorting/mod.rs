//! Stable ordering of summary rows.

use std::cmp::Ordering;

use crate::core::{SortDirective, SortKey, SummaryRow};

/// Return a freshly ordered copy of `rows`.
///
/// The sort is stable: rows that compare equal keep their input order, so
/// repeated re-sorts never visibly shuffle ties. The month column orders by
/// `month_key` to stay chronological across years and locales.
pub fn sort_rows(rows: &[SummaryRow], directive: SortDirective) -> Vec<SummaryRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_rows(a, b, directive.key);
        if directive.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// Sort by a textual key name, as supplied by config files.
///
/// An unknown name is a caller bug, not a runtime condition: debug builds
/// assert, release builds log a warning and leave the input order untouched.
pub fn sort_rows_by_name(rows: &[SummaryRow], name: &str, ascending: bool) -> Vec<SummaryRow> {
    match SortKey::parse(name) {
        Some(key) => sort_rows(rows, SortDirective { key, ascending }),
        None => {
            debug_assert!(false, "unknown sort key: {name}");
            log::warn!("ignoring unknown sort key {name:?}");
            rows.to_vec()
        }
    }
}

fn compare_rows(a: &SummaryRow, b: &SummaryRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Customer => a.customer.cmp(&b.customer),
        SortKey::Month => a.month_key.cmp(&b.month_key),
        SortKey::TotalQty => a.total_qty.total_cmp(&b.total_qty),
        SortKey::TotalPriceAmount => a.total_price_amount.total_cmp(&b.total_price_amount),
        SortKey::TotalCostAmount => a.total_cost_amount.total_cmp(&b.total_cost_amount),
        SortKey::AvgPrice => a.avg_price.total_cmp(&b.avg_price),
        SortKey::AvgCost => a.avg_cost.total_cmp(&b.avg_cost),
    }
}
