//! Monthly breakdown aggregation.
//!
//! Groups records by (customer, calendar month) and reduces each group to a
//! summary row with quantity and monetary totals plus derived averages.

use std::collections::{HashMap, HashSet};

use crate::core::{coerce_finite, parse_record_date, Record, SummaryRow};

/// Group `records` by (customer, month) and total each group.
///
/// Records without a parseable date are skipped here but still appear in
/// raw filtered views. Group order is first-seen; chronological
/// presentation is an explicit sort on the month key, not a property of
/// aggregation. Every record with a parseable date lands in exactly one
/// group, so the rows partition that portion of the input.
pub fn aggregate(records: &[Record]) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        let Some(date) = parse_record_date(record.date.as_deref()) else {
            continue;
        };
        let month_key = date.format("%Y-%m").to_string();

        let slot = *index
            .entry((record.customer.clone(), month_key.clone()))
            .or_insert_with(|| {
                rows.push(SummaryRow {
                    customer: record.customer.clone(),
                    month: date.format("%b %Y").to_string(),
                    month_key,
                    total_qty: 0.0,
                    total_price_amount: 0.0,
                    total_cost_amount: 0.0,
                    avg_price: 0.0,
                    avg_cost: 0.0,
                });
                rows.len() - 1
            });

        let qty = coerce_finite(record.qty);
        let row = &mut rows[slot];
        row.total_qty += qty;
        row.total_price_amount += coerce_finite(record.price) * qty;
        row.total_cost_amount += coerce_finite(record.cost) * qty;
    }

    for row in &mut rows {
        row.avg_price = safe_div(row.total_price_amount, row.total_qty);
        row.avg_cost = safe_div(row.total_cost_amount, row.total_qty);
    }

    rows
}

// Empty groups average to 0, never NaN.
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Unique customers in first-seen order, as used to populate the customer
/// selector.
pub fn distinct_customers(records: &[Record]) -> Vec<String> {
    distinct(records.iter().map(|r| r.customer.as_str()))
}

/// Unique reps in first-seen order; records without a rep contribute
/// nothing.
pub fn distinct_reps(records: &[Record]) -> Vec<String> {
    distinct(records.iter().filter_map(|r| r.rep.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer: &str, date: Option<&str>, qty: f64, price: f64, cost: f64) -> Record {
        Record {
            sku: String::new(),
            description: String::new(),
            customer: customer.to_string(),
            rep: None,
            qty,
            price,
            cost,
            date: date.map(String::from),
            invoice_number: None,
        }
    }

    #[test]
    fn totals_one_customer_month_group() {
        let records = vec![
            record("A", Some("2024-01-05"), 2.0, 10.0, 4.0),
            record("A", Some("2024-01-20"), 3.0, 10.0, 4.0),
        ];
        let rows = aggregate(&records);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.customer, "A");
        assert_eq!(row.month_key, "2024-01");
        assert_eq!(row.month, "Jan 2024");
        assert_eq!(row.total_qty, 5.0);
        assert_eq!(row.total_price_amount, 50.0);
        assert_eq!(row.total_cost_amount, 20.0);
        assert_eq!(row.avg_price, 10.0);
        assert_eq!(row.avg_cost, 4.0);
    }

    #[test]
    fn splits_groups_by_customer_and_month() {
        let records = vec![
            record("A", Some("2024-01-05"), 1.0, 1.0, 1.0),
            record("B", Some("2024-01-05"), 1.0, 1.0, 1.0),
            record("A", Some("2024-02-05"), 1.0, 1.0, 1.0),
        ];
        let rows = aggregate(&records);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn group_order_is_first_seen_not_chronological() {
        let records = vec![
            record("A", Some("2024-02-05"), 1.0, 1.0, 1.0),
            record("A", Some("2024-01-05"), 1.0, 1.0, 1.0),
        ];
        let rows = aggregate(&records);
        assert_eq!(rows[0].month_key, "2024-02");
        assert_eq!(rows[1].month_key, "2024-01");
    }

    #[test]
    fn unparseable_dates_are_excluded() {
        let records = vec![
            record("A", Some("2024-01-05"), 2.0, 10.0, 4.0),
            record("A", Some("not a date"), 100.0, 10.0, 4.0),
            record("A", None, 100.0, 10.0, 4.0),
        ];
        let rows = aggregate(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_qty, 2.0);
    }

    #[test]
    fn zero_quantity_group_averages_to_zero() {
        let records = vec![record("A", Some("2024-01-05"), 0.0, 10.0, 4.0)];
        let rows = aggregate(&records);
        assert_eq!(rows[0].total_qty, 0.0);
        assert_eq!(rows[0].avg_price, 0.0);
        assert_eq!(rows[0].avg_cost, 0.0);
    }

    #[test]
    fn non_finite_values_do_not_poison_totals() {
        let records = vec![
            record("A", Some("2024-01-05"), f64::NAN, 10.0, 4.0),
            record("A", Some("2024-01-06"), 2.0, f64::INFINITY, 4.0),
        ];
        let rows = aggregate(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_qty, 2.0);
        assert_eq!(rows[0].total_price_amount, 0.0);
        assert_eq!(rows[0].total_cost_amount, 8.0);
    }

    #[test]
    fn same_month_across_years_stays_separate() {
        let records = vec![
            record("A", Some("2023-01-05"), 1.0, 1.0, 1.0),
            record("A", Some("2024-01-05"), 1.0, 1.0, 1.0),
        ];
        let rows = aggregate(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month_key, "2023-01");
        assert_eq!(rows[1].month_key, "2024-01");
    }

    #[test]
    fn distinct_values_preserve_first_seen_order() {
        let mut r1 = record("Globex", Some("2024-01-05"), 1.0, 1.0, 1.0);
        r1.rep = Some("Jo".to_string());
        let mut r2 = record("Acme", Some("2024-01-05"), 1.0, 1.0, 1.0);
        r2.rep = Some("Sam".to_string());
        let mut r3 = record("Globex", Some("2024-01-05"), 1.0, 1.0, 1.0);
        r3.rep = Some("Jo".to_string());
        let r4 = record("Initech", Some("2024-01-05"), 1.0, 1.0, 1.0);

        let records = vec![r1, r2, r3, r4];
        assert_eq!(distinct_customers(&records), ["Globex", "Acme", "Initech"]);
        assert_eq!(distinct_reps(&records), ["Jo", "Sam"]);
    }
}
