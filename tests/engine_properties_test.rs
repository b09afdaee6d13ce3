//! Property tests for the select → aggregate → sort pipeline.

use std::collections::HashMap;

use proptest::prelude::*;
use salescope::core::{FilterCriteria, Record, SortDirective, SortKey};
use salescope::{aggregate, parse_record_date, select, sort_rows};

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["WID-100", "WID-200", "GAD-900"]),
        prop::sample::select(vec!["Steel Widget", "Brass Gadget", "Gizmo"]),
        prop::sample::select(vec!["Acme", "Globex", "Initech"]),
        prop::option::of(prop::sample::select(vec!["Jo", "Sam"])),
        0.0..50.0f64,
        0.0..100.0f64,
        0.0..80.0f64,
        prop::option::of(prop::sample::select(vec![
            "2024-01-05",
            "2024-02-10",
            "2023-12-31",
            "not a date",
        ])),
    )
        .prop_map(
            |(sku, description, customer, rep, qty, price, cost, date)| Record {
                sku: sku.to_string(),
                description: description.to_string(),
                customer: customer.to_string(),
                rep: rep.map(String::from),
                qty,
                price,
                cost,
                date: date.map(String::from),
                invoice_number: None,
            },
        )
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["wid", "gadget", "zzz", ""])),
        prop::option::of(prop::sample::select(vec!["Acme", "Globex", "Umbrella"])),
        prop::option::of(prop::sample::select(vec!["Jo", "Sam", "Pat"])),
        prop::option::of(0.0..120.0f64),
        prop::option::of(0.0..120.0f64),
    )
        .prop_map(|(term, customer, rep, min_price, max_price)| FilterCriteria {
            term: term.map(String::from),
            customer: customer.map(String::from),
            rep: rep.map(String::from),
            sku: None,
            min_price,
            max_price,
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..30)
}

fn row_counts(rows: &[salescope::SummaryRow]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for row in rows {
        let key = serde_json::to_string(row).unwrap();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn select_is_idempotent(records in records_strategy(), criteria in criteria_strategy()) {
        let once = select(&records, &criteria);
        let twice = select(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn select_preserves_store_order(records in records_strategy(), criteria in criteria_strategy()) {
        let selected = select(&records, &criteria);
        // Selection is a subsequence of the store.
        let mut cursor = records.iter();
        for kept in &selected {
            prop_assert!(cursor.any(|r| r == kept));
        }
    }

    #[test]
    fn aggregation_conserves_quantity(records in records_strategy()) {
        let rows = aggregate(&records);
        let grouped: f64 = rows.iter().map(|r| r.total_qty).sum();
        let dated: f64 = records
            .iter()
            .filter(|r| parse_record_date(r.date.as_deref()).is_some())
            .map(|r| r.qty)
            .sum();
        prop_assert!((grouped - dated).abs() < 1e-6);
    }

    #[test]
    fn groups_are_unique_per_customer_month(records in records_strategy()) {
        let rows = aggregate(&records);
        let mut keys: Vec<_> = rows
            .iter()
            .map(|r| (r.customer.clone(), r.month_key.clone()))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    #[test]
    fn sort_is_a_permutation(records in records_strategy(), ascending in any::<bool>()) {
        let rows = aggregate(&records);
        let sorted = sort_rows(&rows, SortDirective { key: SortKey::TotalPriceAmount, ascending });
        prop_assert_eq!(row_counts(&rows), row_counts(&sorted));
    }

    #[test]
    fn sorted_months_are_monotone(records in records_strategy()) {
        let rows = aggregate(&records);
        let sorted = sort_rows(&rows, SortDirective::new(SortKey::Month));
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].month_key <= pair[1].month_key);
        }
    }
}
