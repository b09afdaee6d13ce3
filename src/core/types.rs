//! Common type definitions used across the engine

use serde::{Deserialize, Serialize};

use crate::core::parsing::lenient_f64;

/// One transaction line in the dataset.
///
/// Records are loaded once and never mutated; every engine call reads them
/// by reference and produces fresh output. Numeric fields deserialize
/// leniently so a messy source file cannot poison downstream totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub customer: String,
    /// Sales rep; some dataset variants omit this column entirely.
    #[serde(default)]
    pub rep: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
    /// Raw date text as it appears in the source; parsed during aggregation.
    #[serde(default)]
    pub date: Option<String>,
    /// Opaque invoice identifier. Some exports spell this `inv#`.
    #[serde(default, alias = "inv#", alias = "invoiceNumber")]
    pub invoice_number: Option<String>,
}

/// The set of active filter constraints for one query.
///
/// Every field is optional; a `None` or blank value imposes no constraint,
/// so the all-empty criteria is the identity filter. Price bounds are
/// inclusive and a bound of exactly 0 is still active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text term, matched case-insensitively against the configured
    /// term fields.
    pub term: Option<String>,
    /// Exact customer match (dropdown-derived, case-sensitive).
    pub customer: Option<String>,
    /// Exact rep match (dropdown-derived, case-sensitive).
    pub rep: Option<String>,
    /// Exact SKU match for SKU-scoped views.
    pub sku: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// True when no clause is active and every record passes.
    pub fn is_identity(&self) -> bool {
        active_text(&self.term).is_none()
            && active_text(&self.customer).is_none()
            && active_text(&self.rep).is_none()
            && active_text(&self.sku).is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

/// Treat blank and whitespace-only strings as "no constraint".
pub(crate) fn active_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Fields the free-text term clause searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermField {
    Description,
    Sku,
    Customer,
}

impl TermField {
    /// Default search scope: description and SKU. Customer matching is
    /// opt-in via configuration.
    pub const DEFAULT: &'static [TermField] = &[TermField::Description, TermField::Sku];

    /// The record field this term field reads.
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            TermField::Description => &record.description,
            TermField::Sku => &record.sku,
            TermField::Customer => &record.customer,
        }
    }
}

/// One (customer, month) aggregate.
///
/// Recomputed from scratch on every query; the full row set partitions the
/// parseable-dated portion of the filtered records by (customer, month_key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub customer: String,
    /// Display label, e.g. "Jan 2024".
    pub month: String,
    /// Sortable year-month key, e.g. "2024-01". Chronological ordering uses
    /// this, never the display label.
    pub month_key: String,
    pub total_qty: f64,
    /// Σ price×qty over the group.
    pub total_price_amount: f64,
    /// Σ cost×qty over the group.
    pub total_cost_amount: f64,
    /// total_price_amount / total_qty, 0 when the group has no quantity.
    pub avg_price: f64,
    pub avg_cost: f64,
}

/// Column a breakdown can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Customer,
    Month,
    TotalQty,
    TotalPriceAmount,
    TotalCostAmount,
    AvgPrice,
    AvgCost,
}

impl SortKey {
    /// Parse a textual key name as used by config files.
    pub fn parse(name: &str) -> Option<SortKey> {
        match name {
            "customer" => Some(SortKey::Customer),
            "month" => Some(SortKey::Month),
            "total_qty" | "qty" => Some(SortKey::TotalQty),
            "total_price" | "total_price_amount" => Some(SortKey::TotalPriceAmount),
            "total_cost" | "total_cost_amount" => Some(SortKey::TotalCostAmount),
            "avg_price" => Some(SortKey::AvgPrice),
            "avg_cost" => Some(SortKey::AvgCost),
            _ => None,
        }
    }

    /// Canonical name for display and config round-trips.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Customer => "customer",
            SortKey::Month => "month",
            SortKey::TotalQty => "total_qty",
            SortKey::TotalPriceAmount => "total_price_amount",
            SortKey::TotalCostAmount => "total_cost_amount",
            SortKey::AvgPrice => "avg_price",
            SortKey::AvgCost => "avg_cost",
        }
    }
}

/// The active sort column and direction.
///
/// The directive is owned by the caller (the presentation layer keeps it
/// between interactions and passes it in); the sorter itself is stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortDirective {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            ascending: true,
        }
    }

    /// Toggle-on-repeat: selecting the active column flips its direction,
    /// selecting a different column resets to ascending.
    pub fn clicked(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                ascending: !self.ascending,
            }
        } else {
            Self::new(key)
        }
    }
}
