//! Record store loading.

use std::fs;
use std::path::Path;

use crate::core::Record;
use crate::errors::SalescopeError;

/// Load the record store from a JSON file.
///
/// The file holds a flat array of record objects. Missing optional fields
/// and malformed numerics are tolerated (they deserialize to defaults);
/// a missing file or malformed JSON is a hard error.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SalescopeError> {
    let contents =
        fs::read_to_string(path).map_err(|source| SalescopeError::io(path, source))?;
    let records = parse_records(&contents).map_err(|source| SalescopeError::parse(path, source))?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON record array from text.
pub fn parse_records(contents: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_missing_and_malformed_fields() {
        let records = parse_records(
            r#"[
                {"sku": "WID-100", "description": "Widget", "customer": "Acme",
                 "qty": "3", "price": 9.99, "date": "2024-01-05", "inv#": "INV-1"},
                {"customer": "Globex", "qty": null, "cost": "n/a"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].qty, 3.0);
        assert_eq!(records[0].invoice_number.as_deref(), Some("INV-1"));
        assert_eq!(records[1].sku, "");
        assert_eq!(records[1].rep, None);
        assert_eq!(records[1].qty, 0.0);
        assert_eq!(records[1].cost, 0.0);
        assert_eq!(records[1].date, None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_records("[{").is_err());
        assert!(parse_records(r#"{"not": "an array"}"#).is_err());
    }
}
