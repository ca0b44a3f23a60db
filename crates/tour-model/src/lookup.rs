//! Detail page record lookup.

use serde_json::Value;

use crate::normalize::coerce_id;

/// Why a detail lookup produced no tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The id parameter was missing or not numeric.
    #[error("tour id parameter missing or not numeric")]
    InvalidId,
    /// No record's id matches the requested one.
    #[error("no tour matches the requested id")]
    NotFound,
}

/// Parse the raw `id` query parameter.
pub fn parse_requested_id(raw: Option<&str>) -> Result<f64, LookupError> {
    let raw = raw.ok_or(LookupError::InvalidId)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::InvalidId);
    }
    trimmed.parse::<f64>().map_err(|_| LookupError::InvalidId)
}

/// Numeric id of a raw record, when it has a usable one.
pub fn record_id(record: &Value) -> Option<f64> {
    record.get("id").and_then(coerce_id)
}

/// Resolve the record the detail page should render.
///
/// Ids compare numerically after coercion, so a record id of `2` matches
/// a requested `"2"`. Records without a coercible id never match.
pub fn resolve<'a>(
    records: &'a [Value],
    raw_param: Option<&str>,
) -> Result<&'a Value, LookupError> {
    let wanted = parse_requested_id(raw_param)?;
    records
        .iter()
        .find(|record| record_id(record) == Some(wanted))
        .ok_or(LookupError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]
    }

    #[test]
    fn test_string_param_matches_numeric_id() {
        let records = records();
        let record = resolve(&records, Some("2")).unwrap();
        assert_eq!(record_id(record), Some(2.0));
    }

    #[test]
    fn test_numeric_string_ids_match_too() {
        let records = vec![json!({"id": "7"})];
        assert!(resolve(&records, Some("7")).is_ok());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        assert_eq!(resolve(&records(), Some("99")), Err(LookupError::NotFound));
    }

    #[test]
    fn test_bad_params_are_invalid() {
        assert_eq!(resolve(&records(), None), Err(LookupError::InvalidId));
        assert_eq!(
            resolve(&records(), Some("volcano")),
            Err(LookupError::InvalidId)
        );
        assert_eq!(resolve(&records(), Some("")), Err(LookupError::InvalidId));
    }

    #[test]
    fn test_idless_records_never_match() {
        let records = vec![json!({"name": "No id"}), json!({"id": "n/a"})];
        assert_eq!(resolve(&records, Some("0")), Err(LookupError::NotFound));
    }
}
