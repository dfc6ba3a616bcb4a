//! Declarative shape validation for structured payloads.
//!
//! A well-formed JSON response can still be unusable: missing fields,
//! strings where numbers belong, negative run counts. Validation
//! failures are a distinct degrade reason from decode failures so the
//! logs tell the two apart.
//!
//! Count-like fields must be non-negative. Delta fields may be negative:
//! a negative "time saved" signals a real regression and must pass
//! through, not be rejected as malformed.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Domain constraint for one declared numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-negative quantity (run counts, sizes).
    Count,
    /// Signed change versus a previous window; negatives are real data.
    Delta,
}

/// One declared field of a structured payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn count(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Count,
        }
    }

    pub const fn delta(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Delta,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("payload is not a JSON object")]
    NotAnObject,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("field {0} is not numeric")]
    NotNumeric(&'static str),
    #[error("count field {field} is negative: {value}")]
    NegativeCount { field: &'static str, value: f64 },
    #[error("expected a non-empty array")]
    EmptyArray,
    #[error("failed to decode validated payload: {0}")]
    Decode(String),
}

/// Check that every declared field exists, is numeric, and satisfies
/// its rule.
pub fn validate_fields(payload: &Value, specs: &[FieldSpec]) -> Result<(), ValidateError> {
    let object = payload.as_object().ok_or(ValidateError::NotAnObject)?;

    for spec in specs {
        let value = object
            .get(spec.name)
            .ok_or(ValidateError::MissingField(spec.name))?;
        let number = value
            .as_f64()
            .ok_or(ValidateError::NotNumeric(spec.name))?;

        if spec.rule == FieldRule::Count && number < 0.0 {
            return Err(ValidateError::NegativeCount {
                field: spec.name,
                value: number,
            });
        }
    }

    Ok(())
}

/// Reject arrays that are empty where the domain requires rows.
pub fn require_non_empty_array(payload: &Value) -> Result<(), ValidateError> {
    match payload.as_array() {
        Some(rows) if !rows.is_empty() => Ok(()),
        _ => Err(ValidateError::EmptyArray),
    }
}

/// Validate declared fields, then deserialize the payload.
pub fn decode_validated<T: DeserializeOwned>(
    payload: Value,
    specs: &[FieldSpec],
) -> Result<T, ValidateError> {
    validate_fields(&payload, specs)?;
    serde_json::from_value(payload).map_err(|e| ValidateError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[FieldSpec] = &[
        FieldSpec::delta("totalSavings"),
        FieldSpec::delta("timeSaved"),
        FieldSpec::count("automatedRuns"),
        FieldSpec::count("manualRuns"),
    ];

    #[test]
    fn valid_payload_passes() {
        let payload = json!({
            "totalSavings": 125_000.0,
            "timeSaved": 840.5,
            "automatedRuns": 4200,
            "manualRuns": 130,
        });
        assert!(validate_fields(&payload, SPECS).is_ok());
    }

    #[test]
    fn negative_deltas_pass() {
        // Regressions are real data, not malformed data.
        let payload = json!({
            "totalSavings": -5000.0,
            "timeSaved": -20.0,
            "automatedRuns": 4200,
            "manualRuns": 130,
        });
        assert!(validate_fields(&payload, SPECS).is_ok());
    }

    #[test]
    fn negative_counts_fail() {
        let payload = json!({
            "totalSavings": 125_000.0,
            "timeSaved": 840.5,
            "automatedRuns": -3,
            "manualRuns": 130,
        });
        match validate_fields(&payload, SPECS) {
            Err(ValidateError::NegativeCount { field, .. }) => assert_eq!(field, "automatedRuns"),
            other => panic!("expected NegativeCount, got: {other:?}"),
        }
    }

    #[test]
    fn missing_field_fails() {
        let payload = json!({ "totalSavings": 1.0 });
        assert!(matches!(
            validate_fields(&payload, SPECS),
            Err(ValidateError::MissingField("timeSaved"))
        ));
    }

    #[test]
    fn non_numeric_field_fails() {
        let payload = json!({
            "totalSavings": "a lot",
            "timeSaved": 840.5,
            "automatedRuns": 4200,
            "manualRuns": 130,
        });
        assert!(matches!(
            validate_fields(&payload, SPECS),
            Err(ValidateError::NotNumeric("totalSavings"))
        ));
    }

    #[test]
    fn non_object_fails() {
        assert!(matches!(
            validate_fields(&json!([1, 2, 3]), SPECS),
            Err(ValidateError::NotAnObject)
        ));
        assert!(matches!(
            validate_fields(&json!(42), SPECS),
            Err(ValidateError::NotAnObject)
        ));
    }

    #[test]
    fn empty_array_rejected_where_rows_required() {
        assert!(require_non_empty_array(&json!([])).is_err());
        assert!(require_non_empty_array(&json!({"a": 1})).is_err());
        assert!(require_non_empty_array(&json!([1])).is_ok());
    }

    #[test]
    fn decode_validated_round_trip() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            total_savings: f64,
            automated_runs: u64,
        }

        let specs = &[FieldSpec::delta("totalSavings"), FieldSpec::count("automatedRuns")];
        let decoded: Payload = decode_validated(
            json!({ "totalSavings": -10.0, "automatedRuns": 7 }),
            specs,
        )
        .unwrap();
        assert_eq!(decoded.total_savings, -10.0);
        assert_eq!(decoded.automated_runs, 7);
    }
}
