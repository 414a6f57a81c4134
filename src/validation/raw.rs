//! Loosely typed form snapshot handed to the validator

use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from an input widget: either already a
/// number or free text that still needs coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        RawNumber::Int(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// Immutable snapshot of every field on the intake form.
///
/// Any field may be missing, blank or malformed; nothing is checked until
/// the snapshot goes through [`super::FieldValidator`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFormInput {
    pub name: Option<String>,
    pub age: Option<RawNumber>,
    pub dependents: Option<RawNumber>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub income: Option<String>,
    pub dental_plan_required: Option<String>,
    pub risk_tolerance: Option<RawNumber>,
    pub consent_given: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_all_missing() {
        let raw = RawFormInput::default();
        assert!(raw.name.is_none());
        assert!(raw.age.is_none());
        assert!(raw.consent_given.is_none());
    }

    #[test]
    fn test_deserialize_mixed_numeric_kinds() {
        let json = r#"{
            "name": "Jane Doe",
            "age": "35",
            "dependents": 2,
            "zipCode": "99501",
            "riskTolerance": 42.0,
            "consentGiven": true
        }"#;
        let raw: RawFormInput = serde_json::from_str(json).unwrap();

        assert_eq!(raw.age, Some(RawNumber::Text("35".to_string())));
        assert_eq!(raw.dependents, Some(RawNumber::Int(2)));
        assert_eq!(raw.risk_tolerance, Some(RawNumber::Float(42.0)));
        assert_eq!(raw.zip_code.as_deref(), Some("99501"));
        assert!(raw.state.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let json = r#"{"name": "Jo", "favouriteColour": "blue"}"#;
        let raw: RawFormInput = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Jo"));
    }
}
