//! Intake form validation
//!
//! [`FieldValidator`] turns a loosely typed [`RawFormInput`] snapshot into a
//! [`ValidatedFormInput`], or reports every failing field at once as
//! [`FieldErrors`]. Validation is pure: no state, no IO, no logging of the
//! submitted values.

mod raw;
mod rules;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use raw::{RawFormInput, RawNumber};
pub use rules::{DEFAULT_RISK_TOLERANCE, MAX_RISK_TOLERANCE, MIN_RISK_TOLERANCE};

/// Fields of the intake form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Age,
    Dependents,
    ZipCode,
    State,
    Income,
    DentalPlanRequired,
    RiskTolerance,
    ConsentGiven,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Age,
        FieldName::Dependents,
        FieldName::ZipCode,
        FieldName::State,
        FieldName::Income,
        FieldName::DentalPlanRequired,
        FieldName::RiskTolerance,
        FieldName::ConsentGiven,
    ];

    /// Key used for this field in serialized snapshots
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Dependents => "dependents",
            Self::ZipCode => "zipCode",
            Self::State => "state",
            Self::Income => "income",
            Self::DentalPlanRequired => "dentalPlanRequired",
            Self::RiskTolerance => "riskTolerance",
            Self::ConsentGiven => "consentGiven",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Age => "Age",
            Self::Dependents => "Dependents",
            Self::ZipCode => "Zip Code",
            Self::State => "State",
            Self::Income => "Annual Income",
            Self::DentalPlanRequired => "Dental Plan Required",
            Self::RiskTolerance => "Risk Tolerance",
            Self::ConsentGiven => "Privacy Consent",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

/// Every rule violation found in one snapshot, keyed by field.
///
/// Fields that passed are absent. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    fn insert(&mut self, field: FieldName, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First failing field in form order
    pub fn first_field(&self) -> Option<FieldName> {
        self.0.keys().next().copied()
    }

    /// Violations in form order
    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.0.iter().map(|(field, message)| FieldValidationError {
            field: *field,
            message: message.clone(),
        })
    }

    /// Field names only, for logging without leaking values
    pub fn field_keys(&self) -> Vec<&'static str> {
        self.0.keys().map(FieldName::key).collect()
    }
}

/// Whether the user wants dental coverage included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DentalPlan {
    Yes,
    No,
}

impl DentalPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Income text that matched the currency pattern.
///
/// Kept as the text the user entered; never parsed into an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Income(String);

impl Income {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot that satisfied every rule.
///
/// Only [`FieldValidator::validate`] can build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedFormInput {
    name: String,
    age: u8,
    dependents: u8,
    zip_code: String,
    state: String,
    income: Income,
    dental_plan_required: DentalPlan,
    risk_tolerance: u8,
    consent_given: bool,
}

impl ValidatedFormInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn dependents(&self) -> u8 {
        self.dependents
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn income(&self) -> &Income {
        &self.income
    }

    pub fn dental_plan_required(&self) -> DentalPlan {
        self.dental_plan_required
    }

    pub fn risk_tolerance(&self) -> u8 {
        self.risk_tolerance
    }
}

/// Wording used when the state field fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMessage {
    /// "Please select a state."
    #[default]
    Select,
    /// "State must be a 2-letter code."
    Code,
}

impl StateMessage {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Select => rules::STATE_NOT_SELECTED,
            Self::Code => rules::STATE_NOT_A_CODE,
        }
    }
}

/// Applies the intake rules to raw snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator {
    state_message: StateMessage,
}

impl FieldValidator {
    pub fn new(state_message: StateMessage) -> Self {
        Self { state_message }
    }

    /// Validate a snapshot, collecting every failing field.
    pub fn validate(&self, raw: &RawFormInput) -> Result<ValidatedFormInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = record(&mut errors, FieldName::Name, rules::check_name(raw.name.as_deref()));
        let age = record(&mut errors, FieldName::Age, rules::check_age(raw.age.as_ref()));
        let dependents = record(
            &mut errors,
            FieldName::Dependents,
            rules::check_dependents(raw.dependents.as_ref()),
        );
        let zip_code = record(
            &mut errors,
            FieldName::ZipCode,
            rules::check_zip_code(raw.zip_code.as_deref()),
        );
        let state = record(
            &mut errors,
            FieldName::State,
            rules::check_state(raw.state.as_deref(), self.state_message.text()),
        );
        let income = record(
            &mut errors,
            FieldName::Income,
            rules::check_income(raw.income.as_deref()),
        );
        let dental_plan_required = record(
            &mut errors,
            FieldName::DentalPlanRequired,
            rules::check_dental_plan(raw.dental_plan_required.as_deref()),
        );
        let risk_tolerance = record(
            &mut errors,
            FieldName::RiskTolerance,
            rules::check_risk_tolerance(raw.risk_tolerance.as_ref()),
        );
        let consent_given = record(
            &mut errors,
            FieldName::ConsentGiven,
            rules::check_consent(raw.consent_given),
        );

        match (
            name,
            age,
            dependents,
            zip_code,
            state,
            income,
            dental_plan_required,
            risk_tolerance,
            consent_given,
        ) {
            (
                Some(name),
                Some(age),
                Some(dependents),
                Some(zip_code),
                Some(state),
                Some(income),
                Some(dental_plan_required),
                Some(risk_tolerance),
                Some(consent_given),
            ) if errors.is_empty() => Ok(ValidatedFormInput {
                name,
                age,
                dependents,
                zip_code,
                state,
                income,
                dental_plan_required,
                risk_tolerance,
                consent_given,
            }),
            _ => Err(errors),
        }
    }
}

fn record<T>(
    errors: &mut FieldErrors,
    field: FieldName,
    result: Result<T, &'static str>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

/// Validate with the default wording.
#[cfg(test)]
pub fn validate(raw: &RawFormInput) -> Result<ValidatedFormInput, FieldErrors> {
    FieldValidator::default().validate(raw)
}


#[cfg(test)]
mod tests {
    use super::test_support::valid_raw_input;
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_age(age: i64) -> RawFormInput {
        RawFormInput {
            age: Some(RawNumber::Int(age)),
            ..valid_raw_input()
        }
    }

    mod success {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_input_is_normalized() {
            let input = validate(&valid_raw_input()).unwrap();

            assert_eq!(input.name(), "Jane Doe");
            assert_eq!(input.age(), 35);
            assert_eq!(input.dependents(), 2);
            assert_eq!(input.zip_code(), "99501");
            assert_eq!(input.state(), "AK");
            assert_eq!(input.income().as_str(), "$28,000");
            assert_eq!(input.dental_plan_required(), DentalPlan::No);
            assert_eq!(input.risk_tolerance(), 50);
        }

        #[test]
        fn test_name_is_stored_trimmed() {
            let raw = RawFormInput {
                name: Some("  Jane  ".to_string()),
                ..valid_raw_input()
            };
            assert_eq!(validate(&raw).unwrap().name(), "Jane");
        }

        #[test]
        fn test_missing_risk_tolerance_defaults_to_fifty() {
            let raw = RawFormInput {
                risk_tolerance: None,
                ..valid_raw_input()
            };
            assert_eq!(validate(&raw).unwrap().risk_tolerance(), 50);
        }

        #[test]
        fn test_serializes_with_form_keys() {
            let input = validate(&valid_raw_input()).unwrap();
            let json = serde_json::to_value(&input).unwrap();
            assert_eq!(json["zipCode"], "99501");
            assert_eq!(json["income"], "$28,000");
            assert_eq!(json["dentalPlanRequired"], "no");
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_names_fail() {
            for name in ["", "J", " J "] {
                let raw = RawFormInput {
                    name: Some(name.to_string()),
                    ..valid_raw_input()
                };
                let errors = validate(&raw).unwrap_err();
                assert_eq!(
                    errors.get(FieldName::Name),
                    Some("Name must be at least 2 characters.")
                );
            }
        }

        #[test]
        fn test_age_boundaries() {
            assert!(validate(&with_age(18)).is_ok());
            assert!(validate(&with_age(120)).is_ok());
            assert_eq!(
                validate(&with_age(17)).unwrap_err().get(FieldName::Age),
                Some("Age must be at least 18 years.")
            );
            assert_eq!(
                validate(&with_age(121)).unwrap_err().get(FieldName::Age),
                Some("Age must be less than 100 years.")
            );
        }

        #[test]
        fn test_malformed_age_text_is_a_field_error() {
            let raw = RawFormInput {
                age: Some(RawNumber::Text("thirty".to_string())),
                ..valid_raw_input()
            };
            let errors = validate(&raw).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors.get(FieldName::Age).is_some());
        }

        #[test]
        fn test_zip_codes() {
            for zip in ["995", "995011", "ABCDE", ""] {
                let raw = RawFormInput {
                    zip_code: Some(zip.to_string()),
                    ..valid_raw_input()
                };
                assert_eq!(
                    validate(&raw).unwrap_err().get(FieldName::ZipCode),
                    Some("Zip code must be 5 digits."),
                    "zip {zip:?}"
                );
            }
        }

        #[test]
        fn test_income_samples() {
            for income in ["$28,000", "28000", "1234.56"] {
                let raw = RawFormInput {
                    income: Some(income.to_string()),
                    ..valid_raw_input()
                };
                assert!(validate(&raw).is_ok(), "income {income:?}");
            }
            for income in ["abc", "$28,000.5"] {
                let raw = RawFormInput {
                    income: Some(income.to_string()),
                    ..valid_raw_input()
                };
                assert!(
                    validate(&raw).unwrap_err().get(FieldName::Income).is_some(),
                    "income {income:?}"
                );
            }
        }

        #[test]
        fn test_consent_false_always_fails() {
            let raw = RawFormInput {
                consent_given: Some(false),
                ..valid_raw_input()
            };
            let errors = validate(&raw).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldName::ConsentGiven),
                Some("You must consent to the privacy notice before submitting.")
            );
        }

        #[test]
        fn test_all_violations_reported_together() {
            let errors = validate(&RawFormInput::default()).unwrap_err();

            let failed: Vec<FieldName> = errors.iter().map(|e| e.field).collect();
            assert_eq!(
                failed,
                vec![
                    FieldName::Name,
                    FieldName::Age,
                    FieldName::Dependents,
                    FieldName::ZipCode,
                    FieldName::State,
                    FieldName::Income,
                    FieldName::DentalPlanRequired,
                    FieldName::ConsentGiven,
                ]
            );
            assert_eq!(errors.first_field(), Some(FieldName::Name));
        }

        #[test]
        fn test_state_wording_is_configurable() {
            let raw = RawFormInput {
                state: Some("Alaska".to_string()),
                ..valid_raw_input()
            };

            let default_errors = validate(&raw).unwrap_err();
            assert_eq!(
                default_errors.get(FieldName::State),
                Some("Please select a state.")
            );

            let code_errors = FieldValidator::new(StateMessage::Code)
                .validate(&raw)
                .unwrap_err();
            assert_eq!(
                code_errors.get(FieldName::State),
                Some("State must be a 2-letter code.")
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let good = valid_raw_input();
        assert_eq!(validate(&good), validate(&good));

        let bad = RawFormInput::default();
        assert_eq!(validate(&bad), validate(&bad));
    }

    #[test]
    fn test_errors_convert_to_field_errors_list() {
        let raw = RawFormInput {
            name: Some("J".to_string()),
            zip_code: Some("1".to_string()),
            ..valid_raw_input()
        };
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.field_keys(), vec!["name", "zipCode"]);
        assert_eq!(errors.to_string(), "2 field(s) failed validation");

        let list: Vec<FieldValidationError> = errors.iter().collect();
        assert_eq!(list[0].to_string(), "name: Name must be at least 2 characters.");
        assert_eq!(list[1].field, FieldName::ZipCode);
    }
}
