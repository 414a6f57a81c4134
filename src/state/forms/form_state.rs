//! Form state management for the intake wizard

use super::field::{FieldValue, FormField};
use super::us_states::US_STATES;
use crate::validation::{FieldName, RawFormInput, RawNumber, DEFAULT_RISK_TOLERANCE};

/// `(value, label)` options for the dental selector
pub const DENTAL_OPTIONS: &[(&str, &str)] = &[("yes", "Yes"), ("no", "No")];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// The healthcare intake form: nine fields followed by the submit row
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub name: FormField,
    pub age: FormField,
    pub dependents: FormField,
    pub zip_code: FormField,
    pub state: FormField,
    pub income: FormField,
    pub dental_plan: FormField,
    pub risk_tolerance: FormField,
    pub consent: FormField,
    pub active_field_index: usize,
}

impl IntakeForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Jane Doe"),
            age: FormField::digits(FieldName::Age, "35", 3),
            dependents: FormField::digits(FieldName::Dependents, "2", 2),
            zip_code: FormField::digits(FieldName::ZipCode, "99501", 5),
            state: FormField::choice(FieldName::State, "Select state", US_STATES, None),
            income: FormField::currency(FieldName::Income, "$28,000"),
            dental_plan: FormField::choice(
                FieldName::DentalPlanRequired,
                "Select option",
                DENTAL_OPTIONS,
                Some(1),
            ),
            risk_tolerance: FormField::slider(FieldName::RiskTolerance, DEFAULT_RISK_TOLERANCE),
            consent: FormField::checkbox(FieldName::ConsentGiven),
            active_field_index: 0,
        }
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Age => &self.age,
            FieldName::Dependents => &self.dependents,
            FieldName::ZipCode => &self.zip_code,
            FieldName::State => &self.state,
            FieldName::Income => &self.income,
            FieldName::DentalPlanRequired => &self.dental_plan,
            FieldName::RiskTolerance => &self.risk_tolerance,
            FieldName::ConsentGiven => &self.consent,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Age => &mut self.age,
            FieldName::Dependents => &mut self.dependents,
            FieldName::ZipCode => &mut self.zip_code,
            FieldName::State => &mut self.state,
            FieldName::Income => &mut self.income,
            FieldName::DentalPlanRequired => &mut self.dental_plan,
            FieldName::RiskTolerance => &mut self.risk_tolerance,
            FieldName::ConsentGiven => &mut self.consent,
        }
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.active_field_index = index;
        }
    }

    /// Field under focus, `None` on the submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn consent_given(&self) -> bool {
        self.consent.is_checked()
    }

    /// Capture the current values for validation
    pub fn snapshot(&self) -> RawFormInput {
        let text = |field: &FormField| field.as_text().unwrap_or_default().to_string();
        let risk_tolerance = match self.risk_tolerance.value {
            FieldValue::Slider(v) => Some(RawNumber::Int(v as i64)),
            _ => None,
        };

        RawFormInput {
            name: Some(text(&self.name)),
            age: Some(RawNumber::Text(text(&self.age))),
            dependents: Some(RawNumber::Text(text(&self.dependents))),
            zip_code: Some(text(&self.zip_code)),
            state: Some(self.state.selected_value().unwrap_or_default().to_string()),
            income: Some(self.income.display_value()),
            dental_plan_required: self.dental_plan.selected_value().map(str::to_string),
            risk_tolerance,
            consent_given: Some(self.consent_given()),
        }
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for IntakeForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }
}
