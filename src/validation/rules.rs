//! Per-field rules and their messages

use super::raw::RawNumber;
use super::{DentalPlan, Income};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const AGE_TOO_LOW: &str = "Age must be at least 18 years.";
// Wording says 100 while the bound is 120; the bound wins.
pub const AGE_TOO_HIGH: &str = "Age must be less than 100 years.";
pub const AGE_NOT_A_NUMBER: &str = "Age must be a whole number.";
pub const DEPENDENTS_TOO_LOW: &str = "Dependents must be 0 or more.";
pub const DEPENDENTS_TOO_HIGH: &str = "Dependents must be less than 20.";
pub const DEPENDENTS_NOT_A_NUMBER: &str = "Dependents must be a whole number.";
pub const ZIP_CODE_INVALID: &str = "Zip code must be 5 digits.";
pub const STATE_NOT_SELECTED: &str = "Please select a state.";
pub const STATE_NOT_A_CODE: &str = "State must be a 2-letter code.";
pub const INCOME_INVALID: &str = "Please enter a valid income amount.";
pub const DENTAL_PLAN_MISSING: &str = "Please select if dental plan is required.";
pub const RISK_TOLERANCE_OUT_OF_RANGE: &str = "Risk tolerance must be between 0 and 100.";
pub const CONSENT_REQUIRED: &str = "You must consent to the privacy notice before submitting.";

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;
pub const MIN_DEPENDENTS: i64 = 0;
pub const MAX_DEPENDENTS: i64 = 20;
pub const MIN_RISK_TOLERANCE: i64 = 0;
pub const MAX_RISK_TOLERANCE: i64 = 100;
pub const DEFAULT_RISK_TOLERANCE: u8 = 50;

type RuleResult<T> = Result<T, &'static str>;

/// Coerce a raw numeric value to an integer.
///
/// Blank text counts as zero, matching how the number inputs treat an empty
/// box. Anything that is not a finite whole number yields `None`.
pub fn coerce_integer(raw: &RawNumber) -> Option<i64> {
    match raw {
        RawNumber::Int(n) => Some(*n),
        RawNumber::Float(f) => whole_number(*f),
        RawNumber::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Some(0);
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub fn check_name(raw: Option<&str>) -> RuleResult<String> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.chars().count() < 2 {
        return Err(NAME_TOO_SHORT);
    }
    Ok(trimmed.to_string())
}

pub fn check_age(raw: Option<&RawNumber>) -> RuleResult<u8> {
    let age = raw.and_then(coerce_integer).ok_or(AGE_NOT_A_NUMBER)?;
    if age < MIN_AGE {
        return Err(AGE_TOO_LOW);
    }
    if age > MAX_AGE {
        return Err(AGE_TOO_HIGH);
    }
    Ok(age as u8)
}

pub fn check_dependents(raw: Option<&RawNumber>) -> RuleResult<u8> {
    let dependents = raw
        .and_then(coerce_integer)
        .ok_or(DEPENDENTS_NOT_A_NUMBER)?;
    if dependents < MIN_DEPENDENTS {
        return Err(DEPENDENTS_TOO_LOW);
    }
    if dependents > MAX_DEPENDENTS {
        return Err(DEPENDENTS_TOO_HIGH);
    }
    Ok(dependents as u8)
}

pub fn check_zip_code(raw: Option<&str>) -> RuleResult<String> {
    let zip = raw.unwrap_or_default();
    if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) {
        Ok(zip.to_string())
    } else {
        Err(ZIP_CODE_INVALID)
    }
}

pub fn check_state(raw: Option<&str>, message: &'static str) -> RuleResult<String> {
    let state = raw.unwrap_or_default();
    if state.chars().count() == 2 {
        Ok(state.to_string())
    } else {
        Err(message)
    }
}

pub fn check_income(raw: Option<&str>) -> RuleResult<Income> {
    let income = raw.unwrap_or_default();
    if is_currency_text(income) {
        Ok(Income(income.to_string()))
    } else {
        Err(INCOME_INVALID)
    }
}

pub fn check_dental_plan(raw: Option<&str>) -> RuleResult<DentalPlan> {
    match raw {
        Some("yes") => Ok(DentalPlan::Yes),
        Some("no") => Ok(DentalPlan::No),
        _ => Err(DENTAL_PLAN_MISSING),
    }
}

pub fn check_risk_tolerance(raw: Option<&RawNumber>) -> RuleResult<u8> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_RISK_TOLERANCE);
    };
    match coerce_integer(raw) {
        Some(value) if (MIN_RISK_TOLERANCE..=MAX_RISK_TOLERANCE).contains(&value) => {
            Ok(value as u8)
        }
        _ => Err(RISK_TOLERANCE_OUT_OF_RANGE),
    }
}

pub fn check_consent(raw: Option<bool>) -> RuleResult<bool> {
    match raw {
        Some(true) => Ok(true),
        _ => Err(CONSENT_REQUIRED),
    }
}

/// Matches `^\$?(\d{1,3}(,\d{3})*|\d+)(\.\d{2})?$` over ASCII digits.
pub fn is_currency_text(text: &str) -> bool {
    let body = text.strip_prefix('$').unwrap_or(text);
    let (whole, cents) = match body.split_once('.') {
        Some((whole, cents)) => (whole, Some(cents)),
        None => (body, None),
    };

    if let Some(cents) = cents {
        if cents.len() != 2 || !all_digits(cents) {
            return false;
        }
    }

    is_plain_digits(whole) || is_thousands_grouped(whole)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn is_plain_digits(s: &str) -> bool {
    !s.is_empty() && all_digits(s)
}

fn is_thousands_grouped(s: &str) -> bool {
    let mut groups = s.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && all_digits(g));
    leading_ok && groups.all(|g| g.len() == 3 && all_digits(g))
}
