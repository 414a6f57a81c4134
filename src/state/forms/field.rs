//! Form field value objects

use crate::validation::{FieldName, MAX_RISK_TOLERANCE, MIN_RISK_TOLERANCE};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Digits only, optionally capped in length
    Digits { value: String, max_len: usize },
    /// Digits with at most one `.`, shown rounded to whole dollars ("$28,000")
    Currency(String),
    /// One of a fixed list of `(value, label)` options
    Choice {
        options: &'static [(&'static str, &'static str)],
        selected: Option<usize>,
    },
    /// Integer slider within the risk tolerance range
    Slider(u8),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: &'static str,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName, placeholder: &'static str) -> Self {
        Self::with_value(name, placeholder, FieldValue::Text(String::new()))
    }

    /// Create a digits-only field
    pub fn digits(name: FieldName, placeholder: &'static str, max_len: usize) -> Self {
        Self::with_value(
            name,
            placeholder,
            FieldValue::Digits {
                value: String::new(),
                max_len,
            },
        )
    }

    /// Create a currency field
    pub fn currency(name: FieldName, placeholder: &'static str) -> Self {
        Self::with_value(name, placeholder, FieldValue::Currency(String::new()))
    }

    /// Create a selector over fixed options
    pub fn choice(
        name: FieldName,
        placeholder: &'static str,
        options: &'static [(&'static str, &'static str)],
        selected: Option<usize>,
    ) -> Self {
        Self::with_value(name, placeholder, FieldValue::Choice { options, selected })
    }

    pub fn slider(name: FieldName, value: u8) -> Self {
        Self::with_value(name, "", FieldValue::Slider(value))
    }

    pub fn checkbox(name: FieldName) -> Self {
        Self::with_value(name, "", FieldValue::Checkbox(false))
    }

    fn with_value(name: FieldName, placeholder: &'static str, value: FieldValue) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            placeholder,
            value,
        }
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(&self) -> bool {
        matches!(
            self.value,
            FieldValue::Text(_) | FieldValue::Digits { .. } | FieldValue::Currency(_)
        )
    }

    /// Raw text held by text-like fields; `None` for the rest
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Currency(s) => Some(s.as_str()),
            FieldValue::Digits { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Value of the selected option, if any
    pub fn selected_value(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i)).map(|(value, _)| *value)
            }
            _ => None,
        }
    }

    /// Push a character to the field value.
    ///
    /// Digit fields silently drop anything but ASCII digits; currency fields
    /// also keep a single decimal point.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if !c.is_control() {
                    s.push(c);
                }
            }
            FieldValue::Digits { value, max_len } => {
                if c.is_ascii_digit() && value.len() < *max_len {
                    value.push(c);
                }
            }
            FieldValue::Currency(raw) => {
                if c.is_ascii_digit() {
                    if raw == "0" {
                        raw.clear();
                    }
                    raw.push(c);
                } else if c == '.' && !raw.contains('.') {
                    raw.push(c);
                }
            }
            _ => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Currency(s) => {
                s.pop();
            }
            FieldValue::Digits { value, .. } => {
                value.pop();
            }
            _ => {}
        }
    }

    /// Step a choice or slider forward (`delta > 0`) or back
    pub fn step(&mut self, delta: i16) {
        match &mut self.value {
            FieldValue::Choice { options, selected } => {
                if options.is_empty() {
                    return;
                }
                let len = options.len() as i64;
                let next = match *selected {
                    None if delta >= 0 => 0,
                    None => len - 1,
                    Some(i) => (i as i64 + delta as i64).rem_euclid(len),
                };
                *selected = Some(next as usize);
            }
            FieldValue::Slider(v) => {
                let next =
                    (*v as i64 + delta as i64).clamp(MIN_RISK_TOLERANCE, MAX_RISK_TOLERANCE);
                *v = next as u8;
            }
            _ => {}
        }
    }

    /// Flip a checkbox; cycles a choice forward
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        } else if matches!(self.value, FieldValue::Choice { .. }) {
            self.step(1);
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Digits { value, .. } => value.clone(),
            FieldValue::Currency(raw) => format_currency(raw),
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|(_, label)| label.to_string())
                .unwrap_or_default(),
            FieldValue::Slider(v) => v.to_string(),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}

/// Format an amount as whole US dollars: "28000" -> "$28,000",
/// "1234.56" -> "$1,235".
///
/// Cents round half up. Empty input stays empty.
pub fn format_currency(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let (whole, cents) = raw.split_once('.').unwrap_or((raw, ""));
    let whole = whole.trim_start_matches('0');
    let mut dollars = if whole.is_empty() {
        "0".to_string()
    } else {
        whole.to_string()
    };
    if cents.chars().next().is_some_and(|d| d >= '5') {
        dollars = increment_digits(&dollars);
    }

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3 + 1);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

/// Add one to a decimal digit string of any length
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for d in out.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&out))
}
