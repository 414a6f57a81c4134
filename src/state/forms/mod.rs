//! Form domain layer
//!
//! Type-safe field values and the intake form they make up. The form only
//! holds keystroke-level state; [`IntakeForm::snapshot`] hands an immutable
//! copy to validation at submit time.

mod field;
mod form_state;
mod us_states;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, IntakeForm};
