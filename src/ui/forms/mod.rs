//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `intake_form`: The healthcare intake form

mod field_renderer;
mod intake_form;

pub use intake_form::draw_intake_form;
