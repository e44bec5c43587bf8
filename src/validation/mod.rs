//! Theme validation.
//!
//! Checks a parsed theme for problems that would break the generated
//! layout (errors) or that look like mistakes but are harmless to the
//! pipeline (warnings). Colour values are deliberately only warned
//! about: they pass through to the documents verbatim.

mod checks;
mod warning;

pub use checks::validate_theme;
pub use warning::{Diagnostic, Severity, ValidationResult};
