//! Form domain layer
//!
//! Type-safe values for the profile form, required-field validation and the
//! controller that tracks touched fields and errors.

mod field;
mod form_state;
mod validation;

pub use field::{Choice, Country, FieldName, FieldValue, FormValues, Gender, Hobby};
pub use form_state::{Form, FormController};
pub use validation::FormErrors;
