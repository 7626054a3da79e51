//! # eventform-forms
//!
//! The forms layer of the eventform toolkit: the closed field set for the
//! event registration form, the pure field validator, the submit controller
//! that ties values, errors, and the success callback together, and the
//! widget/bound-field machinery for HTML rendering.
//!
//! ## Modules
//!
//! - [`fields`] - The [`Field`](fields::Field) tag enum, field definitions,
//!   and the fixed registration field set
//! - [`validation`] - The pure [`validate`](validation::validate) function
//! - [`form`] - The [`FormController`](form::FormController) state container
//! - [`widgets`] - HTML widget rendering
//! - [`bound_field`] - Fields paired with their current value and error

pub mod bound_field;
pub mod fields;
pub mod form;
pub mod validation;
pub mod widgets;

// Re-export the most commonly used types at the crate root.
pub use fields::{registration_fields, ErrorMap, Field, FieldDef, FieldValues};
pub use form::FormController;
pub use validation::validate;
