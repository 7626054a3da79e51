//! # eventform
//!
//! A client-side event registration form toolkit.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. You can depend on `eventform` to get the whole toolkit, or on
//! the individual crates for finer-grained control.
//!
//! ```
//! use eventform::forms::{Field, FieldValues, FormController};
//!
//! let mut form = FormController::registration(|values: &FieldValues| {
//!     println!("registered: {values:?}");
//! });
//! form.handle_change(Field::Name, "Ada");
//! form.handle_submit();
//! assert_eq!(form.error(Field::Email), Some("Email is required"));
//! ```

/// Core types: settings, logging setup, and error types.
pub use eventform_core as core;

/// Forms layer: fields, validation, the submit controller, and widgets.
pub use eventform_forms as forms;
