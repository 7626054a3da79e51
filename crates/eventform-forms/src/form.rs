//! The form controller — field state, submit gating, and rendering.
//!
//! [`FormController`] is the state container behind the registration form.
//! It tracks the current field values, the error map from the latest
//! submit attempt, and a transient submitting flag, and invokes a
//! caller-supplied success callback when a submit attempt validates
//! cleanly.
//!
//! Resolution is deliberately synchronous: a submit computes the full
//! error snapshot and, if it is empty, calls the success callback right
//! there in the submit handler. There is no deferred effect to race with,
//! so a second submit cannot overlap the resolution of the first.

use crate::bound_field::BoundField;
use crate::fields::{registration_fields, ErrorMap, Field, FieldValues};
use crate::validation;

/// The validator signature: a pure function from values to errors.
pub type Validator = fn(&FieldValues) -> ErrorMap;

/// State container for the registration form.
///
/// Generic over the success callback, which receives a snapshot of the
/// current values when a submit attempt produces no errors. The callback
/// fires at most once per submit attempt.
pub struct FormController<C>
where
    C: FnMut(&FieldValues),
{
    values: FieldValues,
    errors: ErrorMap,
    submitting: bool,
    accepted: Option<FieldValues>,
    validator: Validator,
    on_success: C,
}

impl<C> FormController<C>
where
    C: FnMut(&FieldValues),
{
    /// Creates a controller with an explicit validator.
    pub fn new(validator: Validator, on_success: C) -> Self {
        Self {
            values: FieldValues::new(),
            errors: ErrorMap::new(),
            submitting: false,
            accepted: None,
            validator,
            on_success,
        }
    }

    /// Creates a controller wired to the registration rules.
    pub fn registration(on_success: C) -> Self {
        Self::new(validation::validate, on_success)
    }

    /// Records a field edit. Upserts `values[field] = value`; last write
    /// wins. No validation runs until submit.
    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = %field, value = %value, "field changed");
        self.values.insert(field, value);
    }

    /// Handles a submit attempt.
    ///
    /// Runs the validator over the current values, replaces the error map
    /// with the fresh snapshot, and resolves: if the snapshot is empty,
    /// records the accepted values and invokes the success callback once
    /// with them. The submitting flag is raised for the duration of the
    /// resolution and cleared before this method returns.
    pub fn handle_submit(&mut self) {
        self.errors = (self.validator)(&self.values);
        self.submitting = true;

        if self.errors.is_empty() {
            tracing::info!("submit accepted");
            self.accepted = Some(self.values.clone());
            (self.on_success)(&self.values);
        } else {
            tracing::info!(error_count = self.errors.len(), "submit rejected");
            self.accepted = None;
        }
        self.submitting = false;
    }

    /// Returns the current field values.
    pub const fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Returns the error map from the latest submit attempt.
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns `true` while a submit attempt is being resolved.
    ///
    /// Resolution is synchronous, so from the caller's side this is only
    /// ever observed as `false`; the flag is the gate an asynchronous
    /// success callback would need.
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the values accepted by the latest submit attempt, or `None`
    /// if that attempt failed validation (or no submit happened yet).
    pub fn accepted(&self) -> Option<&FieldValues> {
        self.accepted.as_ref()
    }

    /// Returns the current value of a single field, if set.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Returns the error of a single field from the latest submit, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns bound fields for the currently visible form rows.
    ///
    /// The guest-name row only appears while "attending with a guest" is
    /// answered "yes"; hiding it is presentation, the validator makes the
    /// same call independently.
    pub fn bound_fields(&self) -> Vec<BoundField> {
        let with_guest = self.value(Field::AttendingWithGuest) == Some("yes");
        registration_fields()
            .iter()
            .filter(|def| def.field != Field::GuestName || with_guest)
            .map(|def| {
                BoundField::new(
                    def,
                    self.value(def.field).map(String::from),
                    self.error(def.field).map(String::from),
                )
            })
            .collect()
    }

    /// Renders the whole form as HTML: every visible row, the submit
    /// button, and — after a submit that validated cleanly — the accepted
    /// values as a pretty-JSON confirmation block.
    pub fn as_html(&self) -> String {
        let rows: String = self
            .bound_fields()
            .iter()
            .map(|bf| bf.as_row())
            .collect();
        let confirmation = self.accepted.as_ref().map_or_else(String::new, |values| {
            format!(
                r#"<div class="form-data"><h3>Form Data:</h3><pre>{}</pre></div>"#,
                values_as_pretty_json(values)
            )
        });
        format!(
            r#"<form id="event-registration">{rows}<button type="submit">Submit</button>{confirmation}</form>"#
        )
    }
}

impl<C> std::fmt::Debug for FormController<C>
where
    C: FnMut(&FieldValues),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}

/// Renders accepted values as the pretty-printed JSON confirmation block,
/// with wire-name keys in display order.
pub fn values_as_pretty_json(values: &FieldValues) -> String {
    serde_json::to_string_pretty(values).unwrap_or_else(|_| "{}".to_string())
}
