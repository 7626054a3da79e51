//! Bound fields — field definitions paired with their current state.
//!
//! A [`BoundField`] combines a [`FieldDef`](crate::fields::FieldDef) with
//! the value currently held by the controller and the error (if any) from
//! the latest submit attempt. It is the unit of rendering: each bound
//! field produces one form row with a label, the input element, and the
//! error message beneath it.

use std::collections::BTreeMap;

use crate::fields::FieldDef;
use crate::widgets::{self, Widget};

/// A form field bound to its current value and validation state.
pub struct BoundField {
    /// The field's HTML name attribute.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Whether the field is unconditionally required.
    pub required: bool,
    /// The current raw value, if any.
    pub value: Option<String>,
    /// The validation error from the latest submit attempt, if any.
    pub error: Option<String>,
    /// The widget instance used for rendering.
    widget: Box<dyn Widget>,
}

impl BoundField {
    /// Creates a new `BoundField` from a field definition and current state.
    pub fn new(def: &FieldDef, value: Option<String>, error: Option<String>) -> Self {
        Self {
            name: def.field.as_str().to_string(),
            label: def.label.clone(),
            required: def.required,
            value,
            error,
            widget: widgets::create_widget(&def.widget),
        }
    }

    /// Returns the auto-generated HTML `id` for this field.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.name)
    }

    /// Returns `true` if this field has a validation error.
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Renders the input element for this field.
    pub fn render(&self, extra_attrs: &BTreeMap<String, String>) -> String {
        let mut attrs = extra_attrs.clone();
        attrs.entry("id".to_string()).or_insert_with(|| self.auto_id());
        self.widget.render(&self.name, self.value.as_deref(), &attrs)
    }

    /// Renders a `<label>` element for this field.
    pub fn label_tag(&self) -> String {
        let label_id = self.widget.id_for_label(&self.auto_id());
        format!(r#"<label for="{label_id}">{}:</label>"#, self.label)
    }

    /// Renders the error message as an HTML paragraph, or an empty string
    /// if the field has no error.
    pub fn error_html(&self) -> String {
        self.error.as_ref().map_or_else(String::new, |msg| {
            format!(r#"<p class="field-error">{msg}</p>"#)
        })
    }

    /// Renders the complete form row: label, input, and error message.
    pub fn as_row(&self) -> String {
        format!(
            r#"<div class="form-row">{}{}{}</div>"#,
            self.label_tag(),
            self.render(&BTreeMap::new()),
            self.error_html()
        )
    }
}
