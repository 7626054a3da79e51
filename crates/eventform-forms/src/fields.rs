//! Field definitions for the event registration form.
//!
//! The field set is closed by design: [`Field`] enumerates every field the
//! form knows about, so an unknown field name cannot be represented at all.
//! [`FieldDef`] carries the per-field presentation metadata (label, widget,
//! required flag) and [`registration_fields`] returns the fixed five-field
//! definition set in display order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::widgets::WidgetType;

/// A field of the registration form, as a closed set of tags.
///
/// Variants are declared in display order, so ordered maps keyed by `Field`
/// iterate in the order the form renders its rows. Serialization uses the
/// wire names (`name`, `email`, `age`, `attendingWithGuest`, `guestName`),
/// which also serve as the HTML `name` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// The registrant's name.
    #[serde(rename = "name")]
    Name,
    /// The registrant's email address.
    #[serde(rename = "email")]
    Email,
    /// The registrant's age.
    #[serde(rename = "age")]
    Age,
    /// Whether the registrant is attending with a guest ("", "yes", "no").
    #[serde(rename = "attendingWithGuest")]
    AttendingWithGuest,
    /// The guest's name, relevant only when attending with a guest.
    #[serde(rename = "guestName")]
    GuestName,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Age,
        Self::AttendingWithGuest,
        Self::GuestName,
    ];

    /// Returns the wire name (HTML `name` attribute) for this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::AttendingWithGuest => "attendingWithGuest",
            Self::GuestName => "guestName",
        }
    }

    /// Looks up a field by its wire name.
    ///
    /// Returns `None` for unknown names; the schema is closed, so there is
    /// no catch-all variant to absorb them.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current raw string values of the form, keyed by field.
///
/// An absent key is equivalent to an empty value. Serializes as a JSON
/// object with wire-name keys, in display order.
pub type FieldValues = BTreeMap<Field, String>;

/// Validation errors keyed by field, one message per field.
///
/// Produced fresh on every submit attempt; an empty map means the form
/// is valid.
pub type ErrorMap = BTreeMap<Field, String>;

/// Presentation metadata for a single form field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// The field this definition describes.
    pub field: Field,
    /// Human-readable label.
    pub label: String,
    /// The widget used to render the input element.
    pub widget: WidgetType,
    /// Whether the field is unconditionally required.
    ///
    /// This flag is presentation metadata only; the actual requiredness
    /// rules (including the conditional guest-name rule) live in
    /// [`validate`](crate::validation::validate).
    pub required: bool,
}

impl FieldDef {
    /// Creates a new `FieldDef` with the given label and widget.
    pub fn new(field: Field, label: impl Into<String>, widget: WidgetType) -> Self {
        Self {
            field,
            label: label.into(),
            widget,
            required: true,
        }
    }

    /// Sets whether this field is unconditionally required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Returns the fixed field definitions of the registration form, in
/// display order.
pub fn registration_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new(Field::Name, "Name", WidgetType::TextInput),
        FieldDef::new(Field::Email, "Email", WidgetType::EmailInput),
        FieldDef::new(Field::Age, "Age", WidgetType::NumberInput),
        FieldDef::new(
            Field::AttendingWithGuest,
            "Are you attending with a guest?",
            WidgetType::Select {
                choices: vec![
                    (String::new(), "Select".to_string()),
                    ("yes".to_string(), "Yes".to_string()),
                    ("no".to_string(), "No".to_string()),
                ],
            },
        )
        .required(false),
        FieldDef::new(Field::GuestName, "Guest Name", WidgetType::TextInput).required(false),
    ]
}
