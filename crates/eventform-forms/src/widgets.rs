//! Widget rendering for form inputs.
//!
//! Widgets are the bridge between field definitions and their HTML
//! representation. Each widget knows how to render itself as HTML for a
//! given name and current value, and how to generate the `id` attribute
//! its `<label>` element should point at.

use std::collections::BTreeMap;
use std::fmt;

/// Enumerates the widget types used by the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<select>` with a fixed set of options.
    Select {
        /// Available options as `(value, display_label)` pairs. An empty
        /// value acts as the placeholder option.
        choices: Vec<(String, String)>,
    },
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::EmailInput => "EmailInput",
            Self::NumberInput => "NumberInput",
            Self::Select { .. } => "Select",
        };
        f.write_str(name)
    }
}

/// A trait for HTML form widgets.
pub trait Widget: fmt::Debug {
    /// Returns the widget type enum variant.
    fn widget_type(&self) -> WidgetType;

    /// Renders the widget as an HTML string.
    ///
    /// # Arguments
    /// - `name` - The HTML `name` attribute
    /// - `value` - The current value to display (if any)
    /// - `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &BTreeMap<String, String>) -> String;

    /// Returns the HTML `id` attribute value for a label targeting this widget.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Creates a widget instance for the given widget type.
pub fn create_widget(widget_type: &WidgetType) -> Box<dyn Widget> {
    match widget_type {
        WidgetType::TextInput => Box::new(TextInput),
        WidgetType::EmailInput => Box::new(EmailInput),
        WidgetType::NumberInput => Box::new(NumberInput),
        WidgetType::Select { choices } => Box::new(Select {
            choices: choices.clone(),
        }),
    }
}

/// Formats an HTML attributes map into a string like ` key="value" key2="value2"`.
///
/// A `BTreeMap` keeps the output deterministic for testing.
fn render_attrs(attrs: &BTreeMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{v}""#))
        .collect()
}

// ---------------------------------------------------------------------------
// Built-in widgets
// ---------------------------------------------------------------------------

/// A basic `<input type="text">` widget.
#[derive(Debug, Clone)]
pub struct TextInput;

impl Widget for TextInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::TextInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &BTreeMap<String, String>) -> String {
        let val = value.unwrap_or("");
        format!(
            r#"<input type="text" name="{name}" value="{val}"{} />"#,
            render_attrs(attrs)
        )
    }
}

/// An `<input type="email">` widget.
#[derive(Debug, Clone)]
pub struct EmailInput;

impl Widget for EmailInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::EmailInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &BTreeMap<String, String>) -> String {
        let val = value.unwrap_or("");
        format!(
            r#"<input type="email" name="{name}" value="{val}"{} />"#,
            render_attrs(attrs)
        )
    }
}

/// An `<input type="number">` widget.
#[derive(Debug, Clone)]
pub struct NumberInput;

impl Widget for NumberInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::NumberInput
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &BTreeMap<String, String>) -> String {
        let val = value.unwrap_or("");
        format!(
            r#"<input type="number" name="{name}" value="{val}"{} />"#,
            render_attrs(attrs)
        )
    }
}

/// A `<select>` widget with a fixed set of options.
#[derive(Debug, Clone)]
pub struct Select {
    /// Available options as `(value, display_label)` pairs.
    pub choices: Vec<(String, String)>,
}

impl Widget for Select {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Select {
            choices: self.choices.clone(),
        }
    }

    fn render(&self, name: &str, value: Option<&str>, attrs: &BTreeMap<String, String>) -> String {
        let current = value.unwrap_or("");
        let options: String = self
            .choices
            .iter()
            .map(|(val, label)| {
                let selected = if val == current { " selected" } else { "" };
                format!(r#"<option value="{val}"{selected}>{label}</option>"#)
            })
            .collect();
        format!(
            r#"<select name="{name}"{}>{options}</select>"#,
            render_attrs(attrs)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_text_input_render() {
        let html = TextInput.render("name", Some("Ada"), &BTreeMap::new());
        assert_eq!(html, r#"<input type="text" name="name" value="Ada" />"#);
    }

    #[test]
    fn test_text_input_render_empty_value() {
        let html = TextInput.render("name", None, &BTreeMap::new());
        assert!(html.contains(r#"value="""#));
    }

    #[test]
    fn test_email_input_render() {
        let html = EmailInput.render("email", Some("ada@example.com"), &BTreeMap::new());
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"value="ada@example.com""#));
    }

    #[test]
    fn test_number_input_render() {
        let html = NumberInput.render("age", Some("30"), &BTreeMap::new());
        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"name="age""#));
    }

    #[test]
    fn test_render_attrs_deterministic() {
        let html = TextInput.render("name", None, &attrs(&[("id", "id_name"), ("class", "row")]));
        assert!(html.ends_with(r#" class="row" id="id_name" />"#));
    }

    #[test]
    fn test_select_render_marks_current_option() {
        let select = Select {
            choices: vec![
                (String::new(), "Select".to_string()),
                ("yes".to_string(), "Yes".to_string()),
                ("no".to_string(), "No".to_string()),
            ],
        };
        let html = select.render("attendingWithGuest", Some("yes"), &BTreeMap::new());
        assert!(html.contains(r#"<option value="yes" selected>Yes</option>"#));
        assert!(html.contains(r#"<option value="no">No</option>"#));
        assert!(html.contains(r#"<option value="">Select</option>"#));
    }

    #[test]
    fn test_select_render_no_value_selects_placeholder() {
        let select = Select {
            choices: vec![
                (String::new(), "Select".to_string()),
                ("yes".to_string(), "Yes".to_string()),
            ],
        };
        let html = select.render("attendingWithGuest", None, &BTreeMap::new());
        assert!(html.contains(r#"<option value="" selected>Select</option>"#));
    }

    #[test]
    fn test_create_widget_dispatch() {
        assert_eq!(
            create_widget(&WidgetType::TextInput).widget_type(),
            WidgetType::TextInput
        );
        assert_eq!(
            create_widget(&WidgetType::EmailInput).widget_type(),
            WidgetType::EmailInput
        );
        let select = WidgetType::Select {
            choices: vec![("yes".to_string(), "Yes".to_string())],
        };
        assert_eq!(create_widget(&select).widget_type(), select);
    }

    #[test]
    fn test_widget_type_display() {
        assert_eq!(WidgetType::TextInput.to_string(), "TextInput");
        assert_eq!(
            WidgetType::Select { choices: vec![] }.to_string(),
            "Select"
        );
    }
}
