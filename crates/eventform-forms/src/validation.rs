//! The field validator for the registration form.
//!
//! [`validate`] is a pure function from a [`FieldValues`] map to an
//! [`ErrorMap`]: deterministic, no side effects, no I/O. It is re-run in
//! full on every submit attempt, so the returned map is always a complete,
//! consistent snapshot. At most one message is recorded per field; the
//! required check short-circuits the format check.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::{ErrorMap, Field, FieldValues};

/// Non-whitespace, "@", non-whitespace, ".", non-whitespace, anywhere in
/// the value.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Validates the form values against the registration rules.
///
/// Rules:
/// - `name`: required.
/// - `email`: required; if present, must match [`EMAIL_RE`].
/// - `age`: required; if present, must be a number greater than 0.
/// - `guestName`: required only when `attendingWithGuest` is `"yes"`.
///
/// An empty result means the form is valid. Error map keys are always a
/// subset of the four fields above.
pub fn validate(values: &FieldValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if filled(values, Field::Name).is_none() {
        errors.insert(Field::Name, "Name is required".to_string());
    }

    match filled(values, Field::Email) {
        None => {
            errors.insert(Field::Email, "Email is required".to_string());
        }
        Some(email) if !EMAIL_RE.is_match(email) => {
            errors.insert(Field::Email, "Email address is invalid".to_string());
        }
        Some(_) => {}
    }

    match filled(values, Field::Age) {
        None => {
            errors.insert(Field::Age, "Age is required".to_string());
        }
        Some(age) if !is_positive_number(age) => {
            errors.insert(
                Field::Age,
                "Age must be a number greater than 0".to_string(),
            );
        }
        Some(_) => {}
    }

    let with_guest = values.get(&Field::AttendingWithGuest).map(String::as_str) == Some("yes");
    if with_guest && filled(values, Field::GuestName).is_none() {
        errors.insert(Field::GuestName, "Guest Name is required".to_string());
    }

    errors
}

/// Returns the field's value if it is present and non-empty.
///
/// An absent key and an empty string are equivalent: both count as
/// "not filled" for the required checks.
fn filled(values: &FieldValues, field: Field) -> Option<&str> {
    values
        .get(&field)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Returns `true` if `raw` parses as a finite number greater than zero.
///
/// Fractional and signed values are accepted and surrounding whitespace
/// is ignored. Only decimal notation counts as numeric: hexadecimal
/// strings and infinities are rejected.
fn is_positive_number(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(Field, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(f, v)| (*f, (*v).to_string()))
            .collect()
    }

    fn complete() -> FieldValues {
        values(&[
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Age, "30"),
            (Field::AttendingWithGuest, "no"),
        ])
    }

    #[test]
    fn test_valid_values_produce_no_errors() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn test_empty_values_produce_required_errors() {
        let errors = validate(&FieldValues::new());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(&Field::Name).unwrap(), "Name is required");
        assert_eq!(errors.get(&Field::Email).unwrap(), "Email is required");
        assert_eq!(errors.get(&Field::Age).unwrap(), "Age is required");
        assert!(!errors.contains_key(&Field::GuestName));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut vals = complete();
        vals.insert(Field::Name, String::new());
        let errors = validate(&vals);
        assert_eq!(errors.get(&Field::Name).unwrap(), "Name is required");
    }

    #[test]
    fn test_email_format_check() {
        let mut vals = complete();
        vals.insert(Field::Email, "not-an-email".to_string());
        let errors = validate(&vals);
        assert_eq!(
            errors.get(&Field::Email).unwrap(),
            "Email address is invalid"
        );
    }

    #[test]
    fn test_email_required_short_circuits_format_check() {
        let mut vals = complete();
        vals.remove(&Field::Email);
        let errors = validate(&vals);
        assert_eq!(errors.get(&Field::Email).unwrap(), "Email is required");
    }

    #[test]
    fn test_email_pattern_matches_anywhere() {
        // The pattern is a search, not an anchored match.
        let mut vals = complete();
        vals.insert(Field::Email, "say hi at bo@x.com please".to_string());
        assert!(validate(&vals).is_empty());
    }

    #[test]
    fn test_age_must_be_numeric() {
        let mut vals = complete();
        vals.insert(Field::Age, "abc".to_string());
        let errors = validate(&vals);
        assert_eq!(
            errors.get(&Field::Age).unwrap(),
            "Age must be a number greater than 0"
        );
    }

    #[test]
    fn test_age_must_be_positive() {
        for age in ["-5", "0", "-0.5"] {
            let mut vals = complete();
            vals.insert(Field::Age, age.to_string());
            let errors = validate(&vals);
            assert_eq!(
                errors.get(&Field::Age).unwrap(),
                "Age must be a number greater than 0",
                "age = {age:?}"
            );
        }
    }

    #[test]
    fn test_age_accepts_fractional_and_padded_values() {
        for age in ["30", "0.5", " 22 "] {
            let mut vals = complete();
            vals.insert(Field::Age, age.to_string());
            assert!(validate(&vals).is_empty(), "age = {age:?}");
        }
    }

    #[test]
    fn test_age_rejects_non_decimal_forms() {
        // Decimal notation only: hex and infinities are not numbers here.
        for age in ["0x10", "Infinity", "inf", "1e999"] {
            let mut vals = complete();
            vals.insert(Field::Age, age.to_string());
            let errors = validate(&vals);
            assert_eq!(
                errors.get(&Field::Age).unwrap(),
                "Age must be a number greater than 0",
                "age = {age:?}"
            );
        }
    }

    #[test]
    fn test_guest_name_required_when_attending_with_guest() {
        let mut vals = complete();
        vals.insert(Field::AttendingWithGuest, "yes".to_string());
        let errors = validate(&vals);
        assert_eq!(
            errors.get(&Field::GuestName).unwrap(),
            "Guest Name is required"
        );
    }

    #[test]
    fn test_guest_name_not_required_otherwise() {
        // "no" and unset both skip the guest rule.
        let vals = complete();
        assert!(validate(&vals).is_empty());

        let mut vals = complete();
        vals.remove(&Field::AttendingWithGuest);
        assert!(validate(&vals).is_empty());
    }

    #[test]
    fn test_guest_name_satisfies_conditional_rule() {
        let mut vals = complete();
        vals.insert(Field::AttendingWithGuest, "yes".to_string());
        vals.insert(Field::GuestName, "Grace".to_string());
        assert!(validate(&vals).is_empty());
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let vals = values(&[
            (Field::Email, "nope"),
            (Field::Age, "-1"),
            (Field::AttendingWithGuest, "yes"),
        ]);
        let errors = validate(&vals);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Age));
        assert!(errors.contains_key(&Field::GuestName));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let vals = values(&[(Field::Email, "nope"), (Field::Age, "abc")]);
        assert_eq!(validate(&vals), validate(&vals));
    }
}
