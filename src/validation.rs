// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative field constraints shared by the request DTOs.
//!
//! Each check appends at most one [`ValidationError`] to the field's entry in
//! [`ValidationErrors`], so calling checks in declaration order yields
//! violations in declaration order. [`flatten`] then turns the map into the
//! ordered list the error envelope carries.
//!
//! | Check | Skips | Message |
//! |-------|-------|---------|
//! | [`not_blank`] | - | caller supplied |
//! | [`length`] | - | [`LengthMessages`] |
//! | [`email`] | empty | [`INVALID_EMAIL`] |
//! | [`pattern`] | empty | caller supplied |

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use validator::{ValidateEmail, ValidateLength, ValidationError, ValidationErrors};

use crate::error::FieldMessage;

/// Default message of the not-blank constraint.
pub const NOT_BLANK: &str = "This value should not be blank.";

/// Default message of the email constraint.
pub const INVALID_EMAIL: &str = "This value is not a valid email address.";

/// Ten ASCII digits.
pub static NIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("nip pattern compiles"));

/// Polish postal code, `XX-XXX`.
pub static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{3}$").expect("zip code pattern compiles"));

/// Polish phone number, `+48 ddd ddd ddd`.
pub static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+48 [0-9]{3} [0-9]{3} [0-9]{3}$").expect("phone number pattern compiles")
});

/// How length violations are worded for a field.
#[derive(Debug, Clone, Copy)]
pub enum LengthMessages {
    /// `This value is too short. It should have N characters or more.`
    Generic,

    /// `<Label> must contain at least N characters.`
    Labelled(&'static str)
}

impl LengthMessages {
    fn too_short(self, min: u64) -> String {
        match self {
            Self::Generic => {
                format!("This value is too short. It should have {min} characters or more.")
            }
            Self::Labelled(label) => format!("{label} must contain at least {min} characters.")
        }
    }

    fn too_long(self, max: u64) -> String {
        match self {
            Self::Generic => {
                format!("This value is too long. It should have {max} characters or less.")
            }
            Self::Labelled(label) => format!("{label} must contain maximum {max} characters.")
        }
    }
}

/// Build a validation error with a fixed message.
pub fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Reject absent and empty values. Returns `true` when the value is usable.
pub fn not_blank(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&String>,
    message: &'static str
) -> bool {
    match value {
        Some(value) if !value.is_empty() => true,
        _ => {
            errors.add(field, violation("not_blank", message));
            false
        }
    }
}

/// Enforce a character count between `min` and `max`, inclusive.
pub fn length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &String,
    min: u64,
    max: u64,
    messages: LengthMessages
) {
    if !value.validate_length(Some(min), None, None) {
        errors.add(field, violation("length", messages.too_short(min)));
    } else if !value.validate_length(None, Some(max), None) {
        errors.add(field, violation("length", messages.too_long(max)));
    }
}

/// Enforce a syntactically valid email address. Empty values are skipped.
pub fn email(errors: &mut ValidationErrors, field: &'static str, value: &String) {
    if !value.is_empty() && !value.validate_email() {
        errors.add(field, violation("email", INVALID_EMAIL));
    }
}

/// Enforce a regular expression. Empty values are skipped.
pub fn pattern(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    regex: &Regex,
    message: &'static str
) {
    if !value.is_empty() && !regex.is_match(value) {
        errors.add(field, violation("regex", message));
    }
}

/// Flatten validator output into `{field, message}` records.
///
/// Fields are emitted in the order of `fields`; messages of one field keep
/// the order they were recorded in. Errors on fields missing from `fields`
/// are dropped.
pub fn flatten(errors: &ValidationErrors, fields: &[&'static str]) -> Vec<FieldMessage> {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field).map(|list| (*field, list)))
        .flat_map(|(field, list)| {
            list.iter().map(move |error| {
                let message = error
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| error.code.to_string());
                FieldMessage::new(field, message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &ValidationErrors, field: &'static str) -> Vec<String> {
        flatten(errors, &[field])
            .into_iter()
            .map(|m| m.message)
            .collect()
    }

    #[test]
    fn not_blank_rejects_absent_and_empty() {
        let mut errors = ValidationErrors::new();
        assert!(!not_blank(&mut errors, "a", None, NOT_BLANK));
        assert!(!not_blank(&mut errors, "b", Some(&String::new()), NOT_BLANK));
        assert!(not_blank(&mut errors, "c", Some(&" ".to_string()), NOT_BLANK));

        assert_eq!(messages(&errors, "a"), vec![NOT_BLANK]);
        assert_eq!(messages(&errors, "b"), vec![NOT_BLANK]);
        assert!(messages(&errors, "c").is_empty());
    }

    #[test]
    fn length_counts_characters() {
        let mut errors = ValidationErrors::new();
        length(&mut errors, "city", &"Łódź".to_string(), 2, 4, LengthMessages::Generic);
        assert!(errors.is_empty());
    }

    #[test]
    fn length_words_labelled_messages() {
        let mut errors = ValidationErrors::new();
        length(&mut errors, "name", &"Te".to_string(), 3, 255, LengthMessages::Labelled("Name"));
        length(&mut errors, "city", &"1".repeat(65), 2, 64, LengthMessages::Labelled("City name"));

        assert_eq!(messages(&errors, "name"), vec!["Name must contain at least 3 characters."]);
        assert_eq!(messages(&errors, "city"), vec!["City name must contain maximum 64 characters."]);
    }

    #[test]
    fn length_words_generic_messages() {
        let mut errors = ValidationErrors::new();
        length(&mut errors, "firstName", &String::new(), 3, 86, LengthMessages::Generic);
        length(&mut errors, "lastName", &"x".repeat(87), 3, 86, LengthMessages::Generic);

        assert_eq!(
            messages(&errors, "firstName"),
            vec!["This value is too short. It should have 3 characters or more."]
        );
        assert_eq!(
            messages(&errors, "lastName"),
            vec!["This value is too long. It should have 86 characters or less."]
        );
    }

    #[test]
    fn email_skips_empty_values() {
        let mut errors = ValidationErrors::new();
        email(&mut errors, "email", &String::new());
        email(&mut errors, "email", &"john.doe@gmail.com".to_string());
        assert!(errors.is_empty());

        email(&mut errors, "email", &"wrong.email@".to_string());
        assert_eq!(messages(&errors, "email"), vec![INVALID_EMAIL]);
    }

    #[test]
    fn patterns_match_expected_formats() {
        assert!(NIP.is_match("1234567890"));
        assert!(!NIP.is_match("12345678"));
        assert!(!NIP.is_match("١٢٣٤٥٦٧٨٩٠"));
        assert!(ZIP_CODE.is_match("25-555"));
        assert!(!ZIP_CODE.is_match("254-555"));
        assert!(PHONE_NUMBER.is_match("+48 675 888 906"));
        assert!(!PHONE_NUMBER.is_match("+48 33 33 444"));
    }

    #[test]
    fn flatten_follows_given_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("b", violation("x", "second"));
        errors.add("a", violation("x", "first"));
        errors.add("b", violation("x", "third"));

        let flat = flatten(&errors, &["a", "b"]);
        assert_eq!(
            flat,
            vec![
                FieldMessage::new("a", "first"),
                FieldMessage::new("b", "second"),
                FieldMessage::new("b", "third"),
            ]
        );
    }
}
