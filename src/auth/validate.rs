//! Field validation for registration and login payloads.
//!
//! Validation is independent of the web framework: it consumes the
//! deserialized payload and returns either the validated input or a
//! field-keyed error map ready for a 422 response.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "The name field is required.";
pub const EMAIL_REQUIRED: &str = "The email field is required.";
pub const EMAIL_INVALID: &str = "The email must be a valid email address.";
pub const EMAIL_TAKEN: &str = "The email has already been taken.";
pub const PASSWORD_REQUIRED: &str = "The password field is required.";
pub const PASSWORD_UNCONFIRMED: &str = "The password confirmation does not match.";

/// Registration payload. Fields are optional so that missing keys surface
/// as field errors instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub password_confirmation: Option<SecretString>,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

/// Validated registration input with a normalized email.
#[derive(Debug)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Validated login input with a normalized email.
#[derive(Debug)]
pub struct LoginAttempt {
    pub email: String,
    pub password: SecretString,
}

/// Messages keyed by field name, serialized as `{"field": ["message"]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    #[must_use]
    pub fn of(field: &str, message: &str) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Normalize an email for lookup/uniqueness checks.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
pub(crate) fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}

/// Validate a registration payload.
///
/// # Errors
///
/// Returns the field-keyed error map when any rule fails. Email uniqueness
/// is checked later against the credential store.
pub fn validate_register(request: RegisterRequest) -> Result<NewRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    if name.is_none() {
        errors.add("name", NAME_REQUIRED);
    }

    let email = request.email.as_deref().map(normalize_email);
    match email.as_deref() {
        None | Some("") => errors.add("email", EMAIL_REQUIRED),
        Some(email) if !valid_email(email) => errors.add("email", EMAIL_INVALID),
        Some(_) => {}
    }

    let password = match request.password {
        Some(password) if !password.expose_secret().is_empty() => {
            let confirmed = request
                .password_confirmation
                .as_ref()
                .is_some_and(|confirmation| {
                    confirmation.expose_secret() == password.expose_secret()
                });
            if confirmed {
                Some(password)
            } else {
                errors.add("password", PASSWORD_UNCONFIRMED);
                None
            }
        }
        _ => {
            errors.add("password", PASSWORD_REQUIRED);
            None
        }
    };

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(NewRegistration {
            name,
            email,
            password,
        }),
        _ => Err(errors),
    }
}

/// Validate a login payload.
///
/// # Errors
///
/// Returns the field-keyed error map when any rule fails.
pub fn validate_login(request: LoginRequest) -> Result<LoginAttempt, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let email = request.email.as_deref().map(normalize_email);
    match email.as_deref() {
        None | Some("") => errors.add("email", EMAIL_REQUIRED),
        Some(email) if !valid_email(email) => errors.add("email", EMAIL_INVALID),
        Some(_) => {}
    }

    let password = request
        .password
        .filter(|password| !password.expose_secret().is_empty());
    if password.is_none() {
        errors.add("password", PASSWORD_REQUIRED);
    }

    match (email, password) {
        (Some(email), Some(password)) if errors.is_empty() => {
            Ok(LoginAttempt { email, password })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn register_request(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        confirmation: Option<&str>,
    ) -> RegisterRequest {
        RegisterRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            password: password.map(secret),
            password_confirmation: confirmation.map(secret),
        }
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@example.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-at.example.com"));
        assert!(!valid_email("missing-domain@"));
    }

    #[test]
    fn register_accepts_valid_payload() {
        let request = register_request(
            Some(" Ashutosh "),
            Some("A@x.com"),
            Some("ashu123"),
            Some("ashu123"),
        );
        let validated = validate_register(request).unwrap();
        assert_eq!(validated.name, "Ashutosh");
        assert_eq!(validated.email, "a@x.com");
        assert_eq!(validated.password.expose_secret(), "ashu123");
    }

    #[test]
    fn register_collects_all_missing_fields() {
        let request = register_request(None, None, None, None);
        let errors = validate_register(request).unwrap_err();
        assert_eq!(errors.field("name"), Some(&[NAME_REQUIRED.to_string()][..]));
        assert_eq!(
            errors.field("email"),
            Some(&[EMAIL_REQUIRED.to_string()][..])
        );
        assert_eq!(
            errors.field("password"),
            Some(&[PASSWORD_REQUIRED.to_string()][..])
        );
    }

    #[test]
    fn register_rejects_blank_name() {
        let request = register_request(Some("   "), Some("a@x.com"), Some("pw"), Some("pw"));
        let errors = validate_register(request).unwrap_err();
        assert_eq!(errors.field("name"), Some(&[NAME_REQUIRED.to_string()][..]));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let request = register_request(Some("Ashutosh"), Some("nope"), Some("pw"), Some("pw"));
        let errors = validate_register(request).unwrap_err();
        assert_eq!(errors.field("email"), Some(&[EMAIL_INVALID.to_string()][..]));
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let request = register_request(
            Some("Ashutosh"),
            Some("a@x.com"),
            Some("ashu123"),
            Some("other"),
        );
        let errors = validate_register(request).unwrap_err();
        assert_eq!(
            errors.field("password"),
            Some(&[PASSWORD_UNCONFIRMED.to_string()][..])
        );
    }

    #[test]
    fn register_rejects_missing_confirmation() {
        let request = register_request(Some("Ashutosh"), Some("a@x.com"), Some("ashu123"), None);
        let errors = validate_register(request).unwrap_err();
        assert_eq!(
            errors.field("password"),
            Some(&[PASSWORD_UNCONFIRMED.to_string()][..])
        );
    }

    #[test]
    fn login_accepts_valid_payload() {
        let request = LoginRequest {
            email: Some(" A@X.com ".to_string()),
            password: Some(secret("ashu123")),
        };
        let attempt = validate_login(request).unwrap();
        assert_eq!(attempt.email, "a@x.com");
    }

    #[test]
    fn login_requires_both_fields() {
        let request = LoginRequest {
            email: None,
            password: None,
        };
        let errors = validate_login(request).unwrap_err();
        assert_eq!(
            errors.field("email"),
            Some(&[EMAIL_REQUIRED.to_string()][..])
        );
        assert_eq!(
            errors.field("password"),
            Some(&[PASSWORD_REQUIRED.to_string()][..])
        );
    }

    #[test]
    fn login_rejects_malformed_email() {
        let request = LoginRequest {
            email: Some("nope".to_string()),
            password: Some(secret("pw")),
        };
        let errors = validate_login(request).unwrap_err();
        assert_eq!(errors.field("email"), Some(&[EMAIL_INVALID.to_string()][..]));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("email", EMAIL_TAKEN);
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "email": [EMAIL_TAKEN] })
        );
    }
}
