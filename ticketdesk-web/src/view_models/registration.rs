//! Validation logic for the registration form.
//!
//! Each field has its own check so the form can flag the first offending
//! input; [`RegistrationForm::validate`] runs them in display order.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::{RegisterRequest, UserRole};

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required(&'static str),
    /// Email address does not look like `name@domain.tld`
    InvalidEmail,
    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    PasswordTooShort,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{field} is required"),
            Self::InvalidEmail => f.write_str("Enter a valid email address"),
            Self::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
            Self::PasswordsDoNotMatch => f.write_str("Passwords do not match"),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("Name"));
    }
    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must look like `name@domain.tld`
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if !EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(trimmed))
    {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::Required("Password confirmation"));
    }
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Values typed into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_confirm_password(&self.confirm_password, &self.password)
    }

    /// The request body for `POST /auth/register`. Self-service accounts are
    /// always clients.
    pub fn to_request(&self) -> Result<RegisterRequest, ValidationError> {
        self.validate()?;
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: UserRole::Client.as_str().to_string(),
        })
    }
}
