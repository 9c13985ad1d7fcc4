//! Input validation for donor and account fields
//!
//! Validated types with private fields so malformed values cannot be
//! constructed outside this module.

use std::fmt;

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for request fields
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Phone number must be exactly 10 digits: got '{got}'")]
    PhoneNotTenDigits { got: String },

    #[error("Invalid email format: '{got}'")]
    InvalidEmail { got: String },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

// ============================================================================
// PhoneNumber - Validated Donor/Account Phone (Private Field)
// ============================================================================

/// Validated phone number (guaranteed exactly 10 ASCII digits)
///
/// The field is private to force validation through `new()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new validated PhoneNumber
    ///
    /// # Validation Rules
    /// - Exactly 10 characters after trimming
    /// - ASCII digits only
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        let phone = phone.trim();

        if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneNotTenDigits {
                got: phone.to_string(),
            });
        }

        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// EmailAddress - Validated Account Email (Private Field)
// ============================================================================

/// Validated email address (trimmed, single '@' with non-empty local part
/// and a dotted domain)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();

        let invalid = || ValidationError::InvalidEmail {
            got: email.to_string(),
        };

        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty()
            || domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || email.contains(char::is_whitespace)
        {
            return Err(invalid());
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Trim a required text field, rejecting empty values
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

/// Minimum password length shared by account creation and update
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_ten_digits() {
        let phone = PhoneNumber::new("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_phone_trims_whitespace() {
        let phone = PhoneNumber::new("  9876543210  ").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_phone_rejects_short_and_long() {
        assert!(PhoneNumber::new("12345").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(PhoneNumber::new("98765-4321").is_err());
        assert!(PhoneNumber::new("98765 4321").is_err());
    }

    #[test]
    fn test_email_accepts_normal_address() {
        let email = EmailAddress::new("librarian@branch.example.org").unwrap();
        assert_eq!(email.as_str(), "librarian@branch.example.org");
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(EmailAddress::new("no-at-sign").is_err());
        assert!(EmailAddress::new("@missing-local.org").is_err());
        assert!(EmailAddress::new("user@nodot").is_err());
        assert!(EmailAddress::new("user@.leading-dot").is_err());
        assert!(EmailAddress::new("two words@mail.org").is_err());
    }

    #[test]
    fn test_required_text_trims_and_rejects_empty() {
        assert_eq!(required_text("title", "  Atlas  ").unwrap(), "Atlas");
        assert_eq!(
            required_text("title", "   "),
            Err(ValidationError::EmptyField { field: "title" })
        );
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(check_password("short").is_err());
        assert!(check_password("longenough").is_ok());
    }
}
