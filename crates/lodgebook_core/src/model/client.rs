//! Client domain model.
//!
//! # Responsibility
//! - Define the customer record with name/email/phone invariants.
//! - Normalize phone input to its digits at construction time.
//!
//! # Invariants
//! - `email` matches the single-`@`, dotted-domain pattern.
//! - `phone` is either empty (not provided) or at least 9 digits.

use crate::model::{validate_id, Entity, EntityId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const MIN_NAME_CHARS: usize = 3;
const MIN_PHONE_DIGITS: usize = 9;

/// Customer record stored by the client repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: EntityId,
    name: String,
    email: String,
    phone: String,
}

impl Client {
    /// Builds a validated client.
    ///
    /// A blank `phone` is stored as the empty string ("not provided"); a
    /// non-blank one is reduced to its digits and must keep at least 9.
    ///
    /// # Errors
    /// - `id` not positive, name shorter than 3 characters after trimming,
    ///   malformed email or a provided phone with fewer than 9 digits.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        validate_id(id)?;
        validate_name(&name)?;
        validate_email(&email)?;
        let phone = normalize_phone(phone)?;
        Ok(Self {
            id,
            name,
            email,
            phone,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Digits-only phone number, empty when none was provided.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phone = normalize_phone(phone)?;
        Ok(())
    }

    /// Multi-line detail text for presentation callers.
    pub fn describe(&self) -> String {
        format!(
            "Client #{}: {}\nEmail: {}\nPhone: {}",
            self.id,
            self.name,
            self.email,
            if self.phone.is_empty() {
                "not provided"
            } else {
                &self.phone
            }
        )
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} - {}", self.id, self.name, self.email)
    }
}

impl Entity for Client {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "client"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        // Persisted phones are already digit-normalized; re-check the digit
        // floor so a tampered file cannot smuggle a short number back in.
        if !self.phone.is_empty() && self.phone.chars().filter(char::is_ascii_digit).count()
            < MIN_PHONE_DIGITS
        {
            return Err(phone_too_short());
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::new(
            "name",
            "name must have at least 3 characters",
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("email", "malformed email address"));
    }
    Ok(())
}

/// Reduces phone input to its digits.
///
/// Blank input is "not provided" and maps to the empty string; anything else
/// must keep at least 9 digits after filtering.
fn normalize_phone(phone: &str) -> Result<String, ValidationError> {
    if phone.trim().is_empty() {
        return Ok(String::new());
    }
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.chars().count() < MIN_PHONE_DIGITS {
        return Err(phone_too_short());
    }
    Ok(digits)
}

fn phone_too_short() -> ValidationError {
    ValidationError::new("phone", "phone must have at least 9 digits")
}

#[cfg(test)]
mod tests {
    use super::{normalize_phone, Client};

    #[test]
    fn phone_keeps_digits_only() {
        assert_eq!(normalize_phone("+351 912-345-678").unwrap(), "351912345678");
        assert_eq!(normalize_phone("   ").unwrap(), "");
        assert!(normalize_phone("12 34").is_err());
    }

    #[test]
    fn email_must_have_single_at_and_dotted_domain() {
        for bad in ["plain", "two@@ats.pt", "no@dot", "sp ace@mail.pt", "a@b@c.pt"] {
            let err = Client::new(1, "Ana Santos", bad, "").unwrap_err();
            assert_eq!(err.field, "email");
        }
        assert!(Client::new(1, "Ana Santos", "ana@mail.pt", "").is_ok());
    }

    #[test]
    fn name_is_measured_after_trim() {
        assert!(Client::new(1, "  ab  ", "ana@mail.pt", "").is_err());
        assert!(Client::new(1, " abc ", "ana@mail.pt", "").is_ok());
    }
}
