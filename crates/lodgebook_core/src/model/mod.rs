//! Domain models for lodging units and clients.
//!
//! # Responsibility
//! - Define the validated entity records stored by the repository layer.
//! - Keep every invariant enforced at construction and on field mutation.
//!
//! # Invariants
//! - No partially-constructed entity is ever observable: constructors and
//!   setters return `ValidationError` before any state becomes visible.
//! - Every entity is identified by a positive `EntityId`.

pub mod accommodation;
pub mod client;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Positive integer identifier shared by all entity types.
pub type EntityId = u32;

/// Invalid field value on an entity constructor or setter.
///
/// Carries the offending field name plus a human-readable message; callers
/// (typically the presentation layer) are expected to catch and display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Entity field that violated its invariant.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for `{}`: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

/// Contract every stored entity fulfils towards the repository layer.
///
/// # Invariants
/// - `validate` must pass for any value produced by a constructor or setter;
///   it exists so repository read paths can reject tampered persisted state.
pub trait Entity {
    /// Stable identifier, unique within one repository.
    fn id(&self) -> EntityId;
    /// Entity kind label used in not-found errors and log events.
    fn kind() -> &'static str;
    /// Re-checks every field invariant.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn validate_id(id: EntityId) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::new("id", "id must be greater than zero"));
    }
    Ok(())
}

pub(crate) fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::new("address", "address cannot be blank"));
    }
    Ok(())
}

pub(crate) fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new(
            "price_per_night",
            "price per night must be a non-negative number",
        ));
    }
    Ok(())
}
