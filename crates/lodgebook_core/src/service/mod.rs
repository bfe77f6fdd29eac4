//! Business services composing repositories into queryable views.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level operations.
//! - Translate repository failures into the service error taxonomy.
//!
//! # Invariants
//! - Every mutating operation persists its repository immediately after the
//!   in-memory change.
//! - Validation and not-found failures always reach the caller un-wrapped.

pub mod accommodation_service;
pub mod client_service;

use crate::model::{EntityId, ValidationError};
use crate::repo::store::{PersistenceError, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service operation error.
#[derive(Debug)]
pub enum ServiceError {
    /// An entity field or uniqueness rule was violated. Expected outcome,
    /// meant to be caught and displayed.
    Validation(ValidationError),
    /// The referenced id exists in none of the consulted collections.
    NotFound { kind: &'static str, id: EntityId },
    /// Reading or writing a backing file failed.
    Persistence(PersistenceError),
    /// Unexpected failure during a service operation, re-raised with its
    /// original cause as one uniform signal.
    Operation {
        context: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} with id {id} not found"),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Operation { context, source } => {
                write!(f, "operation `{context}` failed: {source}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Persistence(err) => Some(err),
            Self::Operation { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            RepoError::Persistence(err) => Self::Persistence(err),
        }
    }
}

/// Best-effort startup load shared by both service constructors: the single
/// sanctioned place a persistence failure is swallowed, traded for starting
/// from an empty collection.
pub(crate) fn log_discarded_load(kind: &str, outcome: Result<bool, PersistenceError>) {
    match outcome {
        Ok(loaded) => {
            info!("event=store_loaded module=service kind={kind} loaded={loaded}");
        }
        Err(err) => {
            warn!("event=store_load_discarded module=service kind={kind} err={err} action=start_empty");
        }
    }
}
