//! Core domain logic for Lodgebook, a lodging and client management system.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::accommodation::{Accommodation, Apartment, Hotel};
pub use model::client::Client;
pub use model::{Entity, EntityId, ValidationError};
pub use repo::apartment_repo::ApartmentRepository;
pub use repo::client_repo::ClientRepository;
pub use repo::hotel_repo::HotelRepository;
pub use repo::store::{JsonStore, PersistenceError, RepoError, RepoResult};
pub use service::accommodation_service::{AccommodationService, Statistics};
pub use service::client_service::ClientService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
