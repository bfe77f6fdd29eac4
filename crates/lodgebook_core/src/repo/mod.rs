//! Repository layer: in-memory collections with JSON snapshot persistence.
//!
//! # Responsibility
//! - Define the generic store and the per-entity repositories on top of it.
//! - Return semantic errors (`NotFound`, `Validation`) in addition to
//!   persistence transport errors.
//!
//! # Invariants
//! - Each repository exclusively owns its in-memory collection; callers only
//!   ever receive defensive copies.
//! - Write paths validate entities before mutating the collection; read
//!   paths reject invalid persisted state instead of masking it.

pub mod apartment_repo;
pub mod client_repo;
pub mod hotel_repo;
pub mod store;

pub use store::{PersistenceError, RepoError, RepoResult};
