//! Apartment repository.
//!
//! # Responsibility
//! - Own the apartment collection and its `apartments.json` snapshot.
//! - Add address search on top of the generic store.

use crate::model::accommodation::Apartment;
use crate::model::EntityId;
use crate::repo::hotel_repo::search_address;
use crate::repo::store::{JsonStore, PersistenceError, RepoResult};
use std::path::Path;

const APARTMENTS_FILE: &str = "apartments.json";

/// Apartment collection backed by `apartments.json` in the data directory.
#[derive(Debug)]
pub struct ApartmentRepository {
    store: JsonStore<Apartment>,
}

impl ApartmentRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonStore::new(data_dir.join(APARTMENTS_FILE)),
        }
    }

    pub fn add(&mut self, apartment: Apartment) -> RepoResult<()> {
        self.store.add(apartment)
    }

    pub fn all(&self) -> Vec<Apartment> {
        self.store.all()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn get(&self, id: EntityId) -> RepoResult<&Apartment> {
        self.store.get(id)
    }

    pub fn update(&mut self, apartment: Apartment) -> RepoResult<()> {
        self.store.update(apartment)
    }

    pub fn remove(&mut self, id: EntityId) -> RepoResult<()> {
        self.store.remove(id)
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save()
    }

    pub fn load(&mut self) -> Result<bool, PersistenceError> {
        self.store.load()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Next free apartment id (`max + 1`, 1 when empty).
    pub fn next_id(&self) -> EntityId {
        self.store.next_id()
    }

    /// Case-insensitive substring match over addresses. A blank query
    /// matches nothing.
    pub fn search_by_address(&self, text: &str) -> Vec<Apartment> {
        search_address(self.store.iter(), text, Apartment::address)
    }
}
