//! Hotel repository.
//!
//! # Responsibility
//! - Own the hotel collection and its `hotels.json` snapshot.
//! - Add address search and price ranking on top of the generic store.

use crate::model::accommodation::Hotel;
use crate::model::EntityId;
use crate::repo::store::{JsonStore, PersistenceError, RepoResult};
use std::cmp::Ordering;
use std::path::Path;

const HOTELS_FILE: &str = "hotels.json";

/// Hotel collection backed by `hotels.json` in the data directory.
#[derive(Debug)]
pub struct HotelRepository {
    store: JsonStore<Hotel>,
}

impl HotelRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonStore::new(data_dir.join(HOTELS_FILE)),
        }
    }

    pub fn add(&mut self, hotel: Hotel) -> RepoResult<()> {
        self.store.add(hotel)
    }

    pub fn all(&self) -> Vec<Hotel> {
        self.store.all()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn get(&self, id: EntityId) -> RepoResult<&Hotel> {
        self.store.get(id)
    }

    pub fn update(&mut self, hotel: Hotel) -> RepoResult<()> {
        self.store.update(hotel)
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

    /// Next free hotel id (`max + 1`, 1 when empty).
    pub fn next_id(&self) -> EntityId {
        self.store.next_id()
    }

    /// Case-insensitive substring match over addresses. A blank query
    /// matches nothing.
    pub fn search_by_address(&self, text: &str) -> Vec<Hotel> {
        search_address(self.store.iter(), text, Hotel::address)
    }

    /// The `limit` most expensive hotels, descending by price.
    pub fn top_by_price(&self, limit: usize) -> Vec<Hotel> {
        let mut hotels = self.store.all();
        hotels.sort_by(|a, b| descending_price(a.price_per_night(), b.price_per_night()));
        hotels.truncate(limit);
        hotels
    }
}

/// Shared address filter for lodging repositories.
pub(crate) fn search_address<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    text: &str,
    address: impl Fn(&T) -> &str,
) -> Vec<T> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    items
        .filter(|item| address(item).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub(crate) fn descending_price(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
