//! Aggregated lodging service.
//!
//! # Responsibility
//! - Compose the hotel and apartment repositories into one polymorphic,
//!   searchable, sortable view with statistics.
//! - Issue accommodation ids from a single sequence spanning both
//!   repositories, so a hotel and an apartment can never share an id.
//!
//! # Invariants
//! - `list_all` is hotels-then-apartments in insertion order, never a merged
//!   sort.
//! - Every mutating call saves the changed repository before returning.
//! - The constructor's load is best-effort: a persistence failure is logged
//!   and discarded, starting from an empty collection.

use crate::model::accommodation::{Accommodation, Apartment, Hotel};
use crate::model::EntityId;
use crate::repo::apartment_repo::ApartmentRepository;
use crate::repo::hotel_repo::{descending_price, HotelRepository};
use crate::service::{log_discarded_load, ServiceError, ServiceResult};
use log::info;
use std::path::Path;

/// Price and count summary over the combined lodging view.
///
/// All numeric fields are zero when the view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub total: usize,
    pub hotels: usize,
    pub apartments: usize,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Unified view over the hotel and apartment repositories.
pub struct AccommodationService {
    hotels: HotelRepository,
    apartments: ApartmentRepository,
}

impl AccommodationService {
    /// Opens the service over `data_dir`, loading whatever snapshots exist.
    ///
    /// A corrupt snapshot is deliberately discarded here (and only here):
    /// the failure is logged and the collection starts empty.
    pub fn open(data_dir: &Path) -> Self {
        let mut hotels = HotelRepository::new(data_dir);
        let mut apartments = ApartmentRepository::new(data_dir);
        log_discarded_load("hotel", hotels.load());
        log_discarded_load("apartment", apartments.load());
        Self { hotels, apartments }
    }

    /// Next accommodation id, drawn from one sequence over both
    /// repositories.
    fn next_accommodation_id(&self) -> EntityId {
        self.hotels.next_id().max(self.apartments.next_id())
    }

    /// Creates, stores and persists a new hotel, returning it.
    ///
    /// # Errors
    /// - Validation failures propagate unchanged; a failed save surfaces as
    ///   a persistence error.
    pub fn add_hotel(
        &mut self,
        address: &str,
        price_per_night: f64,
        stars: u8,
    ) -> ServiceResult<Hotel> {
        let id = self.next_accommodation_id();
        let hotel = Hotel::new(id, address, price_per_night, stars)?;
        self.hotels.add(hotel.clone())?;
        self.hotels.save().map_err(ServiceError::Persistence)?;
        info!(
            "event=hotel_added module=service id={} stars={} price={}",
            id,
            hotel.stars(),
            hotel.price_per_night()
        );
        Ok(hotel)
    }

    /// Creates, stores and persists a new apartment, returning it.
    ///
    /// # Errors
    /// - Validation failures propagate unchanged; a failed save surfaces as
    ///   a persistence error.
    pub fn add_apartment(
        &mut self,
        address: &str,
        price_per_night: f64,
        rooms: u32,
        has_garage: bool,
    ) -> ServiceResult<Apartment> {
        let id = self.next_accommodation_id();
        let apartment = Apartment::new(id, address, price_per_night, rooms, has_garage)?;
        self.apartments.add(apartment.clone())?;
        self.apartments.save().map_err(ServiceError::Persistence)?;
        info!(
            "event=apartment_added module=service id={} rooms={} garage={} price={}",
            id,
            apartment.rooms(),
            apartment.has_garage(),
            apartment.price_per_night()
        );
        Ok(apartment)
    }

    pub fn list_hotels(&self) -> Vec<Hotel> {
        self.hotels.all()
    }

    pub fn list_apartments(&self) -> Vec<Apartment> {
        self.apartments.all()
    }

    /// Combined view: hotels first, then apartments, each in insertion
    /// order.
    pub fn list_all(&self) -> Vec<Accommodation> {
        let mut all: Vec<Accommodation> = self
            .hotels
            .all()
            .into_iter()
            .map(Accommodation::from)
            .collect();
        all.extend(self.apartments.all().into_iter().map(Accommodation::from));
        all
    }

    /// Looks `id` up in the hotel repository, then the apartment repository.
    ///
    /// # Errors
    /// - Not-found only when the id is absent from both.
    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<Accommodation> {
        if let Ok(hotel) = self.hotels.get(id) {
            return Ok(hotel.clone().into());
        }
        if let Ok(apartment) = self.apartments.get(id) {
            return Ok(apartment.clone().into());
        }
        Err(ServiceError::NotFound {
            kind: "accommodation",
            id,
        })
    }

    /// Union of both repositories' address matches. A blank query matches
    /// nothing.
    pub fn search_by_address(&self, text: &str) -> Vec<Accommodation> {
        let mut results: Vec<Accommodation> = self
            .hotels
            .search_by_address(text)
            .into_iter()
            .map(Accommodation::from)
            .collect();
        results.extend(
            self.apartments
                .search_by_address(text)
                .into_iter()
                .map(Accommodation::from),
        );
        results
    }

    /// Accommodations priced within `[min, max]`, ascending by price.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> Vec<Accommodation> {
        let mut results: Vec<Accommodation> = self
            .list_all()
            .into_iter()
            .filter(|item| item.price_per_night() >= min && item.price_per_night() <= max)
            .collect();
        results.sort_by(|a, b| a.price_per_night().total_cmp(&b.price_per_night()));
        results
    }

    /// Removes `id` from whichever repository holds it and persists that
    /// repository.
    ///
    /// # Errors
    /// - Not-found only when the id is absent from both.
    pub fn remove(&mut self, id: EntityId) -> ServiceResult<()> {
        if self.hotels.remove(id).is_ok() {
            self.hotels.save().map_err(ServiceError::Persistence)?;
            info!("event=hotel_removed module=service id={id}");
            return Ok(());
        }
        if self.apartments.remove(id).is_ok() {
            self.apartments.save().map_err(ServiceError::Persistence)?;
            info!("event=apartment_removed module=service id={id}");
            return Ok(());
        }
        Err(ServiceError::NotFound {
            kind: "accommodation",
            id,
        })
    }

    /// Summary over the combined view; all zeros when it is empty.
    pub fn statistics(&self) -> Statistics {
        let all = self.list_all();
        if all.is_empty() {
            return Statistics::default();
        }
        let prices: Vec<f64> = all.iter().map(Accommodation::price_per_night).collect();
        let sum: f64 = prices.iter().sum();
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Statistics {
            total: all.len(),
            hotels: self.hotels.count(),
            apartments: self.apartments.count(),
            average_price: sum / all.len() as f64,
            min_price: min,
            max_price: max,
        }
    }

    /// The `limit` most expensive accommodations, descending by price.
    /// Stable: equal prices keep their combined-view order.
    pub fn top_by_price(&self, limit: usize) -> Vec<Accommodation> {
        let mut all = self.list_all();
        all.sort_by(|a, b| descending_price(a.price_per_night(), b.price_per_night()));
        all.truncate(limit);
        all
    }

    /// Combined view sorted by price only, stable, in the requested
    /// direction.
    pub fn sorted_by_price(&self, ascending: bool) -> Vec<Accommodation> {
        let mut all = self.list_all();
        all.sort_by(|a, b| {
            if ascending {
                a.price_per_night().total_cmp(&b.price_per_night())
            } else {
                descending_price(a.price_per_night(), b.price_per_night())
            }
        });
        all
    }

    /// Total accommodations across both repositories.
    pub fn count(&self) -> usize {
        self.hotels.count() + self.apartments.count()
    }
}
