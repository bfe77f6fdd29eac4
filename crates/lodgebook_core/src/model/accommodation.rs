//! Lodging unit models: hotels, apartments and their combined view.
//!
//! # Responsibility
//! - Define the two concrete lodging records with their field invariants.
//! - Provide the `Accommodation` sum type used by the aggregated service
//!   view in place of an inheritance hierarchy.
//!
//! # Invariants
//! - `id > 0`, `address` non-blank, `price_per_night >= 0` on every value
//!   that leaves this module.
//! - `Hotel::classification` is a pure function of `stars`.

use crate::model::{
    validate_address, validate_id, validate_price, Entity, EntityId, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Base service fee rate shared by every lodging type.
const SERVICE_FEE_RATE: f64 = 0.10;
/// Flat surcharge applied to garaged apartments, in currency units.
const GARAGE_SURCHARGE: f64 = 5.0;

/// Star-rated hotel.
///
/// Fields are private; mutation goes through validating setters so an
/// invalid hotel is never observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    id: EntityId,
    address: String,
    price_per_night: f64,
    stars: u8,
}

impl Hotel {
    /// Builds a validated hotel.
    ///
    /// # Errors
    /// - `id` not positive, blank `address`, negative `price_per_night` or
    ///   `stars` outside `1..=5`.
    pub fn new(
        id: EntityId,
        address: impl Into<String>,
        price_per_night: f64,
        stars: u8,
    ) -> Result<Self, ValidationError> {
        let address = address.into();
        validate_id(id)?;
        validate_address(&address)?;
        validate_price(price_per_night)?;
        validate_stars(stars)?;
        Ok(Self {
            id,
            address,
            price_per_night,
            stars,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        validate_address(&address)?;
        self.address = address;
        Ok(())
    }

    pub fn set_price_per_night(&mut self, price: f64) -> Result<(), ValidationError> {
        validate_price(price)?;
        self.price_per_night = price;
        Ok(())
    }

    pub fn set_stars(&mut self, stars: u8) -> Result<(), ValidationError> {
        validate_stars(stars)?;
        self.stars = stars;
        Ok(())
    }

    /// Classification label derived purely from the star rating.
    pub fn classification(&self) -> &'static str {
        match self.stars {
            5 => "Luxury",
            4 => "Superior",
            3 => "Comfort",
            _ => "Standard",
        }
    }

    /// Per-night service fee: 10% of the price.
    pub fn service_fee(&self) -> f64 {
        self.price_per_night * SERVICE_FEE_RATE
    }

    /// Multi-line detail text for presentation callers.
    pub fn describe(&self) -> String {
        format!(
            "Hotel {}★ - {}\nPrice: €{:.2}/night\nClassification: {}\nService fee: €{:.2}",
            self.stars,
            self.address,
            self.price_per_night,
            self.classification(),
            self.service_fee()
        )
    }
}

impl Display for Hotel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hotel {}★ - [{}] {} - €{:.2}/night",
            self.stars, self.id, self.address, self.price_per_night
        )
    }
}

impl Entity for Hotel {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "hotel"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_address(&self.address)?;
        validate_price(self.price_per_night)?;
        validate_stars(self.stars)
    }
}

/// Apartment with a room count and optional garage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    id: EntityId,
    address: String,
    price_per_night: f64,
    rooms: u32,
    has_garage: bool,
}

impl Apartment {
    /// Builds a validated apartment.
    ///
    /// # Errors
    /// - `id` not positive, blank `address`, negative `price_per_night` or
    ///   `rooms == 0`.
    pub fn new(
        id: EntityId,
        address: impl Into<String>,
        price_per_night: f64,
        rooms: u32,
        has_garage: bool,
    ) -> Result<Self, ValidationError> {
        let address = address.into();
        validate_id(id)?;
        validate_address(&address)?;
        validate_price(price_per_night)?;
        validate_rooms(rooms)?;
        Ok(Self {
            id,
            address,
            price_per_night,
            rooms,
            has_garage,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn has_garage(&self) -> bool {
        self.has_garage
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        validate_address(&address)?;
        self.address = address;
        Ok(())
    }

    pub fn set_price_per_night(&mut self, price: f64) -> Result<(), ValidationError> {
        validate_price(price)?;
        self.price_per_night = price;
        Ok(())
    }

    pub fn set_rooms(&mut self, rooms: u32) -> Result<(), ValidationError> {
        validate_rooms(rooms)?;
        self.rooms = rooms;
        Ok(())
    }

    pub fn set_has_garage(&mut self, has_garage: bool) {
        self.has_garage = has_garage;
    }

    /// Per-night service fee: 10% of the price, plus a flat surcharge when
    /// the apartment has a garage.
    pub fn service_fee(&self) -> f64 {
        let base = self.price_per_night * SERVICE_FEE_RATE;
        if self.has_garage {
            base + GARAGE_SURCHARGE
        } else {
            base
        }
    }

    /// Multi-line detail text for presentation callers.
    pub fn describe(&self) -> String {
        format!(
            "Apartment T{} - {}\nPrice: €{:.2}/night\nGarage: {}\nService fee: €{:.2}",
            self.rooms,
            self.address,
            self.price_per_night,
            if self.has_garage { "yes" } else { "no" },
            self.service_fee()
        )
    }
}

impl Display for Apartment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Apartment T{} - [{}] {} - €{:.2}/night",
            self.rooms, self.id, self.address, self.price_per_night
        )
    }
}

impl Entity for Apartment {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind() -> &'static str {
        "apartment"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_address(&self.address)?;
        validate_price(self.price_per_night)?;
        validate_rooms(self.rooms)
    }
}

/// Combined lodging view used by the aggregation service.
///
/// A tagged sum over the two concrete types; shared accessors delegate to
/// the active variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Accommodation {
    Hotel(Hotel),
    Apartment(Apartment),
}

impl Accommodation {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Hotel(hotel) => hotel.id(),
            Self::Apartment(apartment) => apartment.id(),
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Self::Hotel(hotel) => hotel.address(),
            Self::Apartment(apartment) => apartment.address(),
        }
    }

    pub fn price_per_night(&self) -> f64 {
        match self {
            Self::Hotel(hotel) => hotel.price_per_night(),
            Self::Apartment(apartment) => apartment.price_per_night(),
        }
    }

    pub fn service_fee(&self) -> f64 {
        match self {
            Self::Hotel(hotel) => hotel.service_fee(),
            Self::Apartment(apartment) => apartment.service_fee(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Hotel(hotel) => hotel.describe(),
            Self::Apartment(apartment) => apartment.describe(),
        }
    }
}

impl Display for Accommodation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hotel(hotel) => hotel.fmt(f),
            Self::Apartment(apartment) => apartment.fmt(f),
        }
    }
}

impl From<Hotel> for Accommodation {
    fn from(value: Hotel) -> Self {
        Self::Hotel(value)
    }
}

impl From<Apartment> for Accommodation {
    fn from(value: Apartment) -> Self {
        Self::Apartment(value)
    }
}

fn validate_stars(stars: u8) -> Result<(), ValidationError> {
    if !(1..=5).contains(&stars) {
        return Err(ValidationError::new(
            "stars",
            "star rating must be between 1 and 5",
        ));
    }
    Ok(())
}

fn validate_rooms(rooms: u32) -> Result<(), ValidationError> {
    if rooms == 0 {
        return Err(ValidationError::new(
            "rooms",
            "an apartment must have at least 1 room",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Apartment, Hotel};

    #[test]
    fn classification_follows_star_table() {
        let labels: Vec<_> = (1..=5)
            .map(|stars| {
                Hotel::new(1, "Main Street 1", 80.0, stars)
                    .unwrap()
                    .classification()
            })
            .collect();
        assert_eq!(
            labels,
            ["Standard", "Standard", "Comfort", "Superior", "Luxury"]
        );
    }

    #[test]
    fn garage_surcharge_is_flat_five() {
        let with = Apartment::new(1, "Dock Road 2", 100.0, 2, true).unwrap();
        let without = Apartment::new(2, "Dock Road 2", 100.0, 2, false).unwrap();
        assert_eq!(with.service_fee() - without.service_fee(), 5.0);
    }

    #[test]
    fn out_of_range_stars_are_rejected() {
        for stars in [0u8, 6, 10] {
            let err = Hotel::new(1, "Main Street 1", 80.0, stars).unwrap_err();
            assert_eq!(err.field, "stars");
        }
    }
}
