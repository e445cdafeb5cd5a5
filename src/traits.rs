//! Boundary contracts for the itinerary pipeline.
//!
//! These are intentionally minimal. The schedule builder consumes and
//! produces in-memory values only; catalogs and stores are external
//! collaborators reached through these seams.

use crate::model::{PointOfInterest, Schedule};

/// Supplies the candidate POI set for a city.
///
/// Implementations must default missing optional attributes (price, hours,
/// rating, duration, coordinates) rather than fail the fetch.
pub trait PoiCatalog {
    type Error;

    /// Fetches the POIs of `city_id`, optionally restricted to the given
    /// category tags. An empty `categories` slice admits all categories.
    fn pois_for_city(
        &self,
        city_id: &str,
        categories: &[String],
    ) -> Result<Vec<PointOfInterest>, Self::Error>;
}

/// Stores generated itineraries.
///
/// The returned itinerary id is an opaque token; callers pass it back
/// verbatim to `remove` and `set_favorite`.
pub trait ItineraryStore {
    type Error;

    fn save(
        &mut self,
        user_id: &str,
        city_id: &str,
        days: u32,
        total_cost: i64,
        schedule: &Schedule,
    ) -> Result<String, Self::Error>;

    fn remove(&mut self, itinerary_id: &str) -> Result<(), Self::Error>;

    fn set_favorite(&mut self, itinerary_id: &str, favorite: bool) -> Result<(), Self::Error>;
}

/// Estimates door-to-door travel minutes between two POIs.
///
/// The schedule builder is generic over this seam so tests can substitute
/// a deterministic model for the calibrated heuristic.
pub trait TravelTimeProvider {
    fn minutes_between(&self, from: &PointOfInterest, to: &PointOfInterest) -> u32;
}
