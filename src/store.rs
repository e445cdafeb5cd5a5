//! In-memory itinerary store.
//!
//! Reference implementation of the [`ItineraryStore`] boundary, used by the
//! integration tests and as the shape a hosted-database adapter should
//! mirror. Ids are opaque to callers.

use std::collections::HashMap;

use crate::model::{Itinerary, Schedule};
use crate::traits::ItineraryStore;

#[derive(Debug)]
pub enum StoreError {
    UnknownItinerary(String),
}

#[derive(Debug, Default)]
pub struct InMemoryItineraryStore {
    itineraries: HashMap<String, Itinerary>,
    next_id: u64,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, itinerary_id: &str) -> Option<&Itinerary> {
        self.itineraries.get(itinerary_id)
    }

    /// All itineraries of one user, in save order.
    pub fn for_user(&self, user_id: &str) -> Vec<&Itinerary> {
        let mut found: Vec<&Itinerary> = self
            .itineraries
            .values()
            .filter(|itinerary| itinerary.user_id == user_id)
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// The user's favorited itineraries, in save order.
    pub fn favorites(&self, user_id: &str) -> Vec<&Itinerary> {
        let mut found = self.for_user(user_id);
        found.retain(|itinerary| itinerary.is_favorite);
        found
    }

    /// Flips the favorite flag and returns the new state.
    pub fn toggle_favorite(&mut self, itinerary_id: &str) -> Result<bool, StoreError> {
        let current = self
            .get(itinerary_id)
            .map(|itinerary| itinerary.is_favorite)
            .ok_or_else(|| StoreError::UnknownItinerary(itinerary_id.to_string()))?;
        self.set_favorite(itinerary_id, !current)?;
        Ok(!current)
    }
}

impl ItineraryStore for InMemoryItineraryStore {
    type Error = StoreError;

    fn save(
        &mut self,
        user_id: &str,
        city_id: &str,
        days: u32,
        total_cost: i64,
        schedule: &Schedule,
    ) -> Result<String, Self::Error> {
        self.next_id += 1;
        let id = format!("itn-{:06}", self.next_id);

        self.itineraries.insert(
            id.clone(),
            Itinerary {
                id: id.clone(),
                user_id: user_id.to_string(),
                city_id: city_id.to_string(),
                days,
                total_cost,
                schedule: schedule.clone(),
                is_favorite: false,
            },
        );
        Ok(id)
    }

    /// Removing an unknown id is a no-op, matching the idempotent delete
    /// semantics of the hosted database this mirrors.
    fn remove(&mut self, itinerary_id: &str) -> Result<(), Self::Error> {
        self.itineraries.remove(itinerary_id);
        Ok(())
    }

    fn set_favorite(&mut self, itinerary_id: &str, favorite: bool) -> Result<(), Self::Error> {
        let itinerary = self
            .itineraries
            .get_mut(itinerary_id)
            .ok_or_else(|| StoreError::UnknownItinerary(itinerary_id.to_string()))?;
        itinerary.is_favorite = favorite;
        Ok(())
    }
}
