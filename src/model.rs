//! Shared data contracts for the itinerary pipeline.
//!
//! These are the in-memory types exchanged between the catalog adapter,
//! the schedule builder, the cost estimator, and the itinerary store.
//! Wire formats are decoded at the adapter boundaries, not here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Visit duration assumed when a POI does not advertise one.
pub const DEFAULT_VISIT_MINUTES: u32 = 60;

/// A visitable place as supplied by the POI catalog.
///
/// Coordinates are geographic degrees. Sources that deliver projected
/// meters are converted once, at the catalog-adapter boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: String,
    pub city_id: String,
    pub name: String,
    /// Category tag (museum, park, landmark, architecture, culture,
    /// district, government, leisure).
    pub category: String,
    /// Quality score used only for ordering; unvalidated.
    pub rating: Option<f64>,
    /// Price interval encoded as `"<low>-<high>"`, or a bare number.
    pub price_range: Option<String>,
    /// Opening window encoded as `"HH:mm-HH:mm"`.
    pub opening_hours: Option<String>,
    /// Visit duration in minutes.
    pub estimated_time: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PointOfInterest {
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn visit_minutes(&self) -> u32 {
        self.estimated_time.unwrap_or(DEFAULT_VISIT_MINUTES)
    }

    /// Advertised opening window as minutes from midnight.
    ///
    /// Absent or malformed hours yield `None`, which callers treat as
    /// always open.
    pub fn opening_window(&self) -> Option<(u32, u32)> {
        let hours = self.opening_hours.as_deref()?;
        let (open, close) = hours.split_once('-')?;
        Some((parse_clock(open)?, parse_clock(close)?))
    }

    /// Geographic coordinates, if both components are present and finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Caller-supplied trip preferences.
///
/// The schedule builder re-clamps `days` and `max_activities_per_day`
/// rather than trusting the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub days: u32,
    /// Category filter; empty admits all categories.
    pub categories: Vec<String>,
    /// Total monetary ceiling for the whole itinerary.
    pub budget: Option<f64>,
    pub max_activities_per_day: Option<u32>,
}

impl Preferences {
    /// Requested trip length clamped to the supported range.
    pub fn clamped_days(&self) -> u32 {
        self.days.clamp(1, 30)
    }

    /// Per-day activity cap, defaulted and clamped.
    pub fn clamped_max_per_day(&self) -> u32 {
        self.max_activities_per_day.unwrap_or(3).clamp(1, 10)
    }
}

/// One committed stop within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledActivity {
    /// Identifier of the source POI; carried end-to-end so downstream
    /// consumers never re-derive it from display text.
    pub poi_id: String,
    pub poi_name: String,
    /// `HH:mm`, inside the POI's opening window when one is known.
    pub start_time: String,
    pub end_time: String,
    /// Minutes of travel to the next stop; patched in retroactively once
    /// the next stop is chosen.
    pub travel_time_after: Option<u32>,
    pub note: Option<String>,
}

/// Day-by-day plan keyed `"day<N>"`, 1-indexed. Every requested day is
/// present, empty days included.
pub type Schedule = HashMap<String, Vec<ScheduledActivity>>;

/// A generated itinerary as handed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub user_id: String,
    pub city_id: String,
    pub days: u32,
    pub total_cost: i64,
    pub schedule: Schedule,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Parses a `"HH:mm"` clock string into minutes from midnight.
pub fn parse_clock(clock: &str) -> Option<u32> {
    let (hours, minutes) = clock.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes from midnight as a zero-padded `"HH:mm"` string.
///
/// The input is taken modulo one day, so overnight overflow wraps instead
/// of producing a 25th hour.
pub fn format_clock(minutes: u32) -> String {
    let minutes = minutes % 1440;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
