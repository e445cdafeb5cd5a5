//! Geospatial utility: projection, distance, and the travel-minute model.
//!
//! Travel times are estimated from great-circle distance with a calibrated
//! urban heuristic instead of calling a routing service. The estimates are
//! good enough for ordering stops within a plan; user-facing directions come
//! from the routing collaborator at display time.

use rayon::prelude::*;

use crate::model::PointOfInterest;
use crate::traits::TravelTimeProvider;

/// Earth radius in kilometers, for great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Spherical Web Mercator radius in meters, for the inverse projection.
pub const WEB_MERCATOR_RADIUS_M: f64 = 6_378_137.0;

/// Travel minutes assumed when either endpoint lacks usable coordinates.
pub const FALLBACK_TRAVEL_MINUTES: u32 = 20;

/// Converts spherical Web Mercator meters to geographic degrees.
///
/// Returns `(latitude, longitude)`. Pure and total over finite inputs;
/// non-finite input propagates to non-finite output, so callers guard.
pub fn web_mercator_to_geographic(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / WEB_MERCATOR_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / WEB_MERCATOR_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    (lat, lon)
}

/// Great-circle distance between two `(lat, lon)` degree pairs, in km.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Affine distance-to-minutes travel model for dense urban areas.
///
/// `minutes = round(km · minutes_per_km + base_minutes)`, capped at
/// `max_minutes`. The defaults are calibrated for on-foot-plus-transit city
/// touring; tests substitute tighter values through the same fields.
#[derive(Debug, Clone)]
pub struct UrbanTravelModel {
    pub minutes_per_km: f64,
    /// Fixed overhead per leg (leaving, waiting, arriving).
    pub base_minutes: f64,
    pub max_minutes: u32,
    pub fallback_minutes: u32,
}

impl Default for UrbanTravelModel {
    fn default() -> Self {
        Self {
            minutes_per_km: 4.5,
            base_minutes: 10.0,
            max_minutes: 90,
            fallback_minutes: FALLBACK_TRAVEL_MINUTES,
        }
    }
}

impl TravelTimeProvider for UrbanTravelModel {
    fn minutes_between(&self, from: &PointOfInterest, to: &PointOfInterest) -> u32 {
        let (Some(a), Some(b)) = (from.coordinates(), to.coordinates()) else {
            return self.fallback_minutes;
        };
        let km = haversine_km(a, b);
        let minutes = (km * self.minutes_per_km + self.base_minutes).round() as u32;
        minutes.min(self.max_minutes)
    }
}

/// Ranks `candidates` by Manhattan distance on raw latitude/longitude and
/// returns the index of the closest one.
///
/// This is a selection heuristic, not a metric: it only orders nearby
/// candidates relative to each other. `Some(0)` when there is no current
/// position yet (first pick of a day); `None` only when `candidates` is
/// empty. Candidates without coordinates rank last.
pub fn nearest_index(
    current: Option<&PointOfInterest>,
    candidates: &[PointOfInterest],
) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let Some(from) = current.and_then(PointOfInterest::coordinates) else {
        return Some(0);
    };

    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, candidate) in candidates.iter().enumerate() {
        let Some(to) = candidate.coordinates() else {
            continue;
        };
        let distance = (from.0 - to.0).abs() + (from.1 - to.1).abs();
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    Some(best)
}

/// Pairwise travel-minute matrix over `pois`, indexed by slice order.
///
/// Rows are computed in parallel; the diagonal is zero.
pub fn travel_matrix<T>(pois: &[PointOfInterest], travel: &T) -> Vec<Vec<u32>>
where
    T: TravelTimeProvider + Sync,
{
    pois.par_iter()
        .enumerate()
        .map(|(i, from)| {
            pois.iter()
                .enumerate()
                .map(|(j, to)| {
                    if i == j {
                        0
                    } else {
                        travel.minutes_between(from, to)
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi_at(id: &str, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest {
            id: id.to_string(),
            city_id: "bucharest".to_string(),
            name: id.to_string(),
            category: "landmark".to_string(),
            rating: None,
            price_range: None,
            opening_hours: None,
            estimated_time: None,
            latitude: Some(lat),
            longitude: Some(lon),
        }
    }

    fn poi_without_coords(id: &str) -> PointOfInterest {
        PointOfInterest {
            latitude: None,
            longitude: None,
            ..poi_at(id, 0.0, 0.0)
        }
    }

    #[test]
    fn test_inverse_projection_origin() {
        let (lat, lon) = web_mercator_to_geographic(0.0, 0.0);
        assert!(lat.abs() < 1e-9);
        assert!(lon.abs() < 1e-9);
    }

    #[test]
    fn test_inverse_projection_round_trip() {
        // Bucharest city center, forward-projected with the same sphere.
        let (lat, lon): (f64, f64) = (44.4268, 26.1025);
        let x = WEB_MERCATOR_RADIUS_M * lon.to_radians();
        let y = WEB_MERCATOR_RADIUS_M
            * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();

        let (lat_back, lon_back) = web_mercator_to_geographic(x, y);
        assert!((lat_back - lat).abs() < 1e-9, "lat {}", lat_back);
        assert!((lon_back - lon).abs() < 1e-9, "lon {}", lon_back);
    }

    #[test]
    fn test_inverse_projection_propagates_non_finite() {
        let (lat, lon) = web_mercator_to_geographic(f64::NAN, 0.0);
        assert!(lat.is_finite());
        assert!(lon.is_nan());

        let (lat, lon) = web_mercator_to_geographic(0.0, f64::NAN);
        assert!(lat.is_nan());
        assert!(lon.is_finite());
    }

    #[test]
    fn test_haversine_same_point() {
        let km = haversine_km((44.4268, 26.1025), (44.4268, 26.1025));
        assert!(km < 0.001, "same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Bucharest (44.43, 26.10) to Sofia (42.70, 23.32): ~295 km.
        let km = haversine_km((44.4268, 26.1025), (42.6977, 23.3219));
        assert!(km > 280.0 && km < 310.0, "Bucharest to Sofia should be ~295km, got {}", km);
    }

    #[test]
    fn test_travel_model_known_value() {
        // ~10 km apart: round(10 * 4.5 + 10) = 55 minutes.
        let model = UrbanTravelModel::default();
        let a = poi_at("a", 44.0, 26.0);
        let b = poi_at("b", 44.0899, 26.0);
        assert_eq!(model.minutes_between(&a, &b), 55);
    }

    #[test]
    fn test_travel_model_bounds() {
        let model = UrbanTravelModel::default();

        // Zero distance still pays the base overhead.
        let a = poi_at("a", 44.4268, 26.1025);
        assert_eq!(model.minutes_between(&a, &a.clone()), 10);

        // Intercity distances clamp at the cap.
        let paris = poi_at("paris", 48.8566, 2.3522);
        assert_eq!(model.minutes_between(&a, &paris), 90);
    }

    #[test]
    fn test_travel_model_fallback_without_coordinates() {
        let model = UrbanTravelModel::default();
        let a = poi_at("a", 44.4268, 26.1025);
        let blank = poi_without_coords("blank");

        assert_eq!(model.minutes_between(&a, &blank), FALLBACK_TRAVEL_MINUTES);
        assert_eq!(model.minutes_between(&blank, &a), FALLBACK_TRAVEL_MINUTES);
        assert_eq!(model.minutes_between(&blank, &blank.clone()), FALLBACK_TRAVEL_MINUTES);
    }

    #[test]
    fn test_travel_model_fallback_on_non_finite() {
        let model = UrbanTravelModel::default();
        let a = poi_at("a", 44.4268, 26.1025);
        let broken = poi_at("broken", f64::NAN, 26.1025);
        assert_eq!(model.minutes_between(&a, &broken), FALLBACK_TRAVEL_MINUTES);
    }

    #[test]
    fn test_nearest_index_empty_candidates() {
        let current = poi_at("here", 44.43, 26.10);
        assert_eq!(nearest_index(Some(&current), &[]), None);
    }

    #[test]
    fn test_nearest_index_first_pick_of_day() {
        let candidates = vec![poi_at("a", 44.43, 26.10), poi_at("b", 44.44, 26.11)];
        assert_eq!(nearest_index(None, &candidates), Some(0));
    }

    #[test]
    fn test_nearest_index_picks_manhattan_closest() {
        let current = poi_at("here", 44.4300, 26.1000);
        let candidates = vec![
            poi_at("far", 44.4700, 26.0800),
            poi_at("near", 44.4310, 26.1010),
            poi_at("mid", 44.4400, 26.0950),
        ];
        assert_eq!(nearest_index(Some(&current), &candidates), Some(1));
    }

    #[test]
    fn test_nearest_index_ranks_missing_coordinates_last() {
        let current = poi_at("here", 44.4300, 26.1000);
        let candidates = vec![poi_without_coords("blank"), poi_at("near", 44.4310, 26.1010)];
        assert_eq!(nearest_index(Some(&current), &candidates), Some(1));
    }

    #[test]
    fn test_travel_matrix_diagonal_and_symmetry() {
        let model = UrbanTravelModel::default();
        let pois = vec![
            poi_at("a", 44.4275, 26.0875),
            poi_at("b", 44.4413, 26.0973),
            poi_at("c", 44.4702, 26.0823),
        ];
        let matrix = travel_matrix(&pois, &model);

        for i in 0..pois.len() {
            assert_eq!(matrix[i][i], 0, "diagonal should be zero");
        }
        // The haversine-backed model is symmetric.
        assert_eq!(matrix[0][1], matrix[1][0]);
        assert_eq!(matrix[1][2], matrix[2][1]);
    }
}
