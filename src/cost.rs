//! Cost estimation from catalog price ranges.
//!
//! Price data arrives as loosely formatted strings; malformed values
//! degrade to zero instead of failing the computation.

use crate::model::PointOfInterest;

/// Estimated cost of visiting a single POI.
///
/// A `"<low>-<high>"` range yields its midpoint, with each half parsed
/// independently (an unparsable half contributes 0 to the bound). A bare
/// number is taken as-is; anything else costs 0.
pub fn poi_cost(poi: &PointOfInterest) -> f64 {
    let Some(range) = poi.price_range.as_deref().map(str::trim) else {
        return 0.0;
    };
    match range.split_once('-') {
        None => range.parse::<f64>().unwrap_or(0.0),
        Some((low, high)) => {
            let low = low.trim().parse::<f64>().unwrap_or(0.0);
            let high = high.trim().parse::<f64>().unwrap_or(0.0);
            (low + high) / 2.0
        }
    }
}

/// Total estimated cost across the used POIs, rounded once at the end.
pub fn total_cost<'a, I>(pois: I) -> i64
where
    I: IntoIterator<Item = &'a PointOfInterest>,
{
    let total: f64 = pois.into_iter().map(poi_cost).sum();
    total.round() as i64
}
