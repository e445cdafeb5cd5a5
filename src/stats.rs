//! Traveler statistics over saved itineraries.
//!
//! Pure aggregation; presentation (charts, copy) belongs to the caller.
//! Activities are resolved back to catalog POIs by id.

use std::collections::{HashMap, HashSet};

use crate::model::{Itinerary, PointOfInterest};

/// Profile derived from what a user actually schedules and spends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerType {
    CultureEnthusiast,
    NatureLover,
    BudgetTraveler,
    PremiumTraveler,
    ArchitectureBuff,
    LongHaulExplorer,
    Balanced,
}

impl TravelerType {
    pub fn description(&self) -> &'static str {
        match self {
            TravelerType::CultureEnthusiast => {
                "Drawn to museums, galleries, and cultural events; travels to learn."
            }
            TravelerType::NatureLover => {
                "Prefers parks and green spaces; recharges outdoors."
            }
            TravelerType::BudgetTraveler => {
                "Enjoys destinations without breaking the bank; finds the free attractions."
            }
            TravelerType::PremiumTraveler => {
                "Invests in quality experiences and the best attractions."
            }
            TravelerType::ArchitectureBuff => {
                "Fascinated by historic buildings and iconic monuments."
            }
            TravelerType::LongHaulExplorer => {
                "Spends enough time in each destination to know it in depth."
            }
            TravelerType::Balanced => {
                "Mixes attraction types for a balanced travel experience."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelerStats {
    pub total_itineraries: usize,
    pub total_days: u32,
    pub total_cost: i64,
    pub avg_cost_per_day: i64,
    /// Count of distinct scheduled POIs per category tag.
    pub category_distribution: HashMap<String, u32>,
    pub traveler_type: TravelerType,
}

/// Aggregates a user's itineraries against the POI catalog.
///
/// Returns `None` when there is nothing to aggregate.
pub fn traveler_stats(
    itineraries: &[Itinerary],
    pois: &[PointOfInterest],
) -> Option<TravelerStats> {
    if itineraries.is_empty() {
        return None;
    }

    let total_itineraries = itineraries.len();
    let total_days: u32 = itineraries.iter().map(|itinerary| itinerary.days).sum();
    let total_cost: i64 = itineraries.iter().map(|itinerary| itinerary.total_cost).sum();
    let avg_cost_per_day = if total_days > 0 {
        (total_cost as f64 / total_days as f64).round() as i64
    } else {
        0
    };

    let by_id: HashMap<&str, &PointOfInterest> =
        pois.iter().map(|poi| (poi.id.as_str(), poi)).collect();

    // Each POI counts once, no matter how many itineraries it appears in.
    let mut used_ids: HashSet<&str> = HashSet::new();
    for itinerary in itineraries {
        for activities in itinerary.schedule.values() {
            for activity in activities {
                used_ids.insert(activity.poi_id.as_str());
            }
        }
    }

    let mut category_distribution: HashMap<String, u32> = HashMap::new();
    for id in &used_ids {
        if let Some(poi) = by_id.get(id) {
            if !poi.category.is_empty() {
                *category_distribution.entry(poi.category.clone()).or_insert(0) += 1;
            }
        }
    }

    let traveler_type = classify(&category_distribution, avg_cost_per_day, total_days);

    Some(TravelerStats {
        total_itineraries,
        total_days,
        total_cost,
        avg_cost_per_day,
        category_distribution,
        traveler_type,
    })
}

/// Classification thresholds, checked in order of specificity.
fn classify(
    categories: &HashMap<String, u32>,
    avg_cost_per_day: i64,
    total_days: u32,
) -> TravelerType {
    let total: u32 = categories.values().sum();
    let count = |name: &str| categories.get(name).copied().unwrap_or(0);

    // More than half the visits are museums or culture.
    if (count("museum") + count("culture")) * 2 > total {
        return TravelerType::CultureEnthusiast;
    }
    // More than 30% parks.
    if count("park") * 10 > total * 3 {
        return TravelerType::NatureLover;
    }
    if avg_cost_per_day < 30 {
        return TravelerType::BudgetTraveler;
    }
    if avg_cost_per_day > 80 {
        return TravelerType::PremiumTraveler;
    }
    // More than 40% architecture or landmarks.
    if (count("architecture") + count("landmark")) * 5 > total * 2 {
        return TravelerType::ArchitectureBuff;
    }
    if total_days > 15 {
        return TravelerType::LongHaulExplorer;
    }
    TravelerType::Balanced
}

/// Cost bands for grouping itineraries by total spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetBand {
    VeryCheap,
    Cheap,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl BudgetBand {
    pub fn of(total_cost: i64) -> Self {
        match total_cost {
            cost if cost < 100 => BudgetBand::VeryCheap,
            cost if cost < 300 => BudgetBand::Cheap,
            cost if cost < 500 => BudgetBand::Moderate,
            cost if cost < 1000 => BudgetBand::Expensive,
            _ => BudgetBand::VeryExpensive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetBand::VeryCheap => "under 100",
            BudgetBand::Cheap => "100-300",
            BudgetBand::Moderate => "300-500",
            BudgetBand::Expensive => "500-1000",
            BudgetBand::VeryExpensive => "over 1000",
        }
    }
}

/// Itinerary counts per budget band, cheapest first; empty bands omitted.
pub fn budget_distribution(itineraries: &[Itinerary]) -> Vec<(BudgetBand, u32)> {
    const BANDS: [BudgetBand; 5] = [
        BudgetBand::VeryCheap,
        BudgetBand::Cheap,
        BudgetBand::Moderate,
        BudgetBand::Expensive,
        BudgetBand::VeryExpensive,
    ];

    let mut counts = [0u32; 5];
    for itinerary in itineraries {
        counts[BudgetBand::of(itinerary.total_cost) as usize] += 1;
    }

    BANDS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(band, count)| (*band, count))
        .collect()
}
