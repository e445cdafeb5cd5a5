//! Schedule builder: turns a POI set plus preferences into a day-by-day plan.
//!
//! Single-pass gated construction. Candidates are ranked by rating and
//! scanned in order; the first one to pass the budget, opening-hours, and
//! daily-span gates is committed. Infeasible inputs degrade to empty or
//! partial days, never to errors; callers decide whether a thin plan is a
//! user-facing failure (see [`meets_density_threshold`]).

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cost::poi_cost;
use crate::geo::travel_matrix;
use crate::model::{PointOfInterest, Preferences, Schedule, ScheduledActivity, format_clock};
use crate::traits::TravelTimeProvider;

/// Anchors of the per-day loop.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// Minutes from midnight at which each day starts (09:00).
    pub day_start_minute: u32,
    /// Maximum minutes between day start and the last activity's end.
    pub max_day_span_minutes: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            day_start_minute: 540,
            max_day_span_minutes: 540, // day over by 18:00
        }
    }
}

/// Key under which day `n` (1-indexed) is recorded in a [`Schedule`].
pub fn day_key(n: u32) -> String {
    format!("day{n}")
}

/// Builds the day-by-day plan.
///
/// Every POI is used at most once across the whole itinerary. Each
/// requested day gets an entry, empty when nothing fits. Deterministic for
/// a fixed input order: the rating sort is stable, so equal ratings keep
/// catalog order.
pub fn generate_schedule<T>(
    pois: &[PointOfInterest],
    prefs: &Preferences,
    travel: &T,
    options: &ScheduleOptions,
) -> Schedule
where
    T: TravelTimeProvider + Sync,
{
    let days = prefs.clamped_days();
    let max_per_day = prefs.clamped_max_per_day();

    let mut ranked: Vec<PointOfInterest> = pois
        .iter()
        .filter(|poi| prefs.categories.is_empty() || prefs.categories.contains(&poi.category))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.rating_or_default().total_cmp(&a.rating_or_default()));

    let matrix = travel_matrix(&ranked, travel);
    let mut pool: Vec<usize> = (0..ranked.len()).collect();
    let mut remaining_budget = prefs.budget.unwrap_or(f64::INFINITY);

    let mut schedule = Schedule::new();
    for day in 1..=days {
        let mut day_plan: Vec<ScheduledActivity> = Vec::new();
        let mut current_time = options.day_start_minute;
        let mut last: Option<usize> = None;

        while (day_plan.len() as u32) < max_per_day {
            let Some((pool_pos, travel_minutes)) = next_feasible(
                &ranked,
                &pool,
                &matrix,
                last,
                current_time,
                remaining_budget,
                options,
            ) else {
                break;
            };

            let index = pool[pool_pos];
            let poi = &ranked[index];
            let start = current_time + travel_minutes;
            let end = start + poi.visit_minutes();

            if let Some(previous) = day_plan.last_mut() {
                previous.travel_time_after = Some(travel_minutes);
            }
            day_plan.push(ScheduledActivity {
                poi_id: poi.id.clone(),
                poi_name: poi.name.clone(),
                start_time: format_clock(start),
                end_time: format_clock(end),
                travel_time_after: None,
                note: None,
            });

            current_time = end;
            remaining_budget -= poi_cost(poi);
            last = Some(index);
            pool.remove(pool_pos);
        }

        debug!(day, activities = day_plan.len(), "day planned");
        schedule.insert(day_key(day), day_plan);
    }

    schedule
}

/// Scans the pool in rating order and returns the position and travel time
/// of the first candidate that passes all three gates.
fn next_feasible(
    ranked: &[PointOfInterest],
    pool: &[usize],
    matrix: &[Vec<u32>],
    last: Option<usize>,
    current_time: u32,
    remaining_budget: f64,
    options: &ScheduleOptions,
) -> Option<(usize, u32)> {
    for (pool_pos, &index) in pool.iter().enumerate() {
        let poi = &ranked[index];
        let travel_minutes = match last {
            Some(from) => matrix[from][index],
            None => 0,
        };
        let start = current_time + travel_minutes;
        let end = start + poi.visit_minutes();

        if poi_cost(poi) > remaining_budget {
            trace!(poi = %poi.id, "over budget, skipped");
            continue;
        }
        if let Some((open, close)) = poi.opening_window() {
            if start < open || end > close {
                trace!(poi = %poi.id, "outside opening hours, skipped");
                continue;
            }
        }
        if end - options.day_start_minute > options.max_day_span_minutes {
            trace!(poi = %poi.id, "would overrun the day, skipped");
            continue;
        }
        return Some((pool_pos, travel_minutes));
    }
    None
}

/// Resolves the schedule's activities back to their source POIs by id.
///
/// Returns each used POI once, in `pois` order.
pub fn used_pois<'a>(schedule: &Schedule, pois: &'a [PointOfInterest]) -> Vec<&'a PointOfInterest> {
    let mut used_ids: HashSet<&str> = HashSet::new();
    for activities in schedule.values() {
        for activity in activities {
            used_ids.insert(activity.poi_id.as_str());
        }
    }
    pois.iter()
        .filter(|poi| used_ids.contains(poi.id.as_str()))
        .collect()
}

/// Viability rule applied by presenting callers: a plan is worth showing
/// when it averages at least one and a half activities per requested day.
pub fn meets_density_threshold(schedule: &Schedule, days: u32) -> bool {
    let scheduled: usize = schedule.values().map(Vec::len).sum();
    scheduled as u64 * 2 >= days as u64 * 3
}
