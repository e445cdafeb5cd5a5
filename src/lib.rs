//! trip-planner core
//!
//! Itinerary-generation engine: turns a city's points of interest plus a
//! set of preferences into a feasible, time- and budget-constrained
//! multi-day visiting schedule.

pub mod traits;
pub mod model;
pub mod geo;
pub mod cost;
pub mod scheduler;
pub mod feature_service;
pub mod store;
pub mod stats;
