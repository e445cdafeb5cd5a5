//! Test fixtures for trip-planner.
//!
//! Real Bucharest attractions (coordinates from OpenStreetMap) with full
//! catalog attributes, for end-to-end pipeline tests.

pub mod bucharest_pois;
