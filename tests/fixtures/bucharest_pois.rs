//! Realistic Bucharest POI fixtures.
//!
//! Coordinates are geographic degrees sourced from OpenStreetMap. Ratings,
//! prices (lei), and opening hours approximate the real attractions.

use trip_planner::model::PointOfInterest;

/// A named attraction with full catalog attributes.
pub struct Spot {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f64,
    pub price_range: Option<&'static str>,
    pub opening_hours: Option<&'static str>,
    pub estimated_time: u32,
    pub lat: f64,
    pub lon: f64,
}

pub const SPOTS: &[Spot] = &[
    Spot {
        id: "poi-athenaeum",
        name: "Romanian Athenaeum",
        category: "culture",
        rating: 4.9,
        price_range: Some("10-20"),
        opening_hours: Some("12:00-19:00"),
        estimated_time: 90,
        lat: 44.4413,
        lon: 26.0973,
    },
    Spot {
        id: "poi-village-museum",
        name: "Village Museum",
        category: "museum",
        rating: 4.8,
        price_range: Some("20-30"),
        opening_hours: Some("09:00-17:00"),
        estimated_time: 120,
        lat: 44.4717,
        lon: 26.0772,
    },
    Spot {
        id: "poi-herastrau",
        name: "King Michael I Park",
        category: "park",
        rating: 4.7,
        price_range: None,
        opening_hours: None,
        estimated_time: 120,
        lat: 44.4702,
        lon: 26.0823,
    },
    Spot {
        id: "poi-stavropoleos",
        name: "Stavropoleos Monastery",
        category: "architecture",
        rating: 4.6,
        price_range: None,
        opening_hours: Some("08:00-18:00"),
        estimated_time: 30,
        lat: 44.4301,
        lon: 26.0988,
    },
    Spot {
        id: "poi-parliament",
        name: "Palace of the Parliament",
        category: "government",
        rating: 4.5,
        price_range: Some("40-60"),
        opening_hours: Some("10:00-16:00"),
        estimated_time: 90,
        lat: 44.4275,
        lon: 26.0875,
    },
    Spot {
        id: "poi-art-museum",
        name: "National Museum of Art of Romania",
        category: "museum",
        rating: 4.4,
        price_range: Some("15-25"),
        opening_hours: Some("10:00-18:00"),
        estimated_time: 120,
        lat: 44.4396,
        lon: 26.0963,
    },
    Spot {
        id: "poi-triumph-arch",
        name: "Arcul de Triumf",
        category: "landmark",
        rating: 4.3,
        price_range: None,
        opening_hours: None,
        estimated_time: 30,
        lat: 44.4672,
        lon: 26.0782,
    },
    Spot {
        id: "poi-old-town",
        name: "Lipscani Old Town",
        category: "district",
        rating: 4.2,
        price_range: None,
        opening_hours: None,
        estimated_time: 90,
        lat: 44.4305,
        lon: 26.1025,
    },
    Spot {
        id: "poi-cec-palace",
        name: "CEC Palace",
        category: "architecture",
        rating: 4.1,
        price_range: None,
        opening_hours: None,
        estimated_time: 30,
        lat: 44.4312,
        lon: 26.0970,
    },
    Spot {
        id: "poi-carol-park",
        name: "Carol Park",
        category: "park",
        rating: 4.0,
        price_range: None,
        opening_hours: None,
        estimated_time: 90,
        lat: 44.4091,
        lon: 26.0963,
    },
    Spot {
        id: "poi-revolution-square",
        name: "Revolution Square",
        category: "landmark",
        rating: 3.9,
        price_range: None,
        opening_hours: None,
        estimated_time: 45,
        lat: 44.4378,
        lon: 26.0954,
    },
];

/// The fixture spots as a catalog POI list.
pub fn catalog() -> Vec<PointOfInterest> {
    SPOTS
        .iter()
        .map(|spot| PointOfInterest {
            id: spot.id.to_string(),
            city_id: "bucharest".to_string(),
            name: spot.name.to_string(),
            category: spot.category.to_string(),
            rating: Some(spot.rating),
            price_range: spot.price_range.map(str::to_string),
            opening_hours: spot.opening_hours.map(str::to_string),
            estimated_time: Some(spot.estimated_time),
            latitude: Some(spot.lat),
            longitude: Some(spot.lon),
        })
        .collect()
}
