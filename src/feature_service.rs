//! Feature-service HTTP adapter for the POI catalog.
//!
//! Talks to an ArcGIS-style feature layer over its REST query endpoint.
//! Wire attributes keep the upstream layer's mixed casing and are converted
//! to [`PointOfInterest`] here; projected geometry is converted to
//! geographic degrees once, at ingestion, so the rest of the pipeline never
//! guesses coordinate units.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::geo::web_mercator_to_geographic;
use crate::model::PointOfInterest;
use crate::traits::PoiCatalog;

#[derive(Debug, Clone)]
pub struct FeatureServiceConfig {
    /// Feature layer endpoint, e.g. `…/rest/services/POIs/FeatureServer/0`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FeatureServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:6080/arcgis/rest/services/POIs/FeatureServer/0"
                .to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeatureServiceClient {
    config: FeatureServiceConfig,
    client: reqwest::blocking::Client,
}

impl FeatureServiceClient {
    pub fn new(config: FeatureServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl PoiCatalog for FeatureServiceClient {
    type Error = reqwest::Error;

    fn pois_for_city(
        &self,
        city_id: &str,
        categories: &[String],
    ) -> Result<Vec<PointOfInterest>, Self::Error> {
        let url = format!("{}/query", self.config.base_url);
        let clause = where_clause(city_id, categories);

        let response: QueryResponse = self
            .client
            .get(url)
            .query(&[
                ("where", clause.as_str()),
                ("outFields", "*"),
                ("returnGeometry", "true"),
                ("f", "json"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let pois = pois_from_features(response.features.unwrap_or_default());
        debug!(city = city_id, count = pois.len(), "fetched POIs");
        Ok(pois)
    }
}

/// Builds the layer query's `where` clause. Single quotes in values are
/// doubled per the SQL-ish syntax the endpoint expects.
fn where_clause(city_id: &str, categories: &[String]) -> String {
    let mut clause = format!("cityId='{}'", escape(city_id));
    if !categories.is_empty() {
        let list = categories
            .iter()
            .map(|category| format!("'{}'", escape(category)))
            .collect::<Vec<_>>()
            .join(",");
        clause.push_str(" AND attractionType IN (");
        clause.push_str(&list);
        clause.push(')');
    }
    clause
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    attributes: FeatureAttributes,
    geometry: Option<FeatureGeometry>,
}

/// Attribute names keep the upstream layer's casing, which mixes styles.
#[derive(Debug, Deserialize)]
struct FeatureAttributes {
    #[serde(rename = "poiId")]
    poi_id: Option<String>,
    #[serde(rename = "cityId")]
    city_id: Option<String>,
    #[serde(rename = "NAME")]
    name: Option<String>,
    #[serde(rename = "attractionType")]
    attraction_type: Option<String>,
    #[serde(rename = "RATING")]
    rating: Option<f64>,
    #[serde(rename = "priceRange")]
    price_range: Option<PriceField>,
    #[serde(rename = "openingHours")]
    opening_hours: Option<String>,
    #[serde(rename = "estimatedTime")]
    estimated_time: Option<u32>,
}

/// The layer stores price ranges as text, but bare numbers occur too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Text(String),
    Number(f64),
}

impl PriceField {
    fn into_string(self) -> String {
        match self {
            PriceField::Text(text) => text,
            PriceField::Number(number) => number.to_string(),
        }
    }
}

/// Projected Web Mercator meters in the layer's spatial reference.
#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    x: f64,
    y: f64,
}

fn pois_from_features(features: Vec<Feature>) -> Vec<PointOfInterest> {
    features.into_iter().filter_map(poi_from_feature).collect()
}

fn poi_from_feature(feature: Feature) -> Option<PointOfInterest> {
    let attributes = feature.attributes;
    let Some(id) = attributes.poi_id.filter(|id| !id.is_empty()) else {
        warn!("feature without poiId dropped");
        return None;
    };

    let (latitude, longitude) = match feature.geometry {
        Some(geometry) => {
            let (lat, lon) = web_mercator_to_geographic(geometry.x, geometry.y);
            if lat.is_finite() && lon.is_finite() {
                (Some(lat), Some(lon))
            } else {
                (None, None)
            }
        }
        None => (None, None),
    };

    Some(PointOfInterest {
        id,
        city_id: attributes.city_id.unwrap_or_default(),
        name: attributes.name.unwrap_or_default(),
        category: attributes.attraction_type.unwrap_or_default(),
        rating: attributes.rating,
        price_range: attributes.price_range.map(PriceField::into_string),
        opening_hours: attributes.opening_hours,
        estimated_time: attributes.estimated_time,
        latitude,
        longitude,
    })
}
