//! In-memory index over a GeoJSON country-boundary FeatureCollection.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::GeoError;
use crate::geometry::Geometry;

/// Placeholder ISO3 the boundary dataset uses for disputed or unassigned areas.
const ISO3_SENTINEL: &str = "-99";

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(rename = "ISO3166-1-Alpha-3", default)]
    iso3: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// One country boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// ISO 3166-1 alpha-3 code; `None` when missing or the `-99` placeholder.
    pub iso3: Option<String>,
    pub name: Option<String>,
    pub geometry: Option<Geometry>,
}

impl BoundaryFeature {
    /// The feature's geometry when it is a `Polygon` or `MultiPolygon`.
    #[must_use]
    pub fn areal_geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref().filter(|g| g.is_areal())
    }
}

/// Boundaries indexed by ISO3 code and by exact name.
///
/// When several features share a code or name the last one wins.
#[derive(Debug, Default)]
pub struct BoundaryIndex {
    features: Vec<BoundaryFeature>,
    by_iso3: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl BoundaryIndex {
    /// Parses a GeoJSON FeatureCollection.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidBoundaries`] when the text is not valid
    /// GeoJSON and [`GeoError::NotAFeatureCollection`] when the top-level
    /// object has a different `type`.
    pub fn from_geojson_str(json: &str) -> Result<Self, GeoError> {
        let raw: RawCollection = serde_json::from_str(json)?;
        if raw.kind != "FeatureCollection" {
            return Err(GeoError::NotAFeatureCollection { found: raw.kind });
        }

        let features = raw.features.into_iter().map(|feature| {
            let properties = feature.properties.unwrap_or_default();
            BoundaryFeature {
                iso3: properties
                    .iso3
                    .filter(|code| !code.is_empty() && code != ISO3_SENTINEL),
                name: properties.name.filter(|name| !name.is_empty()),
                geometry: feature.geometry,
            }
        });
        Ok(Self::from_features(features))
    }

    /// Builds an index from already-parsed features.
    pub fn from_features(features: impl IntoIterator<Item = BoundaryFeature>) -> Self {
        let mut index = Self::default();
        for feature in features {
            let position = index.features.len();
            if let Some(code) = &feature.iso3 {
                index.by_iso3.insert(code.clone(), position);
            }
            if let Some(name) = &feature.name {
                index.by_name.insert(name.clone(), position);
            }
            index.features.push(feature);
        }
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn by_iso3(&self, code: &str) -> Option<&BoundaryFeature> {
        self.by_iso3.get(code).map(|&i| &self.features[i])
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&BoundaryFeature> {
        self.by_name.get(name).map(|&i| &self.features[i])
    }

    /// Looks `key` up as an ISO3 code first, then as a feature name.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&BoundaryFeature> {
        self.by_iso3(key).or_else(|| self.by_name(key))
    }
}
