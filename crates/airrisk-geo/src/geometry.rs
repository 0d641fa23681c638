//! The slice of the GeoJSON geometry model the pipeline renders.
//!
//! Only areal geometries matter for a risk map. Every other geometry type
//! deserializes to [`Geometry::Unsupported`] so a stray `Point` in the
//! boundary dataset never fails the whole load.

use serde::Deserialize;

/// `[lon, lat]`, optionally followed by an altitude that is ignored.
pub type Position = Vec<f64>;

/// A closed linear ring of positions.
pub type Ring = Vec<Position>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// First ring is the exterior, the rest are holes.
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    #[must_use]
    pub fn is_areal(&self) -> bool {
        !matches!(self, Geometry::Unsupported)
    }

    /// Number of polygons carried: 1 for a `Polygon`, the member count for a
    /// `MultiPolygon`, 0 otherwise.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        match self {
            Geometry::Polygon { .. } => 1,
            Geometry::MultiPolygon { coordinates } => coordinates.len(),
            Geometry::Unsupported => 0,
        }
    }
}
