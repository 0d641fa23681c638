//! Country boundaries, region merging, and advisory-to-geometry resolution.

pub mod boundary;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod resolve;

pub use boundary::{BoundaryFeature, BoundaryIndex};
pub use error::GeoError;
pub use geometry::{Geometry, Position, Ring};
pub use merge::merge_geometries;
pub use resolve::{GeometryResolution, ResolveOutcome, ResolvedAdvisory, Resolver};
