//! KML 2.2 document assembly for resolved advisories.

pub mod coords;
pub mod description;
pub mod document;
pub mod error;
pub mod style;

pub use document::{format_timestamp, render_document, OutputFeature};
pub use error::KmlError;
pub use style::{level_style, LevelStyle};
