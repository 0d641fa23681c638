use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("boundary dataset is not valid GeoJSON: {0}")]
    InvalidBoundaries(#[from] serde_json::Error),

    #[error("boundary dataset must be a FeatureCollection, found \"{found}\"")]
    NotAFeatureCollection { found: String },
}
