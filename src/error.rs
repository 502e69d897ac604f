//! Error types shared across the crate.

use std::io;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PoiMapError>;

/// Errors raised while loading a dataset or driving a map session.
#[derive(Error, Debug)]
pub enum PoiMapError {
    /// Reading or writing a dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dataset is not valid GeoJSON.
    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),

    /// The dataset parsed as GeoJSON, but its root is not a FeatureCollection.
    #[error("dataset root is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,

    /// A feature in the dataset is missing a required part or carries an
    /// unusable one. `index` is the zero-based position in the collection.
    #[error("feature {index}: {reason}")]
    MalformedFeature { index: usize, reason: String },

    /// An amenity tag outside the known enumeration.
    #[error("unrecognized amenity kind '{0}'")]
    UnknownAmenity(String),

    /// Fetching a remote dataset failed.
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// A query was submitted before any dataset was loaded.
    #[error("no dataset loaded: load a feature collection before querying")]
    NotLoaded,

    /// A second dataset load was attempted on the same session.
    #[error("a dataset is already loaded for this session")]
    AlreadyLoaded,
}

impl PoiMapError {
    /// Builds a [`PoiMapError::MalformedFeature`] for the feature at `index`.
    pub fn malformed_feature(index: usize, reason: impl Into<String>) -> Self {
        PoiMapError::MalformedFeature {
            index,
            reason: reason.into(),
        }
    }
}
