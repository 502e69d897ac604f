//! Map-viewer core for a static collection of points of interest.
//!
//! A GeoJSON dataset is loaded once into a [`MapSession`], then filtered with
//! free-text queries such as `"parks"` or `"hospitals near corniche"`. Each
//! query runs the same pipeline: [`interpret_query`] builds a [`QueryFilter`],
//! the evaluator selects the matching features in dataset order, and a
//! [`MarkerRenderer`] is handed styled, labeled markers plus a viewport
//! framing.
//!
//! # Example
//!
//! ```
//! use poi_map::{apply_filter, interpret_query, AmenityKind, Feature, FeatureCollection};
//!
//! let collection = FeatureCollection::from(vec![
//!     Feature::new(
//!         geo::Point::new(51.5246, 25.2966),
//!         "Al Bidda Park",
//!         AmenityKind::Park,
//!         Some("Corniche"),
//!     ),
//!     Feature::new(
//!         geo::Point::new(51.5077, 25.2787),
//!         "Hamad General Hospital",
//!         AmenityKind::Hospital,
//!         Some("Al Sadd"),
//!     ),
//! ]);
//!
//! let filter = interpret_query("parks near corniche");
//! let matches = apply_filter(&collection, &filter);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name, "Al Bidda Park");
//! ```

pub mod error;
pub mod geofile;
pub mod query;
pub mod session;
pub mod view;

// Re-export commonly used types at crate root
pub use error::{PoiMapError, Result};
pub use geofile::feature::{AmenityKind, Feature, FeatureCollection};
pub use geofile::geojson::{
    parse_feature_collection, read_features_from_geojson, write_features_to_geojson,
};
pub use query::evaluator::{apply_filter, evaluate_query, matching_indices, QueryOutcome};
pub use query::interpreter::{interpret_query, QueryFilter};
pub use session::{MapSession, QuerySummary};
pub use view::marker::{Marker, MarkerStyle};
pub use view::render::{ConsoleRenderer, MarkerRenderer, Notice, RecordingRenderer};
pub use view::viewport::{padded_bounds, Framing, MapViewport};
