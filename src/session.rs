use std::path::Path;

use crate::error::{PoiMapError, Result};
use crate::geofile::feature::{Feature, FeatureCollection};
use crate::geofile::geojson::read_features_from_geojson;
use crate::query::evaluator::{is_no_results, matching_indices};
use crate::query::interpreter::{interpret_query, QueryFilter};
use crate::view::marker::Marker;
use crate::view::render::{MarkerRenderer, Notice};
use crate::view::viewport::{padded_bounds, Framing, MARGIN_RATIO};

/// What a submitted query did, for logging and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySummary {
    pub filter: QueryFilter,
    pub shown: usize,
    pub total: usize,
    pub no_results: bool,
}

/// One viewing session: the loaded collection plus the indices of the
/// currently displayed subset.
///
/// The lifecycle is two-phase: constructed empty, populated exactly once by
/// [`load`](MapSession::load), read-only thereafter. Queries are rejected
/// until a load succeeds.
#[derive(Debug, Default)]
pub struct MapSession {
    collection: Option<FeatureCollection>,
    displayed: Vec<usize>,
}

impl MapSession {
    pub fn new() -> Self {
        Self {
            collection: None,
            displayed: Vec::new(),
        }
    }

    /// True once a collection has been loaded.
    pub fn is_ready(&self) -> bool {
        self.collection.is_some()
    }

    pub fn collection(&self) -> Option<&FeatureCollection> {
        self.collection.as_ref()
    }

    /// Installs the collection for this session. Fails with
    /// [`PoiMapError::AlreadyLoaded`] on a second call.
    pub fn load(&mut self, collection: FeatureCollection) -> Result<()> {
        if self.collection.is_some() {
            return Err(PoiMapError::AlreadyLoaded);
        }
        log::info!("Loaded {} features into the session", collection.len());
        self.collection = Some(collection);
        Ok(())
    }

    /// Reads a GeoJSON file and installs it in one step.
    pub fn load_geojson_file(&mut self, filepath: &Path) -> Result<()> {
        let collection = read_features_from_geojson(filepath)?;
        self.load(collection)
    }

    /// The currently displayed features, in collection order.
    pub fn displayed_features(&self) -> Vec<&Feature> {
        match &self.collection {
            Some(collection) => self
                .displayed
                .iter()
                .map(|&index| &collection[index])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Runs the full pipeline for one query: interpret, filter, frame,
    /// render.
    ///
    /// The displayed subset is replaced wholesale. The renderer receives one
    /// marker per match and a fit-to-bounds framing with margin; a query
    /// matching nothing resets the framing instead, and when that query was
    /// non-blank the renderer is additionally handed
    /// [`Notice::NoResults`].
    pub fn submit_query(
        &mut self,
        raw_query: &str,
        renderer: &mut dyn MarkerRenderer,
    ) -> Result<QuerySummary> {
        let collection = match &self.collection {
            Some(collection) => collection,
            None => return Err(PoiMapError::NotLoaded),
        };

        let filter = interpret_query(raw_query);
        log::debug!("Interpreted {:?} as {:?}", raw_query, filter);
        let indices = matching_indices(collection, &filter);
        let no_results = is_no_results(raw_query, indices.len());

        let markers: Vec<Marker> = indices
            .iter()
            .map(|&index| Marker::for_feature(&collection[index]))
            .collect();
        let positions: Vec<geo::Point> = markers.iter().map(|marker| marker.position).collect();
        let framing = match padded_bounds(&positions, MARGIN_RATIO) {
            Some(bounds) => Framing::FitBounds(bounds),
            None => Framing::Reset,
        };
        let summary = QuerySummary {
            filter,
            shown: indices.len(),
            total: collection.len(),
            no_results,
        };

        self.displayed = indices;
        renderer.render(&markers, framing);
        if no_results {
            renderer.show_notice(Notice::NoResults {
                query: raw_query.trim().to_string(),
            });
        }
        Ok(summary)
    }
}
