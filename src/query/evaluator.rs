use crate::geofile::feature::{Feature, FeatureCollection};
use crate::query::interpreter::{interpret_query, QueryFilter};

/// Decides whether a single feature satisfies the filter.
///
/// An absent amenity constraint passes every kind; an absent locality
/// constraint passes every area. A present locality constraint is matched
/// case-insensitively as a substring of the feature's area label, and a
/// feature without an area label never matches it.
pub fn feature_matches(filter: &QueryFilter, feature: &Feature) -> bool {
    let amenity_matches = match filter.amenity {
        None => true,
        Some(kind) => feature.amenity == kind,
    };
    let locality_matches = match &filter.locality {
        None => true,
        Some(locality) => match &feature.area {
            Some(area) => area.to_lowercase().contains(locality.as_str()),
            None => false,
        },
    };
    amenity_matches && locality_matches
}

/// Indices of the matching features, in collection order.
pub fn matching_indices(collection: &FeatureCollection, filter: &QueryFilter) -> Vec<usize> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, feature)| feature_matches(filter, feature))
        .map(|(index, _)| index)
        .collect()
}

/// The matching features themselves, in collection order.
pub fn apply_filter<'a>(
    collection: &'a FeatureCollection,
    filter: &QueryFilter,
) -> Vec<&'a Feature> {
    collection
        .iter()
        .filter(|feature| feature_matches(filter, feature))
        .collect()
}

/// True when a non-blank query matched nothing. A blank query shows the whole
/// collection and is never a "no results" condition, even on an empty
/// collection.
pub fn is_no_results(raw_query: &str, matched: usize) -> bool {
    0 == matched && !raw_query.trim().is_empty()
}

/// Result of running a raw query against a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<'a> {
    /// The matching features, possibly the whole collection.
    Matches(Vec<&'a Feature>),
    /// A non-blank query matched nothing.
    NoResults,
}

impl<'a> QueryOutcome<'a> {
    pub fn features(&self) -> &[&'a Feature] {
        match self {
            QueryOutcome::Matches(features) => features,
            QueryOutcome::NoResults => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, QueryOutcome::NoResults)
    }
}

/// Interprets `raw_query` and filters the collection in one step.
pub fn evaluate_query<'a>(collection: &'a FeatureCollection, raw_query: &str) -> QueryOutcome<'a> {
    let filter = interpret_query(raw_query);
    let matches = apply_filter(collection, &filter);
    if is_no_results(raw_query, matches.len()) {
        QueryOutcome::NoResults
    } else {
        QueryOutcome::Matches(matches)
    }
}
