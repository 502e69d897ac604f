//! Turns free-text queries into structured filters.

use regex::Regex;
use std::sync::OnceLock;

use crate::geofile::feature::AmenityKind;

/// The only locality token the location pattern recognizes.
const LOCALITY_TOKEN: &str = "corniche";

struct QueryPatterns {
    park: Regex,
    hospital: Regex,
    locality: Regex,
}

fn query_patterns() -> &'static QueryPatterns {
    static PATTERNS: OnceLock<QueryPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| QueryPatterns {
        park: Regex::new(r"\bparks?\b").unwrap(),
        hospital: Regex::new(r"\b(?:hospitals?|clinics?)\b").unwrap(),
        // The preposition is intentionally not word-bounded.
        locality: Regex::new(r"(?:near|at|in)\s+corniche").unwrap(),
    })
}

/// Structured form of a free-text query. Both constraints are optional; the
/// default value constrains nothing and matches every feature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFilter {
    pub amenity: Option<AmenityKind>,
    pub locality: Option<String>,
}

impl QueryFilter {
    /// True when the filter carries no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.amenity.is_none() && self.locality.is_none()
    }
}

/// Interprets a raw query string into a [`QueryFilter`].
///
/// The text is lowercased and tested against fixed keyword patterns:
/// `park`/`parks` selects parks, else `hospital(s)`/`clinic(s)` selects
/// hospitals, and `near`/`at`/`in` followed by `corniche` sets the locality
/// constraint. Park is tested first and wins when both amenity patterns
/// would match. Anything else in the text is ignored, so unrecognized
/// queries degrade to fewer constraints rather than failing.
pub fn interpret_query(raw_query: &str) -> QueryFilter {
    let lowered = raw_query.to_lowercase();
    let patterns = query_patterns();

    let mut filter = QueryFilter::default();
    if patterns.park.is_match(&lowered) {
        filter.amenity = Some(AmenityKind::Park);
    } else if patterns.hospital.is_match(&lowered) {
        filter.amenity = Some(AmenityKind::Hospital);
    }
    if patterns.locality.is_match(&lowered) {
        filter.locality = Some(LOCALITY_TOKEN.to_string());
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Show parks", Some(AmenityKind::Park), None)]
    #[case("park", Some(AmenityKind::Park), None)]
    #[case("PARKS", Some(AmenityKind::Park), None)]
    #[case("hospital", Some(AmenityKind::Hospital), None)]
    #[case("Hospitals", Some(AmenityKind::Hospital), None)]
    #[case("clinic", Some(AmenityKind::Hospital), None)]
    #[case("Clinics nearby", Some(AmenityKind::Hospital), None)]
    #[case("park near the hospital", Some(AmenityKind::Park), None)] // Park is tested first and wins.
    #[case("parking", None, None)] // Word boundary: "parking" is not "park".
    #[case("clinical trial", None, None)]
    #[case("spark", None, None)]
    #[case("hospitals near Corniche", Some(AmenityKind::Hospital), Some("corniche"))]
    #[case("parks at corniche", Some(AmenityKind::Park), Some("corniche"))]
    #[case("in corniche", None, Some("corniche"))]
    #[case("IN CORNICHE", None, Some("corniche"))]
    #[case("near  corniche", None, Some("corniche"))] // Any run of whitespace after the preposition.
    #[case("corniche", None, None)] // The bare locality without a preposition is not recognized.
    #[case("nearcorniche", None, None)]
    #[case("parks in Downtown", Some(AmenityKind::Park), None)] // Only "corniche" is a known locality.
    #[case("", None, None)]
    #[case("   ", None, None)]
    #[case("show me everything", None, None)]
    fn interpret_query_cases(
        #[case] raw: &str,
        #[case] amenity: Option<AmenityKind>,
        #[case] locality: Option<&str>,
    ) {
        let filter = interpret_query(raw);
        assert_eq!(filter.amenity, amenity, "amenity for {:?}", raw);
        assert_eq!(filter.locality.as_deref(), locality, "locality for {:?}", raw);
    }

    #[test]
    fn locality_preposition_is_not_word_bounded() {
        // "in" inside "martin" still counts when "corniche" follows.
        let filter = interpret_query("martin corniche");
        assert_eq!(filter.locality.as_deref(), Some("corniche"));
    }

    #[test]
    fn empty_and_unrecognized_queries_yield_the_empty_filter() {
        assert!(interpret_query("").is_empty());
        assert!(interpret_query("show me everything").is_empty());
        assert!(!interpret_query("parks").is_empty());
    }
}
