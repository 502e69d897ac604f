use crate::geofile::feature::{AmenityKind, Feature};

/// Visual style of a marker. Each amenity kind gets its own style so the two
/// categories are distinguishable at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub symbol: char,
}

impl MarkerStyle {
    pub fn for_amenity(amenity: AmenityKind) -> Self {
        match amenity {
            AmenityKind::Park => MarkerStyle {
                color: "#2e7d32",
                symbol: 'P',
            },
            AmenityKind::Hospital => MarkerStyle {
                color: "#c62828",
                symbol: 'H',
            },
        }
    }
}

/// One drawable marker: position, label and style derived from a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: geo::Point,
    pub label: String,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn for_feature(feature: &Feature) -> Self {
        Self {
            position: feature.position,
            label: format!("{} ({})", feature.name, feature.amenity),
            style: MarkerStyle::for_amenity(feature.amenity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_name_and_amenity_kind() {
        let feature = Feature::new(
            geo::Point::new(51.5246, 25.2966),
            "Al Bidda Park",
            AmenityKind::Park,
            Some("Corniche"),
        );
        let marker = Marker::for_feature(&feature);
        assert_eq!(marker.label, "Al Bidda Park (park)");
        assert_eq!(marker.position, feature.position);
    }

    #[test]
    fn amenity_kinds_have_distinguishable_styles() {
        let park = MarkerStyle::for_amenity(AmenityKind::Park);
        let hospital = MarkerStyle::for_amenity(AmenityKind::Hospital);
        assert_ne!(park, hospital);
        assert_ne!(park.color, hospital.color);
        assert_ne!(park.symbol, hospital.symbol);
    }
}
