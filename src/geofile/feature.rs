use std::fmt;
use std::ops::Index;
use std::slice;
use std::str::FromStr;

use crate::error::PoiMapError;

/// Closed enumeration of amenity categories carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityKind {
    Park,
    Hospital,
}

impl AmenityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmenityKind::Park => "park",
            AmenityKind::Hospital => "hospital",
        }
    }
}

impl fmt::Display for AmenityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmenityKind {
    type Err = PoiMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "park" => Ok(AmenityKind::Park),
            "hospital" => Ok(AmenityKind::Hospital),
            _ => Err(PoiMapError::UnknownAmenity(s.to_string())),
        }
    }
}

/// One point of interest. The position is in WGS84 degrees with
/// x = longitude and y = latitude. Immutable once part of a loaded
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub position: geo::Point,
    pub name: String,
    pub amenity: AmenityKind,
    /// Free-text locality label, absent for features outside any named area.
    pub area: Option<String>,
}

impl Feature {
    pub fn new(position: geo::Point, name: &str, amenity: AmenityKind, area: Option<&str>) -> Self {
        Self {
            position,
            name: name.to_string(),
            amenity,
            area: area.map(str::to_string),
        }
    }
}

/// Ordered, read-only collection of features. The order is the dataset order
/// and every filter preserves it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for FeatureCollection {
    type Output = Feature;

    fn index(&self, index: usize) -> &Self::Output {
        &self.features[index]
    }
}
