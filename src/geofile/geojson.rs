use std::{fs, path::Path};

use geojson::GeoJson;
use serde_json::{Map, Value as JsonValue};

use crate::error::{PoiMapError, Result};
use crate::geofile::feature::{AmenityKind, Feature, FeatureCollection};

/// Reads a GeoJSON FeatureCollection of points of interest from a file.
pub fn read_features_from_geojson(filepath: &Path) -> Result<FeatureCollection> {
    let raw = fs::read_to_string(filepath)?;
    parse_feature_collection(&raw)
}

/// Parses a GeoJSON document into a [`FeatureCollection`].
///
/// The parse is strict: the root must be a FeatureCollection, every feature
/// must be a Point with `name` and `amenity` properties, and the amenity tag
/// must be a known kind. `area` may be absent or null. Any violation fails
/// the whole load, naming the offending feature index.
pub fn parse_feature_collection(raw: &str) -> Result<FeatureCollection> {
    let geojson = raw.parse::<GeoJson>()?;
    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => return Err(PoiMapError::NotAFeatureCollection),
    };
    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| convert_feature(index, feature))
        .collect()
}

fn convert_feature(index: usize, feature: geojson::Feature) -> Result<Feature> {
    let geometry = feature
        .geometry
        .ok_or_else(|| PoiMapError::malformed_feature(index, "missing geometry"))?;
    let position = match geometry.value {
        geojson::Value::Point(coords) => {
            if coords.len() < 2 {
                return Err(PoiMapError::malformed_feature(
                    index,
                    "point has fewer than two coordinates",
                ));
            }
            geo::Point::new(coords[0], coords[1])
        }
        _ => {
            return Err(PoiMapError::malformed_feature(
                index,
                "geometry is not a Point",
            ))
        }
    };

    let properties = feature
        .properties
        .ok_or_else(|| PoiMapError::malformed_feature(index, "missing properties"))?;
    let name = string_property(&properties, "name").ok_or_else(|| {
        PoiMapError::malformed_feature(index, "missing or non-string 'name' property")
    })?;
    let amenity_tag = string_property(&properties, "amenity").ok_or_else(|| {
        PoiMapError::malformed_feature(index, "missing or non-string 'amenity' property")
    })?;
    let amenity = amenity_tag
        .parse::<AmenityKind>()
        .map_err(|err| PoiMapError::malformed_feature(index, err.to_string()))?;
    let area = match properties.get("area") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(area)) => Some(area.clone()),
        Some(_) => {
            return Err(PoiMapError::malformed_feature(
                index,
                "'area' property is not a string",
            ))
        }
    };

    Ok(Feature {
        position,
        name,
        amenity,
        area,
    })
}

fn string_property(properties: &Map<String, JsonValue>, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

/// Writes the collection back out as a GeoJSON FeatureCollection.
pub fn write_features_to_geojson(
    collection: &FeatureCollection,
    output_filepath: &Path,
) -> Result<()> {
    let feature_collection: geojson::FeatureCollection =
        collection.iter().map(feature_to_geojson).collect();
    let geojson_contents: geojson::GeoJson = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())?;
    Ok(())
}

fn feature_to_geojson(feature: &Feature) -> geojson::Feature {
    let mut properties = Map::new();
    properties.insert("name".to_string(), JsonValue::from(feature.name.as_str()));
    properties.insert(
        "amenity".to_string(),
        JsonValue::from(feature.amenity.as_str()),
    );
    if let Some(area) = &feature.area {
        properties.insert("area".to_string(), JsonValue::from(area.as_str()));
    }

    let point = geojson::Value::Point(vec![feature.position.x(), feature.position.y()]);
    let mut geojson_feature = geojson::Feature::from(geojson::Geometry::new(point));
    geojson_feature.properties = Some(properties);
    geojson_feature
}
