pub mod download;
pub mod feature;
pub mod geojson;
