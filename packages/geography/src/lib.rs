#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Alcaldía boundary loading.
//!
//! Reads the borough boundary `GeoJSON` into [`Borough`] records:
//! display name from the `NOMGEO` property, an uppercased join key, and
//! the polygon geometry as a [`geo::MultiPolygon`]. Feature order is
//! preserved as read — downstream color assignment depends on it.

use std::fs;
use std::path::Path;

use geo::MultiPolygon;
use geojson::GeoJson;

/// Property carrying the alcaldía display name in the boundary file.
pub const NAME_PROPERTY: &str = "NOMGEO";

/// Errors that can occur while loading the boundary dataset.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// I/O error (missing or unreadable file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `GeoJSON` document.
    #[error("GeoJSON parse error: {0}")]
    Geojson(#[from] geojson::Error),

    /// Structurally valid `GeoJSON` that is not a usable boundary set.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// One administrative boundary (alcaldía).
#[derive(Debug, Clone, PartialEq)]
pub struct Borough {
    /// Display name, verbatim from `NOMGEO`.
    pub name: String,
    /// Uppercased name, the join key against report borough names.
    pub key: String,
    /// Boundary polygons (WGS84 lng/lat).
    pub geometry: MultiPolygon<f64>,
}

/// Loads the boundary dataset at `path`.
///
/// # Errors
///
/// Returns [`GeoError`] if the file is missing, unreadable, not valid
/// `GeoJSON`, or not a `FeatureCollection`.
pub fn load_boroughs(path: &Path) -> Result<Vec<Borough>, GeoError> {
    let raw = fs::read_to_string(path)?;
    let boroughs = parse_boroughs(&raw)?;
    log::info!("Loaded {} alcaldías from {}", boroughs.len(), path.display());
    Ok(boroughs)
}

/// Parses a `GeoJSON` `FeatureCollection` into boroughs, preserving
/// feature order.
///
/// Features without a usable name or an areal geometry are skipped with
/// a warning rather than failing the whole load.
///
/// # Errors
///
/// Returns [`GeoError`] if the document is not valid `GeoJSON` or not a
/// `FeatureCollection`.
pub fn parse_boroughs(raw: &str) -> Result<Vec<Borough>, GeoError> {
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(GeoError::Conversion {
            message: "expected a FeatureCollection of alcaldía boundaries".to_string(),
        });
    };

    let mut boroughs = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(name) = feature
            .property(NAME_PROPERTY)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
        else {
            log::warn!("Skipping boundary feature without a {NAME_PROPERTY} property");
            continue;
        };

        let Some(geometry) = feature.geometry.and_then(to_multipolygon) else {
            log::warn!("Skipping boundary '{name}' without a polygon geometry");
            continue;
        };

        let key = name.to_uppercase();
        boroughs.push(Borough {
            name,
            key,
            geometry,
        });
    }

    Ok(boroughs)
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`].
/// Handles both `Polygon` and `MultiPolygon` geometry types.
fn to_multipolygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}
