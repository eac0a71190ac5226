#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map document generation.
//!
//! Turns one pipeline run's outputs — the joined per-alcaldía counts and
//! the labeled report set — into a self-contained Leaflet HTML document:
//! a `CartoDB` positron base map, a choropleth layer colored per
//! alcaldía, and one toggleable marker overlay per population group.

mod document;
pub mod layers;
pub mod palette;

use std::fs;
use std::io;
use std::path::Path;

use denuncias_map_analytics::BoroughCount;
use denuncias_map_report_models::Report;

/// Map center (lat, lng): CDMX.
pub const MAP_CENTER: (f64, f64) = (19.4326, -99.1332);

/// Initial zoom level.
pub const MAP_ZOOM: u32 = 11;

/// Rendered map element width.
pub const MAP_WIDTH_PX: u32 = 1000;

/// Rendered map element height.
pub const MAP_HEIGHT_PX: u32 = 700;

const MARKER_RADIUS_PX: u32 = 3;
const MARKER_FILL_OPACITY: f64 = 0.5;

/// Errors that can occur while building or writing the map document.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// I/O error while writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Layer payload serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds the complete map document for one pipeline run.
///
/// An empty `reports` set is not an error: the document renders with
/// zero markers and all-zero tooltips.
///
/// # Errors
///
/// Returns [`MapError`] if a layer payload cannot be serialized.
pub fn build_map(counts: &[BoroughCount<'_>], reports: &[Report]) -> Result<String, MapError> {
    let boundaries = layers::boundary_collection(counts);
    let overlays = layers::marker_layers(reports);

    let html = document::render(
        &serde_json::to_string(&boundaries)?,
        &serde_json::to_string(&overlays)?,
    );
    Ok(html)
}

/// Writes the map document to `path`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns [`MapError`] if the directory or file cannot be written.
pub fn write_map(html: &str, path: &Path) -> Result<(), MapError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    log::info!("Map document written: {}", path.display());
    Ok(())
}
