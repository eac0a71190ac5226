//! Map layer payloads.
//!
//! Builds the boundary choropleth as a `GeoJSON` `FeatureCollection`
//! (fill color and tooltip fields carried as feature properties) and one
//! marker overlay per population group present in the filtered set, in
//! first-seen order.

use denuncias_map_analytics::BoroughCount;
use denuncias_map_report_models::{PopulationGroup, Report};
use serde::Serialize;

use crate::palette;

/// Marker color for a population group.
#[must_use]
pub const fn marker_color(group: PopulationGroup) -> &'static str {
    match group {
        PopulationGroup::AdultoMayor => "blue",
        PopulationGroup::General => "red",
    }
}

/// One marker overlay: all filtered reports of a single population
/// group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    /// Overlay name shown in the layer control.
    pub name: String,
    /// Marker color for the whole overlay.
    pub color: &'static str,
    /// One marker per report.
    pub markers: Vec<Marker>,
}

/// One circle marker with its popup fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    /// Crime type shown in the popup.
    pub delito: String,
    /// Alcaldía shown in the popup.
    pub alcaldia: String,
    /// Occurrence hour shown in the popup.
    pub hora: String,
}

/// Builds the choropleth layer: one feature per alcaldía with its
/// display name, report count, and assigned fill color as properties.
#[must_use]
pub fn boundary_collection(counts: &[BoroughCount<'_>]) -> geojson::FeatureCollection {
    let colors = palette::assign_colors(counts.iter().map(|bc| bc.borough.key.as_str()));

    let features = counts
        .iter()
        .map(|bc| {
            let color = colors
                .get(&bc.borough.key)
                .copied()
                .unwrap_or(palette::FALLBACK_COLOR);

            let mut properties = geojson::JsonObject::new();
            properties.insert("name".to_string(), bc.borough.name.clone().into());
            properties.insert("denuncias".to_string(), bc.count.into());
            properties.insert("fillColor".to_string(), color.into());

            geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &bc.borough.geometry,
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Builds one marker overlay per population group present in `reports`,
/// in first-seen order. Reports without coordinates never reach this
/// point, but are skipped defensively all the same.
#[must_use]
pub fn marker_layers(reports: &[Report]) -> Vec<MarkerLayer> {
    let mut groups: Vec<PopulationGroup> = Vec::new();
    for report in reports {
        if !groups.contains(&report.population_group) {
            groups.push(report.population_group);
        }
    }

    groups
        .into_iter()
        .map(|group| MarkerLayer {
            name: format!("Población: {group}"),
            color: marker_color(group),
            markers: reports
                .iter()
                .filter(|report| report.population_group == group)
                .filter_map(|report| {
                    report.coordinates().map(|(lat, lng)| Marker {
                        lat,
                        lng,
                        delito: report.crime_type.clone(),
                        alcaldia: report.borough.clone(),
                        hora: report.hour.clone(),
                    })
                })
                .collect(),
        })
        .collect()
}
