#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Report dataset loading and validation.
//!
//! Reads the denuncia CSV with `csv` + `serde` into a raw row type, then
//! validates each row once into the canonical [`Report`] record. Rows
//! whose required fields cannot be parsed into the typed model are
//! skipped with a logged count; rows with missing coordinates are kept
//! (they are only dropped after filtering, before rendering).

pub mod progress;

use std::io;
use std::path::Path;

use denuncias_map_report_models::{PopulationGroup, Report, TimeBand, Weekday};
use serde::Deserialize;

pub use progress::{NullProgress, ProgressCallback};

/// Errors that can occur while loading the report dataset.
///
/// Any of these is fatal to the session: there is no retry and no
/// partial load.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error (missing or unreadable file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed CSV (bad structure, not a bad field value).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw CSV row, keyed by the source dataset's column headers.
#[derive(Debug, Deserialize)]
struct RawReportRow {
    anio_hecho: Option<String>,
    delito: Option<String>,
    dia_semana: Option<String>,
    franja_horaria: Option<String>,
    alcaldia_hecho: Option<String>,
    latitud: Option<String>,
    longitud: Option<String>,
    hora_hecho: Option<String>,
}

/// Loads and validates the report dataset at `path`.
///
/// Progress is reported per record through `progress`. Rows that fail
/// typed validation are skipped; the skip count is logged as a warning.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file is missing, unreadable, or
/// structurally malformed.
pub fn load_reports(
    path: &Path,
    progress: &dyn ProgressCallback,
) -> Result<Vec<Report>, DatasetError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let reports = collect_reports(reader, progress)?;
    log::info!("Loaded {} reports from {}", reports.len(), path.display());
    Ok(reports)
}

/// Loads and validates report rows from any CSV byte stream.
///
/// # Errors
///
/// Returns [`DatasetError`] if the stream is structurally malformed.
pub fn load_reports_from_reader<R: io::Read>(reader: R) -> Result<Vec<Report>, DatasetError> {
    let csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    collect_reports(csv_reader, &NullProgress)
}

fn collect_reports<R: io::Read>(
    mut reader: csv::Reader<R>,
    progress: &dyn ProgressCallback,
) -> Result<Vec<Report>, DatasetError> {
    let mut reports = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<RawReportRow>() {
        let raw = row?;
        match validate_row(raw) {
            Some(report) => reports.push(report),
            None => skipped += 1,
        }
        progress.inc(1);
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} rows that failed typed validation");
    }
    progress.finish(format!(
        "Loaded {} reports ({skipped} skipped)",
        reports.len()
    ));

    Ok(reports)
}

/// Validates one raw row into a [`Report`].
///
/// Returns `None` when a required categorical field (year, crime type,
/// weekday, time band, alcaldía) is missing or unparseable. Such rows
/// could never satisfy a filter selection. Missing coordinates are not
/// grounds for rejection here.
fn validate_row(raw: RawReportRow) -> Option<Report> {
    let year = parse_year(raw.anio_hecho.as_deref()?)?;
    let crime_type = non_empty(raw.delito)?;
    let weekday: Weekday = raw.dia_semana.as_deref()?.parse().ok()?;
    let time_band: TimeBand = raw.franja_horaria.as_deref()?.parse().ok()?;
    let borough = non_empty(raw.alcaldia_hecho)?.to_uppercase();

    Some(Report {
        year,
        crime_type,
        weekday,
        time_band,
        borough,
        latitude: parse_coordinate(raw.latitud.as_deref()),
        longitude: parse_coordinate(raw.longitud.as_deref()),
        hour: raw.hora_hecho.unwrap_or_default(),
        population_group: PopulationGroup::General,
    })
}

/// Parses a year field. The source dataset stores years both as plain
/// integers and as floats ("2022.0"), so both forms are accepted.
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let as_float = s.parse::<f64>().ok()?;
    if as_float.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        return Some(as_float as i32);
    }
    None
}

/// Parses an optional coordinate field. Missing, empty, or unparseable
/// values become `None`.
fn parse_coordinate(s: Option<&str>) -> Option<f64> {
    let value = s?;
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok()
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|value| !value.is_empty())
}
