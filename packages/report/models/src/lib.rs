#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical denuncia record and filter dimension types.
//!
//! This crate defines the typed report record every pipeline stage
//! consumes, along with the enumerated filter dimensions (weekday and
//! time band) and the synthetic population-group tag. Source CSV rows
//! are validated into these types once, at load time.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Day of the week a denuncia was filed on.
///
/// The source dataset carries English day names, so the wire form is the
/// plain variant name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns all variants in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

/// Coarse time-of-day band (franja horaria) a denuncia falls into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimeBand {
    /// Early morning, roughly midnight to dawn.
    Madrugada,
    /// Morning.
    #[serde(rename = "Mañana")]
    #[strum(serialize = "Mañana")]
    Manana,
    /// Afternoon.
    Tarde,
    /// Evening and night.
    Noche,
}

impl TimeBand {
    /// Returns all variants in chronological order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Madrugada, Self::Manana, Self::Tarde, Self::Noche]
    }
}

/// Population group a denuncia is tagged with for visual distinction.
///
/// The tag is synthetic: a fixed-seed random sample per alcaldía, not an
/// attribute of the underlying report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PopulationGroup {
    /// Default group for every report.
    General,
    /// Seniors; assigned to a 30% sample of each alcaldía's reports.
    #[serde(rename = "Adulto mayor")]
    #[strum(serialize = "Adulto mayor")]
    AdultoMayor,
}

/// A single crime report (denuncia) validated into the canonical schema.
///
/// Coordinates are optional — reports without a usable lat/lng survive
/// loading and filtering but are dropped before classification and
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Year the crime occurred (source column `anio_hecho`).
    pub year: i32,
    /// Crime type as reported (source column `delito`).
    pub crime_type: String,
    /// Day of the week the crime occurred (source column `dia_semana`).
    pub weekday: Weekday,
    /// Time-of-day band (source column `franja_horaria`).
    pub time_band: TimeBand,
    /// Alcaldía name, uppercased at load for join compatibility
    /// (source column `alcaldia_hecho`).
    pub borough: String,
    /// Latitude (WGS84). `None` if the source row lacks a coordinate.
    pub latitude: Option<f64>,
    /// Longitude (WGS84). `None` if the source row lacks a coordinate.
    pub longitude: Option<f64>,
    /// Occurrence hour, carried verbatim for display only
    /// (source column `hora_hecho`).
    pub hour: String,
    /// Synthetic population group; `General` until the classifier runs.
    pub population_group: PopulationGroup,
}

impl Report {
    /// Returns `(latitude, longitude)` when both coordinates are present.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weekday_from_source_form() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("Lunes".parse::<Weekday>().is_err());
    }

    #[test]
    fn parses_time_band_including_accented_form() {
        assert_eq!(
            "Madrugada".parse::<TimeBand>().unwrap(),
            TimeBand::Madrugada
        );
        assert_eq!("Mañana".parse::<TimeBand>().unwrap(), TimeBand::Manana);
        assert!("Mediodia".parse::<TimeBand>().is_err());
    }

    #[test]
    fn time_band_displays_accented_form() {
        assert_eq!(TimeBand::Manana.to_string(), "Mañana");
        assert_eq!(TimeBand::Noche.to_string(), "Noche");
    }

    #[test]
    fn population_group_displays_two_word_form() {
        assert_eq!(PopulationGroup::AdultoMayor.to_string(), "Adulto mayor");
        assert_eq!(PopulationGroup::General.to_string(), "General");
    }

    #[test]
    fn population_group_parses_two_word_form() {
        assert_eq!(
            "Adulto mayor".parse::<PopulationGroup>().unwrap(),
            PopulationGroup::AdultoMayor
        );
    }

    #[test]
    fn coordinates_require_both_fields() {
        let mut report = Report {
            year: 2022,
            crime_type: "ROBO".to_string(),
            weekday: Weekday::Friday,
            time_band: TimeBand::Noche,
            borough: "COYOACAN".to_string(),
            latitude: Some(19.35),
            longitude: Some(-99.16),
            hour: "21:30:00".to_string(),
            population_group: PopulationGroup::General,
        };
        assert_eq!(report.coordinates(), Some((19.35, -99.16)));

        report.longitude = None;
        assert_eq!(report.coordinates(), None);
    }
}
