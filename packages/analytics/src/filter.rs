//! Report filtering.
//!
//! Filtering is a strict conjunction across four dimensions. The year is
//! always required; the three multi-select dimensions treat an empty
//! selection as "no filter applied" rather than "exclude everything."
//! Rows without complete coordinates are dropped after the dimension
//! filters, unconditionally.

use std::collections::BTreeSet;

use denuncias_map_report_models::{Report, TimeBand, Weekday};

/// The four filter selections a user can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exactly one year; reports from other years never pass.
    pub year: i32,
    /// Crime types to keep; empty means all types pass.
    pub crime_types: Vec<String>,
    /// Weekdays to keep; empty means all weekdays pass.
    pub weekdays: Vec<Weekday>,
    /// Time bands to keep; empty means all bands pass.
    pub time_bands: Vec<TimeBand>,
}

impl FilterCriteria {
    /// Criteria selecting a year with no multi-select filters applied.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        Self {
            year,
            crime_types: Vec::new(),
            weekdays: Vec::new(),
            time_bands: Vec::new(),
        }
    }

    /// Whether `report` satisfies the conjunction of all four dimensions.
    #[must_use]
    pub fn matches(&self, report: &Report) -> bool {
        report.year == self.year
            && (self.crime_types.is_empty()
                || self.crime_types.iter().any(|c| c == &report.crime_type))
            && (self.weekdays.is_empty() || self.weekdays.contains(&report.weekday))
            && (self.time_bands.is_empty() || self.time_bands.contains(&report.time_band))
    }
}

/// Applies `criteria` and drops rows with missing coordinates.
///
/// The retained reports are cloned so the caller can label them without
/// touching the loaded dataset.
#[must_use]
pub fn filter_reports(reports: &[Report], criteria: &FilterCriteria) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| criteria.matches(report))
        .filter(|report| report.coordinates().is_some())
        .cloned()
        .collect()
}

/// The sorted set of distinct years present in the dataset.
#[must_use]
pub fn distinct_years(reports: &[Report]) -> Vec<i32> {
    reports
        .iter()
        .map(|report| report.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The sorted set of distinct crime types present in the dataset.
#[must_use]
pub fn distinct_crime_types(reports: &[Report]) -> Vec<String> {
    reports
        .iter()
        .map(|report| report.crime_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
