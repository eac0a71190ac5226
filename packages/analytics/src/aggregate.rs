//! Per-alcaldía aggregation.
//!
//! Counts filtered reports per normalized alcaldía name and left-joins
//! the counts onto the full boundary set: every alcaldía appears in the
//! result, in boundary-file order, with an explicit zero when nothing
//! matched. Report boroughs with no matching boundary contribute nothing
//! — a silently tolerated join miss, not an error.

use std::collections::BTreeMap;

use denuncias_map_geography::Borough;
use denuncias_map_report_models::Report;

/// An alcaldía joined with its report count for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoroughCount<'a> {
    /// The boundary entity.
    pub borough: &'a Borough,
    /// Number of filtered reports whose borough key matched.
    pub count: u64,
}

/// Counts reports per normalized alcaldía name.
#[must_use]
pub fn count_by_borough(reports: &[Report]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for report in reports {
        *counts.entry(report.borough.clone()).or_insert(0) += 1;
    }
    counts
}

/// Left-joins per-alcaldía counts onto `boroughs`, preserving boundary
/// order. Missing counts become explicit zeros.
#[must_use]
pub fn aggregate<'a>(reports: &[Report], boroughs: &'a [Borough]) -> Vec<BoroughCount<'a>> {
    let counts = count_by_borough(reports);
    boroughs
        .iter()
        .map(|borough| BoroughCount {
            borough,
            count: counts.get(&borough.key).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterCriteria, filter_reports};
    use denuncias_map_report_models::{PopulationGroup, TimeBand, Weekday};
    use geo::{LineString, MultiPolygon, Polygon};

    fn borough(name: &str) -> Borough {
        let ring = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        Borough {
            name: name.to_string(),
            key: name.to_uppercase(),
            geometry: MultiPolygon(vec![Polygon::new(ring, vec![])]),
        }
    }

    fn report(year: i32, borough: &str, with_coords: bool) -> Report {
        Report {
            year,
            crime_type: "ROBO".to_string(),
            weekday: Weekday::Monday,
            time_band: TimeBand::Noche,
            borough: borough.to_string(),
            latitude: with_coords.then_some(19.4),
            longitude: with_coords.then_some(-99.1),
            hour: "12:00:00".to_string(),
            population_group: PopulationGroup::General,
        }
    }

    #[test]
    fn joined_counts_sum_to_filtered_total() {
        let boroughs = vec![borough("Cuauhtémoc"), borough("Coyoacán")];
        let reports: Vec<Report> = (0..7)
            .map(|i| report(2022, if i < 3 { "CUAUHTÉMOC" } else { "COYOACÁN" }, true))
            .collect();

        let joined = aggregate(&reports, &boroughs);
        let total: u64 = joined.iter().map(|bc| bc.count).sum();
        assert_eq!(total, reports.len() as u64);
    }

    #[test]
    fn unmatched_boroughs_get_explicit_zero() {
        let boroughs = vec![borough("Cuauhtémoc"), borough("Milpa Alta")];
        let reports = vec![report(2022, "CUAUHTÉMOC", true)];

        let joined = aggregate(&reports, &boroughs);
        assert_eq!(joined[0].count, 1);
        assert_eq!(joined[1].count, 0);
    }

    #[test]
    fn join_misses_are_silently_tolerated() {
        let boroughs = vec![borough("Coyoacán")];
        let reports = vec![report(2022, "NO SUCH ALCALDIA", true)];

        let joined = aggregate(&reports, &boroughs);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].count, 0);
    }

    #[test]
    fn preserves_boundary_order() {
        let boroughs = vec![borough("Tlalpan"), borough("Coyoacán"), borough("Iztacalco")];
        let joined = aggregate(&[], &boroughs);
        let names: Vec<_> = joined.iter().map(|bc| bc.borough.name.as_str()).collect();
        assert_eq!(names, vec!["Tlalpan", "Coyoacán", "Iztacalco"]);
    }

    #[test]
    fn aggregation_happens_after_coordinate_cleaning() {
        // 100 reports for 2022: 40 CUAUHTEMOC (4 without coordinates),
        // 60 COYOACAN. The rendered marker set is 96 and the CUAUHTEMOC
        // count reflects the post-clean total.
        let boroughs = vec![borough("Cuauhtemoc"), borough("Coyoacan")];
        let mut reports = Vec::new();
        for i in 0..40 {
            reports.push(report(2022, "CUAUHTEMOC", i >= 4));
        }
        for _ in 0..60 {
            reports.push(report(2022, "COYOACAN", true));
        }

        let filtered = filter_reports(&reports, &FilterCriteria::for_year(2022));
        assert_eq!(filtered.len(), 96);

        let joined = aggregate(&filtered, &boroughs);
        assert_eq!(joined[0].count, 36);
        assert_eq!(joined[1].count, 60);
    }

    #[test]
    fn year_without_reports_yields_all_zeros() {
        let boroughs = vec![borough("Cuauhtemoc"), borough("Coyoacan")];
        let reports = vec![report(2022, "CUAUHTEMOC", true)];

        let filtered = filter_reports(&reports, &FilterCriteria::for_year(2021));
        let joined = aggregate(&filtered, &boroughs);
        assert!(joined.iter().all(|bc| bc.count == 0));
    }
}
