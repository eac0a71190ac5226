//! Synthetic population-group classification.
//!
//! For each alcaldía in the filtered set, a fixed-seed random 30% sample
//! of that alcaldía's reports is tagged "Adulto mayor"; the rest stay
//! "General." The tag is purely a visual grouping — it is not derived
//! from any attribute of the underlying reports.

use std::collections::HashMap;

use denuncias_map_report_models::{PopulationGroup, Report};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

/// Fixed sampling seed, reused run over run so the same filtered input
/// always produces the same labeling.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Fraction of each alcaldía's reports tagged as seniors.
pub const SENIOR_FRACTION: f64 = 0.3;

/// Labels `reports` in place: a seeded 30% sample per alcaldía becomes
/// [`PopulationGroup::AdultoMayor`], everything else
/// [`PopulationGroup::General`].
///
/// Each alcaldía gets its own `StdRng` seeded from `seed`, so its draw
/// depends only on its own subset — adding or removing another
/// alcaldía's reports never perturbs the labeling. Re-running with the
/// same input and seed reproduces the labels exactly.
pub fn classify_population(reports: &mut [Report], seed: u64) {
    for report in reports.iter_mut() {
        report.population_group = PopulationGroup::General;
    }

    let mut order: Vec<String> = Vec::new();
    let mut indices: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, report) in reports.iter().enumerate() {
        let entry = indices.entry(report.borough.clone()).or_default();
        if entry.is_empty() {
            order.push(report.borough.clone());
        }
        entry.push(i);
    }

    for borough in &order {
        let members = &indices[borough];
        let amount = sample_size(members.len());
        if amount == 0 {
            continue;
        }

        let mut rng = StdRng::seed_from_u64(seed);
        for pick in rand::seq::index::sample(&mut rng, members.len(), amount) {
            reports[members[pick]].population_group = PopulationGroup::AdultoMayor;
        }
        log::debug!("Tagged {amount} of {} reports in {borough}", members.len());
    }
}

/// Number of reports to tag for an alcaldía with `n` filtered reports.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sample_size(n: usize) -> usize {
    (SENIOR_FRACTION * n as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use denuncias_map_report_models::{TimeBand, Weekday};

    fn report(borough: &str, hour: &str) -> Report {
        Report {
            year: 2022,
            crime_type: "ROBO".to_string(),
            weekday: Weekday::Monday,
            time_band: TimeBand::Noche,
            borough: borough.to_string(),
            latitude: Some(19.4),
            longitude: Some(-99.1),
            hour: hour.to_string(),
            population_group: PopulationGroup::General,
        }
    }

    fn borough_reports(borough: &str, n: usize) -> Vec<Report> {
        (0..n).map(|i| report(borough, &format!("{i:02}:00"))).collect()
    }

    #[test]
    fn sample_size_rounds_half_away_from_zero() {
        assert_eq!(sample_size(0), 0);
        assert_eq!(sample_size(1), 0);
        assert_eq!(sample_size(2), 1);
        assert_eq!(sample_size(5), 2);
        assert_eq!(sample_size(10), 3);
        assert_eq!(sample_size(40), 12);
    }

    #[test]
    fn tags_expected_count_per_borough() {
        let mut reports = borough_reports("CUAUHTEMOC", 40);
        reports.extend(borough_reports("COYOACAN", 10));

        classify_population(&mut reports, DEFAULT_SAMPLE_SEED);

        let seniors = |name: &str| {
            reports
                .iter()
                .filter(|r| r.borough == name)
                .filter(|r| r.population_group == PopulationGroup::AdultoMayor)
                .count()
        };
        assert_eq!(seniors("CUAUHTEMOC"), 12);
        assert_eq!(seniors("COYOACAN"), 3);
    }

    #[test]
    fn labeling_is_deterministic_across_runs() {
        let mut first = borough_reports("TLALPAN", 25);
        first.extend(borough_reports("IZTAPALAPA", 17));
        let mut second = first.clone();

        classify_population(&mut first, DEFAULT_SAMPLE_SEED);
        classify_population(&mut second, DEFAULT_SAMPLE_SEED);

        assert_eq!(first, second);
    }

    #[test]
    fn each_borough_is_sampled_independently() {
        let mut combined = borough_reports("TLALPAN", 20);
        combined.extend(borough_reports("IZTAPALAPA", 30));
        let mut alone = borough_reports("TLALPAN", 20);

        classify_population(&mut combined, DEFAULT_SAMPLE_SEED);
        classify_population(&mut alone, DEFAULT_SAMPLE_SEED);

        let combined_labels: Vec<_> = combined
            .iter()
            .filter(|r| r.borough == "TLALPAN")
            .map(|r| r.population_group)
            .collect();
        let alone_labels: Vec<_> = alone.iter().map(|r| r.population_group).collect();
        assert_eq!(combined_labels, alone_labels);
    }

    #[test]
    fn reclassification_resets_previous_labels() {
        let mut reports = borough_reports("COYOACAN", 10);
        classify_population(&mut reports, DEFAULT_SAMPLE_SEED);
        let first: Vec<_> = reports.iter().map(|r| r.population_group).collect();

        // Labels from a previous run must not leak into a re-run.
        classify_population(&mut reports, DEFAULT_SAMPLE_SEED);
        let second: Vec<_> = reports.iter().map(|r| r.population_group).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn single_report_boroughs_stay_general() {
        let mut reports = borough_reports("MILPA ALTA", 1);
        classify_population(&mut reports, DEFAULT_SAMPLE_SEED);
        assert_eq!(reports[0].population_group, PopulationGroup::General);
    }
}
