//! Interactive filter selection and pipeline loop.
//!
//! Presents the four filter controls with `dialoguer` (year is a single
//! select; the other three are multi-selects where an empty selection
//! means "no filter"), then re-runs the whole pipeline and rewrites the
//! map document on every accepted selection.

use std::path::Path;

use denuncias_map_analytics::{
    FilterCriteria, aggregate, classify_population, distinct_crime_types, distinct_years,
    filter_reports,
};
use denuncias_map_generate::{build_map, write_map};
use denuncias_map_geography::Borough;
use denuncias_map_report_models::{Report, TimeBand, Weekday};
use dialoguer::{Confirm, MultiSelect, Select};

/// Runs the filter-select / regenerate loop until the user declines to
/// continue.
///
/// # Errors
///
/// Returns an error if the dataset contains no usable years, if a
/// prompt fails, or if the map document cannot be built or written.
pub fn run(
    reports: &[Report],
    boroughs: &[Borough],
    output: &Path,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let years = distinct_years(reports);
    if years.is_empty() {
        return Err("report dataset contains no usable rows".into());
    }
    let crime_types = distinct_crime_types(reports);

    loop {
        let criteria = prompt_criteria(&years, &crime_types)?;

        let mut filtered = filter_reports(reports, &criteria);
        classify_population(&mut filtered, seed);
        let counts = aggregate(&filtered, boroughs);

        let html = build_map(&counts, &filtered)?;
        write_map(&html, output)?;

        log::info!(
            "Rendered {} markers across {} alcaldías for {}",
            filtered.len(),
            counts.iter().filter(|bc| bc.count > 0).count(),
            criteria.year
        );
        println!("Map written to {}", output.display());

        let again = Confirm::new()
            .with_prompt("Adjust filters and regenerate?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Prompts for one full set of filter selections.
fn prompt_criteria(
    years: &[i32],
    crime_types: &[String],
) -> Result<FilterCriteria, dialoguer::Error> {
    let year_idx = Select::new()
        .with_prompt("Select the year")
        .items(years)
        .default(0)
        .interact()?;

    let crime_idxs = MultiSelect::new()
        .with_prompt("Select crime types (empty selection keeps all)")
        .items(crime_types)
        .interact()?;

    let weekday_idxs = MultiSelect::new()
        .with_prompt("Select weekdays (empty selection keeps all)")
        .items(Weekday::all())
        .interact()?;

    let band_idxs = MultiSelect::new()
        .with_prompt("Select time bands (empty selection keeps all)")
        .items(TimeBand::all())
        .interact()?;

    Ok(FilterCriteria {
        year: years[year_idx],
        crime_types: crime_idxs
            .into_iter()
            .map(|i| crime_types[i].clone())
            .collect(),
        weekdays: weekday_idxs
            .into_iter()
            .map(|i| Weekday::all()[i])
            .collect(),
        time_bands: band_idxs.into_iter().map(|i| TimeBand::all()[i]).collect(),
    })
}
