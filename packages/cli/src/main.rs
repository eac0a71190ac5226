#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI for the denuncias map toolchain.
//!
//! Loads the report and boundary datasets once, then drives an
//! interactive loop: select filters, run the pipeline, write the map
//! document, offer to adjust filters and regenerate. A load failure for
//! either dataset is fatal; an empty filtered result is not.

mod interactive;

use std::path::PathBuf;

use clap::Parser;
use denuncias_map_cli_utils::IndicatifProgress;

#[derive(Parser)]
#[command(name = "denuncias_map_cli", about = "Interactive CDMX crime report map")]
struct Cli {
    /// Path to the report dataset CSV.
    #[arg(long, default_value = "data/denuncias_filtrado.csv")]
    reports: PathBuf,

    /// Path to the alcaldía boundary GeoJSON.
    #[arg(long, default_value = "data/limite-de-las-alcaldas.json")]
    boundaries: PathBuf,

    /// Where to write the rendered map document.
    #[arg(long, default_value = "data/generated/mapa_denuncias.html")]
    output: PathBuf,

    /// Seed for the population-group sampling.
    #[arg(long, default_value_t = denuncias_map_analytics::DEFAULT_SAMPLE_SEED)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = denuncias_map_cli_utils::init_logger();
    let cli = Cli::parse();

    println!("Mapa de Denuncias CDMX");
    println!();

    let progress = IndicatifProgress::records_bar(&multi, "Loading reports...");
    let reports = denuncias_map_dataset::load_reports(&cli.reports, progress.as_ref())?;
    let boroughs = denuncias_map_geography::load_boroughs(&cli.boundaries)?;

    interactive::run(&reports, &boroughs, &cli.output, cli.seed)?;

    Ok(())
}
