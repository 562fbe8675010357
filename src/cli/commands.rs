use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::RecommendationEngine;
use crate::units::UnitClassifier;
use crate::utils::constants::{FIELD_LOCATION, FIELD_TEMPERATURE, FIELD_WHAT_TO_WEAR};
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let classifier = if cli.fahrenheit_locations.exists() {
        UnitClassifier::from_path(&cli.fahrenheit_locations)?
    } else {
        warn!(
            path = %cli.fahrenheit_locations.display(),
            "Fahrenheit location list not found, assuming Celsius everywhere"
        );
        UnitClassifier::default()
    };

    let engine = RecommendationEngine::new(cli.input, cli.output, classifier);

    match cli.command {
        Commands::Process => {
            println!("Processing temperature data...");
            println!("Input file: {}", engine.input_path().display());
            println!("Output file: {}", engine.output_path().display());

            let progress = ProgressReporter::new_spinner("Recomputing recommendations...", false);
            let written = engine.recompute_all()?;
            progress.finish_with_message(&format!("Processed {} records", written));

            println!("Processing complete!");
        }

        Commands::Add { city, temperature } => {
            engine.add_location(&city, temperature)?;
            println!("Added '{}' at {} degrees", city.trim(), temperature);
            print_recommendations(&engine)?;
        }

        Commands::Remove { city, temperature } => {
            let removed = engine.remove_location(&city, temperature)?;
            println!(
                "Removed {} record(s) for '{}' at {} degrees",
                removed, city, temperature
            );
            print_recommendations(&engine)?;
        }

        Commands::Show => {
            print_recommendations(&engine)?;
        }
    }

    Ok(())
}

/// Render the output dataset the way the interactive viewer displays it,
/// with a per-location unit suffix.
fn print_recommendations(engine: &RecommendationEngine) -> Result<()> {
    let dataset = engine.load_output()?;

    println!("\nRecommendations ({} locations):", dataset.len());
    for (index, record) in dataset.records().enumerate() {
        let location = record.get(FIELD_LOCATION).unwrap_or_default();
        let temperature = record.get(FIELD_TEMPERATURE).unwrap_or_default();
        let what_to_wear = record.get(FIELD_WHAT_TO_WEAR).unwrap_or_default();
        let unit = if engine.uses_fahrenheit(location) {
            "°F"
        } else {
            "°C"
        };

        println!(
            "{}. {} at {}{}: {}",
            index + 1,
            location,
            temperature,
            unit,
            what_to_wear
        );
    }

    Ok(())
}
