use std::path::{Path, PathBuf};

use tracing::{debug, info};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, Label, LocationReading};
use crate::store::DatasetStore;
use crate::units::{fahrenheit_to_celsius, UnitClassifier};
use crate::utils::constants::{FIELD_LOCATION, FIELD_TEMPERATURE, FIELD_WHAT_TO_WEAR};

/// Orchestrates the load → classify → convert → label → persist cycle.
///
/// The engine keeps no state between calls beyond its two paths and the
/// injected classifier; every public operation is a complete whole-file
/// transaction, so the output always reflects the current input.
pub struct RecommendationEngine {
    input_path: PathBuf,
    output_path: PathBuf,
    classifier: UnitClassifier,
}

impl RecommendationEngine {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        classifier: UnitClassifier,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            classifier,
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Recompute every recommendation from the input file and rewrite the
    /// output file.
    ///
    /// A record whose temperature does not parse as an integer aborts the
    /// whole recompute before anything is written; the previous output
    /// file is left as it was. Returns the number of records written.
    pub fn recompute_all(&self) -> Result<usize> {
        let input = DatasetStore::load(&self.input_path)?;

        for field in [FIELD_LOCATION, FIELD_TEMPERATURE] {
            if input.field_index(field).is_none() {
                return Err(ProcessingError::MalformedInput(format!(
                    "input header is missing the '{}' column",
                    field
                )));
            }
        }

        let mut header = input.header().to_vec();
        header.push(FIELD_WHAT_TO_WEAR.to_string());
        let mut output = Dataset::new(header);

        for record in input.records() {
            let location = record.get(FIELD_LOCATION).unwrap_or_default();
            let raw_temperature = record.get(FIELD_TEMPERATURE).unwrap_or_default();

            let reading: i64 = raw_temperature.trim().parse().map_err(|_| {
                ProcessingError::InvalidTemperature {
                    location: location.to_string(),
                    value: raw_temperature.to_string(),
                }
            })?;

            let celsius = if self.classifier.uses_fahrenheit(location) {
                fahrenheit_to_celsius(reading as f64)
            } else {
                reading as f64
            };
            let label = Label::for_celsius(celsius);
            debug!(location, reading, celsius, %label, "classified record");

            let mut values = record.values().to_vec();
            values.push(label.to_string());
            output.push_row(values)?;
        }

        DatasetStore::save(&self.output_path, &output)?;
        info!(records = output.len(), "recomputed recommendations");
        Ok(output.len())
    }

    /// Append a new location reading and recompute.
    ///
    /// The duplicate check compares locations case-insensitively, while
    /// unit classification stays case-sensitive. The mismatch is
    /// long-standing observed behavior and is kept as-is.
    pub fn add_location(&self, city: &str, temperature: i64) -> Result<()> {
        let city = city.trim();
        let reading = LocationReading::new(city, temperature);
        reading.validate()?;

        let input = DatasetStore::load(&self.input_path)?;
        let wanted = city.to_lowercase();
        let duplicate = input.records().any(|record| {
            record
                .get(FIELD_LOCATION)
                .is_some_and(|existing| existing.trim().to_lowercase() == wanted)
        });
        if duplicate {
            return Err(ProcessingError::DuplicateLocation(city.to_string()));
        }

        DatasetStore::append_record(&self.input_path, &reading)?;
        info!(location = city, temperature, "added location");
        self.recompute_all()?;
        Ok(())
    }

    /// Remove every record whose `(location, temperature)` pair matches,
    /// then recompute. The location must match exactly; the temperature is
    /// compared in its canonical integer form, so `014` matches `14`.
    /// Returns the number of records removed.
    pub fn remove_location(&self, city: &str, temperature: i64) -> Result<usize> {
        let removed = DatasetStore::remove_records_matching(&self.input_path, |record| {
            let location_matches = record.get(FIELD_LOCATION) == Some(city);
            let temperature_matches = record
                .get(FIELD_TEMPERATURE)
                .and_then(|value| value.trim().parse::<i64>().ok())
                .is_some_and(|value| value == temperature);
            location_matches && temperature_matches
        })?;

        info!(location = city, temperature, removed, "removed location records");
        self.recompute_all()?;
        Ok(removed)
    }

    /// Whether a location's temperatures are recorded in Fahrenheit.
    /// Used by callers for display-unit labeling only.
    pub fn uses_fahrenheit(&self, location: &str) -> bool {
        self.classifier.uses_fahrenheit(location)
    }

    /// Load the current output dataset, for redisplay.
    pub fn load_output(&self) -> Result<Dataset> {
        DatasetStore::load(&self.output_path)
    }
}
