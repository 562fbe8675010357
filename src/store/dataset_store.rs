use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, LocationReading, Record};

/// CSV-backed persistence for datasets.
///
/// Every write is a whole-file truncating rewrite except `append_record`,
/// which adds one raw row to the end of an existing input file. Quoting
/// and escaping are left entirely to the csv codec.
pub struct DatasetStore;

impl DatasetStore {
    /// Parse a CSV file with a header row into an ordered dataset.
    pub fn load(path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(ProcessingError::NotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|field| field.to_string())
            .collect();
        if header.is_empty() {
            return Err(ProcessingError::MalformedInput(format!(
                "{} is empty or missing a header row",
                path.display()
            )));
        }

        let mut dataset = Dataset::new(header);
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    if let csv::ErrorKind::UnequalLengths {
                        expected_len, len, ..
                    } = error.kind()
                    {
                        return Err(ProcessingError::MalformedInput(format!(
                            "row has {} fields but header has {}",
                            len, expected_len
                        )));
                    }
                    return Err(ProcessingError::Csv(error));
                }
            };
            dataset.push_row(record.iter().map(|field| field.to_string()).collect())?;
        }

        debug!(rows = dataset.len(), path = %path.display(), "loaded dataset");
        Ok(dataset)
    }

    /// Write the header and every row, in order, truncating any existing
    /// file at `path`.
    ///
    /// Persisting zero records is a precondition violation; the check runs
    /// before the destination is opened, so a failed save never clobbers
    /// the previous file.
    pub fn save(path: &Path, dataset: &Dataset) -> Result<()> {
        if dataset.is_empty() {
            return Err(ProcessingError::EmptyDataset);
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(dataset.header())?;
        for row in dataset.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!(rows = dataset.len(), path = %path.display(), "saved dataset");
        Ok(())
    }

    /// Append one raw `location,temperature` row to an existing input
    /// file without rewriting it.
    pub fn append_record(path: &Path, reading: &LocationReading) -> Result<()> {
        if !path.exists() {
            return Err(ProcessingError::NotFound(path.to_path_buf()));
        }

        let file = OpenOptions::new().append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(reading)?;
        writer.flush()?;

        debug!(location = %reading.location, path = %path.display(), "appended record");
        Ok(())
    }

    /// Drop every record matching `predicate` and rewrite the file with
    /// the remainder. Returns the number of records removed.
    pub fn remove_records_matching<F>(path: &Path, mut predicate: F) -> Result<usize>
    where
        F: FnMut(Record<'_>) -> bool,
    {
        let mut dataset = Self::load(path)?;
        let removed = dataset.retain(|record| !predicate(record));
        Self::save(path, &dataset)?;

        debug!(removed, path = %path.display(), "removed matching records");
        Ok(removed)
    }
}
