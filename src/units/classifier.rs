use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ProcessingError, Result};

/// Decides whether a location's temperatures are recorded in Fahrenheit.
///
/// Backed by a fixed set of location names supplied at construction.
/// Lookup is exact and case-sensitive; locations not in the set are
/// assumed to record Celsius. Callers trim their input before lookup.
#[derive(Debug, Clone, Default)]
pub struct UnitClassifier {
    fahrenheit_locations: HashSet<String>,
}

impl UnitClassifier {
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fahrenheit_locations: locations.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the set from a newline-delimited list of location names.
    /// Blank lines are skipped.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ProcessingError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut locations = HashSet::new();

        for line_result in reader.lines() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }
            locations.insert(line);
        }

        Ok(Self {
            fahrenheit_locations: locations,
        })
    }

    pub fn uses_fahrenheit(&self, location: &str) -> bool {
        self.fahrenheit_locations.contains(location)
    }

    pub fn len(&self) -> usize {
        self.fahrenheit_locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fahrenheit_locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_membership_is_exact_and_case_sensitive() {
        let classifier = UnitClassifier::new(["Boston", "New York"]);

        assert!(classifier.uses_fahrenheit("Boston"));
        assert!(classifier.uses_fahrenheit("New York"));
        assert!(!classifier.uses_fahrenheit("boston"));
        assert!(!classifier.uses_fahrenheit("Boston "));
        assert!(!classifier.uses_fahrenheit("Glasgow"));
    }

    #[test]
    fn test_default_is_empty() {
        let classifier = UnitClassifier::default();
        assert!(classifier.is_empty());
        assert!(!classifier.uses_fahrenheit("Boston"));
    }

    #[test]
    fn test_from_path_skips_blank_lines() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Boston")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "New York")?;

        let classifier = UnitClassifier::from_path(temp_file.path())?;
        assert_eq!(classifier.len(), 2);
        assert!(classifier.uses_fahrenheit("Boston"));
        assert!(classifier.uses_fahrenheit("New York"));

        Ok(())
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = UnitClassifier::from_path(Path::new("no_such_list.txt"));
        assert!(matches!(result, Err(ProcessingError::NotFound(_))));
    }
}
