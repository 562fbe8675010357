use serde::{Deserialize, Serialize};
use validator::Validate;

/// A raw input row: one location and its recorded temperature.
///
/// The temperature's unit is implied by the location's classification, so
/// it is carried as the plain integer that was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationReading {
    #[validate(length(min = 1))]
    pub location: String,

    pub temperature: i64,
}

impl LocationReading {
    pub fn new(location: impl Into<String>, temperature: i64) -> Self {
        Self {
            location: location.into(),
            temperature,
        }
    }
}
