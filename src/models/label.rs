use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::constants::JUMPER_THRESHOLD_CELSIUS;

/// The clothing recommendation attached to each output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "jumper")]
    Jumper,
    #[serde(rename = "t-shirt")]
    TShirt,
}

impl Label {
    /// Decide the recommendation for a Celsius temperature.
    ///
    /// The boundary at exactly 15.0 resolves to the warm-weather label.
    pub fn for_celsius(celsius: f64) -> Self {
        if celsius < JUMPER_THRESHOLD_CELSIUS {
            Label::Jumper
        } else {
            Label::TShirt
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Jumper => "jumper",
            Label::TShirt => "t-shirt",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
