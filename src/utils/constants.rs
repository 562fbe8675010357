/// Dataset field names
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_TEMPERATURE: &str = "temperature";
pub const FIELD_WHAT_TO_WEAR: &str = "what_to_wear";

/// Recommendation threshold: below this Celsius temperature, wear a jumper
pub const JUMPER_THRESHOLD_CELSIUS: f64 = 15.0;

/// Legacy default file paths
pub const DEFAULT_INPUT_FILE: &str = "input.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
pub const DEFAULT_FAHRENHEIT_FILE: &str = "fahrenheit_cities.txt";
