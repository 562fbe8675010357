/// Convert a Fahrenheit temperature to Celsius.
///
/// No rounding is applied; the fractional result flows into the
/// recommendation rule unmodified.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
