pub mod classifier;
pub mod convert;

pub use classifier::UnitClassifier;
pub use convert::fahrenheit_to_celsius;
