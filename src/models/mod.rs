pub mod dataset;
pub mod label;
pub mod reading;

pub use dataset::{Dataset, Record};
pub use label::Label;
pub use reading::LocationReading;
