pub mod batch;
pub mod classifier;
pub mod converter;

pub use crate::domain::model::{
    ClassifiedAmount, ConversionOptions, ConversionOutcome, DistanceUnit, Marker, OutputFormat,
};
pub use crate::domain::ports::{CurrencyConverter, DistanceConverter, NumberFormatter, NumberParser};
pub use crate::utils::error::Result;
