pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ConverterSettings};
pub use crate::core::batch::{read_amounts, BatchReport, BatchRunner};
pub use crate::core::classifier::classify;
pub use crate::core::converter::{classify_with, convert, AmountConverter};
pub use domain::model::{ClassifiedAmount, ConversionOptions, DistanceUnit, Marker, OutputFormat};
pub use utils::error::{ConverterError, Result};
