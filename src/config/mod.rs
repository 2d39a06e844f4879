pub mod toml_config;

use crate::domain::model::{ConversionOptions, Marker, OutputFormat};
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::{validate_exchange_rate, validate_path, Validate};

pub const DEFAULT_RATE: f64 = 110.0;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "amount-converter")]
#[command(about = "Convert dollars and yen, metric and imperial distances, and 12,345 vs 1.23万 notation")]
pub struct CliConfig {
    /// Amounts to convert, e.g. "$100", "100円", "5km", "1万2345"
    pub amounts: Vec<String>,

    /// Exchange rate in yen per dollar
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Format results with Japanese units (万, 億) instead of commas
    #[arg(short = 'j', long)]
    pub jp_units: bool,

    /// Marker for amounts typed without one: $, 円, cm, in, m, ft, km, mi
    #[arg(long = "as", value_name = "MARKER")]
    pub default_unit: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read amounts from a file, one per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file under the command line flags.
    pub fn resolve(&self) -> Result<ConverterSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let default_marker = match &self.default_unit {
            Some(token) => Some(token.parse::<Marker>()?),
            None => file.default_marker()?,
        };

        Ok(ConverterSettings {
            rate: self.rate.or(file.rate()).unwrap_or(DEFAULT_RATE),
            use_large_units: self.jp_units || file.use_large_units(),
            default_marker,
            format: self.format.or(file.output_format()).unwrap_or_default(),
            amounts: self.amounts.clone(),
            input: self.input.clone(),
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterSettings {
    pub rate: f64,
    pub use_large_units: bool,
    pub default_marker: Option<Marker>,
    pub format: OutputFormat,
    pub amounts: Vec<String>,
    pub input: Option<String>,
}

impl ConverterSettings {
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            rate: self.rate,
            use_large_units: self.use_large_units,
            default_marker: self.default_marker,
        }
    }
}

impl Validate for ConverterSettings {
    fn validate(&self) -> Result<()> {
        validate_exchange_rate("rate", self.rate)?;

        match &self.input {
            Some(path) => validate_path("input", path)?,
            None if self.amounts.is_empty() => {
                return Err(ConverterError::MissingConfigError {
                    field: "amounts (or --input)".to_string(),
                })
            }
            None => {}
        }

        Ok(())
    }
}
