use crate::utils::error::{ConverterError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Centimeter,
    Inch,
    Meter,
    Foot,
    Kilometer,
    Mile,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 6] = [
        DistanceUnit::Centimeter,
        DistanceUnit::Inch,
        DistanceUnit::Meter,
        DistanceUnit::Foot,
        DistanceUnit::Kilometer,
        DistanceUnit::Mile,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Inch => "in",
            DistanceUnit::Meter => "m",
            DistanceUnit::Foot => "ft",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Mile => "mi",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.symbol() == symbol)
    }

    /// The unit of the other system a value is converted into.
    pub fn counterpart(self) -> Self {
        match self {
            DistanceUnit::Centimeter => DistanceUnit::Inch,
            DistanceUnit::Inch => DistanceUnit::Centimeter,
            DistanceUnit::Meter => DistanceUnit::Foot,
            DistanceUnit::Foot => DistanceUnit::Meter,
            DistanceUnit::Kilometer => DistanceUnit::Mile,
            DistanceUnit::Mile => DistanceUnit::Kilometer,
        }
    }

    /// Exact length of one unit in meters.
    pub fn meters(self) -> Decimal {
        match self {
            DistanceUnit::Centimeter => Decimal::new(1, 2),
            DistanceUnit::Inch => Decimal::new(254, 4),
            DistanceUnit::Meter => Decimal::ONE,
            DistanceUnit::Foot => Decimal::new(3048, 4),
            DistanceUnit::Kilometer => Decimal::new(1000, 0),
            DistanceUnit::Mile => Decimal::new(1_609_344, 3),
        }
    }
}

/// Currency or unit detected in a raw amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    None,
    Dollar,
    Yen,
    Distance(DistanceUnit),
}

impl Marker {
    pub fn token(self) -> &'static str {
        match self {
            Marker::None => "",
            Marker::Dollar => "$",
            Marker::Yen => "円",
            Marker::Distance(unit) => unit.symbol(),
        }
    }

    pub fn is_none(self) -> bool {
        self == Marker::None
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Marker {
    type Err = ConverterError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "" => Ok(Marker::None),
            "$" => Ok(Marker::Dollar),
            "円" => Ok(Marker::Yen),
            other => DistanceUnit::from_symbol(other)
                .map(Marker::Distance)
                .ok_or_else(|| ConverterError::DispatchError {
                    marker: other.to_string(),
                }),
        }
    }
}

/// Result of classification: the marker and the text left once it is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedAmount<'a> {
    pub marker: Marker,
    pub payload: &'a str,
}

impl<'a> ClassifiedAmount<'a> {
    pub fn new(marker: Marker, payload: &'a str) -> Self {
        Self { marker, payload }
    }

    pub fn unmarked(raw: &'a str) -> Self {
        Self::new(Marker::None, raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    pub rate: f64,
    pub use_large_units: bool,
    /// Applied when the input carries no marker of its own.
    pub default_marker: Option<Marker>,
}

impl ConversionOptions {
    pub fn new(rate: f64, use_large_units: bool) -> Self {
        Self {
            rate,
            use_large_units,
            default_marker: None,
        }
    }

    pub fn with_default_marker(mut self, marker: Marker) -> Self {
        self.default_marker = Some(marker);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub input: String,
    pub marker: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
