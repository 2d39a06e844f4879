use crate::domain::model::DistanceUnit;
use crate::utils::error::Result;
use rust_decimal::Decimal;

pub trait NumberParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Decimal>;

    /// Whether the numeral is written with Japanese magnitude words (万, 億, ...).
    fn is_japanese_number(&self, text: &str) -> bool;
}

pub trait NumberFormatter: Send + Sync {
    /// Renders with the largest applicable Japanese magnitude word, e.g. `1100万`.
    fn to_largest_unit(&self, value: Decimal) -> String;

    /// Renders with thousands separators, e.g. `11,000,000`.
    fn commafy(&self, value: Decimal) -> String;
}

pub trait CurrencyConverter: Send + Sync {
    fn dollars_to_yen(&self, dollars: Decimal, rate: Decimal) -> Result<Decimal>;
    fn yen_to_dollars(&self, yen: Decimal, rate: Decimal) -> Result<Decimal>;
}

pub trait DistanceConverter: Send + Sync {
    /// Converts into the counterpart unit and returns the finished display string.
    fn convert_distance(
        &self,
        unit: DistanceUnit,
        value: Decimal,
        use_large_units: bool,
    ) -> Result<String>;
}
