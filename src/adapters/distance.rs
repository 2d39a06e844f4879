use crate::adapters::numerals::JapaneseNumerals;
use crate::domain::model::DistanceUnit;
use crate::domain::ports::{DistanceConverter, NumberFormatter};
use crate::utils::error::{ConverterError, Result};
use rust_decimal::Decimal;

/// Converts metric distances to imperial and back (cm/in, m/ft, km/mi) and
/// formats the result with the wrapped formatter.
#[derive(Debug, Clone, Default)]
pub struct StandardDistanceConverter<F: NumberFormatter = JapaneseNumerals> {
    formatter: F,
}

impl<F: NumberFormatter> StandardDistanceConverter<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn convert_value(&self, unit: DistanceUnit, value: Decimal) -> Result<Decimal> {
        let target = unit.counterpart();
        value
            .checked_mul(unit.meters())
            .and_then(|meters| meters.checked_div(target.meters()))
            .ok_or_else(|| {
                ConverterError::overflow(&format!(
                    "{} to {} conversion",
                    unit.symbol(),
                    target.symbol()
                ))
            })
    }
}

impl<F: NumberFormatter> DistanceConverter for StandardDistanceConverter<F> {
    fn convert_distance(
        &self,
        unit: DistanceUnit,
        value: Decimal,
        use_large_units: bool,
    ) -> Result<String> {
        let converted = self.convert_value(unit, value)?;
        let formatted = if use_large_units {
            self.formatter.to_largest_unit(converted)
        } else {
            self.formatter.commafy(converted)
        };
        Ok(format!("{}{}", formatted, unit.counterpart().symbol()))
    }
}
