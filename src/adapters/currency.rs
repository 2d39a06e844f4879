use crate::domain::ports::CurrencyConverter;
use crate::utils::error::{ConverterError, Result};
use rust_decimal::Decimal;

/// Converts between dollars and yen at a caller-supplied yen-per-dollar rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateCurrencyConverter;

impl RateCurrencyConverter {
    pub fn new() -> Self {
        Self
    }
}

impl CurrencyConverter for RateCurrencyConverter {
    fn dollars_to_yen(&self, dollars: Decimal, rate: Decimal) -> Result<Decimal> {
        dollars
            .checked_mul(rate)
            .ok_or_else(|| ConverterError::overflow("dollar to yen conversion"))
    }

    fn yen_to_dollars(&self, yen: Decimal, rate: Decimal) -> Result<Decimal> {
        yen.checked_div(rate)
            .ok_or_else(|| ConverterError::overflow("yen to dollar conversion"))
    }
}
