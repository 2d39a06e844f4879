use crate::adapters::{JapaneseNumerals, RateCurrencyConverter, StandardDistanceConverter};
use crate::core::classifier::classify;
use crate::domain::model::{ClassifiedAmount, ConversionOptions, Marker};
use crate::domain::ports::{CurrencyConverter, DistanceConverter, NumberFormatter, NumberParser};
use crate::utils::error::{ConverterError, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Routes a classified amount to the matching conversion and formatting path.
///
/// Holds only immutable collaborators, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct AmountConverter<
    P = JapaneseNumerals,
    F = JapaneseNumerals,
    C = RateCurrencyConverter,
    D = StandardDistanceConverter,
> {
    parser: P,
    formatter: F,
    currency: C,
    distance: D,
}

impl AmountConverter {
    /// Converter wired with the bundled numeral, currency and distance collaborators.
    pub fn standard() -> Self {
        Self::new(
            JapaneseNumerals::new(),
            JapaneseNumerals::new(),
            RateCurrencyConverter::new(),
            StandardDistanceConverter::new(JapaneseNumerals::new()),
        )
    }
}

impl Default for AmountConverter {
    fn default() -> Self {
        Self::standard()
    }
}

impl<P, F, C, D> AmountConverter<P, F, C, D>
where
    P: NumberParser,
    F: NumberFormatter,
    C: CurrencyConverter,
    D: DistanceConverter,
{
    pub fn new(parser: P, formatter: F, currency: C, distance: D) -> Self {
        Self {
            parser,
            formatter,
            currency,
            distance,
        }
    }

    /// Converts `amount` into its counterpart representation.
    ///
    /// Currency amounts are converted at `rate` (yen per dollar) and distances
    /// into the other measuring system; `use_large_units` picks 万/億 style over
    /// comma grouping for those. A bare number is re-rendered in the opposite
    /// notation to the one it was typed in, and `rate`/`use_large_units` are
    /// ignored for it.
    pub fn convert(&self, amount: &str, rate: f64, use_large_units: bool) -> Result<String> {
        self.convert_classified(classify(amount), rate, use_large_units)
    }

    /// Like [`convert`](Self::convert), falling back to
    /// `options.default_marker` when the amount has no marker of its own.
    pub fn convert_with(&self, amount: &str, options: &ConversionOptions) -> Result<String> {
        self.convert_classified(
            classify_with(amount, options),
            options.rate,
            options.use_large_units,
        )
    }

    pub fn convert_classified(
        &self,
        classified: ClassifiedAmount<'_>,
        rate: f64,
        use_large_units: bool,
    ) -> Result<String> {
        let value = self.parser.parse(classified.payload)?;

        match classified.marker {
            Marker::None => {
                tracing::debug!("No marker, flipping notation of {}", classified.payload);
                if self.parser.is_japanese_number(classified.payload) {
                    Ok(self.formatter.commafy(value))
                } else {
                    Ok(self.formatter.to_largest_unit(value))
                }
            }
            Marker::Dollar => {
                let yen = self.currency.dollars_to_yen(value, decimal_rate(rate)?)?;
                tracing::debug!("${} -> {} yen at rate {}", value, yen, rate);
                Ok(format!("{}円", self.style(yen, use_large_units)))
            }
            Marker::Yen => {
                let dollars = self.currency.yen_to_dollars(value, decimal_rate(rate)?)?;
                tracing::debug!("{}円 -> {} dollars at rate {}", value, dollars, rate);
                Ok(format!("${}", self.style(dollars, use_large_units)))
            }
            Marker::Distance(unit) => {
                tracing::debug!("Converting {}{}", value, unit.symbol());
                self.distance.convert_distance(unit, value, use_large_units)
            }
        }
    }

    fn style(&self, value: Decimal, use_large_units: bool) -> String {
        if use_large_units {
            self.formatter.to_largest_unit(value)
        } else {
            self.formatter.commafy(value)
        }
    }
}

/// Classifies `amount`, substituting `options.default_marker` when no marker is found.
pub fn classify_with<'a>(amount: &'a str, options: &ConversionOptions) -> ClassifiedAmount<'a> {
    let mut classified = classify(amount);
    if classified.marker.is_none() {
        if let Some(marker) = options.default_marker {
            classified.marker = marker;
        }
    }
    classified
}

/// Rates below what `Decimal` can hold round to zero and are rejected too.
fn decimal_rate(rate: f64) -> Result<Decimal> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConverterError::InvalidRateError { rate });
    }
    match Decimal::from_f64(rate) {
        Some(decimal) if !decimal.is_zero() => Ok(decimal),
        _ => Err(ConverterError::InvalidRateError { rate }),
    }
}

/// Converts with the bundled collaborators; see [`AmountConverter::convert`].
pub fn convert(amount: &str, rate: f64, use_large_units: bool) -> Result<String> {
    AmountConverter::standard().convert(amount, rate, use_large_units)
}
