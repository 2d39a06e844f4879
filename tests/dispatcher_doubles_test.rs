use amount_converter::core::{CurrencyConverter, DistanceConverter, NumberFormatter, NumberParser};
use amount_converter::{AmountConverter, ClassifiedAmount, ConverterError, DistanceUnit, Marker, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Parses plain decimals; anything containing '万' counts as Japanese and
/// parses as 1.
struct FakeParser;

impl NumberParser for FakeParser {
    fn parse(&self, text: &str) -> Result<Decimal> {
        if self.is_japanese_number(text) {
            return Ok(Decimal::ONE);
        }
        Decimal::from_str(text).map_err(|e| ConverterError::parse(text, e.to_string()))
    }

    fn is_japanese_number(&self, text: &str) -> bool {
        text.contains('万')
    }
}

/// Tags output so the chosen formatting path is visible.
struct TaggingFormatter;

impl NumberFormatter for TaggingFormatter {
    fn to_largest_unit(&self, value: Decimal) -> String {
        format!("<units {}>", value)
    }

    fn commafy(&self, value: Decimal) -> String {
        format!("<commas {}>", value)
    }
}

/// Fixed 1000x rate; records the rate it was called with.
#[derive(Clone, Default)]
struct RecordingCurrency {
    rates: Arc<Mutex<Vec<Decimal>>>,
}

impl RecordingCurrency {
    fn rates(&self) -> Vec<Decimal> {
        self.rates.lock().unwrap().clone()
    }
}

impl CurrencyConverter for RecordingCurrency {
    fn dollars_to_yen(&self, dollars: Decimal, rate: Decimal) -> Result<Decimal> {
        self.rates.lock().unwrap().push(rate);
        Ok(dollars * dec!(1000))
    }

    fn yen_to_dollars(&self, yen: Decimal, rate: Decimal) -> Result<Decimal> {
        self.rates.lock().unwrap().push(rate);
        Ok((yen / dec!(1000)).normalize())
    }
}

struct EchoDistance;

impl DistanceConverter for EchoDistance {
    fn convert_distance(
        &self,
        unit: DistanceUnit,
        value: Decimal,
        use_large_units: bool,
    ) -> Result<String> {
        Ok(format!("distance({}, {}, {})", unit.symbol(), value, use_large_units))
    }
}

type TestConverter = AmountConverter<FakeParser, TaggingFormatter, RecordingCurrency, EchoDistance>;

fn converter() -> (TestConverter, RecordingCurrency) {
    let currency = RecordingCurrency::default();
    let converter = AmountConverter::new(FakeParser, TaggingFormatter, currency.clone(), EchoDistance);
    (converter, currency)
}

#[test]
fn test_unmarked_plain_number_uses_unit_formatter() {
    let (converter, _) = converter();
    assert_eq!(converter.convert("42", 7.0, false).unwrap(), "<units 42>");
    assert_eq!(converter.convert("42", 7.0, true).unwrap(), "<units 42>");
}

#[test]
fn test_unmarked_japanese_number_uses_comma_formatter() {
    let (converter, _) = converter();
    assert_eq!(converter.convert("1万", 7.0, true).unwrap(), "<commas 1>");
}

#[test]
fn test_unmarked_number_never_touches_currency() {
    let (converter, currency) = converter();
    converter.convert("42", -5.0, true).unwrap();
    assert!(currency.rates().is_empty());
}

#[test]
fn test_dollar_branch_appends_yen_and_honours_style() {
    let (converter, currency) = converter();
    assert_eq!(converter.convert("$2", 7.0, true).unwrap(), "<units 2000>円");
    assert_eq!(converter.convert("2 dollars", 7.0, false).unwrap(), "<commas 2000>円");
    assert_eq!(currency.rates(), vec![dec!(7), dec!(7)]);
}

#[test]
fn test_yen_branch_prefixes_dollar_sign() {
    let (converter, _) = converter();
    assert_eq!(converter.convert("3000円", 7.0, false).unwrap(), "$<commas 3>");
    assert_eq!(converter.convert("3000 yen", 7.0, true).unwrap(), "$<units 3>");
}

#[test]
fn test_distance_branch_is_pass_through() {
    let (converter, currency) = converter();
    assert_eq!(
        converter.convert("5km", 7.0, true).unwrap(),
        "distance(km, 5, true)"
    );
    assert_eq!(
        converter.convert("5m", 7.0, false).unwrap(),
        "distance(m, 5, false)"
    );
    assert!(currency.rates().is_empty());
}

#[test]
fn test_parse_errors_propagate_before_dispatch() {
    let (converter, currency) = converter();
    let err = converter.convert("$abc", 7.0, false).unwrap_err();
    assert!(matches!(err, ConverterError::ParseError { .. }));
    assert!(currency.rates().is_empty());
}

#[test]
fn test_invalid_rate_is_rejected_before_currency_call() {
    let (converter, currency) = converter();
    let err = converter.convert("$2", 0.0, false).unwrap_err();
    assert!(matches!(err, ConverterError::InvalidRateError { .. }));
    assert!(currency.rates().is_empty());
}

#[test]
fn test_convert_classified_uses_given_marker() {
    let (converter, _) = converter();
    let classified = ClassifiedAmount::new(Marker::Distance(DistanceUnit::Mile), "3");
    assert_eq!(
        converter.convert_classified(classified, 7.0, false).unwrap(),
        "distance(mi, 3, false)"
    );
}
