use crate::domain::ports::{NumberFormatter, NumberParser};
use crate::utils::error::{ConverterError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const DISPLAY_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MagnitudeUnit {
    Man,
    Oku,
    Cho,
    Kei,
}

impl MagnitudeUnit {
    const ASCENDING: [MagnitudeUnit; 4] = [
        MagnitudeUnit::Man,
        MagnitudeUnit::Oku,
        MagnitudeUnit::Cho,
        MagnitudeUnit::Kei,
    ];

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '万' => Some(MagnitudeUnit::Man),
            '億' => Some(MagnitudeUnit::Oku),
            '兆' => Some(MagnitudeUnit::Cho),
            '京' => Some(MagnitudeUnit::Kei),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            MagnitudeUnit::Man => '万',
            MagnitudeUnit::Oku => '億',
            MagnitudeUnit::Cho => '兆',
            MagnitudeUnit::Kei => '京',
        }
    }

    fn value(self) -> Decimal {
        let exponent = match self {
            MagnitudeUnit::Man => 4,
            MagnitudeUnit::Oku => 8,
            MagnitudeUnit::Cho => 12,
            MagnitudeUnit::Kei => 16,
        };
        Decimal::from(10u64.pow(exponent))
    }
}

/// Parses and formats numerals written with digits, commas and the Japanese
/// magnitude words 万, 億, 兆 and 京.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseNumerals;

impl JapaneseNumerals {
    pub fn new() -> Self {
        Self
    }
}

/// Maps fullwidth digits and signs to ASCII and drops grouping commas.
fn normalize_numeral(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '，'))
        .map(|ch| match ch {
            '０'..='９' => char::from_u32(ch as u32 - '０' as u32 + '0' as u32).unwrap_or(ch),
            '．' => '.',
            '－' | '−' => '-',
            other => other,
        })
        .collect()
}

fn parse_plain(digits: &str) -> std::result::Result<Decimal, String> {
    if !digits.chars().any(|ch| ch.is_ascii_digit()) {
        return Err(format!("'{}' contains no digits", digits));
    }
    if let Some(bad) = digits.chars().find(|ch| !ch.is_ascii_digit() && *ch != '.') {
        return Err(format!("unexpected character '{}'", bad));
    }
    if digits.matches('.').count() > 1 {
        return Err("more than one decimal point".to_string());
    }
    Decimal::from_str(digits).map_err(|e| e.to_string())
}

/// Sums `<coefficient><unit>` groups such as `1億2000万5`, units strictly descending.
fn parse_magnitude_sequence(body: &str) -> std::result::Result<Decimal, String> {
    let mut total = Decimal::ZERO;
    let mut coefficient = String::new();
    let mut previous: Option<MagnitudeUnit> = None;

    for ch in body.chars() {
        let Some(unit) = MagnitudeUnit::from_char(ch) else {
            coefficient.push(ch);
            continue;
        };

        if coefficient.is_empty() {
            return Err(format!("missing number before {}", unit.symbol()));
        }
        if let Some(prev) = previous {
            if unit >= prev {
                return Err(format!("{} cannot follow {}", unit.symbol(), prev.symbol()));
            }
        }

        let part = parse_plain(&coefficient)?
            .checked_mul(unit.value())
            .ok_or_else(|| "numeral is too large".to_string())?;
        total = total
            .checked_add(part)
            .ok_or_else(|| "numeral is too large".to_string())?;
        coefficient.clear();
        previous = Some(unit);
    }

    if !coefficient.is_empty() {
        let remainder = parse_plain(&coefficient)?;
        if let Some(prev) = previous {
            if remainder >= prev.value() {
                return Err(format!(
                    "trailing {} does not fit below {}",
                    remainder,
                    prev.symbol()
                ));
            }
        }
        total = total
            .checked_add(remainder)
            .ok_or_else(|| "numeral is too large".to_string())?;
    }

    Ok(total)
}

fn round_for_display(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

impl NumberParser for JapaneseNumerals {
    fn parse(&self, text: &str) -> Result<Decimal> {
        let normalized = normalize_numeral(text);
        if normalized.is_empty() {
            return Err(ConverterError::parse(text, "no number given"));
        }

        let (negative, body) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let value = if self.is_japanese_number(body) {
            parse_magnitude_sequence(body)
        } else {
            parse_plain(body)
        }
        .map_err(|reason| ConverterError::parse(text, reason))?;

        Ok(if negative { -value } else { value })
    }

    fn is_japanese_number(&self, text: &str) -> bool {
        text.chars().any(|ch| MagnitudeUnit::from_char(ch).is_some())
    }
}

impl NumberFormatter for JapaneseNumerals {
    fn to_largest_unit(&self, value: Decimal) -> String {
        // 先四捨五入再決定單位：每個單位相差 10^4 倍，進位後滿 1万 就往上一個單位
        let step = MagnitudeUnit::Man.value();
        let mut rendered = round_for_display(value);
        let mut chosen = None;
        for unit in MagnitudeUnit::ASCENDING {
            if rendered.abs() < step {
                break;
            }
            rendered = round_for_display(value / unit.value());
            chosen = Some(unit);
        }

        match chosen {
            Some(unit) => format!("{}{}", rendered, unit.symbol()),
            None => rendered.to_string(),
        }
    }

    fn commafy(&self, value: Decimal) -> String {
        let text = round_for_display(value).to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
        grouped.push_str(sign);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }
        grouped
    }
}
