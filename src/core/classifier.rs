use crate::domain::model::{ClassifiedAmount, DistanceUnit, Marker};

type Matcher = fn(&str) -> Option<ClassifiedAmount<'_>>;

/// One entry of the detection table.
pub struct MarkerRule {
    pub name: &'static str,
    matcher: Matcher,
}

impl MarkerRule {
    pub fn apply<'a>(&self, raw: &'a str) -> Option<ClassifiedAmount<'a>> {
        (self.matcher)(raw)
    }
}

/// Detection rules in priority order; the first match wins. Two-character
/// suffixes are checked before single characters so `5km` never reads as meters.
pub const RULES: [MarkerRule; 7] = [
    MarkerRule {
        name: "dollars-word",
        matcher: dollars_word,
    },
    MarkerRule {
        name: "yen-word",
        matcher: yen_word,
    },
    MarkerRule {
        name: "katakana-dollar",
        matcher: katakana_dollar,
    },
    MarkerRule {
        name: "distance-suffix",
        matcher: two_char_distance,
    },
    MarkerRule {
        name: "dollar-sign",
        matcher: dollar_sign,
    },
    MarkerRule {
        name: "yen-sign",
        matcher: yen_sign,
    },
    MarkerRule {
        name: "meter-suffix",
        matcher: meter_suffix,
    },
];

/// Splits `raw` into its marker and the remaining numeric text.
///
/// Works on char boundaries. Input without a recognizable marker, including
/// the empty string, comes back unchanged with [`Marker::None`].
pub fn classify(raw: &str) -> ClassifiedAmount<'_> {
    for rule in &RULES {
        if let Some(classified) = rule.apply(raw) {
            tracing::debug!(
                "Classified {:?} via {} as marker {:?} with payload {:?}",
                raw,
                rule.name,
                classified.marker.token(),
                classified.payload
            );
            return classified;
        }
    }

    tracing::debug!("No marker found in {:?}", raw);
    ClassifiedAmount::unmarked(raw)
}

fn trailing_word<'a>(raw: &'a str, word: &str, marker: Marker) -> Option<ClassifiedAmount<'a>> {
    let (head, last) = raw.rsplit_once(' ')?;
    (last == word).then(|| ClassifiedAmount::new(marker, head))
}

/// Splits off the last `count` chars, provided something remains before them.
fn split_suffix_chars(raw: &str, count: usize) -> Option<(&str, &str)> {
    let (index, _) = raw.char_indices().rev().nth(count.checked_sub(1)?)?;
    if index == 0 {
        return None;
    }
    Some(raw.split_at(index))
}

fn dollars_word(raw: &str) -> Option<ClassifiedAmount<'_>> {
    trailing_word(raw, "dollars", Marker::Dollar)
}

fn yen_word(raw: &str) -> Option<ClassifiedAmount<'_>> {
    trailing_word(raw, "yen", Marker::Yen)
}

fn katakana_dollar(raw: &str) -> Option<ClassifiedAmount<'_>> {
    let (head, suffix) = split_suffix_chars(raw, 2)?;
    (suffix == "ドル").then(|| ClassifiedAmount::new(Marker::Dollar, head))
}

fn two_char_distance(raw: &str) -> Option<ClassifiedAmount<'_>> {
    let (head, suffix) = split_suffix_chars(raw, 2)?;
    match suffix {
        "cm" | "in" | "ft" | "km" | "mi" => DistanceUnit::from_symbol(suffix)
            .map(|unit| ClassifiedAmount::new(Marker::Distance(unit), head)),
        _ => None,
    }
}

fn dollar_sign(raw: &str) -> Option<ClassifiedAmount<'_>> {
    let mut chars = raw.chars();
    match chars.next()? {
        '$' | '＄' => Some(ClassifiedAmount::new(Marker::Dollar, chars.as_str())),
        _ => None,
    }
}

fn yen_sign(raw: &str) -> Option<ClassifiedAmount<'_>> {
    raw.strip_suffix('円')
        .map(|head| ClassifiedAmount::new(Marker::Yen, head))
}

fn meter_suffix(raw: &str) -> Option<ClassifiedAmount<'_>> {
    raw.strip_suffix('m')
        .map(|head| ClassifiedAmount::new(Marker::Distance(DistanceUnit::Meter), head))
}
