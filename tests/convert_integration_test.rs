use amount_converter::{classify, convert, AmountConverter, ConverterError, DistanceUnit, Marker};

#[test]
fn test_classifier_examples() {
    let cases = [
        ("$100", Marker::Dollar, "100"),
        ("100円", Marker::Yen, "100"),
        ("100 dollars", Marker::Dollar, "100"),
        ("100 yen", Marker::Yen, "100"),
        ("5km", Marker::Distance(DistanceUnit::Kilometer), "5"),
        ("5m", Marker::Distance(DistanceUnit::Meter), "5"),
    ];
    for (raw, marker, payload) in cases {
        let classified = classify(raw);
        assert_eq!(classified.marker, marker, "marker for {:?}", raw);
        assert_eq!(classified.payload, payload, "payload for {:?}", raw);
    }
}

#[test]
fn test_dollars_to_yen_with_japanese_units() {
    assert_eq!(convert("$100000", 110.0, true).unwrap(), "1100万円");
    assert_eq!(convert("＄100000", 110.0, false).unwrap(), "11,000,000円");
}

#[test]
fn test_yen_to_dollars_with_commas() {
    assert_eq!(convert("100000円", 110.0, false).unwrap(), "$909.09");
    assert_eq!(convert("1億円", 100.0, false).unwrap(), "$1,000,000");
    assert_eq!(convert("1億円", 100.0, true).unwrap(), "$100万");
}

#[test]
fn test_bare_numbers_toggle_notation() {
    // Deliberate asymmetry: without a marker the notation is flipped and the
    // rate and style flag are ignored.
    for (rate, jp_units) in [(110.0, true), (110.0, false), (1.0, true)] {
        assert_eq!(convert("12345", rate, jp_units).unwrap(), "1.23万");
        assert_eq!(convert("1万2345", rate, jp_units).unwrap(), "12,345");
    }
    assert_eq!(convert("1億2000万", 110.0, false).unwrap(), "120,000,000");
}

#[test]
fn test_distances() {
    assert_eq!(convert("5km", 110.0, false).unwrap(), "3.11mi");
    assert_eq!(convert("26.2mi", 110.0, false).unwrap(), "42.16km");
    assert_eq!(convert("180cm", 110.0, false).unwrap(), "70.87in");
    assert_eq!(convert("6ft", 110.0, false).unwrap(), "1.83m");
    assert_eq!(convert("100m", 110.0, false).unwrap(), "328.08ft");
}

#[test]
fn test_km_is_never_read_as_meters() {
    let meters = convert("5000m", 110.0, false).unwrap();
    let kilometers = convert("5km", 110.0, false).unwrap();
    assert!(meters.ends_with("ft"));
    assert!(kilometers.ends_with("mi"));
}

#[test]
fn test_non_numeric_input_is_parse_error() {
    for bad in ["abc", "", "$", "円", "ten dollars"] {
        let err = convert(bad, 110.0, false).unwrap_err();
        assert!(
            matches!(err, ConverterError::ParseError { .. }),
            "expected parse error for {:?}, got {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_unknown_marker_token_is_dispatch_error() {
    let err = "lb".parse::<Marker>().unwrap_err();
    assert!(matches!(err, ConverterError::DispatchError { .. }));
}

#[test]
fn test_dollar_yen_round_trip() {
    let converter = AmountConverter::standard();
    for (dollars, rate) in [("$100", 110.0), ("$2500", 149.5), ("$42", 0.5)] {
        let yen = converter.convert(dollars, rate, false).unwrap();
        let back = converter.convert(&yen, rate, false).unwrap();
        assert_eq!(back, dollars.replace("2500", "2,500"), "via {}", yen);
    }
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = std::sync::Arc::new(AmountConverter::standard());
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(&format!("${}", i * 100), 110.0, false))
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(results, vec!["11,000円", "22,000円", "33,000円", "44,000円"]);
}
