//! Error cases
//!
//! Load-time failures are errors; odd per-input data is not.

use country_match::error::CountryMatchError;
use country_match::input::{parse_json_inputs, read_inputs};
use country_match::reference::load_reference;
use country_match_common::{CountryMatcher, CountryMatchingMap, Error, MatchConfig, PlaceContext};
use std::path::Path;
use tempfile::tempdir;

/// Missing reference file
#[test]
fn test_reference_file_not_found() {
    let err = load_reference(Some(Path::new("/nonexistent/path/reference.json"))).unwrap_err();
    assert!(matches!(err, CountryMatchError::FileNotFound(_)));
}

/// Duplicate ISO2 key in a reference file
#[test]
fn test_reference_duplicate_key() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.json");
    std::fs::write(
        &path,
        r#"{ "DE": { "canonical": "Germany" }, "de": { "canonical": "Deutschland" } }"#,
    )
    .unwrap();

    let err = load_reference(Some(&path)).unwrap_err();
    match err {
        CountryMatchError::Engine(Error::Configuration(msg)) => assert!(msg.contains("DE")),
        other => panic!("unexpected error: {}", other),
    }
}

/// Inverted historical year range
#[test]
fn test_reference_inverted_range() {
    let json = r#"{ "DE": { "canonical": "Germany", "historicalNames": { "Prussia": [1918, 1701] } } }"#;
    let err = CountryMatchingMap::from_json(json).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

/// Malformed reference JSON
#[test]
fn test_reference_malformed_json() {
    let err = CountryMatchingMap::from_json("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

/// Threshold outside [0, 1]
#[test]
fn test_invalid_match_config() {
    let map = CountryMatchingMap::builtin().unwrap();
    let config = MatchConfig {
        accept_threshold: 1.5,
        ..Default::default()
    };
    let err = CountryMatcher::new(map, config).unwrap_err();
    assert!(err.to_string().contains("acceptThreshold"));
}

/// Batch input that is not an array
#[test]
fn test_batch_input_not_array() {
    let err = parse_json_inputs(r#""France""#).unwrap_err();
    assert!(matches!(err, CountryMatchError::InvalidInput(_)));

    let err = parse_json_inputs("[1, 2]").unwrap_err();
    assert!(matches!(err, CountryMatchError::JsonParse(_)));
}

/// Missing batch input
#[test]
fn test_batch_input_not_found() {
    let err = read_inputs(Path::new("/nonexistent/places.json")).unwrap_err();
    assert!(matches!(err, CountryMatchError::FileNotFound(_)));
}

/// Implausible years and empty strings are outcomes, not errors
#[test]
fn test_odd_inputs_do_not_fail() {
    let matcher = CountryMatcher::builtin().unwrap();
    for y in [-5000, 0, 3000, i32::MAX, i32::MIN] {
        let context = PlaceContext {
            year: Some(y),
            ..Default::default()
        };
        let result = matcher.match_place("Prussia", Some(&context));
        assert_eq!(result.iso2.as_deref(), Some("DE"));
        assert!(result.details.unwrap().historical_year.is_none());
    }

    let result = matcher.match_place("", None);
    assert!(result.iso2.is_none());
    assert_eq!(result.confidence, 0.0);
}

/// CountryMatchError Display
#[test]
fn test_error_display() {
    let errors = vec![
        CountryMatchError::Config("bad setting".to_string()),
        CountryMatchError::FileNotFound("places.json".to_string()),
        CountryMatchError::InvalidInput("not an array".to_string()),
        CountryMatchError::Engine(Error::Configuration("duplicate ISO2 key 'FR'".to_string())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }

    let err = CountryMatchError::Engine(Error::Configuration("duplicate".to_string()));
    assert_eq!(err.to_string(), "Configuration error: duplicate");
}
