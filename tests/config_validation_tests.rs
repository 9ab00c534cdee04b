//! Config Validation Tests
//!
//! Exercises typo detection and value validation of the run config
//! independently from the generation pipeline.

use std::io::Write;

use coastal_synth::config::validation::{known_config_keys, suggest_correction, validate_unknown_keys};
use coastal_synth::config::{ConfigError, SynthConfig};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_generation_key_warns_with_suggestion() {
    let toml_str = r#"
[generation]
pionts = 500
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("pionts"));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("generation.points"));
}

#[test]
fn typo_in_output_section_name_warns() {
    let toml_str = r#"
[ouput]
dir = "data"
"#;
    let warnings = validate_unknown_keys(toml_str);
    // the section and the key below it are both unknown
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("output"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[generation]
points = 1000
seed = 2024

[output]
dir = "out"
csv_file = "coast.csv"
xlsx_file = "coast.xlsx"
sheet_name = "coast"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(
        warnings.is_empty(),
        "Valid config should produce 0 warnings, got: {:?}",
        warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
    );
}

#[test]
fn unknown_keys_do_not_fail_parse() {
    let config = SynthConfig::from_toml_str("[generation]\nseed = 5\nweights = 3\n").unwrap();
    assert_eq!(config.generation.seed, 5);
}

#[test]
fn every_known_key_suggests_itself() {
    let known = known_config_keys();
    for key in &known {
        assert_eq!(suggest_correction(key, &known).as_deref(), Some(*key));
    }
}

// ============================================================================
// Value Validation
// ============================================================================

#[test]
fn zero_points_is_rejected() {
    let err = SynthConfig::from_toml_str("[generation]\npoints = 0\n").unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("generation.points"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn forbidden_sheet_character_is_rejected() {
    let err = SynthConfig::from_toml_str("[output]\nsheet_name = \"a:b\"\n").unwrap_err();
    assert!(err.to_string().contains("forbidden character"));
}

#[test]
fn negative_points_is_parse_error() {
    let err = SynthConfig::from_toml_str("[generation]\npoints = -3\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_reads_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[generation]\npoints = 64\nseed = 9\n\n[output]\ndir = \"runs\"").unwrap();

    let config = SynthConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.generation.points, 64);
    assert_eq!(config.generation.seed, 9);
    assert_eq!(config.output.dir, std::path::PathBuf::from("runs"));
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SynthConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}

#[test]
fn parse_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[generation\npoints = 1").unwrap();

    let err = SynthConfig::load_from_file(file.path()).unwrap_err();
    match &err {
        ConfigError::Parse(path, _) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other}"),
    }
}
