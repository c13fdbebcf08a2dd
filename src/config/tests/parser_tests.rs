use crate::config::parser::{parse_setting_line, parse_settings};
use crate::config::ConfigError;

#[test]
fn test_parse_simple_line() {
    let (_, (key, value)) = parse_setting_line("threshold = 80").unwrap();
    assert_eq!(key, "threshold");
    assert_eq!(value, "80");
}

#[test]
fn test_parse_line_without_spaces() {
    let (_, (key, value)) = parse_setting_line("drag_scale=1.05").unwrap();
    assert_eq!(key, "drag_scale");
    assert_eq!(value, "1.05");
}

#[test]
fn test_comments_and_blank_lines_skipped() {
    let content = r#"
# Tuning for a small phone screen

threshold = 64   # a bit more sensitive
viewport_width = 360
"#;

    let settings = parse_settings(content).unwrap();
    assert_eq!(settings.len(), 2, "Should parse 2 settings");
    assert_eq!(settings[0].value, "64", "Trailing comment should be stripped");
    assert_eq!(settings[1].key, "viewport_width");
}

#[test]
fn test_line_numbers_are_one_based() {
    let content = "# header\n\nthreshold = 80\n";

    let settings = parse_settings(content).unwrap();
    assert_eq!(settings[0].line, 3);
}

#[test]
fn test_missing_equals_reports_line() {
    let content = "threshold = 80\nrotation_factor 0.1\n";

    match parse_settings(content) {
        Err(ConfigError::Syntax { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected Syntax error, got: {:?}", other),
    }
}

#[test]
fn test_missing_value_is_syntax_error() {
    match parse_settings("threshold =\n") {
        Err(ConfigError::Syntax { line, message }) => {
            assert_eq!(line, 1);
            assert!(message.contains("threshold"), "Message should name the key");
        }
        other => panic!("Expected Syntax error, got: {:?}", other),
    }
}
