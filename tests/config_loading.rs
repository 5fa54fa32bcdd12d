use std::time::Duration;

use portfolio_core::config::{ConfigError, PortfolioConfig};
use portfolio_core::theme::Theme;
use tempfile::tempdir;

#[test]
fn v0_defaults() {
    let config = PortfolioConfig::v0();
    assert_eq!(config.theme_key, "theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.nav_scroll_threshold, 100);
    assert_eq!(config.section_offset, 100);
    assert_eq!(config.counter_steps, 50);
    assert_eq!(config.counter_tick(), Duration::from_millis(40));
    assert_eq!(config.card_stagger(), Duration::from_millis(100));
    assert_eq!(PortfolioConfig::default(), config);
}

#[test]
fn partial_file_fills_defaults() {
    let config = PortfolioConfig::from_json_str(r#"{"default_theme": "light", "card_stagger_ms": 50}"#).unwrap();
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.card_stagger_ms, 50);
    assert_eq!(config.theme_key, "theme");
}

#[test]
fn unknown_fields_rejected() {
    let result = PortfolioConfig::from_json_str(r#"{"colour": "blue"}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn zero_counter_steps_rejected() {
    let result = PortfolioConfig::from_json_str(r#"{"counter_steps": 0}"#);
    assert!(matches!(result, Err(ConfigError::ZeroCounterSteps)));
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, r#"{"theme_key": "site-theme", "log_level": "debug"}"#).unwrap();

    let config = PortfolioConfig::from_json_file(&path).unwrap();
    assert_eq!(config.theme_key, "site-theme");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match PortfolioConfig::from_json_file(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}
