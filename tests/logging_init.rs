use portfolio_core::config::PortfolioConfig;
use portfolio_core::logging::{init_from_config, init_logging, logging_level, LoggingError};

// Single test: the logger is process-global.
#[test]
fn logging_init_is_idempotent_per_level() {
    assert!(matches!(init_logging("loud"), Err(LoggingError::UnsupportedLevel(_))));
    assert_eq!(logging_level(), None);

    init_logging("warn").unwrap();
    init_logging("WARN").unwrap();

    let mut config = PortfolioConfig::v0();
    config.log_level = "warn".into();
    init_from_config(&config).unwrap();
    assert_eq!(logging_level(), Some("warn"));

    assert!(matches!(
        init_logging("debug"),
        Err(LoggingError::LevelMismatch { active: "warn", requested: "debug" })
    ));
}
