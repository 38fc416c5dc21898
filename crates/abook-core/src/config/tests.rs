//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_vcard_config_default_is_valid() {
    tracing::debug!("Testing default vCard configuration");

    let config = VCardConfig::default();
    assert_eq!(config.version, "3.0");
    assert_eq!(config.max_agent_depth, DEFAULT_MAX_AGENT_DEPTH);
    assert!(config.fold_lines);
    assert!(config.validate().is_ok());
}

#[test]
fn test_vcard_config_accepts_legacy_version() {
    let config = VCardConfig {
        version: "2.1".to_string(),
        ..VCardConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_vcard_config_rejects_unknown_version() {
    let config = VCardConfig {
        version: "4.0".to_string(),
        ..VCardConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedVersion(ref v) if v == "4.0"));
    assert!(err.to_string().contains("4.0"));
}

#[test]
fn test_logging_config_clone() {
    let config = LoggingConfig {
        level: "debug".to_string(),
    };

    let cloned = config.clone();
    assert_eq!(cloned.level, config.level);
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        vcard: VCardConfig::default(),
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    };

    let debug = format!("{settings:?}");
    assert!(debug.contains("VCardConfig"));
    assert!(debug.contains("max_agent_depth"));
}
