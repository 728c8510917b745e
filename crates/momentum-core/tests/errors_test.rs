//! Tests for error codes and messages.

use momentum_core::errors::{
    ConfigError, EngineError, MomentumErrorCode, SourceError, ValidationError,
};
use momentum_core::types::{CalendarDay, Mention, MentionRecord};

#[test]
fn every_error_has_a_code() {
    let validation = ValidationError::InvalidCount {
        date: "2024-01-01".to_string(),
        count: 0,
    };
    let config = ConfigError::ValidationFailed {
        field: "half_life_days".to_string(),
        message: "must be a finite number > 0, got 0".to_string(),
    };
    let source = SourceError::Unavailable {
        reason: "timeout".to_string(),
    };

    assert_eq!(validation.error_code(), "VALIDATION_ERROR");
    assert_eq!(config.error_code(), "CONFIG_ERROR");
    assert_eq!(source.error_code(), "SOURCE_ERROR");
}

#[test]
fn tagged_string_prefixes_code() {
    let err = ValidationError::InvalidDate {
        value: "yesterday".to_string(),
        reason: "input contains invalid characters".to_string(),
    };
    let tagged = err.tagged_string();
    assert!(tagged.starts_with("[VALIDATION_ERROR] Invalid date \"yesterday\""), "{tagged}");
}

#[test]
fn engine_error_delegates_code_to_cause() {
    let from_validation: EngineError = ValidationError::InvalidDate {
        value: "x".to_string(),
        reason: "bad".to_string(),
    }
    .into();
    assert_eq!(from_validation.error_code(), "VALIDATION_ERROR");

    let from_config: EngineError = ConfigError::FileNotFound {
        path: "/nowhere/momentum.toml".to_string(),
    }
    .into();
    assert_eq!(from_config.error_code(), "CONFIG_ERROR");

    let wrapped = EngineError::Source {
        subject: "saka".to_string(),
        source: SourceError::InvalidRecord(ValidationError::InvalidCount {
            date: "2024-01-01".to_string(),
            count: -1,
        }),
    };
    assert_eq!(wrapped.error_code(), "VALIDATION_ERROR");
    assert!(wrapped.to_string().contains("saka"));
}

#[test]
fn source_error_wraps_bad_records() {
    fn parse(record: MentionRecord) -> Result<Mention, SourceError> {
        Ok(Mention::try_from(record)?)
    }
    let err = parse(MentionRecord {
        date: "2024-02-30".to_string(),
        count: 1,
    })
    .unwrap_err();
    assert!(matches!(err, SourceError::InvalidRecord(ValidationError::InvalidDate { .. })));

    let ok = parse(MentionRecord {
        date: "2024-02-29".to_string(),
        count: 2,
    })
    .unwrap();
    assert_eq!(ok.date, CalendarDay::from_ymd(2024, 2, 29).unwrap());
}
