use ekernel_core::errors::{ExError, ExErrorKind, KconfigError};
use std::path::{Path, PathBuf};

#[test]
fn test_read_error_verifiable_by_kind() {
    let err = KconfigError::Read {
        path: PathBuf::from("/usr/src/linux/.config"),
        message: "No such file or directory (os error 2)".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Read);
    assert_eq!(ex_err.code(), "ERR_READ");
    assert_eq!(ex_err.path(), Some(Path::new("/usr/src/linux/.config")));
    assert!(ex_err.message().contains("No such file"));
}

#[test]
fn test_parse_error_carries_line() {
    let err = KconfigError::Parse {
        line: 12,
        content: "garbage".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Parse);
    assert_eq!(ex_err.code(), "ERR_PARSE");
    assert_eq!(ex_err.line(), Some(12));
    assert_ne!(ex_err.kind(), ExErrorKind::Read);
}

#[test]
fn test_config_and_version_errors_map_to_distinct_kinds() {
    let config: ExError = KconfigError::Config {
        message: "unknown field `jobs`".to_string(),
    }
    .into();
    let version: ExError = KconfigError::InvalidVersion {
        input: "linux-6.1".to_string(),
    }
    .into();

    assert_eq!(config.kind(), ExErrorKind::Config);
    assert_eq!(version.kind(), ExErrorKind::InvalidVersion);
    assert_eq!(version.code(), "ERR_INVALID_VERSION");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Read, "ERR_READ"),
        (ExErrorKind::Parse, "ERR_PARSE"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::InvalidVersion, "ERR_INVALID_VERSION"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_kconfig_error_display() {
    let err = KconfigError::Read {
        path: PathBuf::from("/tmp/.config"),
        message: "permission denied".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to read /tmp/.config: permission denied");
}

#[test]
fn test_serde_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: KconfigError = json_err.into();
    assert!(matches!(err, KconfigError::Serialization { .. }));
}
