//! Tests for error types

use grade_partition::Error;

#[test]
fn test_strategy_mismatch_error() {
    let error = Error::StrategyMismatch {
        copy_result: "failed[0] = Name: A, Grade: 40".to_string(),
        in_place_result: "failed[0] = Name: D, Grade: 10".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Strategy equivalence failed"));
    assert!(error_str.contains("Name: A, Grade: 40"));
    assert!(error_str.contains("Name: D, Grade: 10"));
}

#[test]
fn test_invalid_config_error() {
    let error = Error::InvalidConfig("at least one container must be selected".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid configuration"));
    assert!(error_str.contains("at least one container"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(error_str.contains("stdout closed"));
}

#[test]
fn test_serialization_error_conversion() {
    let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").contains("Serialization error"));
}

#[test]
fn test_other_error() {
    let error = Error::Other("custom error message".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "custom error message");
}

#[test]
fn test_error_debug() {
    let error = Error::InvalidConfig("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InvalidConfig"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> grade_partition::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> grade_partition::Result<i32> {
        Err(Error::Other("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
