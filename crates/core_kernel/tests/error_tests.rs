//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("motorbike discount must be below 100%");

    match error {
        CoreError::Configuration(msg) => assert!(msg.contains("motorbike")),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let money_error = MoneyError::DivisionByZero;
    let core_error: CoreError = money_error.into();

    assert!(matches!(core_error, CoreError::Money(_)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::configuration("Test error");
    let display = format!("{}", error);

    assert_eq!(display, "Configuration error: Test error");
}
