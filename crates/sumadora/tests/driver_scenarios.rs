//! Button-level scenario tests
//!
//! The unified verification suite runs against every driver, and the
//! keypad scenarios follow the exact press sequences a user would make.

use sumadora::driver::{self, EngineDriver, KeypadDriver};
use sumadora::prelude::*;

#[cfg(feature = "tui")]
use sumadora::driver::TuiDriver;

// ===== Unified specification =====

#[test]
fn full_specification_on_engine_driver() {
    driver::run_full_specification(&mut EngineDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn full_specification_on_tui_driver() {
    driver::run_full_specification(&mut TuiDriver::new());
}

// ===== Keypad scenarios =====

#[test]
fn chained_addition_scenario() {
    let mut driver = EngineDriver::new();
    driver.tap_all("5+3");
    assert_eq!(driver.display(), "3");
    driver.tap('+');
    // The first addition computes on the second operator press
    assert_eq!(driver.display(), "8");
    driver.tap_all("2=");
    assert_eq!(driver.display(), "10");
}

#[test]
fn divide_by_zero_scenario() {
    let mut driver = EngineDriver::new();
    driver.tap_all("7÷0");
    let before = driver.snapshot();
    driver.tap('=');
    assert_eq!(driver.display(), before.display);
    assert_eq!(driver.snapshot().input, before.input);
}

#[test]
fn division_recovers_with_new_operand() {
    let mut driver = EngineDriver::new();
    driver.tap_all("7÷0=");
    // Entry keeps working after the aborted division
    driver.clear();
    driver.tap_all("7÷2=");
    assert_eq!(driver.display(), "3.5");
}

#[test]
fn percent_on_garbage_scenario() {
    let mut driver = EngineDriver::new();
    driver.tap('%');
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.snapshot().input, "");
    // Digit entry recovers from the error marker
    driver.tap('9');
    assert_eq!(driver.display(), "9");
}

#[test]
fn sign_toggle_mid_expression() {
    let mut driver = EngineDriver::new();
    driver.tap_all("6*7n=");
    assert_eq!(driver.display(), "-42");
}

#[test]
fn operator_reissue_changes_operation() {
    let mut driver = EngineDriver::new();
    driver.tap_all("6+");
    driver.tap('*');
    driver.tap_all("7=");
    assert_eq!(driver.display(), "42");
}

#[test]
fn decimal_entry_and_arithmetic() {
    let mut driver = EngineDriver::new();
    driver.tap_all("1.5+2.25=");
    assert_eq!(driver.display(), "3.75");
}

#[test]
fn clear_mid_entry_starts_over() {
    let mut driver = EngineDriver::new();
    driver.tap_all("12+34c");
    assert_eq!(driver.snapshot(), Engine::new().snapshot());
    driver.tap_all("2+2=");
    assert_eq!(driver.display(), "4");
}

// ===== Snapshot serialization =====

#[test]
fn initial_snapshot_as_json() {
    let snap = Engine::new().snapshot();
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "display": "0",
            "input": "",
            "pending": null,
            "accumulated": 0.0,
        })
    );
}

#[test]
fn pending_snapshot_as_json() {
    let mut driver = EngineDriver::new();
    driver.tap_all("7/");
    let value = serde_json::to_value(driver.snapshot()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "display": "7",
            "input": "",
            "pending": "Divide",
            "accumulated": 7.0,
        })
    );
}

#[test]
fn snapshot_json_roundtrip() {
    let mut driver = EngineDriver::new();
    driver.tap_all("3.5*2");
    let snap = driver.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
