//! Integration tests for the eval and demo CLI commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the reckon crate.

use pretty_assertions::assert_eq;

use reckon::engine::{Calculator, EngineError, Operation};
use reckon::models::Calculation;
use reckon::output::OutputFormat;

// ---------------------------------------------------------------------------
// eval
// ---------------------------------------------------------------------------

#[test]
fn eval_dispatches_all_operations() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.execute("add", 3.0, 2.0).unwrap(), 5.0);
    assert_eq!(calculator.execute("subtract", 5.0, 3.0).unwrap(), 2.0);
    assert_eq!(calculator.execute("multiply", 4.0, 2.0).unwrap(), 8.0);
    assert_eq!(calculator.execute("divide", 10.0, 2.0).unwrap(), 5.0);
}

#[test]
fn eval_unknown_operation_reports_name() {
    let mut calculator = Calculator::new();
    let err = calculator.execute("unknown", 1.0, 2.0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidOperation(_)));

    let msg = err.to_string();
    assert!(msg.contains("'unknown'"), "message should name the operation: {msg}");
    assert!(msg.contains("Supported"), "message should list the supported set: {msg}");
}

#[test]
fn eval_failure_keeps_previous_result() {
    let mut calculator = Calculator::new();
    calculator.execute("multiply", 4.0, 2.0).unwrap();
    calculator.execute("nope", 1.0, 2.0).unwrap_err();
    assert_eq!(calculator.result(), 8.0);
}

#[test]
fn eval_renders_terminal_output() {
    let mut calculator = Calculator::new();
    let result = calculator.execute("add", 3.0, 2.0).unwrap();

    let calculations = [Calculation {
        operation: Operation::Add,
        lhs: 3.0,
        rhs: 2.0,
        result,
    }];
    let output = OutputFormat::Terminal.render(&calculations, None);
    assert!(output.contains("Add:"));
    assert!(output.contains("3 + 2"));
}

#[test]
fn eval_renders_json_output() {
    let mut calculator = Calculator::new();
    let result = calculator.execute("divide", 10.0, 2.0).unwrap();

    let calculations = [Calculation {
        operation: Operation::Divide,
        lhs: 10.0,
        rhs: 2.0,
        result,
    }];
    let output = OutputFormat::Json.render(&calculations, None);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["calculations"][0]["operation"], "divide");
    assert_eq!(parsed["calculations"][0]["result"], 5.0);
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_sequence_matches_classic_driver() {
    let samples = [
        (Operation::Add, 3.0, 2.0, 5.0),
        (Operation::Subtract, 5.0, 3.0, 2.0),
        (Operation::Multiply, 4.0, 2.0, 8.0),
        (Operation::Divide, 10.0, 2.0, 5.0),
    ];

    let mut calculator = Calculator::new();
    for (operation, lhs, rhs, expected) in samples {
        let result = calculator.apply(operation, lhs, rhs);
        assert_eq!(result, expected);
        assert_eq!(calculator.result(), expected);
    }

    // The last sample leaves the final stored result
    assert_eq!(calculator.result(), 5.0);
}

#[test]
fn demo_expressions_match_driver_format() {
    let mut calculator = Calculator::new();
    let lines: Vec<String> = [
        (Operation::Add, 3.0, 2.0),
        (Operation::Subtract, 5.0, 3.0),
        (Operation::Multiply, 4.0, 2.0),
        (Operation::Divide, 10.0, 2.0),
    ]
    .into_iter()
    .map(|(operation, lhs, rhs)| {
        Calculation {
            operation,
            lhs,
            rhs,
            result: calculator.apply(operation, lhs, rhs),
        }
        .expression(None)
    })
    .collect();

    assert_eq!(
        lines,
        vec![
            "Add: 3 + 2 = 5",
            "Subtract: 5 - 3 = 2",
            "Multiply: 4 * 2 = 8",
            "Divide: 10 / 2 = 5",
        ]
    );
}
