//! Arithmetic primitives and the closed operation set.
//!
//! The four primitives are pure, stateless functions over `f64`. Division
//! keeps IEEE-754 semantics: dividing a non-zero value by zero yields an
//! infinity and `0.0 / 0.0` yields NaN. Callers that care can check
//! `f64::is_finite` on the result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::EngineError;

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`, with IEEE-754 semantics when `b == 0.0`.
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// One of the four operations the calculator can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in the order the sample driver reports them.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Apply the operation to two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }

    /// Infix symbol used when printing an expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Capitalized label used by the sample driver output.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Short description for the `ops` listing.
    pub fn describe(self) -> &'static str {
        match self {
            Operation::Add => "sum of the two operands",
            Operation::Subtract => "difference of the two operands",
            Operation::Multiply => "product of the two operands",
            Operation::Divide => "quotient of the two operands",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(EngineError::InvalidOperation(s.to_string())),
        }
    }
}
