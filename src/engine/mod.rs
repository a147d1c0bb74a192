//! Calculator engine: the operation set and the dispatching calculator.
//!
//! [`Calculator`] is the stateful entry point. It routes an operation name
//! to the matching primitive and keeps the last computed result.

pub mod ops;

use thiserror::Error;

pub use ops::Operation;

/// Errors from the calculator engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid operation: '{0}'. Supported: add, subtract, multiply, divide")]
    InvalidOperation(String),
}

/// Stateful dispatcher over the four arithmetic primitives.
///
/// Holds the last computed result, starting at `0.0`. Intended for
/// single-owner, single-threaded use; every call runs to completion
/// before returning.
#[derive(Debug, Clone)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    /// Create a calculator with its result initialized to `0.0`.
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    /// The last computed result, or `0.0` if nothing has run yet.
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Dispatch an operation by name.
    ///
    /// Fails with [`EngineError::InvalidOperation`] when `operation` is not
    /// one of `add`, `subtract`, `multiply`, `divide`; the stored result is
    /// left unchanged in that case.
    pub fn execute(&mut self, operation: &str, a: f64, b: f64) -> Result<f64, EngineError> {
        let op: Operation = operation.parse()?;
        Ok(self.apply(op, a, b))
    }

    /// Apply an already-resolved operation, store and return the result.
    pub fn apply(&mut self, op: Operation, a: f64, b: f64) -> f64 {
        self.result = op.apply(a, b);
        self.result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
