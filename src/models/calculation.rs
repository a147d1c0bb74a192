//! The calculation record shared by the renderers and the sample driver.

use serde::Serialize;

use crate::engine::Operation;

/// One performed calculation: operation, operands, and result.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    /// The operation that was dispatched.
    pub operation: Operation,
    /// Left operand.
    pub lhs: f64,
    /// Right operand.
    pub rhs: f64,
    /// The value the calculator returned.
    pub result: f64,
}

impl Calculation {
    /// Render as `<Label>: <lhs> <symbol> <rhs> = <result>`.
    ///
    /// `precision` fixes the number of decimal places of the result;
    /// operands always use the shortest display.
    pub fn expression(&self, precision: Option<usize>) -> String {
        format!(
            "{}: {} {} {} = {}",
            self.operation.label(),
            format_number(self.lhs, None),
            self.operation.symbol(),
            format_number(self.rhs, None),
            format_number(self.result, precision),
        )
    }
}

/// Format a float with an optional fixed number of decimal places.
///
/// Without a precision this is Rust's shortest `f64` display, so whole
/// values print without a fractional part (`5`, not `5.0`).
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => format!("{value}"),
    }
}
