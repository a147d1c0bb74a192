//! Terminal renderer: styled expression lines.

use colored::Colorize;

use crate::models::{Calculation, format_number};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored expression lines.
pub struct TerminalRenderer {
    /// Fixed number of decimal places for results, when set.
    pub precision: Option<usize>,
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, calculations: &[Calculation]) -> String {
        if calculations.is_empty() {
            return format!("{}", "  Nothing to calculate.\n".dimmed());
        }

        let mut output = String::new();

        for calc in calculations {
            output.push_str(&format!(
                "  {} {} {} {} {} {}\n",
                format!("{}:", calc.operation.label()).bold(),
                format_number(calc.lhs, None),
                calc.operation.symbol(),
                format_number(calc.rhs, None),
                "=".dimmed(),
                format_number(calc.result, self.precision).bold(),
            ));

            if !calc.result.is_finite() {
                output.push_str(&format!(
                    "    {}\n",
                    "result is not a finite number (division by zero)".dimmed()
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operation;

    fn sample(operation: Operation, lhs: f64, rhs: f64) -> Calculation {
        Calculation {
            operation,
            lhs,
            rhs,
            result: operation.apply(lhs, rhs),
        }
    }

    #[test]
    fn render_empty() {
        let renderer = TerminalRenderer { precision: None };
        let output = renderer.render(&[]);
        assert!(output.contains("Nothing to calculate"));
    }

    #[test]
    fn render_expression_lines() {
        let renderer = TerminalRenderer { precision: None };
        let output = renderer.render(&[
            sample(Operation::Add, 3.0, 2.0),
            sample(Operation::Divide, 10.0, 2.0),
        ]);
        // Content is present (may be wrapped in ANSI color codes)
        assert!(output.contains("Add:"));
        assert!(output.contains("3 + 2"));
        assert!(output.contains("Divide:"));
        assert!(output.contains("10 / 2"));
    }

    #[test]
    fn render_with_precision() {
        let renderer = TerminalRenderer { precision: Some(2) };
        let output = renderer.render(&[sample(Operation::Divide, 10.0, 4.0)]);
        assert!(output.contains("2.50"));
    }

    #[test]
    fn render_flags_non_finite_result() {
        let renderer = TerminalRenderer { precision: None };
        let output = renderer.render(&[sample(Operation::Divide, 1.0, 0.0)]);
        assert!(output.contains("not a finite number"));
    }
}
