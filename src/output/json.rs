//! JSON output renderer.
//!
//! Outputs `{"calculations": [...], "count": N}` format.

use crate::models::Calculation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, calculations: &[Calculation]) -> String {
        let output = serde_json::json!({
            "calculations": calculations,
            "count": calculations.len(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
