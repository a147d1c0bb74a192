//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Calculation;

/// Trait for rendering calculations to an output format.
pub trait OutputRenderer {
    /// Render calculations to a string.
    fn render(&self, calculations: &[Calculation]) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render calculations using the renderer for this format.
    ///
    /// `precision` only affects the terminal renderer; JSON always carries
    /// the raw numbers.
    pub fn render(&self, calculations: &[Calculation], precision: Option<usize>) -> String {
        match self {
            OutputFormat::Terminal => {
                terminal::TerminalRenderer { precision }.render(calculations)
            }
            OutputFormat::Json => json::JsonRenderer.render(calculations),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}
