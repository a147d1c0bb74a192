//! Clap argument types for the reckon CLI.

use clap::Parser;
use std::path::PathBuf;

use reckon::output::OutputFormat;

/// Four-function arithmetic calculator.
#[derive(Parser, Debug)]
#[command(
    name = "reckon",
    version = reckon::constants::VERSION,
    about = "Four-function arithmetic calculator",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Evaluate a single operation.
    Eval(EvalArgs),

    /// Run the built-in sample calculations.
    Demo(OutputArgs),

    /// List the supported operations.
    Ops,

    /// Print version information.
    Version,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EvalArgs {
    /// Operation name: add, subtract, multiply, or divide.
    pub operation: String,

    /// Left operand.
    pub lhs: f64,

    /// Right operand.
    pub rhs: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by `eval` and `demo`.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output format (default from config, otherwise terminal).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Fixed number of decimal places for results.
    #[arg(long)]
    pub precision: Option<usize>,

    /// Directory to load `.reckon.toml` from (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}
