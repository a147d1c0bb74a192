//! reckon — four-function arithmetic calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use reckon::config::Config;
use reckon::constants;
use reckon::engine::{Calculator, Operation};
use reckon::env::Env;
use reckon::models::Calculation;
use reckon::output::OutputFormat;

use cli::args::{Cli, Command, EvalArgs, OutputArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval(args) => run_eval(args),
        Command::Demo(args) => run_demo(args),
        Command::Ops => run_ops(),
        Command::Version => run_version(),
    }
}

/// Evaluate a single operation and print the result.
fn run_eval(args: EvalArgs) -> Result<()> {
    let (format, precision) = resolve_output(&args.output)?;

    let op: Operation = args.operation.parse()?;
    let mut calculator = Calculator::new();
    let result = calculator.apply(op, args.lhs, args.rhs);

    let calculations = [Calculation {
        operation: op,
        lhs: args.lhs,
        rhs: args.rhs,
        result,
    }];
    print!("{}", format.render(&calculations, precision));
    Ok(())
}

/// Run the four sample calculations from the classic driver, sharing one
/// calculator so each call overwrites the stored result.
fn run_demo(args: OutputArgs) -> Result<()> {
    let (format, precision) = resolve_output(&args)?;

    let samples = [
        (Operation::Add, 3.0, 2.0),
        (Operation::Subtract, 5.0, 3.0),
        (Operation::Multiply, 4.0, 2.0),
        (Operation::Divide, 10.0, 2.0),
    ];

    let mut calculator = Calculator::new();
    let calculations: Vec<Calculation> = samples
        .iter()
        .map(|&(operation, lhs, rhs)| Calculation {
            operation,
            lhs,
            rhs,
            result: calculator.apply(operation, lhs, rhs),
        })
        .collect();

    print!("{}", format.render(&calculations, precision));
    Ok(())
}

/// List the supported operations.
fn run_ops() -> Result<()> {
    use colored::Colorize;

    for op in Operation::ALL {
        println!(
            "  {}  {}",
            format!("{:<8}", op.to_string()).bold(),
            op.describe().dimmed()
        );
        println!("           {}  {}", "symbol:".cyan(), op.symbol());
    }

    Ok(())
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Resolve output format and precision from CLI flags and config.
fn resolve_output(args: &OutputArgs) -> Result<(OutputFormat, Option<usize>)> {
    let dir = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;

    let config = Config::load(Some(&dir), &Env::real()).context("failed to load configuration")?;

    let format = args.format.unwrap_or(config.output.format);
    let precision = args.precision.or(config.output.precision);
    Ok((format, precision))
}
