// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn on logging (to stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//
// All the real work lives in the library (src/lib.rs). This file only
// reads arguments and prints results, so the library stays free of
// side effects and easy to test.
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// - anyhow::Context: Adds a human-friendly note to an error
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use basics_tour::functions::goodbye::good_bye;
use basics_tour::functions::greeting::{hello, official};
use basics_tour::{functions, sequence, tour, UpperBound};
use clap::Parser;  // Parser trait enables the parse() method
use cli::{Cli, Commands};
use serde::Serialize;
use tracing::{debug, info};

// What `fib --json` prints
#[derive(Debug, Serialize)]
struct FibOutput {
    bound: UpperBound,
    terms: Vec<u64>,
}

// What `sum --json` prints
#[derive(Debug, Serialize)]
struct SumOutput {
    a: i64,
    b: i64,
    sum: i128,
}

fn main() {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    basics_tour::logging::init_cli(cli.verbose);

    // Run our application logic and capture the exit code
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the error together with its context chain
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Dispatches to the handler for the chosen subcommand
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fib { bound, json } => handle_fib(bound, json),
        Commands::Sum { a, b, json } => handle_sum(a, b, json),
        Commands::Greet { name, official } => {
            handle_greet(&name, official);
            Ok(())
        }
        Commands::Farewell { name } => {
            println!("{}", good_bye(&name));
            Ok(())
        }
        Commands::Tour { json } => handle_tour(json),
    }
}

// Handles the 'fib' subcommand
// Parameters:
//   bound: exclusive upper bound, already parsed by clap
//   json: whether to output JSON format
fn handle_fib(bound: UpperBound, json: bool) -> Result<()> {
    info!(%bound, "generating fibonacci terms");

    let terms = sequence::try_fib(bound)
        .with_context(|| format!("cannot list fibonacci terms below {}", bound))?;

    debug!(count = terms.len(), "fibonacci terms generated");

    if json {
        let output = FibOutput { bound, terms };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_terms(&terms));
    }
    Ok(())
}

// Handles the 'sum' subcommand
fn handle_sum(a: i64, b: i64, json: bool) -> Result<()> {
    // Widen first: the sum of two i64 values always fits in an i128
    let sum = functions::sum_two_numbers(i128::from(a), i128::from(b));
    debug!(a, b, %sum, "added");

    if json {
        println!("{}", serde_json::to_string_pretty(&SumOutput { a, b, sum })?);
    } else {
        println!("{}", sum);
    }
    Ok(())
}

// Handles the 'greet' subcommand
fn handle_greet(name: &str, formal: bool) {
    let greeting = if formal {
        official::hello(name)
    } else {
        hello::hello(name)
    };
    println!("{}", greeting);
}

// Handles the 'tour' subcommand
fn handle_tour(json: bool) -> Result<()> {
    let report = tour::run_tour().context("module tour failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in &report.lines {
            println!("{}", line);
        }
    }
    Ok(())
}

// Formats terms as a bracketed list: [1, 1, 2, 3, 5, 8]
fn format_terms(terms: &[u64]) -> String {
    format!("{:?}", terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_terms() {
        assert_eq!(format_terms(&[1, 1, 2, 3, 5, 8]), "[1, 1, 2, 3, 5, 8]");
        assert_eq!(format_terms(&[]), "[]");
    }

    #[test]
    fn test_fib_json_shape() {
        let output = FibOutput {
            bound: UpperBound::Integer(10),
            terms: sequence::fib(10),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["bound"], 10);
        assert_eq!(value["terms"], serde_json::json!([1, 1, 2, 3, 5, 8]));
    }

    #[test]
    fn test_sum_near_i64_limit() {
        assert!(handle_sum(i64::MAX, i64::MAX, false).is_ok());
    }
}
