// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use basics_tour::UpperBound;
use clap::{ArgAction, Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "basics-tour",
    version = "0.1.0",
    about = "A beginner's tour of functions, return values and modules",
    long_about = "basics-tour runs small teaching examples: a bounded Fibonacci generator, \
                  a function that returns a sum, greetings from nested modules and a \
                  calculator that keeps state."
)]
pub struct Cli {
    /// Show more log output on stderr (-v = info, -vv = debug)
    ///
    /// RUST_LOG overrides this when it is set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every Fibonacci number below a bound
    ///
    /// Example: basics-tour fib 100
    Fib {
        /// Exclusive upper bound: an integer (10) or a real number (10.5)
        ///
        /// clap calls UpperBound's FromStr impl to parse this,
        /// so "ten" is rejected before our code even runs
        #[arg(default_value = "10", allow_negative_numbers = true)]
        bound: UpperBound,

        /// Output results in JSON format instead of a plain list
        #[arg(long)]
        json: bool,
    },

    /// Add two numbers and print the result
    ///
    /// Example: basics-tour sum 3 12
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Output the result in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Greet someone
    ///
    /// Example: basics-tour greet Susan --official
    Greet {
        /// Who to greet
        name: String,

        /// Use the formal greeting
        #[arg(long)]
        official: bool,
    },

    /// Say goodbye to someone
    Farewell {
        /// Who to say goodbye to
        name: String,
    },

    /// Walk through the module-import demo (greetings, calculator, farewell)
    Tour {
        /// Output the tour in JSON format
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does clap parse `bound: UpperBound`?
//    - Any type that implements FromStr can be an argument
//    - If from_str() returns Err, clap prints the error and exits
//
// 2. What is ArgAction::Count?
//    - Counts how many times a flag appears: -v = 1, -vv = 2
//    - global = true lets -v go before or after the subcommand
//
// 3. Why allow_negative_numbers?
//    - Without it, clap would read "-3" as an unknown flag named "3"
// -----------------------------------------------------------------------------
