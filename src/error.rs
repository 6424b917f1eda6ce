// src/error.rs
// =============================================================================
// Error types for the library.
//
// Every fallible function in this crate returns `Result<T>`, which is a
// shorthand for `std::result::Result<T, Error>`. Errors are never caught
// inside the library - they travel back to whoever called us (usually
// main.rs), which decides how to report them.
//
// Rust concepts:
// - Enums: One type that can be one of several error kinds
// - thiserror: A derive macro that writes the Display/Error impls for us
// - Type aliases: `Result<T>` saves typing the error type everywhere
// =============================================================================

use thiserror::Error;

/// All the ways a library call can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The text given as an upper bound is not a number at all
    #[error("invalid upper bound '{input}': expected an integer or a real number")]
    InvalidBound { input: String },

    /// The upper bound is NaN or infinite
    #[error("upper bound must be finite, got {0}")]
    NonFiniteBound(f64),

    /// The upper bound is so large that some terms below it would not fit in a u64
    #[error("upper bound {bound} is too large: terms are only exact up to a bound of {max}")]
    BoundTooLarge { bound: String, max: u128 },

    /// A calculator step overflowed a 64-bit integer
    #[error("calculator overflow: {current} {op} {operand} does not fit in an i64")]
    Overflow {
        current: i64,
        op: &'static str,
        operand: i64,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
