// src/lib.rs
// =============================================================================
// Library root: a beginner's tour of functions, return values and modules.
//
// The centerpiece is the bounded Fibonacci generator:
//
//     use basics_tour::fib;
//     assert_eq!(fib(10), vec![1, 1, 2, 3, 5, 8]);
//
// Around it sit small demos: a function returning a sum, greetings spread
// across nested modules, and a calculator that keeps state.
//
// Module map:
// - sequence: Fibonacci generator and its UpperBound
// - functions: sum_two_numbers, greetings, farewell
// - classes: the Calculator struct
// - tour: wires the demos together
// - error: the crate's Error type
// - logging: tracing setup used by the binary
// =============================================================================

pub mod classes;
pub mod error;
pub mod functions;
pub mod logging;
pub mod sequence;
pub mod tour;

// Re-export the items most callers want
pub use error::{Error, Result};
pub use sequence::{fib, try_fib, Fibonacci, UpperBound};
