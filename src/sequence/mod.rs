// src/sequence/mod.rs
// =============================================================================
// This module generates number sequences.
//
// Submodules:
// - fibonacci: The bounded Fibonacci generator (fib, try_fib)
// - bound: The UpperBound type that decides where a sequence stops
//
// Everything here is a pure function: no printing, no files, no globals.
// Call it as often as you like and you get the same answer.
// =============================================================================

mod bound;
mod fibonacci;

// Re-export public items from submodules
// This lets users write `sequence::fib()` instead of
// `sequence::fibonacci::fib()`
pub use bound::{UpperBound, LARGEST_EXACT_BOUND};
pub use fibonacci::{fib, try_fib, Fibonacci};
