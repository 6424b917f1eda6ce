// src/functions/returns.rs
// =============================================================================
// The smallest possible example of a function that returns a value.
//
// In Rust the last expression in a function body (with no semicolon) is
// the return value. `return` is only needed to leave early.
// =============================================================================

use std::ops::Add;

// Adds two numbers and hands the result back to the caller
//
// Works for any type that supports `+` (i32, i64, f64, ...)
//
// Example:
//   let c = sum_two_numbers(3, 12);  // c == 15
pub fn sum_two_numbers<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
