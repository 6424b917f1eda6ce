// src/sequence/fibonacci.rs
// =============================================================================
// The bounded Fibonacci generator.
//
// fib(10) returns [1, 1, 2, 3, 5, 8]: every Fibonacci number strictly below
// the bound, starting from the two seeds 1 and 1.
//
// How it works:
// 1. Keep a running pair (a, b), both starting at 1
// 2. While a is below the bound: record a, then move the pair forward
//    (a takes b's old value, b becomes a + b)
// 3. Return everything we recorded
//
// The pair lives inside an Iterator, so the stopping rule ("below the
// bound") is a separate take_while() step.
//
// Rust concepts:
// - Iterator trait: produce values one at a time with next()
// - Option<T>: None marks "the next value would not fit in a u64"
// - checked_add: addition that returns None instead of overflowing
// - impl Into<T>: accept anything that converts into an UpperBound
// =============================================================================

use std::iter::FusedIterator;

use super::bound::UpperBound;
use crate::error::Result;

/// Endless (until u64 runs out) Fibonacci terms: 1, 1, 2, 3, 5, 8, ...
///
/// Stops after F(93) = 12200160415121876738, the largest term that fits in a u64.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    /// Term to hand out next
    a: Option<u64>,
    /// Term after that
    b: Option<u64>,
}

impl Fibonacci {
    /// Starts a fresh sequence at the seeds 1 and 1
    pub fn new() -> Self {
        Self {
            a: Some(1),
            b: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let a = self.a?;

        // None here means a + b overflowed, so there is no term after b
        let next_b = self.b.and_then(|b| a.checked_add(b));
        self.a = self.b;
        self.b = next_b;

        Some(a)
    }
}

impl FusedIterator for Fibonacci {}

// Returns every Fibonacci term strictly below `n`, in order.
//
// Parameters:
//   n: the exclusive upper bound (an integer like 10 or a real like 10.5)
//
// Returns: Vec<u64> of the terms, empty when n <= 1
//
// Example:
//   fib(10)  -> [1, 1, 2, 3, 5, 8]
//   fib(2)   -> [1, 1]
//   fib(1)   -> []
pub fn fib(n: impl Into<UpperBound>) -> Vec<u64> {
    let bound = n.into();

    Fibonacci::new()
        .take_while(|&term| bound.admits(term))
        .collect()
}

// Like fib(), but refuses bounds it cannot answer completely.
//
// NaN or infinite bounds, and bounds above LARGEST_EXACT_BOUND, are errors.
// Anything fib() can answer exactly passes through unchanged.
pub fn try_fib(n: impl Into<UpperBound>) -> Result<Vec<u64>> {
    let bound = n.into().validate()?;
    Ok(fib(bound))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an Iterator instead of a while loop?
//    - The sequence itself doesn't care about the bound
//    - take_while() adds the stopping rule, collect() builds the Vec
//    - The same Fibonacci type works for "first 10 terms" (.take(10)) too
//
// 2. What does the ? do in `let a = self.a?;`?
//    - If self.a is None, next() returns None right away
//    - Otherwise it unwraps the value into `a`
//
// 3. Why checked_add?
//    - u64 can't hold F(94), and plain `+` would panic in debug builds
//    - checked_add gives None instead, and we end the sequence cleanly
//
// 4. What is FusedIterator?
//    - A promise that once next() returns None, it keeps returning None
//    - Our iterator already behaves that way, so we just say so
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fib_ten() {
        assert_eq!(fib(10), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_fib_hundred() {
        assert_eq!(fib(100), vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn test_fib_small_bounds() {
        assert_eq!(fib(2), vec![1, 1]);
        assert!(fib(1).is_empty());
        assert!(fib(0).is_empty());
        assert!(fib(-5).is_empty());
    }

    #[test]
    fn test_fib_bound_is_exclusive() {
        assert_eq!(fib(8), vec![1, 1, 2, 3, 5]);
        assert_eq!(fib(9), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_fib_real_bound() {
        assert_eq!(fib(10.5), vec![1, 1, 2, 3, 5, 8]);
        assert_eq!(fib(8.0), vec![1, 1, 2, 3, 5]);
        assert_eq!(fib(1.5), vec![1, 1]);
        assert!(fib(0.5).is_empty());
        assert!(fib(f64::NAN).is_empty());
    }

    #[test]
    fn test_sequence_ends_at_u64_limit() {
        let terms: Vec<u64> = Fibonacci::new().collect();
        assert_eq!(terms.len(), 93);
        assert_eq!(terms.last(), Some(&12_200_160_415_121_876_738));
    }

    #[test]
    fn test_fib_max_bound() {
        assert_eq!(fib(u64::MAX).len(), 93);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut seq = Fibonacci::new();
        for _ in 0..93 {
            assert!(seq.next().is_some());
        }
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_try_fib() {
        assert_eq!(try_fib(10).unwrap(), vec![1, 1, 2, 3, 5, 8]);
        assert!(matches!(try_fib(f64::INFINITY), Err(Error::NonFiniteBound(_))));
        assert!(matches!(try_fib(f64::NAN), Err(Error::NonFiniteBound(_))));
        assert!(matches!(try_fib(1e20), Err(Error::BoundTooLarge { .. })));
    }
}
