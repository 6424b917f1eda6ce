// src/sequence/bound.rs
// =============================================================================
// The exclusive upper bound for the Fibonacci generator.
//
// A bound can be a whole number ("10", "-3") or a real number ("10.5").
// The terms we produce are always whole numbers; a real bound only changes
// the comparison. 8 < 8.0 is false, 8 < 8.5 is true.
//
// Rust concepts:
// - Enums with data: Integer(i128) or Real(f64)
// - FromStr: lets us write "10".parse::<UpperBound>()
// - From: lets callers pass a plain 10 or 10.5 where a bound is expected
// - Macros: to write the same From impl for many integer types at once
// =============================================================================

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest bound for which the u64 sequence is complete.
///
/// This is F(94). Every term below it is at most F(93), the largest
/// Fibonacci number that fits in a u64.
pub const LARGEST_EXACT_BOUND: u128 = 19_740_274_219_868_223_167;

/// Exclusive ceiling for sequence membership.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpperBound {
    /// A whole-number bound (wide enough for any i64 or u64)
    Integer(i128),
    /// A real-number bound
    Real(f64),
}

impl UpperBound {
    /// Returns true if `term` is strictly below this bound.
    ///
    /// Integer terms compare exactly against real bounds:
    /// `term < n` holds exactly when `term < ceil(n)`. A NaN bound admits nothing.
    pub fn admits(&self, term: u64) -> bool {
        match *self {
            UpperBound::Integer(n) => i128::from(term) < n,
            // `as` saturates, so an infinite bound becomes u128::MAX
            UpperBound::Real(n) => n > 0.0 && u128::from(term) < n.ceil() as u128,
        }
    }

    /// Checks that every term below this bound can be represented.
    ///
    /// Fails for NaN/infinite bounds and for bounds above `LARGEST_EXACT_BOUND`.
    pub fn validate(self) -> Result<Self> {
        match self {
            UpperBound::Real(n) if !n.is_finite() => Err(Error::NonFiniteBound(n)),
            UpperBound::Real(n) if n.ceil() as u128 > LARGEST_EXACT_BOUND => {
                Err(self.too_large())
            }
            UpperBound::Integer(n) if n > LARGEST_EXACT_BOUND as i128 => Err(self.too_large()),
            _ => Ok(self),
        }
    }

    fn too_large(self) -> Error {
        Error::BoundTooLarge {
            bound: self.to_string(),
            max: LARGEST_EXACT_BOUND,
        }
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Integer(n) => write!(f, "{}", n),
            UpperBound::Real(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for UpperBound {
    type Err = Error;

    // Whole numbers are tried first so "10" stays an Integer bound.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        if let Ok(n) = text.parse::<i128>() {
            return Ok(UpperBound::Integer(n));
        }

        text.parse::<f64>()
            .map(UpperBound::Real)
            .map_err(|_| Error::InvalidBound {
                input: s.to_string(),
            })
    }
}

// Writes `impl From<$t> for UpperBound` for each integer type listed
macro_rules! integer_bound {
    ($($t:ty),*) => {
        $(
            impl From<$t> for UpperBound {
                fn from(n: $t) -> Self {
                    UpperBound::Integer(i128::from(n))
                }
            }
        )*
    };
}

integer_bound!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for UpperBound {
    fn from(n: f32) -> Self {
        UpperBound::Real(f64::from(n))
    }
}

impl From<f64> for UpperBound {
    fn from(n: f64) -> Self {
        UpperBound::Real(n)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why i128 for integer bounds?
//    - It holds every i64 AND every u64 value
//    - So one variant covers negative bounds and very large bounds
//
// 2. What does `as` do with floats?
//    - `x as u128` rounds toward zero and SATURATES
//    - Negative numbers and NaN become 0, infinity becomes u128::MAX
//    - No panic, no undefined behavior
//
// 3. What is a match guard?
//    - `UpperBound::Real(n) if !n.is_finite() => ...`
//    - The arm only matches when the pattern fits AND the condition is true
//
// 4. What does macro_rules! do here?
//    - It stamps out the same impl block for every type in the list
//    - $(...)* means "repeat this for each item"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!("10".parse::<UpperBound>().unwrap(), UpperBound::Integer(10));
        assert_eq!(" -3 ".parse::<UpperBound>().unwrap(), UpperBound::Integer(-3));
    }

    #[test]
    fn test_parse_real() {
        assert_eq!("10.5".parse::<UpperBound>().unwrap(), UpperBound::Real(10.5));
        assert_eq!("1e3".parse::<UpperBound>().unwrap(), UpperBound::Real(1000.0));
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = "ten".parse::<UpperBound>().unwrap_err();
        assert!(matches!(err, Error::InvalidBound { ref input } if input == "ten"));

        assert!("".parse::<UpperBound>().is_err());
    }

    #[test]
    fn test_real_bound_compares_exactly() {
        let bound = UpperBound::Real(8.0);
        assert!(bound.admits(5));
        assert!(!bound.admits(8));

        let bound = UpperBound::Real(8.5);
        assert!(bound.admits(8));
        assert!(!bound.admits(9));
    }

    #[test]
    fn test_nan_admits_nothing() {
        assert!(!UpperBound::Real(f64::NAN).admits(1));
    }

    #[test]
    fn test_validate() {
        assert!(UpperBound::from(u64::MAX).validate().is_ok());
        assert!(UpperBound::Integer(LARGEST_EXACT_BOUND as i128).validate().is_ok());
        assert!(matches!(
            UpperBound::Integer(LARGEST_EXACT_BOUND as i128 + 1).validate(),
            Err(Error::BoundTooLarge { .. })
        ));
        assert!(matches!(
            UpperBound::Real(f64::INFINITY).validate(),
            Err(Error::NonFiniteBound(_))
        ));
        assert!(matches!(
            UpperBound::Real(1e30).validate(),
            Err(Error::BoundTooLarge { .. })
        ));
        assert!(UpperBound::Real(-4.5).validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(UpperBound::Integer(100).to_string(), "100");
        assert_eq!(UpperBound::Real(10.5).to_string(), "10.5");
    }
}
