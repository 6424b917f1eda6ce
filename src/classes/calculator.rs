// src/classes/calculator.rs
// =============================================================================
// A running-total calculator.
//
// It starts at 0. Each operation changes the stored value in place:
//   add(2)       -> 2
//   multiply(10) -> 20
//   current()    -> 20
//
// Rust concepts:
// - Structs + impl blocks: data plus the methods that work on it
// - &mut self: methods that change the struct
// - checked arithmetic: overflow becomes an error instead of a panic
// =============================================================================

use crate::error::{Error, Result};

/// Accumulator that remembers its value between calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    /// The running value
    current: i64,
}

impl Calculator {
    /// A calculator holding 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the running total and returns the new total
    pub fn add(&mut self, value: i64) -> Result<i64> {
        self.current = self.current.checked_add(value).ok_or(Error::Overflow {
            current: self.current,
            op: "+",
            operand: value,
        })?;
        Ok(self.current)
    }

    /// Multiplies the running total by `value` and returns the new total
    pub fn multiply(&mut self, value: i64) -> Result<i64> {
        self.current = self.current.checked_mul(value).ok_or(Error::Overflow {
            current: self.current,
            op: "*",
            operand: value,
        })?;
        Ok(self.current)
    }

    pub fn current(&self) -> i64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Calculator::new().current(), 0);
    }

    #[test]
    fn test_add_then_multiply() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(2).unwrap(), 2);
        assert_eq!(calc.multiply(10).unwrap(), 20);
        assert_eq!(calc.current(), 20);
    }

    #[test]
    fn test_overflow_leaves_value_unchanged() {
        let mut calc = Calculator::new();
        calc.add(i64::MAX).unwrap();

        let err = calc.add(1).unwrap_err();
        assert!(matches!(err, Error::Overflow { op: "+", .. }));
        assert_eq!(calc.current(), i64::MAX);

        assert!(calc.multiply(2).is_err());
        assert_eq!(calc.current(), i64::MAX);
    }
}
