// src/tour.rs
// =============================================================================
// A guided tour of the module system.
//
// This pulls functions in from several modules, each imported a different
// way, and records what they return:
// 1. A nested function by its full path      (greeting::hello::hello)
// 2. A module under a shorter alias          (goodbye as bye)
// 3. A struct with state                     (Calculator)
// 4. A function with a clashing name         (greeting::official::hello)
//
// run_tour() only builds the lines. Printing them is main.rs's job.
// =============================================================================

use serde::Serialize;
use tracing::debug;

use crate::classes::calculator::Calculator;
use crate::error::Result;
use crate::functions::goodbye as bye;
use crate::functions::greeting::{hello, official};

/// Everything the tour produced, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourReport {
    /// One line per step, ready to print
    pub lines: Vec<String>,
    /// Final value held by the tour's calculator
    pub calculator: i64,
}

// Runs every step of the tour and collects the output lines
pub fn run_tour() -> Result<TourReport> {
    let mut lines = Vec::new();

    lines.push(hello::hello("Susan"));
    lines.push(bye::good_bye("Alex"));

    let mut calc = Calculator::new();
    calc.add(2)?;
    calc.multiply(10)?;
    debug!(value = calc.current(), "calculator finished");
    lines.push(calc.current().to_string());

    lines.push(official::hello("Sam"));

    debug!(steps = lines.len(), "tour complete");

    Ok(TourReport {
        lines,
        calculator: calc.current(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_lines() {
        let report = run_tour().unwrap();
        assert_eq!(
            report.lines,
            vec![
                "Hello, Susan!",
                "Goodbye, Alex. See you soon!",
                "20",
                "Good day, Sam. It is a pleasure to meet you.",
            ]
        );
        assert_eq!(report.calculator, 20);
    }

    #[test]
    fn test_tour_is_repeatable() {
        assert_eq!(run_tour().unwrap(), run_tour().unwrap());
    }
}
