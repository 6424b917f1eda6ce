// src/functions/mod.rs
// =============================================================================
// Small standalone functions used to show how Rust modules nest.
//
// Submodules:
// - returns: A function that returns a value (sum_two_numbers)
// - greeting: A nested module with two `hello` functions
// - goodbye: A farewell message
//
// Rust concepts:
// - Nested modules: functions::greeting::official is three levels deep
// - pub mod vs pub use: expose a whole module, or lift one item up
// =============================================================================

pub mod goodbye;
pub mod greeting;
pub mod returns;

// sum_two_numbers is used often enough to lift it up one level
pub use returns::sum_two_numbers;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How do paths work?
//    - crate::functions::goodbye::good_bye is the full path
//    - `use` brings a path into scope so you can write good_bye(..)
//    - `use ... as bye` gives a module a shorter local name
//
// 2. Can two functions have the same name?
//    - Yes, if they live in different modules
//    - greeting::hello::hello and greeting::official::hello don't clash
//
// 3. What is a directory module?
//    - src/functions/greeting/mod.rs is the root of the greeting module
//    - Its submodules live next to it as hello.rs and official.rs
// -----------------------------------------------------------------------------
