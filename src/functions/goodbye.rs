// src/functions/goodbye.rs
// =============================================================================
// Farewell messages. Imported directly by name elsewhere:
//   use crate::functions::goodbye::good_bye;
// =============================================================================

// Builds a goodbye message for `name`
pub fn good_bye(name: &str) -> String {
    format!("Goodbye, {}. See you soon!", name)
}
