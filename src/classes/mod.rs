// src/classes/mod.rs
// =============================================================================
// Types that carry state between calls (Rust has no classes, but a struct
// plus an impl block plays the same role).
// =============================================================================

pub mod calculator;
