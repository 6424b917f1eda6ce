// src/functions/greeting/mod.rs
// =============================================================================
// Greetings, split into two submodules that each define a `hello` function.
//
// We deliberately do NOT re-export them here: callers write
// `greeting::hello::hello(..)` or `greeting::official::hello(..)`, so the
// module path tells you which greeting you get.
// =============================================================================

pub mod hello;
pub mod official;
