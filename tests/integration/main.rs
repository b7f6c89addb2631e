//! Cross-layer integration tests for Lexc
//!
//! Tests that verify correct interaction between multiple crates.

mod pipeline;
mod repl;
