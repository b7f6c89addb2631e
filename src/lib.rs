//! Lexc - Pronunciation rules and phonotactic word generation for constructed languages
//!
//! This crate re-exports all layers of the Lexc system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: lexc_runtime      - Language documents, sessions, REPL, CLI
//! Layer 1: lexc_rules        - Category expansion, longest-match transduction
//!          lexc_phonotactics - Word generation and completion
//! Layer 0: lexc_foundation   - Reserved symbols, inventories, errors
//! ```

pub use lexc_foundation as foundation;
pub use lexc_phonotactics as phonotactics;
pub use lexc_rules as rules;
pub use lexc_runtime as runtime;
