//! Integration tests for Layer 1: Phonotactics
//!
//! Tests for inventories, word generation, and word completion.

mod completion;
mod generation;
