//! Integration tests for Layer 1: Rules
//!
//! Tests for category expansion, the compiled rule set, the transducer, and
//! the rule text front end.

mod compiler;
mod source;
mod transducer;
