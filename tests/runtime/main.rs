//! Integration tests for Layer 2: Runtime
//!
//! Tests for language documents, serialization, and sessions.

mod documents;
