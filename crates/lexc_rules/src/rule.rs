//! Pronunciation rules.
//!
//! Authors write [`RawRule`]s that may mention category symbols; the
//! [`RuleCompiler`] expands them into category-free [`CompiledRule`]s.

pub mod compiler;

pub use compiler::RuleCompiler;

use std::fmt;

// =============================================================================
// Raw Rule
// =============================================================================

/// An authored rule, possibly parameterized by category symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRule {
    /// Text to match. May contain category symbols and wildcards.
    pub pattern: String,
    /// Replacement text. May contain category symbols, wildcards, and the null symbol.
    pub substitution: String,
}

impl RawRule {
    /// Creates a new raw rule.
    #[must_use]
    pub fn new(pattern: impl Into<String>, substitution: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            substitution: substitution.into(),
        }
    }
}

impl fmt::Display for RawRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.pattern, self.substitution)
    }
}

// =============================================================================
// Compiled Rule
// =============================================================================

/// A concrete, category-free rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRule {
    /// Literal text to match; may still contain wildcards.
    pub pattern: String,
    /// Replacement text.
    pub substitution: String,
}

impl CompiledRule {
    /// Creates a new compiled rule.
    #[must_use]
    pub fn new(pattern: impl Into<String>, substitution: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            substitution: substitution.into(),
        }
    }

    /// Pattern length in chars, the key of its bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    /// Returns true if the pattern is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

impl fmt::Display for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.pattern, self.substitution)
    }
}
