//! Rule text front end.
//!
//! Parses the author-facing rule format:
//!
//! ```text
//! V :: a, e, i, o, u     category definition
//! P :: p, t, k
//! B :: b, d, g
//! VPV > VBV              rule
//! x > ∅                  deletion
//! ```
//!
//! All whitespace inside a line is ignored. Lines that are neither category
//! definitions nor rules are skipped. The format is expected to change, so
//! nothing here is load-bearing for the compiler or transducer.

use tracing::warn;

use crate::category::CategoryTable;
use crate::rule::{RawRule, RuleCompiler};
use crate::ruleset::CompiledRuleSet;

/// Separator between a category symbol and its items.
pub const CATEGORY_SEPARATOR: &str = "::";

/// Separator between category items.
pub const ITEM_SEPARATOR: char = ',';

/// Separator between a pattern and its substitution.
pub const RULE_SEPARATOR: char = '>';

/// Categories and rules parsed from rule text.
#[derive(Clone, Debug, Default)]
pub struct RuleSource {
    /// Category definitions. Later definitions replace earlier ones.
    pub categories: CategoryTable,
    /// Rules in source order.
    pub rules: Vec<RawRule>,
}

impl RuleSource {
    /// Parses rule text. Malformed lines are skipped with a warning.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut source = Self::default();

        for (number, line) in text.lines().enumerate() {
            let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();

            if line.contains(CATEGORY_SEPARATOR) {
                source.parse_category(&line, number + 1);
            }
            if line.contains(RULE_SEPARATOR) {
                let mut parts = line.split(RULE_SEPARATOR);
                let pattern = parts.next().unwrap_or_default();
                let substitution = parts.next().unwrap_or_default();
                source.rules.push(RawRule::new(pattern, substitution));
            }
        }

        source
    }

    fn parse_category(&mut self, line: &str, number: usize) {
        let mut parts = line.split(CATEGORY_SEPARATOR);
        let symbol = parts.next().unwrap_or_default();
        let items = parts.next().unwrap_or_default();

        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            warn!(line = number, symbol, "category symbol must be a single char");
            return;
        };

        if let Err(err) = self.categories.define(symbol, items.split(ITEM_SEPARATOR)) {
            warn!(line = number, %err, "skipping category");
        }
    }

    /// Compiles the parsed rules against the parsed categories.
    #[must_use]
    pub fn compile(&self) -> CompiledRuleSet {
        RuleCompiler::compile(&self.rules, &self.categories)
    }
}

/// Parses and compiles rule text in one step.
#[must_use]
pub fn compile_text(text: &str) -> CompiledRuleSet {
    RuleSource::parse(text).compile()
}
