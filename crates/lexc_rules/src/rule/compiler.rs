//! Rule compiler - expands category references into concrete rules.
//!
//! A rule mentioning categories `C` (3 items) and `V` (5 items) in its pattern
//! expands into 15 compiled rules, one per combination. The first symbol to
//! appear in the pattern is the outermost (slowest varying) dimension.
//!
//! Category symbols that appear only in the substitution are resolved by
//! position: the category at the same char offset in the pattern decides
//! which item index is used.

use tracing::{debug, warn};

use crate::category::CategoryTable;
use crate::rule::{CompiledRule, RawRule};
use crate::ruleset::CompiledRuleSet;

// =============================================================================
// Expansion Plan
// =============================================================================

/// Per-rule bookkeeping built once before combinations are enumerated.
struct ExpansionPlan {
    /// Pattern chars.
    pattern: Vec<char>,
    /// Substitution chars.
    substitution: Vec<char>,
    /// Distinct category symbols of the pattern, in first-occurrence order.
    symbols: Vec<char>,
    /// For each pattern offset, the slot in `symbols` it refers to.
    slots: Vec<Option<usize>>,
}

impl ExpansionPlan {
    fn new(rule: &RawRule, categories: &CategoryTable) -> Self {
        let pattern: Vec<char> = rule.pattern.chars().collect();
        let substitution: Vec<char> = rule.substitution.chars().collect();

        let mut symbols: Vec<char> = Vec::new();
        for &c in &pattern {
            if categories.contains(c) && !symbols.contains(&c) {
                symbols.push(c);
            }
        }

        let slots = pattern
            .iter()
            .map(|c| symbols.iter().position(|s| s == c))
            .collect();

        Self {
            pattern,
            substitution,
            symbols,
            slots,
        }
    }

    fn slot_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Every combination of item indices, first symbol outermost.
    fn combinations(&self, categories: &CategoryTable) -> Vec<Vec<usize>> {
        self.symbols
            .iter()
            .fold(vec![Vec::new()], |combos, &symbol| {
                let count = categories.get(symbol).map_or(0, <[String]>::len);
                combos
                    .iter()
                    .flat_map(|combo| {
                        (0..count).map(move |item| {
                            let mut next = combo.clone();
                            next.push(item);
                            next
                        })
                    })
                    .collect()
            })
    }

    fn instantiate(&self, combo: &[usize], categories: &CategoryTable) -> CompiledRule {
        let chosen: Vec<&str> = self
            .symbols
            .iter()
            .zip(combo)
            .map(|(&symbol, &item)| {
                categories
                    .get(symbol)
                    .and_then(|items| items.get(item))
                    .map_or("", String::as_str)
            })
            .collect();

        let mut pattern = String::new();
        for (&c, slot) in self.pattern.iter().zip(&self.slots) {
            match slot {
                Some(slot) => pattern.push_str(chosen[*slot]),
                None => pattern.push(c),
            }
        }

        let mut substitution = String::new();
        for (offset, &c) in self.substitution.iter().enumerate() {
            if let Some(slot) = self.slot_of(c) {
                substitution.push_str(chosen[slot]);
            } else if let Some(items) = categories.get(c) {
                // Substitution-only category: borrow the item index chosen for
                // the pattern category at the same offset.
                match self.slots.get(offset).copied().flatten() {
                    Some(slot) => {
                        if let Some(item) = items.get(combo[slot]) {
                            substitution.push_str(item);
                        }
                    }
                    None => substitution.push(c),
                }
            } else {
                substitution.push(c);
            }
        }

        CompiledRule::new(pattern, substitution)
    }
}

// =============================================================================
// Rule Compiler
// =============================================================================

/// Expands authored rules into a [`CompiledRuleSet`].
pub struct RuleCompiler;

impl RuleCompiler {
    /// Expands a single rule into its concrete combinations.
    ///
    /// A rule without category symbols yields itself. A rule whose pattern
    /// mentions a category with no items yields nothing.
    #[must_use]
    pub fn expand(rule: &RawRule, categories: &CategoryTable) -> Vec<CompiledRule> {
        let plan = ExpansionPlan::new(rule, categories);
        plan.combinations(categories)
            .iter()
            .map(|combo| plan.instantiate(combo, categories))
            .collect()
    }

    /// Compiles every rule and buckets the results by pattern length.
    ///
    /// Later rules overwrite earlier rules with the same concrete pattern.
    /// Rules whose concrete pattern is empty are skipped.
    #[must_use]
    pub fn compile(rules: &[RawRule], categories: &CategoryTable) -> CompiledRuleSet {
        let mut set = CompiledRuleSet::new();

        for rule in rules {
            let expanded = Self::expand(rule, categories);
            if expanded.is_empty() {
                debug!(rule = %rule, "rule expanded to no combinations");
            }
            for compiled in expanded {
                if compiled.is_empty() {
                    warn!(rule = %rule, "skipping rule with empty pattern");
                    continue;
                }
                set.insert(compiled);
            }
        }

        debug!(
            raw = rules.len(),
            compiled = set.len(),
            lengths = set.lengths().count(),
            "compiled rule set"
        );
        set
    }
}

// =============================================================================
// Tests
// =============================================================================
