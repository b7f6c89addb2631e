//! Compiled rule sets.
//!
//! Rules are bucketed by pattern length (in chars). The transducer tries
//! buckets from the longest length down, so longer patterns always win over
//! shorter ones at the same position.

use std::collections::{BTreeMap, HashMap};

use crate::pattern;
use crate::rule::CompiledRule;

// =============================================================================
// Bucket Entry
// =============================================================================

/// One concrete rule inside a bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketEntry {
    pattern: String,
    pattern_chars: Vec<char>,
    substitution: String,
    substitution_chars: Vec<char>,
}

impl BucketEntry {
    fn new(rule: CompiledRule) -> Self {
        Self {
            pattern_chars: rule.pattern.chars().collect(),
            substitution_chars: rule.substitution.chars().collect(),
            substitution: rule.substitution,
            pattern: rule.pattern,
        }
    }

    /// The pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern as chars.
    #[must_use]
    pub fn pattern_chars(&self) -> &[char] {
        &self.pattern_chars
    }

    /// The substitution as chars, wildcards unresolved.
    #[must_use]
    pub fn substitution_chars(&self) -> &[char] {
        &self.substitution_chars
    }

    /// The substitution text, wildcards unresolved.
    #[must_use]
    pub fn substitution(&self) -> &str {
        &self.substitution
    }
}

// =============================================================================
// Rule Bucket
// =============================================================================

/// All rules sharing one pattern length, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct RuleBucket {
    entries: Vec<BucketEntry>,
    /// Pattern text -> position in `entries`.
    index: HashMap<String, usize>,
    /// Positions of entries whose pattern contains a wildcard.
    wildcards: Vec<usize>,
}

impl RuleBucket {
    /// Inserts a rule. A rule with an existing pattern replaces the earlier
    /// substitution and keeps the earlier position.
    fn insert(&mut self, rule: CompiledRule) {
        if let Some(&position) = self.index.get(&rule.pattern) {
            self.entries[position] = BucketEntry::new(rule);
            return;
        }

        let position = self.entries.len();
        let entry = BucketEntry::new(rule);
        if pattern::has_wildcard(&entry.pattern_chars) {
            self.wildcards.push(position);
        }
        self.index.insert(entry.pattern.clone(), position);
        self.entries.push(entry);
    }

    /// Finds the rule matching `window`.
    ///
    /// Candidates are the rule whose pattern equals the window and every
    /// wildcard rule that matches it. When several match, the one inserted
    /// last wins.
    #[must_use]
    pub fn find(&self, window: &[char]) -> Option<&BucketEntry> {
        let key: String = window.iter().collect();
        let exact = self.index.get(&key).copied();

        let wildcard = self
            .wildcards
            .iter()
            .rev()
            .copied()
            .find(|&position| pattern::matches(&self.entries[position].pattern_chars, window));

        exact.max(wildcard).map(|position| &self.entries[position])
    }

    /// Number of rules in the bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bucket holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BucketEntry> {
        self.entries.iter()
    }
}

// =============================================================================
// Compiled Rule Set
// =============================================================================

/// Concrete rules bucketed by pattern length.
#[derive(Clone, Debug, Default)]
pub struct CompiledRuleSet {
    buckets: BTreeMap<usize, RuleBucket>,
}

impl CompiledRuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Inserts a rule into the bucket for its pattern length.
    ///
    /// Rules with an empty pattern are ignored; they could never advance a scan.
    pub fn insert(&mut self, rule: CompiledRule) {
        let length = rule.len();
        if length == 0 {
            return;
        }
        self.buckets.entry(length).or_default().insert(rule);
    }

    /// Distinct pattern lengths, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().rev().copied()
    }

    /// The bucket for a pattern length.
    #[must_use]
    pub fn bucket(&self, length: usize) -> Option<&RuleBucket> {
        self.buckets.get(&length)
    }

    /// Looks up the substitution of an exact pattern.
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&str> {
        let bucket = self.buckets.get(&pattern.chars().count())?;
        let position = *bucket.index.get(pattern)?;
        Some(bucket.entries[position].substitution())
    }

    /// Total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(RuleBucket::len).sum()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over all rules, longest bucket first, insertion order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &BucketEntry> {
        self.buckets.values().rev().flat_map(RuleBucket::iter)
    }
}

impl FromIterator<CompiledRule> for CompiledRuleSet {
    fn from_iter<I: IntoIterator<Item = CompiledRule>>(iter: I) -> Self {
        let mut set = Self::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl Extend<CompiledRule> for CompiledRuleSet {
    fn extend<I: IntoIterator<Item = CompiledRule>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}
