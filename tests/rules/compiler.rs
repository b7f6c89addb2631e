//! Integration tests for category expansion
//!
//! Tests cardinality, positional correspondence, and overwrite order.

use lexc_foundation::ErrorKind;
use lexc_rules::{CategoryTable, CompiledRule, RawRule, RuleCompiler};

fn categories() -> CategoryTable {
    CategoryTable::new()
        .with('V', ["a", "e", "i"])
        .unwrap()
        .with('P', ["p", "t", "k"])
        .unwrap()
        .with('B', ["b", "d", "g"])
        .unwrap()
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn cardinality_is_product_of_distinct_categories() {
    let rule = RawRule::new("VPV", "VBV");
    let expanded = RuleCompiler::expand(&rule, &categories());
    // V appears twice but is one dimension.
    assert_eq!(expanded.len(), 9);
}

#[test]
fn repeated_symbol_takes_same_item() {
    let rule = RawRule::new("VPV", "VBV");
    let expanded = RuleCompiler::expand(&rule, &categories());
    assert!(expanded.contains(&CompiledRule::new("ata", "ada")));
    assert!(expanded.contains(&CompiledRule::new("iki", "igi")));
    assert!(!expanded.iter().any(|r| r.pattern == "ate"));
}

#[test]
fn first_symbol_varies_slowest() {
    let rule = RawRule::new("PV", "PV");
    let patterns: Vec<String> = RuleCompiler::expand(&rule, &categories())
        .into_iter()
        .map(|r| r.pattern)
        .collect();
    assert_eq!(
        patterns,
        vec!["pa", "pe", "pi", "ta", "te", "ti", "ka", "ke", "ki"]
    );
}

#[test]
fn rule_without_categories_is_unchanged() {
    let rule = RawRule::new("sh", "ʃ");
    assert_eq!(
        RuleCompiler::expand(&rule, &categories()),
        vec![CompiledRule::new("sh", "ʃ")]
    );
}

#[test]
fn empty_category_drops_rule() {
    let mut table = categories();
    table.define('X', Vec::<String>::new()).unwrap();
    let rule = RawRule::new("Xa", "a");
    assert!(RuleCompiler::expand(&rule, &table).is_empty());
}

#[test]
fn reserved_symbols_cannot_be_categories() {
    let mut table = CategoryTable::new();
    for symbol in ['^', '∅', '_'] {
        let err = table.define(symbol, ["a"]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ReservedSymbol(s) if s == symbol));
    }
    assert!(table.is_empty());
}

// =============================================================================
// Compilation
// =============================================================================

#[test]
fn later_rule_overwrites_earlier() {
    let rules = [RawRule::new("Pa", "Pə"), RawRule::new("ta", "tʰa")];
    let set = RuleCompiler::compile(&rules, &categories());
    assert_eq!(set.len(), 3);
    assert_eq!(set.get("pa"), Some("pə"));
    assert_eq!(set.get("ta"), Some("tʰa"));
}

#[test]
fn lengths_are_longest_first() {
    let rules = [
        RawRule::new("a", "ə"),
        RawRule::new("tsh", "tʃ"),
        RawRule::new("sh", "ʃ"),
    ];
    let set = RuleCompiler::compile(&rules, &CategoryTable::new());
    assert_eq!(set.lengths().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn empty_pattern_is_skipped() {
    let rules = [RawRule::new("", "x"), RawRule::new("a", "b")];
    let set = RuleCompiler::compile(&rules, &CategoryTable::new());
    assert_eq!(set.len(), 1);
}
