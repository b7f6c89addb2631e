//! Integration tests for the transducer
//!
//! Tests leftmost-longest matching, boundaries, wildcards, deletion, and
//! whitespace handling.

use lexc_rules::source::compile_text;
use lexc_rules::{CompiledRuleSet, Transducer, normalize, transcribe};

fn rules(text: &str) -> CompiledRuleSet {
    compile_text(text)
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn longest_match_wins() {
    let rules = rules("s > z\nsh > ʃ");
    assert_eq!(transcribe("shas", &rules, false), "ʃaz");
}

#[test]
fn output_is_not_rescanned() {
    let rules = rules("a > b\nb > c");
    assert_eq!(transcribe("ab", &rules, false), "bc");
}

#[test]
fn unmatched_text_passes_through() {
    let rules = rules("sh > ʃ");
    assert_eq!(transcribe("xyz", &rules, false), "xyz");
}

#[test]
fn empty_rule_set_is_identity() {
    let rules = CompiledRuleSet::new();
    assert_eq!(transcribe("kethic tongue", &rules, false), "kethic tongue");
}

#[test]
fn category_rule_applies_in_context() {
    let rules = rules("V :: a, e\nP :: p, t\nB :: b, d\nVPV > VBV");
    assert_eq!(transcribe("apa", &rules, false), "aba");
    assert_eq!(transcribe("ate", &rules, false), "ate");
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn initial_boundary_anchor() {
    let rules = rules("^k > ^g");
    assert_eq!(transcribe("kak", &rules, false), "gak");
}

#[test]
fn final_boundary_anchor_in_phrase() {
    let rules = rules("k^ > x^");
    assert_eq!(transcribe("kak tak", &rules, false), "kax tax");
}

#[test]
fn normalize_marks_every_whitespace() {
    assert_eq!(normalize("ka ta"), "^ka^ta^");
    assert_eq!(normalize("ka\nta"), "^ka^\nta^");
    assert_eq!(normalize(""), "^^");
}

#[test]
fn phrase_spacing_is_kept() {
    let rules = rules("sh > ʃ");
    assert_eq!(transcribe("sha\tsha", &rules, false), "ʃa ʃa");
    assert_eq!(transcribe("  sha  ", &rules, false), "ʃa");
}

// =============================================================================
// Wildcards and deletion
// =============================================================================

#[test]
fn wildcard_echoes_window() {
    let rules = rules("k_ > g_");
    assert_eq!(transcribe("kot", &rules, false), "got");
}

#[test]
fn wildcard_does_not_cross_boundary() {
    let rules = rules("a_ > e_");
    assert_eq!(transcribe("ka", &rules, false), "ka");
}

#[test]
fn null_symbol_deletes() {
    let rules = rules("h > ∅");
    assert_eq!(transcribe("aha", &rules, false), "aa");
}

// =============================================================================
// Case
// =============================================================================

#[test]
fn case_insensitive_lowercases_input() {
    let rules = rules("sh > ʃ");
    let transducer = Transducer::new(&rules, false);
    assert_eq!(transducer.transcribe("SHA"), "ʃa");
}

#[test]
fn case_sensitive_keeps_input() {
    let rules = rules("Sh > ʃ");
    let transducer = Transducer::new(&rules, true);
    assert!(transducer.is_case_sensitive());
    assert_eq!(transducer.transcribe("Sha sha"), "ʃa sha");
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn empty_rules_are_identity(word in "[a-z]{1,12}( [a-z]{1,12}){0,3}") {
            let rules = CompiledRuleSet::new();
            prop_assert_eq!(transcribe(&word, &rules, false), word);
        }

        #[test]
        fn deletion_removes_every_occurrence(word in "[ah]{0,16}") {
            let rules = rules("h > ∅");
            let expected: String = word.chars().filter(|&c| c != 'h').collect();
            prop_assert_eq!(transcribe(&word, &rules, false), expected);
        }
    }
}
