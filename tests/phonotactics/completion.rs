//! Integration tests for word completion

use lexc_foundation::PhonotacticInventory;
use lexc_phonotactics::{complete_word, seeded_rng};

fn inventory() -> PhonotacticInventory {
    PhonotacticInventory::new()
        .with_onsets(["p", "t"])
        .with_medials(["n", "r"])
        .with_codas(["s"])
        .with_vowels(["a", "o"])
}

#[test]
fn completion_extends_trial() {
    let inv = inventory();
    let mut rng = seeded_rng(8);
    for _ in 0..50 {
        let word = complete_word("to", &inv, &mut rng).unwrap().unwrap();
        assert!(word.starts_with("to"));
        assert!(word.chars().count() > 2, "{word}");
    }
}

#[test]
fn empty_trial_starts_with_vowel() {
    let inv = inventory();
    let mut rng = seeded_rng(13);
    for _ in 0..50 {
        let word = complete_word("", &inv, &mut rng).unwrap().unwrap();
        assert!(word.starts_with('a') || word.starts_with('o'), "{word}");
    }
}

#[test]
fn illegal_trial_always_fails() {
    let inv = inventory().with_illegals(["^pt"]);
    let mut rng = seeded_rng(21);
    for _ in 0..20 {
        assert_eq!(complete_word("pt", &inv, &mut rng).unwrap(), None);
    }
}

#[test]
fn completion_needs_vowels() {
    let inv = PhonotacticInventory::new().with_onsets(["p"]);
    let mut rng = seeded_rng(21);
    assert!(complete_word("pa", &inv, &mut rng).is_err());
}
