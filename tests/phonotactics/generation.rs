//! Integration tests for word generation

use lexc_foundation::{ErrorKind, InventoryPart, PhonotacticInventory};
use lexc_phonotactics::{MAX_GENERATION_ATTEMPTS, PhonotacticSampler, generate_word, seeded_rng};
use rand::RngCore;

fn inventory(illegals: &str) -> PhonotacticInventory {
    PhonotacticInventory::from_delimited("p t k m n", "r l s", "n k", "a i u", illegals)
}

#[test]
fn generation_retries_rejected_candidates() {
    // One candidate in four opens with the illegal `^t`. A single attempt
    // per call would return None for about fifty of these two hundred calls.
    let inv = PhonotacticInventory::from_delimited("p t", "n", "", "a", "^t");
    let sampler = PhonotacticSampler::new(&inv).unwrap();
    let mut rng = seeded_rng(8);
    for _ in 0..200 {
        let word = sampler.generate_word(&mut rng).unwrap();
        assert!(!word.starts_with('t'), "{word}");
    }
}

#[test]
fn exhausted_generation_stops_near_the_attempt_bound() {
    // With `^` illegal every candidate is rejected. A candidate draws at
    // least five values (four coins and a vowel), and a choice among a few
    // graphemes rarely needs more than a handful, so the total brackets the
    // number of candidates built.
    let inv = inventory("^");
    let sampler = PhonotacticSampler::new(&inv).unwrap();

    let mut rng = CountingRng::new(seeded_rng(4));
    assert_eq!(sampler.generate_word(&mut rng), None);
    assert!(rng.draws >= 5 * MAX_GENERATION_ATTEMPTS, "{}", rng.draws);
    assert!(rng.draws <= 30 * MAX_GENERATION_ATTEMPTS, "{}", rng.draws);
}

/// Counts how many values the sampler pulls from the wrapped generator.
struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R> CountingRng<R> {
    fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

#[test]
fn words_use_inventory_graphemes() {
    let inv = inventory("");
    let mut rng = seeded_rng(2024);
    let allowed: Vec<char> = "ptkmnrlsaiu".chars().collect();
    for _ in 0..100 {
        let word = generate_word(&inv, &mut rng).unwrap().unwrap();
        assert!(word.chars().all(|c| allowed.contains(&c)), "{word}");
    }
}

#[test]
fn anchored_illegals_are_respected() {
    let inv = inventory("^n u^ rr");
    let sampler = PhonotacticSampler::new(&inv).unwrap();
    let mut rng = seeded_rng(99);
    for _ in 0..200 {
        let Some(word) = sampler.generate_word(&mut rng) else {
            continue;
        };
        assert!(!word.starts_with('n'), "{word}");
        assert!(!word.ends_with('u'), "{word}");
        assert!(!word.contains("rr"), "{word}");
    }
}

#[test]
fn impossible_inventory_yields_none() {
    // Every word contains a vowel, and every vowel is illegal.
    let inv = inventory("a i u");
    let mut rng = seeded_rng(1);
    assert_eq!(generate_word(&inv, &mut rng).unwrap(), None);
}

#[test]
fn missing_vowels_is_an_error() {
    let inv = PhonotacticInventory::from_delimited("p t", "s", "n", "", "");
    let mut rng = seeded_rng(1);
    let err = generate_word(&inv, &mut rng).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyInventory(InventoryPart::Vowels)
    ));
}

#[test]
fn same_seed_same_words() {
    let inv = inventory("");
    let words = |seed| {
        let mut rng = seeded_rng(seed);
        (0..10)
            .map(|_| generate_word(&inv, &mut rng).unwrap().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(words(5), words(5));
}
