//! Phonotactic sampling.
//!
//! Words are assembled from syllable parts between boundary markers so that
//! illegal sequences can be anchored to the start or end of a word (`^ŋ`
//! forbids an initial ŋ). A candidate containing any illegal sequence is
//! rejected.
//!
//! Generation retries up to [`MAX_GENERATION_ATTEMPTS`] times. Completion
//! makes a single attempt and leaves retrying to the caller.

use lexc_foundation::{BOUNDARY, PhonotacticInventory, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

/// Upper bound on generation attempts before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 50;

/// Samples words from a validated inventory.
#[derive(Clone, Copy, Debug)]
pub struct PhonotacticSampler<'a> {
    inventory: &'a PhonotacticInventory,
}

impl<'a> PhonotacticSampler<'a> {
    /// Creates a sampler over `inventory`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyInventory`](lexc_foundation::ErrorKind::EmptyInventory)
    /// if the inventory has no vowels.
    pub fn new(inventory: &'a PhonotacticInventory) -> Result<Self> {
        inventory.validate()?;
        Ok(Self { inventory })
    }

    /// Returns the inventory being sampled.
    #[must_use]
    pub fn inventory(&self) -> &'a PhonotacticInventory {
        self.inventory
    }

    /// Generates a random legal word.
    ///
    /// Returns `None` if every one of the [`MAX_GENERATION_ATTEMPTS`]
    /// candidates contained an illegal sequence.
    pub fn generate_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        first_legal(MAX_GENERATION_ATTEMPTS, || self.generate_candidate(rng))
    }

    /// One generation attempt.
    fn generate_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let inv = self.inventory;
        let mut word = Candidate::new("");

        // A word that is a lone vowel so far always takes a medial and a
        // second vowel. Any single vowel counts, whatever its length, so
        // `aː` on its own is forced on just like `a`.
        let mut lone_vowel = if coin(rng) {
            word.push(choose(&inv.vowels, rng));
            true
        } else {
            let onset = choose(&inv.onsets, rng);
            word.push(onset);
            word.push(choose(&inv.vowels, rng));
            onset.is_empty()
        };

        for _ in 0..2 {
            if coin(rng) || lone_vowel {
                word.push(choose(&inv.medials, rng));
                word.push(choose(&inv.vowels, rng));
                lone_vowel = false;
            }
        }

        if coin(rng) {
            word.push(choose(&inv.codas, rng));
        }

        word.finalize(inv)
    }

    /// Extends a partial word into a complete one.
    ///
    /// A trial ending in a vowel takes either a medial and vowel (and then a
    /// generic ending) or a coda. Otherwise a vowel is added and the word is
    /// either finished, with an optional coda, or given a generic ending.
    ///
    /// Returns `None` if the result contains an illegal sequence.
    pub fn complete_word<R: Rng + ?Sized>(&self, trial: &str, rng: &mut R) -> Option<String> {
        let inv = self.inventory;
        let mut word = Candidate::new(trial);

        let ends_in_vowel = inv.vowels.iter().any(|v| word.ends_with(v));
        if ends_in_vowel {
            if coin(rng) {
                word.push(choose(&inv.medials, rng));
                word.push(choose(&inv.vowels, rng));
            } else {
                word.push(choose(&inv.codas, rng));
                return word.finalize(inv);
            }
        } else {
            word.push(choose(&inv.vowels, rng));
            if coin(rng) {
                if coin(rng) {
                    word.push(choose(&inv.codas, rng));
                }
                return word.finalize(inv);
            }
        }

        // Generic ending: coda, medial + vowel, or medial + vowel + coda.
        if coin(rng) {
            word.push(choose(&inv.codas, rng));
        } else {
            word.push(choose(&inv.medials, rng));
            word.push(choose(&inv.vowels, rng));
            if coin(rng) {
                word.push(choose(&inv.codas, rng));
            }
        }

        word.finalize(inv)
    }
}

/// Generates a random legal word from `inventory`.
///
/// # Errors
/// Returns an error if the inventory has no vowels.
pub fn generate_word<R: Rng + ?Sized>(
    inventory: &PhonotacticInventory,
    rng: &mut R,
) -> Result<Option<String>> {
    Ok(PhonotacticSampler::new(inventory)?.generate_word(rng))
}

/// Completes `trial` using `inventory`.
///
/// # Errors
/// Returns an error if the inventory has no vowels.
pub fn complete_word<R: Rng + ?Sized>(
    trial: &str,
    inventory: &PhonotacticInventory,
    rng: &mut R,
) -> Result<Option<String>> {
    Ok(PhonotacticSampler::new(inventory)?.complete_word(trial, rng))
}

// =============================================================================
// Candidate
// =============================================================================

/// A word under construction, opened with a boundary marker.
struct Candidate {
    text: String,
}

impl Candidate {
    fn new(trial: &str) -> Self {
        let mut text = String::with_capacity(trial.len() + 16);
        text.push(BOUNDARY);
        text.push_str(trial);
        Self { text }
    }

    fn push(&mut self, part: &str) {
        self.text.push_str(part);
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    /// Closes the word and checks it against the illegal sequences.
    fn finalize(mut self, inventory: &PhonotacticInventory) -> Option<String> {
        self.text.push(BOUNDARY);
        if inventory.contains_illegal(&self.text) {
            trace!(candidate = %self.text, "rejected illegal candidate");
            return None;
        }
        Some(self.text.chars().filter(|&c| c != BOUNDARY).collect())
    }
}

/// Calls `candidate` until it yields a word, at most `attempts` times.
fn first_legal(attempts: usize, mut candidate: impl FnMut() -> Option<String>) -> Option<String> {
    for attempt in 1..=attempts {
        if let Some(word) = candidate() {
            trace!(attempt, %word, "generated word");
            return Some(word);
        }
    }
    debug!(attempts, "no legal word could be generated");
    None
}

fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Picks a random entry; an empty list contributes nothing.
fn choose<'i, R: Rng + ?Sized>(items: &'i [String], rng: &mut R) -> &'i str {
    items.choose(rng).map_or("", String::as_str)
}

// =============================================================================
// Tests
// =============================================================================
