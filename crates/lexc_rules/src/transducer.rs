//! Longest-match transducer.
//!
//! Converts orthographic text into its transcription in a single left-to-right
//! pass:
//!
//! ```text
//! "The hat"
//!     │  normalize: whitespace -> boundary, wrap in boundaries
//!     ▼
//! "^The^hat^"
//!     │  lowercase (unless case sensitive)
//!     ▼
//! "^the^hat^"
//!     │  at each position try buckets longest first; replace and skip past
//!     ▼
//! "^ðə^hæt^"
//!     │  boundaries -> spaces, trim, drop null symbols
//!     ▼
//! "ðə hæt"
//! ```
//!
//! Substituted text is never rescanned in the same pass.

use lexc_foundation::{BOUNDARY, NULL};

use crate::pattern;
use crate::ruleset::CompiledRuleSet;

/// Applies a compiled rule set to words.
#[derive(Clone, Copy, Debug)]
pub struct Transducer<'a> {
    rules: &'a CompiledRuleSet,
    case_sensitive: bool,
}

impl<'a> Transducer<'a> {
    /// Creates a transducer over `rules`.
    #[must_use]
    pub fn new(rules: &'a CompiledRuleSet, case_sensitive: bool) -> Self {
        Self {
            rules,
            case_sensitive,
        }
    }

    /// Returns the rule set.
    #[must_use]
    pub fn rules(&self) -> &'a CompiledRuleSet {
        self.rules
    }

    /// Returns true if input case is preserved before matching.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Transcribes a word or phrase.
    #[must_use]
    pub fn transcribe(&self, word: &str) -> String {
        let normalized = normalize(word);
        let prepared = if self.case_sensitive {
            normalized
        } else {
            normalized.to_lowercase()
        };

        let mut chars: Vec<char> = prepared.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            i += self.rewrite_at(&mut chars, i);
        }

        finish(&chars)
    }

    /// Tries every bucket at position `i`, longest first, and applies the
    /// first length that matches. Returns how far the scan should advance.
    fn rewrite_at(&self, chars: &mut Vec<char>, i: usize) -> usize {
        for length in self.rules.lengths() {
            let Some(window) = chars.get(i..i + length) else {
                continue;
            };
            let Some(entry) = self
                .rules
                .bucket(length)
                .and_then(|bucket| bucket.find(window))
            else {
                continue;
            };

            let replacement = pattern::echo(entry.substitution_chars(), window);
            let advance = replacement.len();
            chars.splice(i..i + length, replacement);
            return advance;
        }
        1
    }
}

/// Transcribes `word` with `rules`.
#[must_use]
pub fn transcribe(word: &str, rules: &CompiledRuleSet, case_sensitive: bool) -> String {
    Transducer::new(rules, case_sensitive).transcribe(word)
}

/// Marks word boundaries.
///
/// Every whitespace char becomes a boundary marker (a newline is kept after
/// its marker) and the whole text is wrapped in one more marker on each side.
#[must_use]
pub fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 2);
    out.push(BOUNDARY);
    for c in word.chars() {
        if c == '\n' {
            out.push(BOUNDARY);
            out.push('\n');
        } else if c.is_whitespace() {
            out.push(BOUNDARY);
        } else {
            out.push(c);
        }
    }
    out.push(BOUNDARY);
    out
}

/// Turns boundaries back into spaces, trims, and removes null symbols.
fn finish(chars: &[char]) -> String {
    let spaced: String = chars
        .iter()
        .map(|&c| if c == BOUNDARY { ' ' } else { c })
        .collect();
    spaced.trim().chars().filter(|&c| c != NULL).collect()
}
