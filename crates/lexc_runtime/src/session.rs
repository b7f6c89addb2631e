//! Session state.
//!
//! A [`Session`] owns a language document, a compiled rule set per lect and
//! the random source handed to the sampler. Rule sets are compiled when the
//! document is installed and whenever a lect's rule text changes, so
//! transcription never recompiles.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lexc_foundation::{Error, ErrorContext, PhonotacticInventory, Result};
use lexc_phonotactics::{SamplerRng, complete_word, entropy_rng, generate_word, seeded_rng};
use lexc_rules::{CompiledRuleSet, RuleSource, Transducer};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::document::{EntryPronunciations, Language, Pronunciation, Word};

/// Session state for transcription and word generation.
pub struct Session {
    /// The language being edited.
    language: Language,

    /// Compiled rules per lect.
    compiled: HashMap<String, CompiledRuleSet>,

    /// Random source for the sampler.
    rng: SamplerRng,

    /// Case-sensitivity override; `None` defers to the document.
    case_sensitive: Option<bool>,

    /// File the document was last loaded from or saved to.
    path: Option<PathBuf>,
}

impl Session {
    /// Creates a session over an empty language.
    #[must_use]
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    /// Creates a session over `language`, seeding the sampler from entropy.
    #[must_use]
    pub fn with_language(language: Language) -> Self {
        let mut session = Self {
            language,
            compiled: HashMap::new(),
            rng: entropy_rng(),
            case_sensitive: None,
            path: None,
        };
        session.compile_all();
        session
    }

    /// Creates a session over `language` configured by `config`.
    #[must_use]
    pub fn from_config(language: Language, config: &RuntimeConfig) -> Self {
        let mut session = Self::with_language(language);
        if let Some(seed) = config.seed {
            session.reseed(seed);
        }
        session.case_sensitive = config.case_sensitive;
        session
    }

    /// Builder method to seed the sampler.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Reseeds the sampler.
    pub fn reseed(&mut self, seed: u64) {
        debug!(seed, "reseeding sampler");
        self.rng = seeded_rng(seed);
    }

    /// Returns the language document.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Consumes the session, returning the document.
    #[must_use]
    pub fn into_language(self) -> Language {
        self.language
    }

    /// Replaces the document and recompiles every lect.
    pub fn replace_language(&mut self, language: Language) {
        self.language = language;
        self.compile_all();
    }

    /// Returns the file the document came from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Records the file the document belongs to.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Whether transcription distinguishes letter case.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
            .unwrap_or(self.language.case_sensitive)
    }

    /// Overrides the document's case sensitivity. `None` restores it.
    pub fn set_case_sensitive(&mut self, case_sensitive: Option<bool>) {
        self.case_sensitive = case_sensitive;
    }

    /// Returns the compiled rules of `lect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn rules(&self, lect: &str) -> Result<&CompiledRuleSet> {
        self.language.require_lect(lect)?;
        Ok(self.compiled.get(lect).unwrap_or(&EMPTY_RULES))
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Transcribes `text` with the rules of `lect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn transcribe(&self, text: &str, lect: &str) -> Result<String> {
        let rules = self.rules(lect)?;
        Ok(Transducer::new(rules, self.is_case_sensitive()).transcribe(text))
    }

    /// Generates a word from the phonotactics of `lect`.
    ///
    /// `Ok(None)` means every attempt produced an illegal sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined or has no vowels.
    pub fn generate_word(&mut self, lect: &str) -> Result<Option<String>> {
        let inventory = self.language.inventory(lect)?;
        generate_word(inventory, &mut self.rng).map_err(|e| in_lect(e, lect))
    }

    /// Completes `trial` using the phonotactics of `lect`.
    ///
    /// `Ok(None)` means the completion produced an illegal sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined or has no vowels.
    pub fn complete_word(&mut self, trial: &str, lect: &str) -> Result<Option<String>> {
        let inventory = self.language.inventory(lect)?;
        complete_word(trial, inventory, &mut self.rng).map_err(|e| in_lect(e, lect))
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Adds a lect with empty rules and inventory.
    pub fn add_lect(&mut self, lect: &str) -> bool {
        let added = self.language.add_lect(lect);
        if added {
            self.compiled.insert(lect.to_string(), CompiledRuleSet::new());
        }
        added
    }

    /// Replaces the phonotactic inventory of `lect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn set_inventory(&mut self, lect: &str, inventory: PhonotacticInventory) -> Result<()> {
        self.language.set_inventory(lect, inventory)
    }

    /// Replaces the rule text of `lect`, recompiles it and re-transcribes
    /// the lect's regular pronunciations.
    ///
    /// Returns the number of pronunciations updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn set_rules(&mut self, lect: &str, text: impl Into<String>) -> Result<usize> {
        self.language.require_lect(lect)?;
        self.language
            .pronunciations
            .insert(lect.to_string(), text.into());
        self.compile(lect);
        self.retranscribe(lect)
    }

    /// Appends one line to the rule text of `lect`. See [`Self::set_rules`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn append_rule(&mut self, lect: &str, line: &str) -> Result<usize> {
        let mut text = self.language.rule_text(lect)?.to_string();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(line);
        self.set_rules(lect, text)
    }

    /// Adds `word` to the lexicon with a regular pronunciation in every lect.
    /// An existing entry keeps its senses and irregular pronunciations.
    ///
    /// # Errors
    ///
    /// Returns an error if transcription fails.
    pub fn add_word(&mut self, word: &str) -> Result<&Word> {
        let mut pronunciations = EntryPronunciations::new();
        for lect in &self.language.lects {
            pronunciations.insert(
                lect.clone(),
                Pronunciation::regular(self.transcribe(word, lect)?),
            );
        }

        let entry = self.language.lexicon.entry(word.to_string()).or_default();
        for (lect, pronunciation) in pronunciations {
            let slot = entry.pronunciations.entry(lect).or_default();
            if !slot.irregular {
                *slot = pronunciation;
            }
        }
        Ok(entry)
    }

    /// Re-transcribes every regular pronunciation of `lect` in the lexicon
    /// and phrasebook. Returns the number updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the lect is not defined.
    pub fn retranscribe(&mut self, lect: &str) -> Result<usize> {
        self.language.require_lect(lect)?;
        let rules = self.compiled.get(lect).unwrap_or(&EMPTY_RULES);
        let case_sensitive = self
            .case_sensitive
            .unwrap_or(self.language.case_sensitive);
        let transducer = Transducer::new(rules, case_sensitive);

        let mut updated = 0;
        for (text, word) in &mut self.language.lexicon {
            updated += refresh(&mut word.pronunciations, text, lect, &transducer);
        }
        for phrase_category in self.language.phrasebook.values_mut() {
            for (text, phrase) in phrase_category {
                updated += refresh(&mut phrase.pronunciations, text, lect, &transducer);
                for (variant_text, variant) in &mut phrase.variants {
                    updated += refresh(&mut variant.pronunciations, variant_text, lect, &transducer);
                }
            }
        }

        info!(lect, updated, "re-transcribed pronunciations");
        Ok(updated)
    }

    /// Re-transcribes every lect. Returns the total number updated.
    ///
    /// # Errors
    ///
    /// Returns an error if any lect fails.
    pub fn retranscribe_all(&mut self) -> Result<usize> {
        let lects = self.language.lects.clone();
        let mut total = 0;
        for lect in &lects {
            total += self.retranscribe(lect)?;
        }
        Ok(total)
    }

    fn compile_all(&mut self) {
        self.compiled.clear();
        let lects = self.language.lects.clone();
        for lect in &lects {
            self.compile(lect);
        }
    }

    fn compile(&mut self, lect: &str) {
        let text = self
            .language
            .pronunciations
            .get(lect)
            .map_or("", String::as_str);
        let rules = RuleSource::parse(text).compile();
        debug!(lect, rules = rules.len(), "compiled lect");
        self.compiled.insert(lect.to_string(), rules);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static EMPTY_RULES: CompiledRuleSet = CompiledRuleSet::new();

/// Updates the `lect` pronunciation of one entry unless it is irregular.
fn refresh(
    pronunciations: &mut EntryPronunciations,
    text: &str,
    lect: &str,
    transducer: &Transducer<'_>,
) -> usize {
    match pronunciations.get_mut(lect) {
        Some(pronunciation) if !pronunciation.irregular => {
            pronunciation.ipa = transducer.transcribe(text);
            1
        }
        _ => 0,
    }
}

fn in_lect(error: Error, lect: &str) -> Error {
    error.with_context(ErrorContext::new().with_lect(lect))
}
