//! The language document.
//!
//! A [`Language`] holds everything the runtime needs about one constructed
//! language: its lects, the rule text and phonotactic inventory of each lect,
//! a lexicon and a phrasebook. The field names follow the saved file format.
//! Top-level keys this crate does not model (`Alphabet`, `Docs`, ...) are
//! kept in [`Language::extra`] and written back unchanged.

use std::collections::BTreeMap;

use lexc_foundation::{Error, ErrorContext, GENERAL_LECT, PhonotacticInventory, Result};
use serde::{Deserialize, Serialize};

/// Pronunciations of one entry, keyed by lect.
pub type EntryPronunciations = BTreeMap<String, Pronunciation>;

/// Phrases of one phrasebook category, keyed by phrase text.
pub type PhraseCategory = BTreeMap<String, Phrase>;

/// A constructed language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Language {
    /// Display name.
    pub name: String,
    /// Version of the tool that last saved the document.
    pub version: String,
    /// Whether rules distinguish letter case.
    pub case_sensitive: bool,
    /// Lect names, in display order.
    pub lects: Vec<String>,
    /// Rule text per lect.
    pub pronunciations: BTreeMap<String, String>,
    /// Phonotactic inventory per lect.
    pub phonotactics: BTreeMap<String, PhonotacticInventory>,
    /// Words keyed by their orthographic form.
    pub lexicon: BTreeMap<String, Word>,
    /// Phrase categories keyed by name.
    pub phrasebook: BTreeMap<String, PhraseCategory>,
    /// Top-level keys written by other tools, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Language {
    fn default() -> Self {
        Self::new("Unnamed Language")
    }
}

impl Language {
    /// Creates a language with a single, empty `General` lect.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut language = Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            case_sensitive: false,
            lects: Vec::new(),
            pronunciations: BTreeMap::new(),
            phonotactics: BTreeMap::new(),
            lexicon: BTreeMap::new(),
            phrasebook: BTreeMap::new(),
            extra: BTreeMap::new(),
        };
        language.add_lect(GENERAL_LECT);
        language
    }

    /// Returns true if `lect` is defined.
    #[must_use]
    pub fn has_lect(&self, lect: &str) -> bool {
        self.lects.iter().any(|l| l == lect)
    }

    /// Checks that `lect` is defined.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownLect`](lexc_foundation::ErrorKind::UnknownLect)
    /// otherwise.
    pub fn require_lect(&self, lect: &str) -> Result<()> {
        if self.has_lect(lect) {
            Ok(())
        } else {
            Err(Error::unknown_lect(lect)
                .with_context(ErrorContext::new().with_language(self.name.clone())))
        }
    }

    /// Adds a lect with empty rules and inventory. Returns false if it
    /// already existed.
    pub fn add_lect(&mut self, lect: impl Into<String>) -> bool {
        let lect = lect.into();
        if self.has_lect(&lect) {
            return false;
        }
        self.pronunciations.entry(lect.clone()).or_default();
        self.phonotactics.entry(lect.clone()).or_default();
        self.lects.push(lect);
        true
    }

    /// Returns the rule text of `lect`. A lect without rules has empty text.
    ///
    /// # Errors
    /// Returns an error if the lect is not defined.
    pub fn rule_text(&self, lect: &str) -> Result<&str> {
        self.require_lect(lect)?;
        Ok(self.pronunciations.get(lect).map_or("", String::as_str))
    }

    /// Returns the phonotactic inventory of `lect`.
    ///
    /// # Errors
    /// Returns an error if the lect is not defined.
    pub fn inventory(&self, lect: &str) -> Result<&PhonotacticInventory> {
        static EMPTY: PhonotacticInventory = PhonotacticInventory {
            onsets: Vec::new(),
            medials: Vec::new(),
            codas: Vec::new(),
            vowels: Vec::new(),
            illegals: Vec::new(),
        };
        self.require_lect(lect)?;
        Ok(self.phonotactics.get(lect).unwrap_or(&EMPTY))
    }

    /// Replaces the phonotactic inventory of `lect`.
    ///
    /// # Errors
    /// Returns an error if the lect is not defined.
    pub fn set_inventory(&mut self, lect: &str, inventory: PhonotacticInventory) -> Result<()> {
        self.require_lect(lect)?;
        self.phonotactics.insert(lect.to_string(), inventory);
        Ok(())
    }

    /// Number of phrases across all categories.
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrasebook.values().map(BTreeMap::len).sum()
    }
}

/// A pronunciation in one lect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pronunciation {
    /// Phonetic transcription.
    pub ipa: String,
    /// Irregular pronunciations are entered by hand and never re-transcribed.
    pub irregular: bool,
}

impl Pronunciation {
    /// A regular pronunciation.
    #[must_use]
    pub fn regular(ipa: impl Into<String>) -> Self {
        Self {
            ipa: ipa.into(),
            irregular: false,
        }
    }

    /// A hand-entered pronunciation.
    #[must_use]
    pub fn irregular(ipa: impl Into<String>) -> Self {
        Self {
            ipa: ipa.into(),
            irregular: true,
        }
    }
}

/// One sense of a word.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    /// Definition text.
    pub definition: String,
    /// Lects the sense belongs to; empty means all.
    pub lects: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// A lexicon entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Word {
    /// Pronunciation per lect.
    pub pronunciations: EntryPronunciations,
    /// Senses.
    #[serde(rename = "Senses")]
    pub senses: Vec<Sense>,
}

/// A phrasebook entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrase {
    /// Pronunciation per lect.
    pub pronunciations: EntryPronunciations,
    /// Description or translation.
    pub description: String,
    /// Lects the phrase belongs to; empty means all.
    pub lects: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Variant phrasings keyed by their text.
    pub variants: BTreeMap<String, Variant>,
}

/// A variant phrasing of a phrase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Pronunciation per lect.
    pub pronunciations: EntryPronunciations,
    /// Description of the variant.
    pub description: String,
}
