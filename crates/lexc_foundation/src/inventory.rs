//! Phonotactic inventories.

use crate::error::{Error, InventoryPart, Result};

/// The syllable-part inventories of one lect.
///
/// Every list is ordered; the sampler draws from them uniformly and scans
/// `vowels` in order when completing a word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct PhonotacticInventory {
    /// Consonants and clusters that can start a word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub onsets: Vec<String>,
    /// Consonants and clusters that can appear between vowels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub medials: Vec<String>,
    /// Consonants and clusters that can end a word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub codas: Vec<String>,
    /// Vowels. Must be non-empty for sampling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vowels: Vec<String>,
    /// Sequences that may not appear anywhere in a boundary-delimited word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub illegals: Vec<String>,
}

impl PhonotacticInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from whitespace-delimited grapheme lists, in the
    /// order onsets, medials, codas, vowels, illegals.
    #[must_use]
    pub fn from_delimited(
        onsets: &str,
        medials: &str,
        codas: &str,
        vowels: &str,
        illegals: &str,
    ) -> Self {
        Self {
            onsets: split_graphemes(onsets),
            medials: split_graphemes(medials),
            codas: split_graphemes(codas),
            vowels: split_graphemes(vowels),
            illegals: split_graphemes(illegals),
        }
    }

    /// Sets the onsets.
    #[must_use]
    pub fn with_onsets<I, S>(mut self, onsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.onsets = onsets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the medials.
    #[must_use]
    pub fn with_medials<I, S>(mut self, medials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medials = medials.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the codas.
    #[must_use]
    pub fn with_codas<I, S>(mut self, codas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codas = codas.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the vowels.
    #[must_use]
    pub fn with_vowels<I, S>(mut self, vowels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vowels = vowels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the illegal sequences.
    #[must_use]
    pub fn with_illegals<I, S>(mut self, illegals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.illegals = illegals.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the entries of one part.
    #[must_use]
    pub fn part(&self, part: InventoryPart) -> &[String] {
        match part {
            InventoryPart::Onsets => &self.onsets,
            InventoryPart::Medials => &self.medials,
            InventoryPart::Codas => &self.codas,
            InventoryPart::Vowels => &self.vowels,
            InventoryPart::Illegals => &self.illegals,
        }
    }

    /// Checks the sampling precondition: at least one vowel.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyInventory`](crate::ErrorKind::EmptyInventory)
    /// when there are no vowels.
    pub fn validate(&self) -> Result<()> {
        if self.vowels.is_empty() {
            return Err(Error::empty_inventory(InventoryPart::Vowels));
        }
        Ok(())
    }

    /// Returns true if any non-empty illegal sequence occurs in `candidate`.
    #[must_use]
    pub fn contains_illegal(&self, candidate: &str) -> bool {
        self.illegals
            .iter()
            .filter(|illegal| !illegal.is_empty())
            .any(|illegal| candidate.contains(illegal.as_str()))
    }
}

/// Splits whitespace-delimited text into graphemes, dropping empty tokens.
#[must_use]
pub fn split_graphemes(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}
