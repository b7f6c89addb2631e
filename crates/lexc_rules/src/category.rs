//! Category tables.
//!
//! A category maps a single symbol to an ordered list of graphemes. Rules that
//! mention the symbol are expanded once per item.

use std::collections::HashMap;

use lexc_foundation::{Error, Result, is_reserved};

/// Mapping from category symbol to its ordered items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTable {
    categories: HashMap<char, Vec<String>>,
}

impl CategoryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a category.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ReservedSymbol`](lexc_foundation::ErrorKind::ReservedSymbol)
    /// if `symbol` is the boundary, null, or wildcard marker.
    pub fn define<I, S>(&mut self, symbol: char, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if is_reserved(symbol) {
            return Err(Error::reserved_symbol(symbol));
        }
        self.categories
            .insert(symbol, items.into_iter().map(Into::into).collect());
        Ok(())
    }

    /// Builder form of [`define`](Self::define).
    ///
    /// # Errors
    /// Same as [`define`](Self::define).
    pub fn with<I, S>(mut self, symbol: char, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.define(symbol, items)?;
        Ok(self)
    }

    /// Returns the items of a category.
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&[String]> {
        self.categories.get(&symbol).map(Vec::as_slice)
    }

    /// Returns true if `symbol` names a category.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.categories.contains_key(&symbol)
    }

    /// Number of defined categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no categories are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over `(symbol, items)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[String])> {
        self.categories
            .iter()
            .map(|(symbol, items)| (*symbol, items.as_slice()))
    }
}
