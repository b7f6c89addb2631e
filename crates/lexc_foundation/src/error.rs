//! Errors for Lexc.
//!
//! Rule matching and word sampling report their ordinary outcomes as plain
//! values: an unmatched position is left alone and a rejected word is `None`.
//! [`Error`] covers broken preconditions and the file and terminal surface of
//! the runtime. An [`ErrorContext`] records which language, lect, and file
//! were involved.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible Lexc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A Lexc error: what went wrong, plus where.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The language, lect, or file involved, when known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Wraps a kind with no context.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches context, replacing any already present.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// An inventory part required for sampling has no entries.
    #[must_use]
    pub fn empty_inventory(part: InventoryPart) -> Self {
        Self::new(ErrorKind::EmptyInventory(part))
    }

    /// A category was named with a reserved marker.
    #[must_use]
    pub fn reserved_symbol(symbol: char) -> Self {
        Self::new(ErrorKind::ReservedSymbol(symbol))
    }

    /// A lect the document does not define.
    #[must_use]
    pub fn unknown_lect(lect: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLect(lect.into()))
    }

    /// A file or terminal operation failed.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// A document could not be encoded or decoded.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }
}

/// Error categories.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required inventory part has no entries.
    #[error("empty inventory: no {0} defined")]
    EmptyInventory(InventoryPart),

    /// A category symbol collides with a reserved marker.
    #[error("reserved symbol cannot name a category: {0}")]
    ReservedSymbol(char),

    /// The lect is not defined in the language document.
    #[error("unknown lect: {0}")]
    UnknownLect(String),

    /// Malformed REPL input or document text.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// What was expected.
        message: String,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
        /// The offending line of input.
        context: String,
    },

    /// A file or terminal operation failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding or decoding a document failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A library invariant was broken.
    #[error("internal error: {0}")]
    Internal(String),
}

/// The five parts of a phonotactic inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryPart {
    /// Word-initial consonants and clusters.
    Onsets,
    /// Word-medial consonants and clusters.
    Medials,
    /// Word-final consonants and clusters.
    Codas,
    /// Vowels.
    Vowels,
    /// Forbidden sequences.
    Illegals,
}

impl fmt::Display for InventoryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Onsets => "onsets",
            Self::Medials => "medials",
            Self::Codas => "codas",
            Self::Vowels => "vowels",
            Self::Illegals => "illegals",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Error Context
// =============================================================================

/// Where an error happened, in document terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Language name.
    pub language: Option<String>,
    /// Lect name.
    pub lect: Option<String>,
    /// Document file.
    pub path: Option<PathBuf>,
    /// Operations in progress, outermost first.
    pub during: Vec<String>,
}

impl ErrorContext {
    /// Empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Names the lect.
    #[must_use]
    pub fn with_lect(mut self, lect: impl Into<String>) -> Self {
        self.lect = Some(lect.into());
        self
    }

    /// Names the document file.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Records an operation in progress.
    #[must_use]
    pub fn during(mut self, operation: impl Into<String>) -> Self {
        self.during.push(operation.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(lect) = &self.lect {
            parts.push(format!("lect {lect}"));
        }
        if let Some(language) = &self.language {
            parts.push(format!("language {language}"));
        }
        if let Some(path) = &self.path {
            parts.push(format!("file {}", path.display()));
        }
        if !parts.is_empty() {
            write!(f, "in {}", parts.join(", "))?;
        }
        for operation in &self.during {
            write!(f, "\n  while {operation}")?;
        }
        Ok(())
    }
}
