//! Language documents, sessions, REPL, and CLI for Lexc.
//!
//! This crate provides:
//! - [`Language`] - The language document: lects, rules, phonotactics, lexicon, phrasebook
//! - [`Session`] - Compiled rules per lect, transcription, generation, re-transcription
//! - [`Repl`] - Interactive read-eval-print loop
//! - JSON and `MessagePack` serialization of documents
//! - [`RuntimeConfig`] and `tracing` setup for the `lexc` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod document;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use document::{
    EntryPronunciations, Language, Phrase, PhraseCategory, Pronunciation, Sense, Variant, Word,
};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Command, Outcome, Repl};
pub use serialize::{
    Format, from_bytes, from_json, load_from_file, save_to_file, to_bytes, to_json,
};
pub use session::Session;
