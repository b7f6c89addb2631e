//! Language document serialization.
//!
//! Documents are exchanged as JSON, the format other conlang tools read and
//! write, and snapshotted as `MessagePack` for compact storage. File helpers
//! pick the format from the extension: `.json` is JSON, anything else is
//! `MessagePack`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use lexc_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::document::Language;

/// On-disk encoding of a language document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Human-readable JSON.
    Json,
    /// Binary `MessagePack` with named fields.
    MessagePack,
}

impl Format {
    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::MessagePack,
        }
    }
}

/// Serializes a language to pretty-printed JSON.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn to_json(language: &Language) -> Result<String> {
    serde_json::to_string_pretty(language).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a language from JSON.
///
/// # Errors
///
/// Returns an error if the text is not a valid language document.
pub fn from_json(text: &str) -> Result<Language> {
    serde_json::from_str(text).map_err(|e| {
        Error::new(ErrorKind::ParseError {
            message: e.to_string(),
            line: u32::try_from(e.line()).unwrap_or(u32::MAX),
            column: u32::try_from(e.column()).unwrap_or(u32::MAX),
            context: text
                .lines()
                .nth(e.line().saturating_sub(1))
                .unwrap_or_default()
                .to_string(),
        })
    })
}

/// Serializes a language to bytes using `MessagePack` format.
///
/// Fields are written by name, so snapshots survive field reordering.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn to_bytes(language: &Language) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(language).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a language from `MessagePack` bytes.
///
/// # Errors
///
/// Returns a serialization error if `bytes` is not a `MessagePack` document.
pub fn from_bytes(bytes: &[u8]) -> Result<Language> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a language to a file, choosing the format from the extension.
///
/// An existing file is replaced.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written, or a serialization
/// error if encoding fails.
pub fn save_to_file<P: AsRef<Path>>(language: &Language, path: P) -> Result<()> {
    let path = path.as_ref();
    write_document(language, path).map_err(|e| {
        e.with_context(
            ErrorContext::new()
                .with_language(language.name.clone())
                .with_path(path),
        )
    })
}

fn write_document(language: &Language, path: &Path) -> Result<()> {
    let bytes = match Format::from_path(path) {
        Format::Json => to_json(language)?.into_bytes(),
        Format::MessagePack => to_bytes(language)?,
    };

    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads a language from a file, choosing the format from the extension.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a parse or
/// serialization error if its contents are not a document.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Language> {
    let path = path.as_ref();
    read_document(path).map_err(|e| e.with_context(ErrorContext::new().with_path(path)))
}

fn read_document(path: &Path) -> Result<Language> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    match Format::from_path(path) {
        Format::Json => {
            let text = String::from_utf8(bytes).map_err(|e| {
                Error::serialization(format!("'{}' is not UTF-8: {e}", path.display()))
            })?;
            from_json(&text)
        }
        Format::MessagePack => from_bytes(&bytes),
    }
}
