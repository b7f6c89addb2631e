//! Core types, reserved symbols, and errors for Lexc.
//!
//! This crate provides:
//! - [`symbols`] - The boundary, null, and wildcard markers shared by every layer
//! - [`PhonotacticInventory`] - Syllable-part inventories for one lect
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod inventory;
pub mod symbols;

pub use error::{Error, ErrorContext, ErrorKind, InventoryPart, Result};
pub use inventory::{PhonotacticInventory, split_graphemes};
pub use symbols::{BOUNDARY, GENERAL_LECT, NULL, WILDCARD, is_reserved};
