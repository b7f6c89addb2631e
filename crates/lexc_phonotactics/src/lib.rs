//! Phonotactic word generation and completion for Lexc.
//!
//! This crate provides:
//! - [`PhonotacticSampler`] - Random words from a [`PhonotacticInventory`], and completion of partial words
//! - [`seeded_rng`] / [`entropy_rng`] - The random sources the runtime hands to the sampler
//!
//! [`PhonotacticInventory`]: lexc_foundation::PhonotacticInventory

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rng;
pub mod sampler;

pub use rng::{SamplerRng, entropy_rng, seeded_rng};
pub use sampler::{MAX_GENERATION_ATTEMPTS, PhonotacticSampler, complete_word, generate_word};
