//! Random sources for sampling.
//!
//! The sampler accepts any [`rand::Rng`]; these helpers build the ChaCha
//! generator used by the runtime so that a seed reproduces a session's words.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator type used by the runtime.
pub type SamplerRng = ChaCha8Rng;

/// Creates a deterministic generator from a seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> SamplerRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
#[must_use]
pub fn entropy_rng() -> SamplerRng {
    ChaCha8Rng::from_entropy()
}
