//! Explicit RNG state for sampling, with per-slot substreams.
//!
//! Every draw takes its generator from the caller. A batch that must not depend
//! on scheduling gives slot `i` the substream `i` of one master seed; the
//! substream seed is SipHash-1-3 (zero keys) over `(master, i)`, so it is the
//! same on every platform and for every thread count.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seeded generator passed to [`crate::sample`] and friends.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    rng: StdRng,
}

impl RngHandle {
    /// Generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator for slot `substream` of a batch drawn under `master_seed`.
    pub fn from_substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fresh generator for substream `id` of this generator's seed.
    ///
    /// Independent of how many values have already been drawn from `self`.
    pub fn substream(&self, id: u64) -> Self {
        Self::from_substream(self.seed, id)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Seed of substream `substream` under `master_seed`.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
