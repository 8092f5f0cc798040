//! Substream-seeded batch sampling.
//!
//! Slot `i` of a batch draws from its own RNG seeded with
//! `derive_substream_seed(master_seed, i)`, so the result does not depend on
//! how slots are scheduled across threads. It does differ from a sequential
//! batch drawn from a single RNG.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::trace;

use crate::dispatch::{self, Dispatch};
use crate::rng::RngHandle;
use crate::sampleable::Sampleable;

fn sample_slot<D>(d: &D, master_seed: u64, slot: usize) -> D::Element
where
    D: Sampleable + ?Sized,
    D::Shape: Dispatch<D>,
{
    let mut rng = RngHandle::from_substream(master_seed, slot as u64);
    dispatch::sample(&mut rng, d)
}

/// Draws `n` samples on the current thread, one substream per slot.
pub fn sample_batch_substreams<D>(d: &D, master_seed: u64, n: usize) -> Vec<D::Element>
where
    D: Sampleable + ?Sized,
    D::Shape: Dispatch<D>,
{
    trace!(n, master_seed, "sampling batch from substreams");
    (0..n).map(|slot| sample_slot(d, master_seed, slot)).collect()
}

/// Draws `n` samples across the rayon pool, one substream per slot.
///
/// Produces exactly the output of [`sample_batch_substreams`].
#[cfg(feature = "rayon")]
pub fn sample_batch_parallel<D>(d: &D, master_seed: u64, n: usize) -> Vec<D::Element>
where
    D: Sampleable + Sync + ?Sized,
    D::Shape: Dispatch<D>,
    D::Element: Send,
{
    trace!(n, master_seed, "sampling batch in parallel");
    (0..n)
        .into_par_iter()
        .map(|slot| sample_slot(d, master_seed, slot))
        .collect()
}
