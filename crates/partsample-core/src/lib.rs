#![deny(missing_docs)]
#![doc = "Sampling and weighting protocol for particle and scattering-event distributions."]

//! A distribution implements [`Sampleable`] plus the sampling primitive of
//! its [`VariateShape`]: [`DrawSample`] for single-particle and process-like
//! shapes, [`MultiParticleDistribution::fill`] for the multi-particle shape.
//! [`sample`], [`sample_batch`] and [`weight`] are then available for it,
//! with the RNG always passed explicitly.

/// Batch configuration schema and the configured batch entry point.
pub mod config;
pub mod dispatch;
pub mod erased;
pub mod errors;
pub mod kinematics;
pub mod multi;
pub mod parallel;
pub mod particle;
pub mod rng;
pub mod sampleable;
pub mod shape;
mod types;

pub use config::{sample_with_config, BatchConfig, Execution};
pub use dispatch::{
    sample, sample_array, sample_batch, Dispatch, DrawSample, SampleArray, SampleExt,
};
pub use erased::{erase, erase_weighting, DynDistribution};
pub use errors::{ErrorInfo, SamplingError};
pub use kinematics::FourMomentum;
pub use multi::{check_particle_count, MultiParticleDistribution};
#[cfg(feature = "rayon")]
pub use parallel::sample_batch_parallel;
pub use parallel::sample_batch_substreams;
pub use particle::{
    draw_particle_state, ParticleDirection, ParticleSpecies, ParticleState, SingleParticleDistribution,
    Species,
};
pub use rng::{derive_substream_seed, RngHandle};
pub use sampleable::{weight, weight_any, weights, Sampleable, SampleableExt};
pub use shape::{MultiParticle, ProcessLike, ShapeKind, SingleParticle, VariateShape};
pub use types::TypeDescriptor;
