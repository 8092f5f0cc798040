//! Refinement of the capability for distributions producing several
//! particles per sample.

use std::iter;

use rand::Rng;

use crate::errors::{ErrorInfo, SamplingError};
use crate::kinematics::FourMomentum;
use crate::particle::{ParticleDirection, ParticleSpecies, ParticleState};
use crate::sampleable::Sampleable;
use crate::shape::MultiParticle;

/// Distribution over a fixed-length ordered tuple of particles.
///
/// The element type of such a distribution is
/// `Vec<ParticleState<Self::Particle>>`; the dispatcher requires it. The
/// number of particles is fixed at construction and
/// `len() == particles().len() == particle_directions().len()`.
pub trait MultiParticleDistribution: Sampleable<Shape = MultiParticle> {
    /// Species descriptor type.
    type Particle: ParticleSpecies;

    /// Ordered species descriptors, one per slot.
    fn particles(&self) -> &[Self::Particle];

    /// Ordered directions, one per slot.
    fn particle_directions(&self) -> Vec<ParticleDirection> {
        vec![ParticleDirection::Unknown; self.len()]
    }

    /// Number of particles in one sample.
    fn len(&self) -> usize {
        self.particles().len()
    }

    /// Returns `true` if a sample carries no particles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape of one sample buffer.
    fn size(&self) -> (usize,) {
        (self.len(),)
    }

    /// Fills `buf` with one sample.
    ///
    /// `buf` has exactly `len()` slots, pre-populated by
    /// [`MultiParticleDistribution::allocate_sample`].
    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, buf: &mut [ParticleState<Self::Particle>]);

    /// Buffer for one sample: the species and direction of every slot with
    /// a zero momentum.
    ///
    /// Always `len()` slots long. Slots beyond the end of
    /// `particle_directions()` get [`ParticleDirection::Unknown`].
    fn allocate_sample(&self) -> Vec<ParticleState<Self::Particle>> {
        let directions = self
            .particle_directions()
            .into_iter()
            .chain(iter::repeat(ParticleDirection::Unknown));
        self.particles()
            .iter()
            .zip(directions)
            .map(|(species, direction)| {
                ParticleState::new(species.clone(), direction, FourMomentum::zero())
            })
            .collect()
    }

    /// Draws `n` samples from the same RNG, in index order.
    fn sample_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Vec<Vec<ParticleState<Self::Particle>>> {
        (0..n)
            .map(|_| {
                let mut buf = self.allocate_sample();
                self.fill(rng, &mut buf);
                buf
            })
            .collect()
    }
}

/// Checks that `x` carries one state per particle of `d`.
///
/// Intended for overrides of
/// [`Sampleable::assert_valid_input_type`]; the default hook does not call it.
pub fn check_particle_count<D>(d: &D, x: &[ParticleState<D::Particle>]) -> Result<(), SamplingError>
where
    D: MultiParticleDistribution + ?Sized,
{
    if x.len() == d.len() {
        return Ok(());
    }
    Err(SamplingError::InvalidInputType(
        ErrorInfo::new(
            "multi.particle_count",
            "sample does not carry one state per particle",
        )
        .with_context("expected", d.len().to_string())
        .with_context("actual", x.len().to_string()),
    ))
}
