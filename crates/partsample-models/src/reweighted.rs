//! Importance-sampling wrapper.

use std::fmt;

use partsample_core::{
    DrawSample, ErrorInfo, FourMomentum, ParticleDirection, Sampleable, SamplingError,
    SingleParticleDistribution, TypeDescriptor,
};
use rand::Rng;
use tracing::debug;

/// Importance-sampled distribution.
///
/// Samples come from `proposal`; the raw weight of `x` is
/// `target(x) / proposal.raw_weight(x)`, so weighted samples follow the
/// target density. The result is never exact. Samples outside the support of
/// the proposal have weight zero.
pub struct Reweighted<D, F> {
    proposal: D,
    target: F,
    max_weight: f64,
}

impl<D, F> Reweighted<D, F>
where
    D: Sampleable,
    F: Fn(&D::Element) -> f64,
{
    /// `max_weight` must bound `target(x) / proposal.raw_weight(x)` over the
    /// support of the proposal.
    pub fn new(proposal: D, target: F, max_weight: f64) -> Result<Self, SamplingError> {
        if !(max_weight.is_finite() && max_weight > 0.0) {
            return Err(SamplingError::Config(
                ErrorInfo::new(
                    "reweighted.max_weight",
                    "weight bound must be finite and positive",
                )
                .with_context("max_weight", max_weight.to_string()),
            ));
        }
        debug!(max_weight, exact_proposal = proposal.is_exact(), "reweighted distribution");
        Ok(Self {
            proposal,
            target,
            max_weight,
        })
    }

    /// Distribution the samples are drawn from.
    pub fn proposal(&self) -> &D {
        &self.proposal
    }
}

impl<D, F> fmt::Debug for Reweighted<D, F>
where
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reweighted")
            .field("proposal", &self.proposal)
            .field("max_weight", &self.max_weight)
            .finish_non_exhaustive()
    }
}

impl<D, F> Sampleable for Reweighted<D, F>
where
    D: Sampleable,
    F: Fn(&D::Element) -> f64,
{
    type Shape = D::Shape;
    type Element = D::Element;

    fn is_exact(&self) -> bool {
        false
    }

    fn raw_weight(&self, x: &D::Element) -> f64 {
        let density = self.proposal.raw_weight(x);
        if density > 0.0 {
            (self.target)(x) / density
        } else {
            0.0
        }
    }

    fn max_weight(&self) -> f64 {
        self.max_weight
    }

    fn assert_valid_input_type(&self, x: &D::Element) -> Result<(), SamplingError> {
        self.proposal.assert_valid_input_type(x)
    }

    fn assert_valid_input(&self, x: &D::Element) -> Result<(), SamplingError> {
        self.proposal.assert_valid_input(x)
    }

    fn momentum_type(&self) -> TypeDescriptor {
        self.proposal.momentum_type()
    }
}

impl<D, F> DrawSample for Reweighted<D, F>
where
    D: DrawSample,
    F: Fn(&D::Element) -> f64,
{
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> D::Element {
        self.proposal.draw(rng)
    }
}

impl<D, F> SingleParticleDistribution for Reweighted<D, F>
where
    D: SingleParticleDistribution,
    F: Fn(&D::Element) -> f64,
{
    type Particle = D::Particle;

    fn particle(&self) -> &D::Particle {
        self.proposal.particle()
    }

    fn particle_direction(&self) -> ParticleDirection {
        self.proposal.particle_direction()
    }

    fn rand_momentum<R: Rng + ?Sized>(&self, rng: &mut R) -> FourMomentum {
        self.proposal.rand_momentum(rng)
    }
}
