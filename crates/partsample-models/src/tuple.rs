//! Products of independent single-particle distributions.

use partsample_core::{
    check_particle_count, DrawSample, ErrorInfo, MultiParticle, MultiParticleDistribution,
    ParticleDirection, ParticleState, Sampleable, SamplingError, SingleParticleDistribution,
};
use rand::Rng;

/// Multi-particle distribution whose slots are drawn independently from
/// single-particle components.
///
/// Slot `i` of every sample comes from `components[i]`. The raw weight is
/// the product of the component weights, each already post-processed by its
/// component, so the tuple itself keeps the identity `post_process`.
#[derive(Debug, Clone)]
pub struct IndependentTuple<D: SingleParticleDistribution> {
    components: Vec<D>,
    particles: Vec<D::Particle>,
}

impl<D: SingleParticleDistribution> IndependentTuple<D> {
    /// Builds the tuple; slot order follows `components`.
    pub fn new(components: Vec<D>) -> Self {
        let particles = components.iter().map(|c| c.particle().clone()).collect();
        Self {
            components,
            particles,
        }
    }

    /// Component distributions, one per slot.
    pub fn components(&self) -> &[D] {
        &self.components
    }
}

impl<D> Sampleable for IndependentTuple<D>
where
    D: SingleParticleDistribution
        + DrawSample<Element = ParticleState<<D as SingleParticleDistribution>::Particle>>,
    D::Particle: 'static,
{
    type Shape = MultiParticle;
    type Element = Vec<ParticleState<D::Particle>>;

    fn is_exact(&self) -> bool {
        self.components.iter().all(|c| c.is_exact())
    }

    fn raw_weight(&self, x: &Self::Element) -> f64 {
        // Each component applies its own correction to its own factor.
        self.components
            .iter()
            .zip(x)
            .map(|(c, state)| c.post_process(state, c.raw_weight(state)))
            .product()
    }

    fn max_weight(&self) -> f64 {
        self.components.iter().map(|c| c.max_weight()).product()
    }

    fn assert_valid_input_type(&self, x: &Self::Element) -> Result<(), SamplingError> {
        check_particle_count(self, x)?;
        for (slot, ((c, state), species)) in
            self.components.iter().zip(x).zip(&self.particles).enumerate()
        {
            if &state.species != species {
                return Err(SamplingError::InvalidInputType(
                    ErrorInfo::new("tuple.species", "slot carries an unexpected species")
                        .with_context("slot", slot.to_string())
                        .with_context("expected", format!("{species:?}"))
                        .with_context("actual", format!("{:?}", state.species)),
                ));
            }
            c.assert_valid_input_type(state)?;
        }
        Ok(())
    }

    fn assert_valid_input(&self, x: &Self::Element) -> Result<(), SamplingError> {
        for (c, state) in self.components.iter().zip(x) {
            c.assert_valid_input(state)?;
        }
        Ok(())
    }
}

impl<D> MultiParticleDistribution for IndependentTuple<D>
where
    D: SingleParticleDistribution
        + DrawSample<Element = ParticleState<<D as SingleParticleDistribution>::Particle>>,
    D::Particle: 'static,
{
    type Particle = D::Particle;

    fn particles(&self) -> &[D::Particle] {
        &self.particles
    }

    fn particle_directions(&self) -> Vec<ParticleDirection> {
        self.components
            .iter()
            .map(|c| c.particle_direction())
            .collect()
    }

    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, buf: &mut [ParticleState<D::Particle>]) {
        for (slot, c) in buf.iter_mut().zip(&self.components) {
            *slot = c.draw(rng);
        }
    }
}
