//! Point-mass single-particle distribution.

use partsample_core::{
    draw_particle_state, DrawSample, FourMomentum, ParticleDirection, ParticleSpecies,
    ParticleState, Sampleable, SingleParticle, SingleParticleDistribution,
};
use rand::Rng;

/// Single-particle distribution that always yields the same state.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedState<P> {
    state: ParticleState<P>,
}

impl<P: ParticleSpecies> FixedState<P> {
    /// Distribution concentrated on the state `(species, direction, momentum)`.
    pub fn new(species: P, direction: ParticleDirection, momentum: FourMomentum) -> Self {
        Self {
            state: ParticleState::new(species, direction, momentum),
        }
    }

    /// The only state this distribution produces.
    pub fn state(&self) -> &ParticleState<P> {
        &self.state
    }
}

impl<P: ParticleSpecies + 'static> Sampleable for FixedState<P> {
    type Shape = SingleParticle;
    type Element = ParticleState<P>;

    fn is_exact(&self) -> bool {
        true
    }

    fn raw_weight(&self, x: &ParticleState<P>) -> f64 {
        if x == &self.state {
            1.0
        } else {
            0.0
        }
    }

    fn max_weight(&self) -> f64 {
        1.0
    }
}

impl<P: ParticleSpecies + 'static> SingleParticleDistribution for FixedState<P> {
    type Particle = P;

    fn particle(&self) -> &P {
        &self.state.species
    }

    fn particle_direction(&self) -> ParticleDirection {
        self.state.direction
    }

    fn rand_momentum<R: Rng + ?Sized>(&self, _rng: &mut R) -> FourMomentum {
        self.state.momentum
    }
}

impl<P: ParticleSpecies + 'static> DrawSample for FixedState<P> {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState<P> {
        draw_particle_state(self, rng)
    }
}
