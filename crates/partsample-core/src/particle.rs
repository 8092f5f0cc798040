//! Particle descriptors, directions and states consumed by the protocol.

use std::fmt::Debug;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::kinematics::FourMomentum;
use crate::sampleable::Sampleable;
use crate::shape::SingleParticle;

/// Direction of a particle relative to the scattering process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleDirection {
    /// The particle enters the process.
    Incoming,
    /// The particle leaves the process.
    Outgoing,
    /// The distribution does not tie the particle to a direction.
    #[default]
    Unknown,
}

impl ParticleDirection {
    /// Returns `true` unless this is the [`ParticleDirection::Unknown`] marker.
    pub fn is_known(&self) -> bool {
        !matches!(self, ParticleDirection::Unknown)
    }
}

/// Descriptor of a particle species.
pub trait ParticleSpecies: Clone + Debug + PartialEq + Send + Sync {
    /// Human readable species name.
    fn name(&self) -> &str;

    /// Rest mass of the species.
    fn mass(&self) -> f64;
}

/// Minimal named species carrying a rest mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    name: String,
    mass: f64,
}

impl Species {
    /// Creates a species descriptor.
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }
}

impl ParticleSpecies for Species {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// One particle with its species, direction and momentum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleState<P> {
    /// Species of the particle.
    pub species: P,
    /// Direction of the particle in the process.
    pub direction: ParticleDirection,
    /// Four-momentum of the particle.
    pub momentum: FourMomentum,
}

impl<P> ParticleState<P> {
    /// Creates a particle state.
    pub fn new(species: P, direction: ParticleDirection, momentum: FourMomentum) -> Self {
        Self {
            species,
            direction,
            momentum,
        }
    }
}

/// Refinement for single-particle distributions that are naturally
/// described by a momentum law for one fixed species.
///
/// Implementors still provide [`crate::DrawSample`]; [`draw_particle_state`]
/// is the usual body of that implementation.
pub trait SingleParticleDistribution: Sampleable<Shape = SingleParticle> {
    /// Species descriptor type.
    type Particle: ParticleSpecies;

    /// Species of every produced state.
    fn particle(&self) -> &Self::Particle;

    /// Direction of every produced state.
    fn particle_direction(&self) -> ParticleDirection {
        ParticleDirection::Unknown
    }

    /// Draws one four-momentum.
    fn rand_momentum<R: Rng + ?Sized>(&self, rng: &mut R) -> FourMomentum;
}

/// Draws one particle state from a [`SingleParticleDistribution`].
pub fn draw_particle_state<D, R>(d: &D, rng: &mut R) -> ParticleState<D::Particle>
where
    D: SingleParticleDistribution + ?Sized,
    R: Rng + ?Sized,
{
    let momentum = d.rand_momentum(rng);
    ParticleState::new(d.particle().clone(), d.particle_direction(), momentum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_direction_is_unknown() {
        assert_eq!(ParticleDirection::default(), ParticleDirection::Unknown);
        assert!(!ParticleDirection::Unknown.is_known());
        assert!(ParticleDirection::Incoming.is_known());
    }

    #[test]
    fn state_serializes_with_direction_label() {
        let state = ParticleState::new(
            Species::new("photon", 0.0),
            ParticleDirection::Outgoing,
            FourMomentum::new(1.0, 0.0, 0.0, 1.0),
        );
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"outgoing\""));
        let decoded: ParticleState<Species> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }
}
