//! Standard four-momentum representation used by particle states.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// Four-momentum `(E, px, py, pz)` with metric signature `(+, -, -, -)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum(Vector4<f64>);

impl FourMomentum {
    /// Creates a four-momentum from its energy and spatial components.
    pub fn new(energy: f64, px: f64, py: f64, pz: f64) -> Self {
        Self(Vector4::new(energy, px, py, pz))
    }

    /// The zero four-momentum.
    pub fn zero() -> Self {
        Self(Vector4::zeros())
    }

    /// Builds the on-shell four-momentum of a particle with the given mass
    /// and three-momentum.
    pub fn on_shell(mass: f64, momentum: Vector3<f64>) -> Self {
        let energy = (mass * mass + momentum.norm_squared()).sqrt();
        Self::new(energy, momentum.x, momentum.y, momentum.z)
    }

    /// Wraps a raw component vector ordered as `(E, px, py, pz)`.
    pub fn from_vector(components: Vector4<f64>) -> Self {
        Self(components)
    }

    /// Raw component vector ordered as `(E, px, py, pz)`.
    pub fn as_vector(&self) -> &Vector4<f64> {
        &self.0
    }

    /// Energy component.
    pub fn energy(&self) -> f64 {
        self.0[0]
    }

    /// x component of the three-momentum.
    pub fn px(&self) -> f64 {
        self.0[1]
    }

    /// y component of the three-momentum.
    pub fn py(&self) -> f64 {
        self.0[2]
    }

    /// z component of the three-momentum.
    pub fn pz(&self) -> f64 {
        self.0[3]
    }

    /// Spatial part of the four-momentum.
    pub fn spatial(&self) -> Vector3<f64> {
        Vector3::new(self.0[1], self.0[2], self.0[3])
    }

    /// Minkowski product with `other`.
    pub fn minkowski_dot(&self, other: &FourMomentum) -> f64 {
        self.energy() * other.energy() - self.spatial().dot(&other.spatial())
    }

    /// Invariant mass squared, `E^2 - |p|^2`.
    pub fn mass_squared(&self) -> f64 {
        self.minkowski_dot(self)
    }

    /// Signed invariant mass; negative for space-like momenta.
    pub fn mass(&self) -> f64 {
        let m2 = self.mass_squared();
        m2.signum() * m2.abs().sqrt()
    }

    /// Returns `true` if every component is finite, the energy is
    /// non-negative and the momentum is not space-like beyond `tolerance`.
    pub fn is_physical(&self, tolerance: f64) -> bool {
        self.0.iter().all(|c| c.is_finite())
            && self.energy() >= 0.0
            && self.mass_squared() >= -tolerance
    }
}

impl Default for FourMomentum {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> Self::Output {
        FourMomentum(self.0 + rhs.0)
    }
}

impl Sub for FourMomentum {
    type Output = FourMomentum;

    fn sub(self, rhs: FourMomentum) -> Self::Output {
        FourMomentum(self.0 - rhs.0)
    }
}

impl Neg for FourMomentum {
    type Output = FourMomentum;

    fn neg(self) -> Self::Output {
        FourMomentum(-self.0)
    }
}

impl Mul<f64> for FourMomentum {
    type Output = FourMomentum;

    fn mul(self, rhs: f64) -> Self::Output {
        FourMomentum(self.0 * rhs)
    }
}
