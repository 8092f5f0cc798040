//! Compile-time tags describing what one sample of a distribution looks like.

use std::fmt;

use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SingleParticle {}
    impl Sealed for super::MultiParticle {}
    impl Sealed for super::ProcessLike {}
}

/// Runtime label of a [`VariateShape`].
///
/// Only used for diagnostics and type-erased collections; dispatch never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// One particle state per sample.
    SingleParticle,
    /// A fixed-length ordered tuple of particle states per sample.
    MultiParticle,
    /// A whole scattering-process phase-space point per sample.
    ProcessLike,
}

impl ShapeKind {
    /// Stable kebab-case name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::SingleParticle => "single-particle",
            ShapeKind::MultiParticle => "multi-particle",
            ShapeKind::ProcessLike => "process-like",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of variate shapes.
///
/// The trait is sealed: the three marker types below are the only
/// implementors. The markers are uninhabited and only ever appear as type
/// arguments.
pub trait VariateShape: sealed::Sealed + Send + Sync + 'static {
    /// Runtime label of the shape.
    const KIND: ShapeKind;
}

/// Shape of distributions yielding a single particle state.
#[derive(Debug)]
pub enum SingleParticle {}

/// Shape of distributions yielding several particle states at once.
#[derive(Debug)]
pub enum MultiParticle {}

/// Shape of distributions yielding phase-space points of a whole process.
#[derive(Debug)]
pub enum ProcessLike {}

impl VariateShape for SingleParticle {
    const KIND: ShapeKind = ShapeKind::SingleParticle;
}

impl VariateShape for MultiParticle {
    const KIND: ShapeKind = ShapeKind::MultiParticle;
}

impl VariateShape for ProcessLike {
    const KIND: ShapeKind = ShapeKind::ProcessLike;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<S: VariateShape>() -> ShapeKind {
        S::KIND
    }

    #[test]
    fn markers_report_their_kind() {
        assert_eq!(kind_of::<SingleParticle>(), ShapeKind::SingleParticle);
        assert_eq!(kind_of::<MultiParticle>(), ShapeKind::MultiParticle);
        assert_eq!(kind_of::<ProcessLike>(), ShapeKind::ProcessLike);
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ShapeKind::ProcessLike).unwrap();
        assert_eq!(json, "\"process-like\"");
        assert_eq!(ShapeKind::MultiParticle.to_string(), "multi-particle");
    }
}
