#![deny(missing_docs)]

//! Generic distributions built on the partsample protocol.
//!
//! None of these encode a physical law; they combine or wrap other
//! distributions.

pub mod fixed;
pub mod reweighted;
pub mod tuple;

pub use fixed::FixedState;
pub use reweighted::Reweighted;
pub use tuple::IndependentTuple;
