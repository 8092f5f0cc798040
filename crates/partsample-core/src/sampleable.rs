//! The `Sampleable` capability and the weight pipeline built on top of it.

use std::any::Any;

use tracing::debug;

use crate::errors::{ErrorInfo, SamplingError};
use crate::kinematics::FourMomentum;
use crate::shape::VariateShape;
use crate::types::TypeDescriptor;

/// Capability shared by every distribution.
///
/// Omitting a required item is a build error. The optional hooks default to
/// no-ops; overriding them customises the [`weight`] pipeline without being
/// able to reorder it.
pub trait Sampleable {
    /// Shape of one sample.
    type Shape: VariateShape;

    /// Concrete type of one sample.
    type Element: 'static;

    /// Descriptor of [`Sampleable::Element`].
    fn element_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self::Element>()
    }

    /// Returns `true` iff the weight is 1 for every sample the distribution
    /// can produce. Fixed for the lifetime of the distribution.
    fn is_exact(&self) -> bool;

    /// Unvalidated, unnormalized weight of a well-typed sample.
    ///
    /// Implementations must not validate `x`; call [`weight`] for validated
    /// results.
    fn raw_weight(&self, x: &Self::Element) -> f64;

    /// Upper bound of [`Sampleable::raw_weight`] over the whole support.
    fn max_weight(&self) -> f64;

    /// Structural check of `x`, raising [`SamplingError::InvalidInputType`].
    fn assert_valid_input_type(&self, _x: &Self::Element) -> Result<(), SamplingError> {
        Ok(())
    }

    /// Domain check of `x`, raising [`SamplingError::InvalidInput`].
    fn assert_valid_input(&self, _x: &Self::Element) -> Result<(), SamplingError> {
        Ok(())
    }

    /// Correction applied to the raw weight.
    fn post_process(&self, _x: &Self::Element, raw: f64) -> f64 {
        raw
    }

    /// Momentum representation used by the samples.
    fn momentum_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<FourMomentum>()
    }

    /// Whether vectorized helpers such as [`weights`] may pair this
    /// distribution with every element of a collection as a single value.
    fn is_atomic(&self) -> bool {
        true
    }
}

/// Validated weight of `x` under `d`.
///
/// Runs, in this order: [`Sampleable::assert_valid_input_type`],
/// [`Sampleable::assert_valid_input`], [`Sampleable::raw_weight`] and
/// [`Sampleable::post_process`]. The first failing check aborts the call, so
/// an invalid sample never reaches the raw weight.
pub fn weight<D>(d: &D, x: &D::Element) -> Result<f64, SamplingError>
where
    D: Sampleable + ?Sized,
{
    let shape = <D::Shape as VariateShape>::KIND;
    d.assert_valid_input_type(x).map_err(|err| {
        debug!(%shape, code = %err.info().code, "sample rejected by type check");
        err
    })?;
    d.assert_valid_input(x).map_err(|err| {
        debug!(%shape, code = %err.info().code, "sample rejected by domain check");
        err
    })?;
    let raw = d.raw_weight(x);
    Ok(d.post_process(x, raw))
}

/// Validated weight of a dynamically typed sample.
///
/// A value that is not a [`Sampleable::Element`] fails with
/// [`SamplingError::InvalidInputType`] before any hook runs.
pub fn weight_any<D>(d: &D, x: &dyn Any) -> Result<f64, SamplingError>
where
    D: Sampleable + ?Sized,
{
    match x.downcast_ref::<D::Element>() {
        Some(x) => weight(d, x),
        None => Err(SamplingError::InvalidInputType(
            ErrorInfo::new(
                "sampleable.element_type",
                "sample is not of the distribution's element type",
            )
            .with_context("expected", d.element_type().name()),
        )),
    }
}

/// Validated weights of every element of `xs` under the same distribution.
///
/// Stops at the first failing sample.
pub fn weights<D>(d: &D, xs: &[D::Element]) -> Result<Vec<f64>, SamplingError>
where
    D: Sampleable + ?Sized,
{
    if !d.is_atomic() {
        return Err(SamplingError::MissingCapability(
            ErrorInfo::new(
                "sampleable.not_atomic",
                "distribution cannot be broadcast over a collection of samples",
            )
            .with_context("element_type", d.element_type().name()),
        ));
    }
    xs.iter()
        .enumerate()
        .map(|(index, x)| {
            weight(d, x).map_err(|err| {
                debug!(index, kind = err.kind(), "batch weighting stopped");
                err
            })
        })
        .collect()
}

/// Method-call form of the weight pipeline.
///
/// Blanket-implemented for every [`Sampleable`], so the pipeline order cannot
/// be overridden.
pub trait SampleableExt: Sampleable {
    /// See [`weight`].
    fn weight(&self, x: &Self::Element) -> Result<f64, SamplingError> {
        weight(self, x)
    }

    /// See [`weight_any`].
    fn weight_any(&self, x: &dyn Any) -> Result<f64, SamplingError> {
        weight_any(self, x)
    }

    /// See [`weights`].
    fn weights(&self, xs: &[Self::Element]) -> Result<Vec<f64>, SamplingError> {
        weights(self, xs)
    }
}

impl<D: Sampleable + ?Sized> SampleableExt for D {}
