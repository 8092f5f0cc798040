//! Type-erased distributions for heterogeneous collections.

use std::any::Any;
use std::fmt;

use crate::dispatch::{self, Dispatch};
use crate::errors::{ErrorInfo, SamplingError};
use crate::rng::RngHandle;
use crate::sampleable::{self, Sampleable};
use crate::shape::{ShapeKind, VariateShape};
use crate::types::TypeDescriptor;

/// Object-safe view of a distribution.
///
/// Samples cross this boundary as `dyn Any`; a sample of the wrong type is
/// rejected with [`SamplingError::InvalidInputType`].
pub trait DynDistribution: Send + Sync {
    /// Shape of one sample.
    fn shape_kind(&self) -> ShapeKind;

    /// Descriptor of the element type.
    fn element_type(&self) -> TypeDescriptor;

    /// See [`Sampleable::is_exact`].
    fn is_exact(&self) -> bool;

    /// See [`Sampleable::max_weight`].
    fn max_weight(&self) -> f64;

    /// Runs the weight pipeline on a dynamically typed sample.
    fn weight_any(&self, x: &dyn Any) -> Result<f64, SamplingError>;

    /// Draws one sample, or fails with [`SamplingError::MissingCapability`]
    /// if the distribution was erased without its sampler.
    fn sample_any(&self, rng: &mut RngHandle) -> Result<Box<dyn Any + Send>, SamplingError>;
}

/// Erased distribution that can be weighted but not sampled.
pub struct WeightingOnly<D>(D);

/// Erased distribution with both weighting and sampling.
pub struct Sampling<D>(D);

impl<D> fmt::Debug for WeightingOnly<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightingOnly").finish_non_exhaustive()
    }
}

impl<D> fmt::Debug for Sampling<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampling").finish_non_exhaustive()
    }
}

/// Erases `d`, keeping only the weighting capability.
pub fn erase_weighting<D>(d: D) -> Box<dyn DynDistribution>
where
    D: Sampleable + Send + Sync + 'static,
{
    Box::new(WeightingOnly(d))
}

/// Erases `d` together with its sampling primitive.
pub fn erase<D>(d: D) -> Box<dyn DynDistribution>
where
    D: Sampleable + Send + Sync + 'static,
    D::Shape: Dispatch<D>,
    D::Element: Send,
{
    Box::new(Sampling(d))
}

impl<D> DynDistribution for WeightingOnly<D>
where
    D: Sampleable + Send + Sync,
{
    fn shape_kind(&self) -> ShapeKind {
        <D::Shape as VariateShape>::KIND
    }

    fn element_type(&self) -> TypeDescriptor {
        self.0.element_type()
    }

    fn is_exact(&self) -> bool {
        self.0.is_exact()
    }

    fn max_weight(&self) -> f64 {
        self.0.max_weight()
    }

    fn weight_any(&self, x: &dyn Any) -> Result<f64, SamplingError> {
        sampleable::weight_any(&self.0, x)
    }

    fn sample_any(&self, _rng: &mut RngHandle) -> Result<Box<dyn Any + Send>, SamplingError> {
        Err(SamplingError::MissingCapability(
            ErrorInfo::new(
                "erased.no_sampler",
                "distribution was registered without a sampling primitive",
            )
            .with_context("shape", self.shape_kind().as_str())
            .with_context("element_type", self.element_type().name())
            .with_hint("register it with `erase` instead of `erase_weighting`"),
        ))
    }
}

impl<D> DynDistribution for Sampling<D>
where
    D: Sampleable + Send + Sync,
    D::Shape: Dispatch<D>,
    D::Element: Send,
{
    fn shape_kind(&self) -> ShapeKind {
        <D::Shape as VariateShape>::KIND
    }

    fn element_type(&self) -> TypeDescriptor {
        self.0.element_type()
    }

    fn is_exact(&self) -> bool {
        self.0.is_exact()
    }

    fn max_weight(&self) -> f64 {
        self.0.max_weight()
    }

    fn weight_any(&self, x: &dyn Any) -> Result<f64, SamplingError> {
        sampleable::weight_any(&self.0, x)
    }

    fn sample_any(&self, rng: &mut RngHandle) -> Result<Box<dyn Any + Send>, SamplingError> {
        Ok(Box::new(dispatch::sample(rng, &self.0)))
    }
}
