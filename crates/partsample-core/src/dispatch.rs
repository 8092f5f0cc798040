//! Generic sampling dispatcher.
//!
//! Each [`VariateShape`] marker implements [`Dispatch`] for the distributions
//! that supply the primitive of that shape: [`DrawSample`] for single-particle
//! and process-like distributions, and the `fill` primitive of
//! [`MultiParticleDistribution`] for multi-particle ones. A distribution that
//! lacks the primitive of its shape cannot be passed to [`sample`].

use rand::Rng;
use tracing::trace;

use crate::multi::MultiParticleDistribution;
use crate::particle::ParticleState;
use crate::sampleable::Sampleable;
use crate::shape::{MultiParticle, ProcessLike, SingleParticle, VariateShape};

/// Single-sample primitive for single-particle and process-like shapes.
pub trait DrawSample: Sampleable {
    /// Draws one sample, consuming RNG state.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;
}

/// Sampling strategy selected at compile time by the shape of `D`.
pub trait Dispatch<D: Sampleable + ?Sized>: VariateShape {
    /// Draws one sample of `d`.
    fn sample<R: Rng + ?Sized>(d: &D, rng: &mut R) -> D::Element;

    /// Draws `n` samples of `d`, in index order, from the same RNG.
    fn sample_batch<R: Rng + ?Sized>(d: &D, rng: &mut R, n: usize) -> Vec<D::Element>;
}

fn draw_sequential<D, R>(d: &D, rng: &mut R, n: usize) -> Vec<D::Element>
where
    D: DrawSample + ?Sized,
    R: Rng + ?Sized,
{
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(d.draw(rng));
    }
    out
}

impl<D> Dispatch<D> for SingleParticle
where
    D: DrawSample<Shape = SingleParticle> + ?Sized,
{
    fn sample<R: Rng + ?Sized>(d: &D, rng: &mut R) -> D::Element {
        d.draw(rng)
    }

    fn sample_batch<R: Rng + ?Sized>(d: &D, rng: &mut R, n: usize) -> Vec<D::Element> {
        draw_sequential(d, rng, n)
    }
}

impl<D> Dispatch<D> for ProcessLike
where
    D: DrawSample<Shape = ProcessLike> + ?Sized,
{
    fn sample<R: Rng + ?Sized>(d: &D, rng: &mut R) -> D::Element {
        d.draw(rng)
    }

    fn sample_batch<R: Rng + ?Sized>(d: &D, rng: &mut R, n: usize) -> Vec<D::Element> {
        draw_sequential(d, rng, n)
    }
}

impl<D> Dispatch<D> for MultiParticle
where
    D: MultiParticleDistribution
        + Sampleable<Element = Vec<ParticleState<<D as MultiParticleDistribution>::Particle>>>
        + ?Sized,
{
    fn sample<R: Rng + ?Sized>(d: &D, rng: &mut R) -> D::Element {
        let mut buf = d.allocate_sample();
        d.fill(rng, &mut buf);
        buf
    }

    fn sample_batch<R: Rng + ?Sized>(d: &D, rng: &mut R, n: usize) -> Vec<D::Element> {
        d.sample_batch(rng, n)
    }
}

/// Draws one sample of `d`.
pub fn sample<D, R>(rng: &mut R, d: &D) -> D::Element
where
    D: Sampleable + ?Sized,
    D::Shape: Dispatch<D>,
    R: Rng + ?Sized,
{
    <D::Shape as Dispatch<D>>::sample(d, rng)
}

/// Draws `n` samples of `d` sequentially from `rng`.
pub fn sample_batch<D, R>(rng: &mut R, d: &D, n: usize) -> Vec<D::Element>
where
    D: Sampleable + ?Sized,
    D::Shape: Dispatch<D>,
    R: Rng + ?Sized,
{
    let shape = <D::Shape as VariateShape>::KIND;
    trace!(n, %shape, "sampling batch");
    let out = <D::Shape as Dispatch<D>>::sample_batch(d, rng, n);
    debug_assert_eq!(out.len(), n, "batch primitive returned the wrong number of samples");
    out
}

/// Row-major array of samples with an explicit shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleArray<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

impl<T> SampleArray<T> {
    /// Dimensions of the array.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if any dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at a multi-index, last index varying fastest.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &extent) in index.iter().zip(&self.dims) {
            if i >= extent {
                return None;
            }
            flat = flat * extent + i;
        }
        self.data.get(flat)
    }

    /// Samples in draw order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the array, returning the samples in draw order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Draws an array of samples with dimensions `dims`.
///
/// Slots are filled in row-major order from one sequential batch.
pub fn sample_array<D, R>(rng: &mut R, d: &D, dims: &[usize]) -> SampleArray<D::Element>
where
    D: Sampleable + ?Sized,
    D::Shape: Dispatch<D>,
    R: Rng + ?Sized,
{
    let n = dims.iter().product();
    SampleArray {
        dims: dims.to_vec(),
        data: sample_batch(rng, d, n),
    }
}

/// Method-call form of the dispatcher.
pub trait SampleExt: Sampleable {
    /// See [`sample`].
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element
    where
        Self::Shape: Dispatch<Self>,
    {
        sample(rng, self)
    }

    /// See [`sample_batch`].
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Self::Element>
    where
        Self::Shape: Dispatch<Self>,
    {
        sample_batch(rng, self, n)
    }
}

impl<D: Sampleable + ?Sized> SampleExt for D {}
