//! Capability traits consumed by traversal algorithms.

use crate::index::GridIndex;
use crate::region::GridRegion;

/// Read-only access to a scalar field sampled on a grid.
///
/// This is the narrow surface traversal algorithms need from an image:
/// per-axis physical spacing, pixel reads by index, and the extent of
/// the buffered data. Algorithms never write through this trait.
///
/// `pixel` is only called with indices inside
/// [`buffered_region`](Self::buffered_region); implementations may panic
/// on anything else.
pub trait ScalarField<const D: usize> {
    /// Physical distance between adjacent samples along `axis`.
    fn spacing(&self, axis: usize) -> f64;

    /// Value stored at `index`.
    fn pixel(&self, index: &GridIndex<D>) -> f64;

    /// The region for which samples are held in memory.
    fn buffered_region(&self) -> GridRegion<D>;

    /// Whether `index` can be passed to [`pixel`](Self::pixel).
    fn is_in_buffered_region(&self, index: &GridIndex<D>) -> bool {
        self.buffered_region().is_inside(index)
    }
}

impl<const D: usize, F: ScalarField<D> + ?Sized> ScalarField<D> for &F {
    fn spacing(&self, axis: usize) -> f64 {
        (**self).spacing(axis)
    }

    fn pixel(&self, index: &GridIndex<D>) -> f64 {
        (**self).pixel(index)
    }

    fn buffered_region(&self) -> GridRegion<D> {
        (**self).buffered_region()
    }

    fn is_in_buffered_region(&self, index: &GridIndex<D>) -> bool {
        (**self).is_in_buffered_region(index)
    }
}

/// Receiver of coarse progress notifications.
///
/// Fire-and-forget: the notifier does not wait on, or react to, the sink.
/// `fraction` lies in `[0, 1]`.
pub trait ProgressSink {
    /// Record that `fraction` of the work has been done.
    fn report(&mut self, fraction: f32);
}

impl<F: FnMut(f32)> ProgressSink for F {
    fn report(&mut self, fraction: f32) {
        self(fraction)
    }
}

/// A sink that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _fraction: f32) {}
}
