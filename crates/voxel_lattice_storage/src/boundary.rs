//! Policies governing how neighborhood access to out-of-grid coordinates is resolved.
//!
//! Remapping (clamp/wrap/constant) is never an error condition; it is the successful, defined
//! outcome of choosing that strategy. Only [`IgnoreOutside`] shrinks the sequence a
//! neighborhood traversal yields.

use voxel_lattice_core::{Point3i, RegularGrid3};

/// The outcome of resolving one neighbor coordinate against a boundary strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolved<E> {
    /// Read storage at this (possibly remapped) in-grid coordinate.
    Inside(Point3i),
    /// Yield this value without reading storage.
    Substitute(E),
    /// Skip the neighbor entirely.
    Skip,
}

/// A stateless (or small-state) policy selected per neighborhood traversal. Never mutates the
/// grid or store.
pub trait BoundaryStrategy<E> {
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E>;
}

/// Clamps each coordinate component into `[0, n_i - 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clamp;

impl<E> BoundaryStrategy<E> for Clamp {
    #[inline]
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E> {
        let shape = grid.shape();
        let clamped = Point3i::new(
            p.x().max(0).min(shape.x() - 1),
            p.y().max(0).min(shape.y() - 1),
            p.z().max(0).min(shape.z() - 1),
        );

        Resolved::Inside(clamped)
    }
}

/// Takes each coordinate component modulo `n_i`, with true mathematical modulo so negative
/// components wrap to the far side of the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wrap;

impl<E> BoundaryStrategy<E> for Wrap {
    #[inline]
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E> {
        let shape = grid.shape();
        let wrapped = Point3i::new(
            p.x().rem_euclid(shape.x()),
            p.y().rem_euclid(shape.y()),
            p.z().rem_euclid(shape.z()),
        );

        Resolved::Inside(wrapped)
    }
}

/// Substitutes a fixed sentinel value for any coordinate outside the grid; storage is never
/// read for those.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantValue<E>(pub E);

impl<E: Copy> BoundaryStrategy<E> for ConstantValue<E> {
    #[inline]
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E> {
        if grid.contains(p) {
            Resolved::Inside(p)
        } else {
            Resolved::Substitute(self.0)
        }
    }
}

/// Skips out-of-grid neighbors entirely, shrinking the yielded sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreOutside;

impl<E> BoundaryStrategy<E> for IgnoreOutside {
    #[inline]
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E> {
        if grid.contains(p) {
            Resolved::Inside(p)
        } else {
            Resolved::Skip
        }
    }
}
