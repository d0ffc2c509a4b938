//! Interpolated sampling at arbitrary world coordinates.
//!
//! An [`Interpolator`] combines a sampling strategy (which voxels contribute, with what
//! weights) with a combine strategy (how weighted contributions fold into one value). The
//! built-ins are [`Trilinear`] and [`WeightedSum`]; both are strategy slots so callers can
//! substitute e.g. nearest-neighbor sampling without touching the access layer.

use crate::{Element, Scalar};

use core::marker::PhantomData;
use num::Float;
use voxel_lattice_core::{Point3f, Point3i, RegularGrid3};

/// The floating type interpolation weights are computed in.
pub trait Precision: Float {
    fn of_f64(value: f64) -> Self;
    fn as_f64(self) -> f64;
}

impl Precision for f32 {
    #[inline]
    fn of_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Precision for f64 {
    #[inline]
    fn of_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// The voxels contributing to one interpolated sample: up to 8 `(linear_index, weight)`
/// pairs.
#[derive(Clone, Copy, Debug)]
pub struct Support<P> {
    pub indices: [usize; 8],
    pub weights: [P; 8],
    pub len: usize,
}

/// Chooses which voxels and weights contribute to a sample at a world-space coordinate.
///
/// Returns `None` when the coordinate lies outside the grid; that is the one access pattern
/// that is always checked and reported as a flag rather than an error.
pub trait SamplingStrategy<P: Precision> {
    fn support(&self, grid: &RegularGrid3, world: Point3f) -> Option<Support<P>>;
}

/// Standard trilinear sampling: the 8 corner voxels of the enclosing cell, weighted by
/// products of `(1 - frac)`/`frac` along each axis.
///
/// Evaluating at an exact grid point yields that point's stored value (all weight on one
/// corner); evaluating at a cell center yields the unweighted average of the 8 corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trilinear;

impl<P: Precision> SamplingStrategy<P> for Trilinear {
    fn support(&self, grid: &RegularGrid3, world: Point3f) -> Option<Support<P>> {
        if !grid.contains_world(world) {
            return None;
        }

        let g = grid.world_to_grid(world);
        let map = grid.index_map();
        let shape = grid.shape();

        let base = g.floor_int();
        let frac = [
            P::of_f64((g.x() - base.x() as f32) as f64),
            P::of_f64((g.y() - base.y() as f32) as f64),
            P::of_f64((g.z() - base.z() as f32) as f64),
        ];
        // The far corner is clamped per axis; its weight is zero whenever the clamp applies
        // (the fractional part is zero on the grid boundary).
        let far = Point3i::new(
            (base.x() + 1).min(shape.x() - 1),
            (base.y() + 1).min(shape.y() - 1),
            (base.z() + 1).min(shape.z() - 1),
        );

        let mut indices = [0usize; 8];
        let mut weights = [P::zero(); 8];
        for corner in 0..8 {
            let mut p = base;
            let mut w = P::one();
            for axis in 0..3 {
                if corner & (1 << axis) != 0 {
                    p.0[axis] = far.at(axis);
                    w = w * frac[axis];
                } else {
                    w = w * (P::one() - frac[axis]);
                }
            }
            indices[corner] = map.index(p);
            weights[corner] = w;
        }

        Some(Support {
            indices,
            weights,
            len: 8,
        })
    }
}

/// Folds weighted contributions into one value: `sum(weight_i * value_i)`, accumulated per
/// lane in the sampling precision.
pub trait CombineStrategy {
    fn combine<E: Element, P: Precision>(&self, support: &Support<P>, values: &[E]) -> E;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedSum;

impl CombineStrategy for WeightedSum {
    fn combine<E: Element, P: Precision>(&self, support: &Support<P>, values: &[E]) -> E {
        let mut out = E::ZERO;
        for lane in 0..E::LANES.count() {
            let mut acc = P::zero();
            for k in 0..support.len {
                let v = P::of_f64(values[support.indices[k]].lane(lane).to_f64());
                acc = acc + support.weights[k] * v;
            }
            out.set_lane(lane, E::Scalar::from_f64(acc.as_f64()));
        }

        out
    }
}

/// Samples a grid-backed store at arbitrary world coordinates.
///
/// Bound to one grid and one store by `DataAccess::interpolator`; the default configuration
/// is trilinear sampling with `f64` weights.
#[derive(Clone, Debug)]
pub struct Interpolator<'a, E, P = f64, S = Trilinear, C = WeightedSum> {
    grid: &'a RegularGrid3,
    values: &'a [E],
    sampling: S,
    combine: C,
    marker: PhantomData<P>,
}

impl<'a, E, P, S, C> Interpolator<'a, E, P, S, C>
where
    E: Element,
    P: Precision,
    S: SamplingStrategy<P>,
    C: CombineStrategy,
{
    pub(crate) fn new(grid: &'a RegularGrid3, values: &'a [E], sampling: S, combine: C) -> Self {
        Self {
            grid,
            values,
            sampling,
            combine,
            marker: PhantomData,
        }
    }

    /// The interpolated value at `world`, or `None` if the coordinate lies outside the grid.
    /// Out-of-range sampling is a reported condition, never an error.
    pub fn interpolate(&self, world: Point3f) -> Option<E> {
        let support = self.sampling.support(self.grid, world)?;

        Some(self.combine.combine(&support, self.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use voxel_lattice_core::Point3i;

    fn interpolator<'a>(
        grid: &'a RegularGrid3,
        values: &'a [f32],
    ) -> Interpolator<'a, f32, f64> {
        Interpolator::new(grid, values, Trilinear, WeightedSum)
    }

    #[test]
    fn exact_at_every_grid_point() {
        let grid = RegularGrid3::new(Point3i::new(3, 3, 3));
        let values: Vec<f32> = (0..27).map(|i| i as f32 * 1.5 - 7.0).collect();
        let interp = interpolator(&grid, &values);
        let map = grid.index_map();

        for i in 0..27 {
            let p = map.coords(i).as_float();
            assert_eq!(interp.interpolate(p), Some(values[i]));
        }
    }

    #[test]
    fn cell_center_is_the_corner_average() {
        let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
        let values: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let interp = interpolator(&grid, &values);

        let center = Point3f::fill(0.5);
        let avg = values.iter().sum::<f32>() / 8.0;
        assert_eq!(interp.interpolate(center), Some(avg));
    }

    #[test]
    fn outside_the_grid_reports_none() {
        let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
        let values = vec![1.0f32; 8];
        let interp = interpolator(&grid, &values);

        assert_eq!(interp.interpolate(Point3f::new(1.0001, 0.0, 0.0)), None);
        assert_eq!(interp.interpolate(Point3f::new(-0.5, 0.0, 0.0)), None);
        assert_eq!(interp.interpolate(Point3f::fill(1.0)), Some(1.0));
    }

    #[test]
    fn interpolates_along_an_edge() {
        let grid = RegularGrid3::new(Point3i::new(2, 1, 1));
        let values = vec![10.0f32, 20.0];
        let interp = interpolator(&grid, &values);

        assert_eq!(interp.interpolate(Point3f::new(0.25, 0.0, 0.0)), Some(12.5));
        assert_eq!(interp.interpolate(Point3f::new(0.75, 0.0, 0.0)), Some(17.5));
    }

    #[test]
    fn respects_the_world_transform() {
        let grid = RegularGrid3::with_transform(
            Point3i::new(2, 2, 2),
            Point3f::new(10.0, 0.0, 0.0),
            Point3f::fill(2.0),
        );
        let values: Vec<f64> = vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let interp: Interpolator<f64> = Interpolator::new(&grid, &values, Trilinear, WeightedSum);

        // Halfway between x = 0 and x = 1 in grid space is world x = 11.
        assert_eq!(
            interp.interpolate(Point3f::new(11.0, 0.0, 0.0)),
            Some(0.5)
        );
        assert_eq!(interp.interpolate(Point3f::new(9.0, 0.0, 0.0)), None);
    }

    #[test]
    fn vector_elements_interpolate_lane_wise() {
        let grid = RegularGrid3::new(Point3i::new(2, 1, 1));
        let values: Vec<[f32; 2]> = vec![[0.0, 100.0], [10.0, 200.0]];
        let interp: Interpolator<[f32; 2]> =
            Interpolator::new(&grid, &values, Trilinear, WeightedSum);

        assert_eq!(
            interp.interpolate(Point3f::new(0.5, 0.0, 0.0)),
            Some([5.0, 150.0])
        );
    }

    #[test]
    fn integer_stores_interpolate_through_the_precision_type() {
        let grid = RegularGrid3::new(Point3i::new(2, 1, 1));
        let values = vec![10u8, 20];
        let interp: Interpolator<u8> = Interpolator::new(&grid, &values, Trilinear, WeightedSum);

        assert_eq!(interp.interpolate(Point3f::new(0.5, 0.0, 0.0)), Some(15));
    }
}
