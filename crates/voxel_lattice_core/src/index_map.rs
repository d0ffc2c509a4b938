use crate::Point3i;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The bijection between voxel coordinates and linear storage indices for a fixed grid shape.
///
/// The layout is x-fastest: `index(x, y, z) = x + y*nx + z*nx*ny`. `coords` is the exact
/// inverse, so `coords(index(p)) == p` for every in-grid point and `index(coords(i)) == i`
/// for every `i < num_voxels`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IndexMap3 {
    shape: Point3i,
}

impl IndexMap3 {
    /// Maps indices for a grid of the given `shape`. All components must be positive.
    #[inline]
    pub fn new(shape: Point3i) -> Self {
        assert!(
            shape.0.iter().all(|&c| c > 0),
            "grid shape must be positive, got {:?}",
            shape
        );

        Self { shape }
    }

    #[inline]
    pub fn shape(&self) -> Point3i {
        self.shape
    }

    /// The linear storage index of voxel `p`.
    ///
    /// `p` is not bounds-checked; callers hand out only in-grid coordinates.
    #[inline]
    pub fn index(&self, p: Point3i) -> usize {
        let nx = self.shape.x() as usize;
        let ny = self.shape.y() as usize;

        p.x() as usize + p.y() as usize * nx + p.z() as usize * nx * ny
    }

    /// The voxel coordinates stored at linear index `i`. Inverse of [`Self::index`].
    #[inline]
    pub fn coords(&self, i: usize) -> Point3i {
        let nx = self.shape.x() as usize;
        let nxy = nx * self.shape.y() as usize;

        let z = i / nxy;
        let rem = i % nxy;

        Point3i::new((rem % nx) as i32, (rem / nx) as i32, z as i32)
    }
}
