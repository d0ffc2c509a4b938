use crate::{IndexMap3, Point3f, Point3i};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three axis-aligned slice orientations through a grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum SliceDir {
    /// Slices of constant `z`.
    Xy = 0,
    /// Slices of constant `y`.
    Xz = 1,
    /// Slices of constant `x`.
    Yz = 2,
}

impl SliceDir {
    pub const ALL: [SliceDir; 3] = [SliceDir::Xy, SliceDir::Xz, SliceDir::Yz];
}

/// The immutable topology of a regular 3D voxel grid: voxel counts along each axis plus an
/// affine grid-to-world transform (origin and per-axis spacing).
///
/// A grid is created once at dataset-construction time and never mutated, so it can be shared
/// read-only by any number of accessors and iterators.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RegularGrid3 {
    shape: Point3i,
    origin: Point3f,
    spacing: Point3f,
}

impl RegularGrid3 {
    /// A grid of `shape` voxels with the identity transform (world == grid space).
    pub fn new(shape: Point3i) -> Self {
        Self::with_transform(shape, Point3f::ZERO, Point3f::ONES)
    }

    /// A grid of `shape` voxels where voxel `(x, y, z)` sits at world position
    /// `origin + (x, y, z) * spacing`.
    pub fn with_transform(shape: Point3i, origin: Point3f, spacing: Point3f) -> Self {
        assert!(
            shape.0.iter().all(|&c| c > 0),
            "grid shape must be positive, got {:?}",
            shape
        );
        assert!(
            spacing.0.iter().all(|&s| s > 0.0),
            "grid spacing must be positive, got {:?}",
            spacing
        );

        Self {
            shape,
            origin,
            spacing,
        }
    }

    #[inline]
    pub fn shape(&self) -> Point3i {
        self.shape
    }

    #[inline]
    pub fn origin(&self) -> Point3f {
        self.origin
    }

    #[inline]
    pub fn spacing(&self) -> Point3f {
        self.spacing
    }

    /// The total number of voxels, `nx * ny * nz`.
    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.shape.volume()
    }

    /// The number of voxels in one slice of the given orientation.
    #[inline]
    pub fn slice_size(&self, dir: SliceDir) -> usize {
        let [nx, ny, nz] = self.shape.0;
        match dir {
            SliceDir::Xy => nx as usize * ny as usize,
            SliceDir::Xz => nx as usize * nz as usize,
            SliceDir::Yz => ny as usize * nz as usize,
        }
    }

    /// The number of distinct slices of the given orientation.
    #[inline]
    pub fn num_slices(&self, dir: SliceDir) -> usize {
        let [nx, ny, nz] = self.shape.0;
        match dir {
            SliceDir::Xy => nz as usize,
            SliceDir::Xz => ny as usize,
            SliceDir::Yz => nx as usize,
        }
    }

    /// The index map for this grid's shape.
    #[inline]
    pub fn index_map(&self) -> IndexMap3 {
        IndexMap3::new(self.shape)
    }

    /// Returns `true` iff `p` is a voxel of this grid.
    #[inline]
    pub fn contains(&self, p: Point3i) -> bool {
        p.x() >= 0
            && p.y() >= 0
            && p.z() >= 0
            && p.x() < self.shape.x()
            && p.y() < self.shape.y()
            && p.z() < self.shape.z()
    }

    /// Transforms world-space coordinates into grid space, where voxel `(x, y, z)` sits at
    /// exactly `(x, y, z)`.
    #[inline]
    pub fn world_to_grid(&self, world: Point3f) -> Point3f {
        (world - self.origin) / self.spacing
    }

    /// Inverse of [`Self::world_to_grid`].
    #[inline]
    pub fn grid_to_world(&self, grid: Point3f) -> Point3f {
        grid * self.spacing + self.origin
    }

    /// Returns `true` iff the world-space point lies within the grid, i.e. its grid-space
    /// coordinates satisfy `0 <= c_i <= n_i - 1` on every axis.
    ///
    /// The bounds are inclusive: points on the boundary voxels are inside.
    #[inline]
    pub fn contains_world(&self, world: Point3f) -> bool {
        let g = self.world_to_grid(world);

        (0..3).all(|axis| {
            let c = g.at(axis);
            c >= 0.0 && c <= (self.shape.at(axis) - 1) as f32
        })
    }
}
