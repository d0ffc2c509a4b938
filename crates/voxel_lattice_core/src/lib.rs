//! The core geometry types for regular 3D voxel lattices:
//! - `Point3<T>`: a 3-dimensional point, most importantly `Point3i` and `Point3f`
//! - `RegularGrid3`: an immutable voxel topology with a grid-to-world transform
//! - `IndexMap3`: the bijection between voxel coordinates and linear storage indices
//! - `Neighborhood`: a reusable list of relative voxel offsets

pub mod grid;
pub mod index_map;
pub mod neighborhood;
pub mod point;

pub use grid::{RegularGrid3, SliceDir};
pub use index_map::IndexMap3;
pub use neighborhood::Neighborhood;
pub use point::{Point3, Point3f, Point3i};

pub use num;

pub mod prelude {
    pub use super::{IndexMap3, Neighborhood, Point3, Point3f, Point3i, RegularGrid3, SliceDir};
}
