//! The three traversal protocols over a grid-backed store:
//! - [`VoxelIter`]: every voxel, in linear storage order
//! - [`SliceIter`]: one axis-aligned 2D slice, using two-level stride arithmetic
//! - [`NeighborhoodIter`]: relative offsets around a voxel, boundary-policy controlled
//!
//! All three are plain `Iterator`s over owned element values; positions are recoverable from
//! the yielded linear indices via [`voxel_lattice_core::IndexMap3`]. Mutation goes through
//! `DataAccessMut` instead of mutable iterators.

mod neighborhood;
mod slice;
mod voxel;

pub use neighborhood::NeighborhoodIter;
pub use slice::SliceIter;
pub use voxel::VoxelIter;
