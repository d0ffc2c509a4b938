//! A generic engine for storing and accessing scalar or vector data sampled on regular 3D
//! voxel grids, where the element type is chosen at load time from a file header's type code
//! but processed with compile-time-specialized code.
//!
//! This library is organized into two crates:
//! - **core**: lattice geometry — points, grids, index maps, and neighborhoods
//! - **storage**: value stores, runtime type resolution, iterators, boundary strategies,
//!   interpolation, and typed proxies
//!
//! A typical load path: parse a file header into a grid shape, an element type code, and a
//! per-voxel vector width; build a [`storage::VolumeDataset`] with
//! `VolumeDataset::from_type_code`; then process it through a
//! [`storage::DatasetVisitor`], whose `visit` is monomorphized over the concrete element
//! type the code resolved to.

pub use voxel_lattice_core as core;
pub use voxel_lattice_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;
}
