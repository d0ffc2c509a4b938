use thiserror::Error;

use voxel_lattice_core::{Point3i, SliceDir};

/// Errors raised while constructing a store or resolving a structural type. These always fail
/// fast at construction/resolution time, never per-access.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ResolveError {
    #[error("unrecognized element type code {0}")]
    UnknownTypeCode(u8),

    #[error("unsupported lane count {0}, expected 1..=4")]
    UnsupportedLaneCount(usize),

    #[error("payload of {len} bytes is not a whole number of {elem_size}-byte elements")]
    PayloadSize { len: usize, elem_size: usize },

    #[error("store holds {store_len} elements but the grid has {grid_len} voxels")]
    LengthMismatch { store_len: usize, grid_len: usize },
}

/// Errors raised by checked data access.
///
/// The original engine treated these as caller contract violations (checked only in debug
/// builds); here they are surfaced as recoverable results.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AccessError {
    #[error("voxel {p:?} is outside the grid of shape {shape:?}")]
    OutOfGrid { p: Point3i, shape: Point3i },

    #[error("linear index {index} is out of range for {len} voxels")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("slice index {index} is out of range, {dir:?} has {count} slices")]
    SliceOutOfRange {
        dir: SliceDir,
        index: usize,
        count: usize,
    },

    #[error("element has {actual} lanes but the requested type has {requested}")]
    LaneMismatch { requested: usize, actual: usize },
}
