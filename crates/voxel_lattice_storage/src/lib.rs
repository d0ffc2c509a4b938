//! Storage and typed access for data sampled on regular 3D voxel grids.
//!
//! The element type of a [`VolumeDataset`] is not known until load time: it arrives as a
//! runtime type code from a file header. A [`StructuralSample`] captures that choice once,
//! and visitor dispatch ([`DatasetVisitor`]) resolves it back into compile-time-specialized
//! code, so the inner loops are monomorphized over the concrete element type.
//!
//! The main pieces are:
//!   - `ValueStore<E>` / `ErasedStore`: the owned element buffers
//!   - `DataAccess` / `DataAccessMut`: non-owning grid+store façades, the sole origin of
//!     iterators and interpolators
//!   - `VoxelIter`, `SliceIter`, `NeighborhoodIter`: the three traversal protocols
//!   - `Clamp`, `Wrap`, `ConstantValue`, `IgnoreOutside`: boundary strategies for
//!     neighborhood access
//!   - `Interpolator` with `Trilinear` sampling and `WeightedSum` combination
//!   - `TypedProxy`: read/write through a caller-chosen element type
//!
//! The engine is single-threaded in semantics: no locks or atomics anywhere. A
//! `RegularGrid3` and a read-only store may be shared across threads; concurrent mutation is
//! only sound when each writer owns a disjoint set of linear indices (the per-voxel parallel
//! pattern external schedulers use, with [`DataAccessMut::set_linear`] as the per-slot
//! write). Accessors and iterators are single-owner values, never shared.

pub mod access;
pub mod boundary;
pub mod dataset;
pub mod element;
pub mod error;
pub mod interp;
pub mod iter;
pub mod proxy;
pub mod store;
pub mod structural;

pub use access::{DataAccess, DataAccessMut};
pub use boundary::{BoundaryStrategy, Clamp, ConstantValue, IgnoreOutside, Resolved, Wrap};
pub use dataset::{DatasetVisitor, DatasetVisitorMut, VolumeDataset};
pub use element::{cast_element, Element, LaneCount, Scalar, ScalarTypeId};
pub use error::{AccessError, ResolveError};
pub use interp::{
    CombineStrategy, Interpolator, Precision, SamplingStrategy, Support, Trilinear, WeightedSum,
};
pub use iter::{NeighborhoodIter, SliceIter, VoxelIter};
pub use proxy::TypedProxy;
pub use store::{ErasedStore, StoreVisitor, StoreVisitorMut, ValueStore};
pub use structural::{StructuralSample, TypeVisitor};

pub mod prelude {
    pub use super::{
        cast_element, AccessError, BoundaryStrategy, Clamp, CombineStrategy, ConstantValue,
        DataAccess, DataAccessMut, DatasetVisitor, DatasetVisitorMut, Element, ErasedStore,
        IgnoreOutside, Interpolator, LaneCount, NeighborhoodIter, Precision, Resolved,
        ResolveError, SamplingStrategy, Scalar, ScalarTypeId, SliceIter, StructuralSample,
        Trilinear, TypeVisitor, TypedProxy, ValueStore, VolumeDataset, VoxelIter, WeightedSum,
        Wrap,
    };
}
