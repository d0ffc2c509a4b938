//! The owning pairing of one grid and one runtime-typed store.
//!
//! `VolumeDataset` is the only way to obtain accessors: callers never see raw grid or store
//! references outside the visitor call that created an accessor, so an accessor cannot
//! outlive the data it reads.

use crate::{
    DataAccess, DataAccessMut, Element, ErasedStore, ResolveError, Scalar, StoreVisitor,
    StoreVisitorMut, StructuralSample, ValueStore,
};

use voxel_lattice_core::RegularGrid3;

/// A caller-supplied visitor invoked with a read accessor of the dataset's concrete element
/// type. Must handle every type the structural parameters can resolve to; the `Element` bound
/// makes that statically exhaustive.
pub trait DatasetVisitor {
    type Output;

    fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Self::Output;
}

/// Like [`DatasetVisitor`], with a mutable accessor.
pub trait DatasetVisitorMut {
    type Output;

    fn visit<E: Element>(self, access: DataAccessMut<'_, E>) -> Self::Output;
}

/// Scalar or vector data sampled on a regular 3D voxel grid, with the element type chosen at
/// load time.
#[derive(Clone, Debug)]
pub struct VolumeDataset {
    grid: RegularGrid3,
    store: ErasedStore,
}

impl VolumeDataset {
    /// Pairs a grid with a store. The store must hold exactly one element per voxel.
    pub fn new(grid: RegularGrid3, store: ErasedStore) -> Result<Self, ResolveError> {
        if store.len() != grid.num_voxels() {
            return Err(ResolveError::LengthMismatch {
                store_len: store.len(),
                grid_len: grid.num_voxels(),
            });
        }

        Ok(Self { grid, store })
    }

    /// Builds a dataset from file-header metadata: an element type code, a declared per-voxel
    /// vector width, and the raw native-endian payload.
    pub fn from_type_code(
        grid: RegularGrid3,
        code: u8,
        dim: usize,
        bytes: &[u8],
    ) -> Result<Self, ResolveError> {
        let sample = StructuralSample::from_type_code(code, dim)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            code,
            dim,
            voxels = grid.num_voxels(),
            "resolving dataset from type code"
        );

        Self::new(grid, ErasedStore::from_raw_bytes(sample, bytes)?)
    }

    /// A zero-filled dataset of the sampled element type, e.g. as the output slot of a
    /// per-voxel computation.
    pub fn zeroed(grid: RegularGrid3, sample: StructuralSample) -> Self {
        let store = ErasedStore::zeroed(sample, grid.num_voxels());

        Self { grid, store }
    }

    #[inline]
    pub fn grid(&self) -> &RegularGrid3 {
        &self.grid
    }

    /// The structural sample captured when the store was created.
    #[inline]
    pub fn sample(&self) -> StructuralSample {
        self.store.sample()
    }

    /// Resolves the element type and hands the visitor a read accessor.
    pub fn visit<V: DatasetVisitor>(&self, visitor: V) -> V::Output {
        struct Bind<'g, V> {
            grid: &'g RegularGrid3,
            visitor: V,
        }

        impl<'g, V: DatasetVisitor> StoreVisitor for Bind<'g, V> {
            type Output = V::Output;

            fn visit<E: Element>(self, store: &ValueStore<E>) -> V::Output {
                self.visitor.visit(DataAccess::new(self.grid, store))
            }
        }

        self.store.visit(Bind {
            grid: &self.grid,
            visitor,
        })
    }

    /// Resolves the element type and hands the visitor a mutable accessor.
    pub fn visit_mut<V: DatasetVisitorMut>(&mut self, visitor: V) -> V::Output {
        struct Bind<'g, V> {
            grid: &'g RegularGrid3,
            visitor: V,
        }

        impl<'g, V: DatasetVisitorMut> StoreVisitorMut for Bind<'g, V> {
            type Output = V::Output;

            fn visit<E: Element>(self, store: &mut ValueStore<E>) -> V::Output {
                self.visitor.visit(DataAccessMut::new(self.grid, store))
            }
        }

        let grid = &self.grid;
        self.store.visit_mut(Bind { grid, visitor })
    }

    /// The smallest and largest scalar lane values in the store, as `f64`.
    pub fn value_range(&self) -> (f64, f64) {
        struct MinMax;

        impl DatasetVisitor for MinMax {
            type Output = (f64, f64);

            fn visit<E: Element>(self, access: DataAccess<'_, E>) -> (f64, f64) {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for (_, v) in access.voxels() {
                    for lane in 0..E::LANES.count() {
                        let s = v.lane(lane).to_f64();
                        min = min.min(s);
                        max = max.max(s);
                    }
                }

                (min, max)
            }
        }

        self.visit(MinMax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessError, LaneCount, ScalarTypeId};
    use pretty_assertions::assert_eq;
    use voxel_lattice_core::{Point3f, Point3i};

    #[test]
    fn length_mismatch_is_a_construction_error() {
        let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
        let store = ErasedStore::from(ValueStore::fill(0u8, 7));

        assert_eq!(
            VolumeDataset::new(grid, store).unwrap_err(),
            ResolveError::LengthMismatch {
                store_len: 7,
                grid_len: 8,
            }
        );
    }

    #[test]
    fn type_code_round_trips_through_the_visitor() {
        struct ScalarIdOf;

        impl DatasetVisitor for ScalarIdOf {
            type Output = (ScalarTypeId, LaneCount);

            fn visit<E: Element>(self, _: DataAccess<'_, E>) -> (ScalarTypeId, LaneCount) {
                (E::Scalar::ID, E::LANES)
            }
        }

        let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
        for id in ScalarTypeId::ALL.iter().copied() {
            for dim in 1..=4 {
                let sample = StructuralSample::new(id, LaneCount::from_dim(dim).unwrap());
                let dataset = VolumeDataset::zeroed(grid, sample);

                assert_eq!(dataset.visit(ScalarIdOf), (id, sample.lanes()));
                assert_eq!(dataset.sample(), sample);
            }
        }
    }

    #[test]
    fn from_type_code_reads_the_payload() {
        let grid = RegularGrid3::new(Point3i::new(2, 1, 1));
        let payload: Vec<u8> = bytemuck::cast_slice(&[1.5f32, -2.5]).to_vec();
        let dataset = VolumeDataset::from_type_code(grid, 8, 1, &payload).unwrap();

        struct ReadAll;

        impl DatasetVisitor for ReadAll {
            type Output = Result<Vec<f64>, AccessError>;

            fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Self::Output {
                (0..access.grid().num_voxels())
                    .map(|i| {
                        access
                            .get(access.grid().index_map().coords(i))
                            .map(|v| v.lane(0).to_f64())
                    })
                    .collect()
            }
        }

        assert_eq!(dataset.visit(ReadAll), Ok(vec![1.5, -2.5]));
        assert_eq!(dataset.value_range(), (-2.5, 1.5));
    }

    #[test]
    fn unknown_code_fails_fast() {
        let grid = RegularGrid3::new(Point3i::new(1, 1, 1));

        assert_eq!(
            VolumeDataset::from_type_code(grid, 200, 1, &[]).unwrap_err(),
            ResolveError::UnknownTypeCode(200)
        );
    }

    #[test]
    fn visit_mut_writes_through_the_resolved_type() {
        struct Ramp;

        impl DatasetVisitorMut for Ramp {
            type Output = ();

            fn visit<E: Element>(self, mut access: DataAccessMut<'_, E>) {
                let map = access.grid().index_map();
                access.for_each_mut(|p, v| {
                    v.set_lane(0, E::Scalar::from_f64(map.index(p) as f64));
                });
            }
        }

        let grid = RegularGrid3::new(Point3i::new(3, 3, 3));
        let mut dataset =
            VolumeDataset::zeroed(grid, StructuralSample::new(ScalarTypeId::I16, LaneCount::X1));
        dataset.visit_mut(Ramp);

        assert_eq!(dataset.value_range(), (0.0, 26.0));

        struct SampleCenter;

        impl DatasetVisitor for SampleCenter {
            type Output = Option<f64>;

            fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Option<f64> {
                access
                    .trilinear()
                    .interpolate(Point3f::fill(0.5))
                    .map(|v| v.lane(0).to_f64())
            }
        }

        // The first cell's corner indices average to 6.5; the i16 store truncates.
        assert_eq!(dataset.visit(SampleCenter), Some(6.0));
    }
}
