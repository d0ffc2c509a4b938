//! Non-owning façades binding one grid and one concretely-typed store.
//!
//! Accessors are the sole origin of iterators and interpolators; their validity is bounded by
//! the borrows they hold, so an accessor can never outlive its grid or store. Direct indexing
//! is checked and returns a `Result`; the unchecked contract of the original engine is not
//! reproduced.

use crate::proxy::check_lanes;
use crate::{
    cast_element, AccessError, BoundaryStrategy, CombineStrategy, Element, Interpolator,
    NeighborhoodIter, Precision, SamplingStrategy, SliceIter, Trilinear, TypedProxy, ValueStore,
    VoxelIter, WeightedSum,
};

use voxel_lattice_core::{IndexMap3, Neighborhood, Point3i, RegularGrid3, SliceDir};

/// Read-only access to one grid/store pairing.
#[derive(Clone, Copy, Debug)]
pub struct DataAccess<'a, E> {
    grid: &'a RegularGrid3,
    map: IndexMap3,
    store: &'a ValueStore<E>,
}

impl<'a, E: Element> DataAccess<'a, E> {
    pub(crate) fn new(grid: &'a RegularGrid3, store: &'a ValueStore<E>) -> Self {
        debug_assert_eq!(grid.num_voxels(), store.len());

        Self {
            grid,
            map: grid.index_map(),
            store,
        }
    }

    #[inline]
    pub fn grid(&self) -> &'a RegularGrid3 {
        self.grid
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The value at voxel `p`.
    pub fn get(&self, p: Point3i) -> Result<E, AccessError> {
        self.check_voxel(p)
            .map(|_| self.store.values()[self.map.index(p)])
    }

    /// The value at linear index `i`.
    pub fn get_linear(&self, i: usize) -> Result<E, AccessError> {
        self.store
            .values()
            .get(i)
            .copied()
            .ok_or(AccessError::IndexOutOfRange {
                index: i,
                len: self.store.len(),
            })
    }

    /// The value at voxel `p`, converted to the caller's element type `T` (which must have
    /// the native lane count).
    pub fn get_as<T: Element>(&self, p: Point3i) -> Result<T, AccessError> {
        check_lanes::<E, T>()?;

        self.get(p).map(cast_element)
    }

    /// Every voxel in linear order; exactly `grid.num_voxels()` items.
    pub fn voxels(&self) -> VoxelIter<'a, E> {
        VoxelIter::new(self.store.values(), self.map)
    }

    /// One axis-aligned 2D slice; exactly `grid.slice_size(dir)` items.
    pub fn slice(&self, dir: SliceDir, slice_index: usize) -> Result<SliceIter<'a, E>, AccessError> {
        let count = self.grid.num_slices(dir);
        if slice_index >= count {
            return Err(AccessError::SliceOutOfRange {
                dir,
                index: slice_index,
                count,
            });
        }

        Ok(SliceIter::new(
            self.store.values(),
            self.grid,
            dir,
            slice_index,
        ))
    }

    /// The neighbors of `center` in the neighborhood's offset order, resolved through
    /// `strategy`. The center itself may lie outside the grid; each neighbor is resolved
    /// independently.
    pub fn neighborhood<B: BoundaryStrategy<E>>(
        &self,
        center: Point3i,
        neighborhood: &'a Neighborhood,
        strategy: B,
    ) -> NeighborhoodIter<'a, E, B> {
        NeighborhoodIter::new(self.store.values(), self.grid, center, neighborhood, strategy)
    }

    /// An interpolator over this grid and store with the given strategies.
    pub fn interpolator<P, S, C>(&self, sampling: S, combine: C) -> Interpolator<'a, E, P, S, C>
    where
        P: Precision,
        S: SamplingStrategy<P>,
        C: CombineStrategy,
    {
        Interpolator::new(self.grid, self.store.values(), sampling, combine)
    }

    /// The default interpolator: trilinear sampling, weighted sum, `f64` weights.
    pub fn trilinear(&self) -> Interpolator<'a, E> {
        self.interpolator(Trilinear, WeightedSum)
    }

    fn check_voxel(&self, p: Point3i) -> Result<(), AccessError> {
        if self.grid.contains(p) {
            Ok(())
        } else {
            Err(AccessError::OutOfGrid {
                p,
                shape: self.grid.shape(),
            })
        }
    }
}

/// Mutable access to one grid/store pairing.
#[derive(Debug)]
pub struct DataAccessMut<'a, E> {
    grid: &'a RegularGrid3,
    map: IndexMap3,
    store: &'a mut ValueStore<E>,
}

impl<'a, E: Element> DataAccessMut<'a, E> {
    pub(crate) fn new(grid: &'a RegularGrid3, store: &'a mut ValueStore<E>) -> Self {
        debug_assert_eq!(grid.num_voxels(), store.len());

        Self {
            grid,
            map: grid.index_map(),
            store,
        }
    }

    /// A read-only accessor borrowing from this one.
    pub fn as_read(&self) -> DataAccess<'_, E> {
        DataAccess::new(self.grid, self.store)
    }

    #[inline]
    pub fn grid(&self) -> &'a RegularGrid3 {
        self.grid
    }

    pub fn get(&self, p: Point3i) -> Result<E, AccessError> {
        self.as_read().get(p)
    }

    /// Writes `value` at voxel `p`.
    pub fn set(&mut self, p: Point3i, value: E) -> Result<(), AccessError> {
        if !self.grid.contains(p) {
            return Err(AccessError::OutOfGrid {
                p,
                shape: self.grid.shape(),
            });
        }
        let i = self.map.index(p);
        self.store.values_mut()[i] = value;

        Ok(())
    }

    /// Writes `value` at linear index `i`. The expected pattern for parallel producers is
    /// disjoint linear indices per worker; this is the per-slot write they use.
    pub fn set_linear(&mut self, i: usize, value: E) -> Result<(), AccessError> {
        let len = self.store.len();
        let slot = self
            .store
            .values_mut()
            .get_mut(i)
            .ok_or(AccessError::IndexOutOfRange { index: i, len })?;
        *slot = value;

        Ok(())
    }

    /// Writes `value` at voxel `p`, converting from the caller's element type `T`.
    pub fn set_as<T: Element>(&mut self, p: Point3i, value: T) -> Result<(), AccessError> {
        check_lanes::<E, T>()?;

        self.set(p, cast_element(value))
    }

    /// Sets every voxel to `value`.
    pub fn fill(&mut self, value: E) {
        for v in self.store.values_mut() {
            *v = value;
        }
    }

    /// Sets each voxel to the value of `f` at its coordinates.
    pub fn fill_with(&mut self, mut f: impl FnMut(Point3i) -> E) {
        let map = self.map;
        for (i, v) in self.store.values_mut().iter_mut().enumerate() {
            *v = f(map.coords(i));
        }
    }

    /// Visits every voxel in linear order with mutable access.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(Point3i, &mut E)) {
        let map = self.map;
        for (i, v) in self.store.values_mut().iter_mut().enumerate() {
            f(map.coords(i), v);
        }
    }

    /// A conversion proxy for the slot at voxel `p`.
    pub fn proxy(&mut self, p: Point3i) -> Result<TypedProxy<'_, E>, AccessError> {
        if !self.grid.contains(p) {
            return Err(AccessError::OutOfGrid {
                p,
                shape: self.grid.shape(),
            });
        }
        let i = self.map.index(p);

        Ok(TypedProxy::new(&mut self.store.values_mut()[i]))
    }

    /// A conversion proxy for the slot at linear index `i`.
    pub fn proxy_linear(&mut self, i: usize) -> Result<TypedProxy<'_, E>, AccessError> {
        let len = self.store.len();
        let slot = self
            .store
            .values_mut()
            .get_mut(i)
            .ok_or(AccessError::IndexOutOfRange { index: i, len })?;

        Ok(TypedProxy::new(slot))
    }
}
