use crate::Element;

use voxel_lattice_core::IndexMap3;

/// Visits every voxel of a store in strictly increasing linear-index order, yielding
/// `(linear_index, value)` pairs. Exactly `grid.num_voxels()` items.
#[derive(Clone, Debug)]
pub struct VoxelIter<'a, E> {
    values: &'a [E],
    map: IndexMap3,
    pos: usize,
}

impl<'a, E: Element> VoxelIter<'a, E> {
    pub(crate) fn new(values: &'a [E], map: IndexMap3) -> Self {
        Self {
            values,
            map,
            pos: 0,
        }
    }

    /// The index map for recovering voxel coordinates from yielded linear indices.
    #[inline]
    pub fn index_map(&self) -> IndexMap3 {
        self.map
    }

    /// The linear index the next call to `next` will yield.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, E: Element> Iterator for VoxelIter<'a, E> {
    type Item = (usize, E);

    #[inline]
    fn next(&mut self) -> Option<(usize, E)> {
        let value = *self.values.get(self.pos)?;
        let i = self.pos;
        self.pos += 1;

        Some((i, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.pos;

        (remaining, Some(remaining))
    }
}

impl<'a, E: Element> ExactSizeIterator for VoxelIter<'a, E> {}
