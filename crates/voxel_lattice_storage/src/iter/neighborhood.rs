use crate::{BoundaryStrategy, Element, Resolved};

use voxel_lattice_core::{IndexMap3, Neighborhood, Point3i, RegularGrid3};

/// Visits the neighbors of one voxel in the order of a [`Neighborhood`]'s offset list,
/// resolving each absolute coordinate through a [`BoundaryStrategy`].
///
/// Neighbors the strategy reports as skipped (the [`crate::IgnoreOutside`] policy) are
/// advanced past automatically, so the yielded sequence can be shorter than
/// `neighborhood.len()`; callers must drive the iterator to exhaustion rather than assume the
/// full offset count.
#[derive(Clone, Debug)]
pub struct NeighborhoodIter<'a, E, B> {
    values: &'a [E],
    grid: &'a RegularGrid3,
    map: IndexMap3,
    center: Point3i,
    neighborhood: &'a Neighborhood,
    strategy: B,
    pos: usize,
}

impl<'a, E: Element, B: BoundaryStrategy<E>> NeighborhoodIter<'a, E, B> {
    pub(crate) fn new(
        values: &'a [E],
        grid: &'a RegularGrid3,
        center: Point3i,
        neighborhood: &'a Neighborhood,
        strategy: B,
    ) -> Self {
        Self {
            values,
            grid,
            map: grid.index_map(),
            center,
            neighborhood,
            strategy,
            pos: 0,
        }
    }

    /// The index into the offset list the next call to `next` will consider.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, E: Element, B: BoundaryStrategy<E>> Iterator for NeighborhoodIter<'a, E, B> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while let Some(&offset) = self.neighborhood.offsets().get(self.pos) {
            self.pos += 1;
            let p = self.center + offset;

            match self.strategy.resolve(self.grid, p) {
                Resolved::Inside(q) => return Some(self.values[self.map.index(q)]),
                Resolved::Substitute(value) => return Some(value),
                Resolved::Skip => continue,
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Skipping strategies can only shrink the sequence.
        (0, Some(self.neighborhood.len() - self.pos))
    }
}
