use crate::Element;

use voxel_lattice_core::{RegularGrid3, SliceDir};

/// Visits exactly one axis-aligned 2D slice of a store, yielding `(linear_index, value)`
/// pairs. Exactly `grid.slice_size(dir)` items.
///
/// The slice is modeled as a 1D sequence of fixed-size rows: the position advances by `incr1`
/// along a row, and by `incr2` once every `row_len` elements (the wrap increment). Both
/// increments are computed once at construction from `(dir, slice_index)`, so arbitrary
/// orientations need only linear arithmetic per step, with no nested loops per access.
#[derive(Clone, Debug)]
pub struct SliceIter<'a, E> {
    values: &'a [E],
    pos: usize,
    row_len: usize,
    in_row: usize,
    incr1: usize,
    incr2: usize,
    remaining: usize,
}

impl<'a, E: Element> SliceIter<'a, E> {
    /// `slice_index` must already be validated against `grid.num_slices(dir)`.
    pub(crate) fn new(
        values: &'a [E],
        grid: &RegularGrid3,
        dir: SliceDir,
        slice_index: usize,
    ) -> Self {
        let [nx, ny, _nz] = grid.shape().0;
        let nx = nx as usize;
        let ny = ny as usize;
        let nxy = nx * ny;

        // Row length, in-row increment, and the wrap increment that jumps from the end of one
        // row to the start of the next.
        let (start, row_len, incr1, incr2) = match dir {
            SliceDir::Xy => (slice_index * nxy, nx, 1, 1),
            SliceDir::Xz => (slice_index * nx, nx, 1, nxy - nx + 1),
            SliceDir::Yz => (slice_index, ny, nx, nxy - (ny - 1) * nx),
        };

        Self {
            values,
            pos: start,
            row_len,
            in_row: 0,
            incr1,
            incr2,
            remaining: grid.slice_size(dir),
        }
    }

    /// The linear index the next call to `next` will yield.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, E: Element> Iterator for SliceIter<'a, E> {
    type Item = (usize, E);

    #[inline]
    fn next(&mut self) -> Option<(usize, E)> {
        if self.remaining == 0 {
            return None;
        }

        let i = self.pos;
        let value = self.values[i];

        self.in_row += 1;
        if self.in_row == self.row_len {
            self.in_row = 0;
            self.pos += self.incr2;
        } else {
            self.pos += self.incr1;
        }
        self.remaining -= 1;

        Some((i, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E: Element> ExactSizeIterator for SliceIter<'a, E> {}
