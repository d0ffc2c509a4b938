use crate::Point3i;

use itertools::iproduct;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable, ordered list of relative voxel offsets defining which voxels count as
/// "nearby". Constructed once and reused across many neighborhood traversals.
///
/// The built-in patterns order their offsets z-major ascending (sorted by `(dz, dy, dx)`),
/// which matches the linear storage order of the offsets' target voxels.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Neighborhood {
    offsets: Vec<Point3i>,
}

impl Neighborhood {
    /// A neighborhood from an arbitrary offset list, traversed in the given order.
    pub fn from_offsets(offsets: Vec<Point3i>) -> Self {
        Self { offsets }
    }

    /// The Moore neighborhood of the given radius: all offsets with `max(|dx|, |dy|, |dz|)`
    /// in `1..=radius`. Radius 1 gives the 26 surrounding voxels.
    pub fn moore(radius: i32) -> Self {
        assert!(radius > 0, "neighborhood radius must be positive");

        let r = -radius..=radius;
        let offsets = iproduct!(r.clone(), r.clone(), r)
            .map(|(dz, dy, dx)| Point3i::new(dx, dy, dz))
            .filter(|&p| p != Point3i::ZERO)
            .collect();

        Self { offsets }
    }

    /// The von Neumann neighborhood of the given radius: all offsets with
    /// `|dx| + |dy| + |dz|` in `1..=radius`. Radius 1 gives the 6 face neighbors.
    pub fn von_neumann(radius: i32) -> Self {
        assert!(radius > 0, "neighborhood radius must be positive");

        let r = -radius..=radius;
        let offsets = iproduct!(r.clone(), r.clone(), r)
            .map(|(dz, dy, dx)| Point3i::new(dx, dy, dz))
            .filter(|&p| {
                let l1 = p.x().abs() + p.y().abs() + p.z().abs();
                l1 > 0 && l1 <= radius
            })
            .collect();

        Self { offsets }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[inline]
    pub fn offsets(&self) -> &[Point3i] {
        &self.offsets
    }
}
