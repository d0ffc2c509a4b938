//! Runtime-to-compile-time structural type resolution.
//!
//! A [`StructuralSample`] records which alternative was picked for each structural parameter
//! of an element type: the scalar choice and the lane-count choice. It is captured once, when
//! a store is built from file-header codes or from a real element type, and later redispatches
//! visitors to the concrete compile-time type without re-inspecting the store.

use crate::{Element, LaneCount, ResolveError, Scalar, ScalarTypeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A caller-supplied visitor whose `visit` gets instantiated with the concrete element type a
/// sample resolves to.
///
/// `visit` is resolved for every combination the structural parameters enumerate (the ten
/// scalars times lane counts 1 through 4), so the dispatch is statically exhaustive.
pub trait TypeVisitor {
    type Output;

    fn visit<E: Element>(self) -> Self::Output;
}

/// An ordered tuple of structural parameter choices: (scalar type, lane count).
///
/// Every representable combination maps to exactly one concrete element type, and
/// [`StructuralSample::of`] reproduces the sample that resolves back to that type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct StructuralSample {
    scalar: ScalarTypeId,
    lanes: LaneCount,
}

impl StructuralSample {
    #[inline]
    pub fn new(scalar: ScalarTypeId, lanes: LaneCount) -> Self {
        Self { scalar, lanes }
    }

    /// Builds a sample from a file-header type code and a declared per-voxel vector width.
    /// Unrecognized codes and widths are construction errors.
    pub fn from_type_code(code: u8, dim: usize) -> Result<Self, ResolveError> {
        Ok(Self {
            scalar: ScalarTypeId::from_code(code)?,
            lanes: LaneCount::from_dim(dim)?,
        })
    }

    /// The sample that resolves to the concrete element type `E`.
    #[inline]
    pub fn of<E: Element>() -> Self {
        Self {
            scalar: E::Scalar::ID,
            lanes: E::LANES,
        }
    }

    #[inline]
    pub fn scalar(&self) -> ScalarTypeId {
        self.scalar
    }

    #[inline]
    pub fn lanes(&self) -> LaneCount {
        self.lanes
    }

    /// Size of one element in bytes.
    #[inline]
    pub fn bytes_per_element(&self) -> usize {
        self.scalar.size_of() * self.lanes.count()
    }

    /// Resolves the structural parameters left to right and invokes the visitor with the
    /// fully resolved concrete element type. Pure dispatch, no side effects.
    pub fn resolve<V: TypeVisitor>(&self, visitor: V) -> V::Output {
        macro_rules! dispatch_lanes {
            ($scalar:ty) => {
                match self.lanes {
                    LaneCount::X1 => visitor.visit::<$scalar>(),
                    LaneCount::X2 => visitor.visit::<[$scalar; 2]>(),
                    LaneCount::X3 => visitor.visit::<[$scalar; 3]>(),
                    LaneCount::X4 => visitor.visit::<[$scalar; 4]>(),
                }
            };
        }

        match self.scalar {
            ScalarTypeId::U8 => dispatch_lanes!(u8),
            ScalarTypeId::I8 => dispatch_lanes!(i8),
            ScalarTypeId::U16 => dispatch_lanes!(u16),
            ScalarTypeId::I16 => dispatch_lanes!(i16),
            ScalarTypeId::U32 => dispatch_lanes!(u32),
            ScalarTypeId::I32 => dispatch_lanes!(i32),
            ScalarTypeId::U64 => dispatch_lanes!(u64),
            ScalarTypeId::I64 => dispatch_lanes!(i64),
            ScalarTypeId::F32 => dispatch_lanes!(f32),
            ScalarTypeId::F64 => dispatch_lanes!(f64),
        }
    }
}
