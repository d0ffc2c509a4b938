//! Scalar and element types a value store can hold.
//!
//! A store element is either a single scalar or a fixed-size vector of 2 to 4 scalar lanes.
//! The set of scalars is closed: the 8 integer widths plus `f32`/`f64`, matching the type
//! codes a file header carries. `ScalarTypeId` is the runtime tag; the `Scalar` and `Element`
//! traits are the compile-time side that visitors get resolved to.

use crate::ResolveError;

use bytemuck::Pod;
use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The runtime tag for one of the ten supported scalar types.
///
/// The discriminants are the on-disk type codes. Constructing a store from a code outside
/// this table fails with [`ResolveError::UnknownTypeCode`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum ScalarTypeId {
    U8 = 0,
    I8 = 1,
    U16 = 2,
    I16 = 3,
    U32 = 4,
    I32 = 5,
    U64 = 6,
    I64 = 7,
    F32 = 8,
    F64 = 9,
}

impl ScalarTypeId {
    pub const ALL: [ScalarTypeId; 10] = [
        ScalarTypeId::U8,
        ScalarTypeId::I8,
        ScalarTypeId::U16,
        ScalarTypeId::I16,
        ScalarTypeId::U32,
        ScalarTypeId::I32,
        ScalarTypeId::U64,
        ScalarTypeId::I64,
        ScalarTypeId::F32,
        ScalarTypeId::F64,
    ];

    /// Looks up the scalar type denoted by a file-header type code.
    pub fn from_code(code: u8) -> Result<Self, ResolveError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(ResolveError::UnknownTypeCode(code))
    }

    /// The file-header type code denoting this scalar type. Inverse of [`Self::from_code`].
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Size of one scalar of this type in bytes.
    pub fn size_of(self) -> usize {
        match self {
            ScalarTypeId::U8 | ScalarTypeId::I8 => 1,
            ScalarTypeId::U16 | ScalarTypeId::I16 => 2,
            ScalarTypeId::U32 | ScalarTypeId::I32 | ScalarTypeId::F32 => 4,
            ScalarTypeId::U64 | ScalarTypeId::I64 | ScalarTypeId::F64 => 8,
        }
    }
}

/// The number of scalar lanes in a store element.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum LaneCount {
    X1 = 1,
    X2 = 2,
    X3 = 3,
    X4 = 4,
}

impl LaneCount {
    /// The lane count for a declared per-voxel vector width.
    pub fn from_dim(dim: usize) -> Result<Self, ResolveError> {
        match dim {
            1 => Ok(LaneCount::X1),
            2 => Ok(LaneCount::X2),
            3 => Ok(LaneCount::X3),
            4 => Ok(LaneCount::X4),
            _ => Err(ResolveError::UnsupportedLaneCount(dim)),
        }
    }

    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }
}

/// One of the ten concrete scalar types.
///
/// `to_f64`/`from_f64` are the value-conversion seam used by [`crate::TypedProxy`] and the
/// interpolator; `from_f64` has `as`-cast semantics (float-to-int saturates). Conversions
/// routed through `f64` are exact except for 64-bit integers beyond 2^53.
pub trait Scalar: Pod + Debug + PartialEq + PartialOrd + Send + Sync {
    const ID: ScalarTypeId;
    const ZERO: Self;

    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($( $t:ty => $id:ident ),*) => {
        $(
            impl Scalar for $t {
                const ID: ScalarTypeId = ScalarTypeId::$id;
                const ZERO: Self = 0 as $t;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }

            impl Element for $t {
                type Scalar = $t;

                const LANES: LaneCount = LaneCount::X1;
                const ZERO: Self = 0 as $t;

                #[inline]
                fn lane(&self, i: usize) -> $t {
                    debug_assert_eq!(i, 0);
                    *self
                }

                #[inline]
                fn set_lane(&mut self, i: usize, value: $t) {
                    debug_assert_eq!(i, 0);
                    *self = value;
                }
            }
        )*
    };
}

impl_scalar!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64
);

/// A concrete store element: a scalar or a fixed-size vector of scalars.
///
/// This is a closed trait; the implementors are exactly the ten scalars and their
/// `[S; 2]`/`[S; 3]`/`[S; 4]` vector forms, the 40 types a structural sample can resolve to.
pub trait Element: Pod + Debug + PartialEq + Send + Sync {
    type Scalar: Scalar;

    const LANES: LaneCount;
    const ZERO: Self;

    fn lane(&self, i: usize) -> Self::Scalar;
    fn set_lane(&mut self, i: usize, value: Self::Scalar);
}

macro_rules! impl_vector_element {
    ($( $dim:literal => $lanes:ident ),*) => {
        $(
            impl<S: Scalar> Element for [S; $dim] {
                type Scalar = S;

                const LANES: LaneCount = LaneCount::$lanes;
                const ZERO: Self = [S::ZERO; $dim];

                #[inline]
                fn lane(&self, i: usize) -> S {
                    self[i]
                }

                #[inline]
                fn set_lane(&mut self, i: usize, value: S) {
                    self[i] = value;
                }
            }
        )*
    };
}

impl_vector_element!(2 => X2, 3 => X3, 4 => X4);

/// Converts between two element types of the same lane count, lane by lane, with the scalar
/// conversion rules of [`Scalar::from_f64`].
///
/// Lane counts must match; the typed entry points ([`crate::TypedProxy`],
/// `DataAccess::get_as`) check this before calling.
#[inline]
pub fn cast_element<Src: Element, Dst: Element>(src: Src) -> Dst {
    debug_assert_eq!(Src::LANES, Dst::LANES);

    let mut dst = Dst::ZERO;
    for i in 0..Dst::LANES.count() {
        dst.set_lane(i, Dst::Scalar::from_f64(src.lane(i).to_f64()));
    }

    dst
}
