//! Owned element buffers: the concretely-typed [`ValueStore`] and the type-erased
//! [`ErasedStore`] that carries one store of any of the 40 resolvable element types.

use crate::{Element, LaneCount, ResolveError, ScalarTypeId, StructuralSample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous buffer of exactly one concrete element type. Contents are mutable; size and
/// type are fixed at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ValueStore<E> {
    values: Vec<E>,
}

impl<E: Element> ValueStore<E> {
    /// Takes ownership of an existing buffer.
    #[inline]
    pub fn from_vec(values: Vec<E>) -> Self {
        Self { values }
    }

    /// A store of `len` copies of `value`.
    pub fn fill(value: E, len: usize) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    /// Reinterprets a raw native-endian payload, e.g. the body of a volume file, as a buffer
    /// of `E`. Fails if the payload is not a whole number of elements.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self, ResolveError> {
        let elem_size = core::mem::size_of::<E>();
        if bytes.len() % elem_size != 0 {
            return Err(ResolveError::PayloadSize {
                len: bytes.len(),
                elem_size,
            });
        }

        Ok(Self {
            values: bytemuck::pod_collect_to_vec(bytes),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[E] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [E] {
        &mut self.values
    }

    /// The raw bytes of the buffer, e.g. for writing back out.
    #[inline]
    pub fn raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}

/// A visitor over the concretely-typed store inside an [`ErasedStore`].
pub trait StoreVisitor {
    type Output;

    fn visit<E: Element>(self, store: &ValueStore<E>) -> Self::Output;
}

/// Like [`StoreVisitor`], with mutable access to the store.
pub trait StoreVisitorMut {
    type Output;

    fn visit<E: Element>(self, store: &mut ValueStore<E>) -> Self::Output;
}

macro_rules! erased_store {
    ($( $scalar:ty, $id:ident => $v1:ident, $v2:ident, $v3:ident, $v4:ident; )*) => {
        /// A [`ValueStore`] of one of the 40 resolvable element types, tagged so the concrete
        /// type can be recovered by visitor dispatch.
        ///
        /// This is the closed sum type the runtime type codes resolve into; every variant
        /// corresponds to exactly one `(ScalarTypeId, LaneCount)` combination.
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
        pub enum ErasedStore {
            $(
                $v1(ValueStore<$scalar>),
                $v2(ValueStore<[$scalar; 2]>),
                $v3(ValueStore<[$scalar; 3]>),
                $v4(ValueStore<[$scalar; 4]>),
            )*
        }

        $(
            impl From<ValueStore<$scalar>> for ErasedStore {
                #[inline]
                fn from(store: ValueStore<$scalar>) -> Self {
                    Self::$v1(store)
                }
            }

            impl From<ValueStore<[$scalar; 2]>> for ErasedStore {
                #[inline]
                fn from(store: ValueStore<[$scalar; 2]>) -> Self {
                    Self::$v2(store)
                }
            }

            impl From<ValueStore<[$scalar; 3]>> for ErasedStore {
                #[inline]
                fn from(store: ValueStore<[$scalar; 3]>) -> Self {
                    Self::$v3(store)
                }
            }

            impl From<ValueStore<[$scalar; 4]>> for ErasedStore {
                #[inline]
                fn from(store: ValueStore<[$scalar; 4]>) -> Self {
                    Self::$v4(store)
                }
            }
        )*

        impl ErasedStore {
            /// Builds a zero-filled store of `len` elements of the sampled type.
            pub fn zeroed(sample: StructuralSample, len: usize) -> Self {
                match (sample.scalar(), sample.lanes()) {
                    $(
                        (ScalarTypeId::$id, LaneCount::X1) =>
                            Self::$v1(ValueStore::fill(<$scalar as Element>::ZERO, len)),
                        (ScalarTypeId::$id, LaneCount::X2) =>
                            Self::$v2(ValueStore::fill(<[$scalar; 2] as Element>::ZERO, len)),
                        (ScalarTypeId::$id, LaneCount::X3) =>
                            Self::$v3(ValueStore::fill(<[$scalar; 3] as Element>::ZERO, len)),
                        (ScalarTypeId::$id, LaneCount::X4) =>
                            Self::$v4(ValueStore::fill(<[$scalar; 4] as Element>::ZERO, len)),
                    )*
                }
            }

            /// Reinterprets a raw native-endian payload as a store of the sampled type.
            pub fn from_raw_bytes(
                sample: StructuralSample,
                bytes: &[u8],
            ) -> Result<Self, ResolveError> {
                match (sample.scalar(), sample.lanes()) {
                    $(
                        (ScalarTypeId::$id, LaneCount::X1) =>
                            Ok(Self::$v1(ValueStore::from_raw_bytes(bytes)?)),
                        (ScalarTypeId::$id, LaneCount::X2) =>
                            Ok(Self::$v2(ValueStore::from_raw_bytes(bytes)?)),
                        (ScalarTypeId::$id, LaneCount::X3) =>
                            Ok(Self::$v3(ValueStore::from_raw_bytes(bytes)?)),
                        (ScalarTypeId::$id, LaneCount::X4) =>
                            Ok(Self::$v4(ValueStore::from_raw_bytes(bytes)?)),
                    )*
                }
            }

            /// The structural sample this store was built from.
            pub fn sample(&self) -> StructuralSample {
                match self {
                    $(
                        Self::$v1(_) => StructuralSample::of::<$scalar>(),
                        Self::$v2(_) => StructuralSample::of::<[$scalar; 2]>(),
                        Self::$v3(_) => StructuralSample::of::<[$scalar; 3]>(),
                        Self::$v4(_) => StructuralSample::of::<[$scalar; 4]>(),
                    )*
                }
            }

            /// Element count, the only size exposed through the erased interface.
            pub fn len(&self) -> usize {
                match self {
                    $(
                        Self::$v1(s) => s.len(),
                        Self::$v2(s) => s.len(),
                        Self::$v3(s) => s.len(),
                        Self::$v4(s) => s.len(),
                    )*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Dispatches `visitor` with the store's concrete element type.
            pub fn visit<V: StoreVisitor>(&self, visitor: V) -> V::Output {
                match self {
                    $(
                        Self::$v1(s) => visitor.visit(s),
                        Self::$v2(s) => visitor.visit(s),
                        Self::$v3(s) => visitor.visit(s),
                        Self::$v4(s) => visitor.visit(s),
                    )*
                }
            }

            /// Like [`Self::visit`], with mutable access.
            pub fn visit_mut<V: StoreVisitorMut>(&mut self, visitor: V) -> V::Output {
                match self {
                    $(
                        Self::$v1(s) => visitor.visit(s),
                        Self::$v2(s) => visitor.visit(s),
                        Self::$v3(s) => visitor.visit(s),
                        Self::$v4(s) => visitor.visit(s),
                    )*
                }
            }
        }
    };
}

erased_store! {
    u8,  U8  => U8x1,  U8x2,  U8x3,  U8x4;
    i8,  I8  => I8x1,  I8x2,  I8x3,  I8x4;
    u16, U16 => U16x1, U16x2, U16x3, U16x4;
    i16, I16 => I16x1, I16x2, I16x3, I16x4;
    u32, U32 => U32x1, U32x2, U32x3, U32x4;
    i32, I32 => I32x1, I32x2, I32x3, I32x4;
    u64, U64 => U64x1, U64x2, U64x3, U64x4;
    i64, I64 => I64x1, I64x2, I64x3, I64x4;
    f32, F32 => F32x1, F32x2, F32x3, F32x4;
    f64, F64 => F64x1, F64x2, F64x3, F64x4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_bytes_round_trip() {
        let store = ValueStore::from_vec(vec![1u16, 2, 3, 4]);
        let restored = ValueStore::<u16>::from_raw_bytes(store.raw_bytes()).unwrap();

        assert_eq!(store, restored);
    }

    #[test]
    fn ragged_payload_is_rejected() {
        let err = ValueStore::<u32>::from_raw_bytes(&[0u8; 7]).unwrap_err();

        assert_eq!(
            err,
            ResolveError::PayloadSize {
                len: 7,
                elem_size: 4
            }
        );
    }

    #[test]
    fn erased_store_remembers_its_sample() {
        let erased = ErasedStore::from(ValueStore::fill([0.0f32; 3], 8));

        assert_eq!(erased.sample(), StructuralSample::of::<[f32; 3]>());
        assert_eq!(erased.len(), 8);
    }

    #[test]
    fn erased_from_type_code_resolves_to_the_same_type() {
        struct IsF32;

        impl StoreVisitor for IsF32 {
            type Output = bool;

            fn visit<E: Element>(self, _: &ValueStore<E>) -> bool {
                E::Scalar::ID == ScalarTypeId::F32 && E::LANES == LaneCount::X1
            }
        }

        let sample = StructuralSample::from_type_code(8, 1).unwrap();
        let bytes = bytemuck::cast_slice::<f32, u8>(&[1.0, 2.0]).to_vec();
        let erased = ErasedStore::from_raw_bytes(sample, &bytes).unwrap();

        assert_eq!(erased.len(), 2);
        assert!(erased.visit(IsF32));
    }

    #[test]
    fn zeroed_store_has_sampled_type_and_len() {
        for id in ScalarTypeId::ALL.iter().copied() {
            for dim in 1..=4 {
                let sample = StructuralSample::new(id, LaneCount::from_dim(dim).unwrap());
                let erased = ErasedStore::zeroed(sample, 10);

                assert_eq!(erased.sample(), sample);
                assert_eq!(erased.len(), 10);
            }
        }
    }

    #[test]
    fn visit_mut_can_write_through_the_erased_type() {
        struct Bump;

        impl StoreVisitorMut for Bump {
            type Output = ();

            fn visit<E: Element>(self, store: &mut ValueStore<E>) {
                for v in store.values_mut() {
                    let s = v.lane(0);
                    v.set_lane(0, E::Scalar::from_f64(s.to_f64() + 1.0));
                }
            }
        }

        let mut erased = ErasedStore::zeroed(StructuralSample::of::<i16>(), 3);
        erased.visit_mut(Bump);

        assert_eq!(erased, ErasedStore::from(ValueStore::fill(1i16, 3)));
    }
}
