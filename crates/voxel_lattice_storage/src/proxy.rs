use crate::{cast_element, AccessError, Element};

/// A reference into one store slot that reads and writes through a caller-chosen element
/// type, converting at the boundary.
///
/// This lets callers process data as, say, `f64` without knowing whether storage is `i16` or
/// `f32`. Conversions are explicit `get`/`set` calls (no implicit conversion operators) with
/// the scalar rules of [`crate::Scalar::from_f64`]; the chosen type must have the same lane
/// count as the native one.
#[derive(Debug)]
pub struct TypedProxy<'a, E> {
    slot: &'a mut E,
}

impl<'a, E: Element> TypedProxy<'a, E> {
    pub(crate) fn new(slot: &'a mut E) -> Self {
        Self { slot }
    }

    /// The slot's value converted to `T`.
    pub fn get<T: Element>(&self) -> Result<T, AccessError> {
        check_lanes::<E, T>()?;

        Ok(cast_element(*self.slot))
    }

    /// Stores `value` converted to the native element type.
    pub fn set<T: Element>(&mut self, value: T) -> Result<(), AccessError> {
        check_lanes::<E, T>()?;
        *self.slot = cast_element(value);

        Ok(())
    }

    /// The value in the store's native type, without conversion.
    #[inline]
    pub fn native(&self) -> E {
        *self.slot
    }

    #[inline]
    pub fn native_mut(&mut self) -> &mut E {
        self.slot
    }
}

pub(crate) fn check_lanes<Native: Element, Chosen: Element>() -> Result<(), AccessError> {
    if Native::LANES == Chosen::LANES {
        Ok(())
    } else {
        Err(AccessError::LaneMismatch {
            requested: Chosen::LANES.count(),
            actual: Native::LANES.count(),
        })
    }
}
