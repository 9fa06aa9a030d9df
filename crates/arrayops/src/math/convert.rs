//! Overflow-safe scalar conversion.
//!
//! ## Purpose
//!
//! This module converts a dynamically typed [`Scalar`] into the native type of
//! a buffer, failing instead of truncating, wrapping or saturating.
//!
//! ## Design notes
//!
//! * **Integers**: The exact value must lie in `[MIN, MAX]`; a float scalar is
//!   never accepted for an integer buffer, even when it is integral.
//! * **Floats**: Finite magnitudes beyond the largest finite value are rejected.
//!   Whether NaN and infinities pass is decided by the caller via
//!   [`NonFinite`]: reductions reject them, search and transform accept them.
//! * **Pure**: No side effects.
//!
//! ## Invariants
//!
//! * `convert::<T>(Scalar::Int(MIN))` and `MAX` always succeed for integers;
//!   `MIN - 1` and `MAX + 1` always fail with a range error.

// External dependencies
use num_traits::{Bounded, Float, NumCast};

// Internal dependencies
use crate::math::element::Element;
use crate::primitives::errors::ArrayError;
use crate::primitives::kind::ElementKind;
use crate::primitives::scalar::Scalar;

/// Treatment of NaN and infinite scalars for float buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    /// NaN and infinities are range errors.
    Reject,

    /// NaN and infinities pass through unchanged.
    Allow,
}

/// Convert a scalar to the element type `T`.
#[inline]
pub fn convert<T: Element>(scalar: Scalar, non_finite: NonFinite) -> Result<T, ArrayError> {
    T::from_scalar(scalar, non_finite)
}

/// Convert a scalar for a kind known only at run time.
///
/// Returns the value the buffer would store, lifted back to a [`Scalar`]
/// (floats may round to the nearest representable value).
pub fn convert_dyn(
    kind: ElementKind,
    scalar: Scalar,
    non_finite: NonFinite,
) -> Result<Scalar, ArrayError> {
    fn lift<T: Element>(scalar: Scalar, non_finite: NonFinite) -> Result<Scalar, ArrayError> {
        convert::<T>(scalar, non_finite).map(Element::to_scalar)
    }

    match kind {
        ElementKind::I8 => lift::<i8>(scalar, non_finite),
        ElementKind::U8 => lift::<u8>(scalar, non_finite),
        ElementKind::I16 => lift::<i16>(scalar, non_finite),
        ElementKind::U16 => lift::<u16>(scalar, non_finite),
        ElementKind::I32 => lift::<i32>(scalar, non_finite),
        ElementKind::U32 => lift::<u32>(scalar, non_finite),
        ElementKind::I64 => lift::<i64>(scalar, non_finite),
        ElementKind::U64 => lift::<u64>(scalar, non_finite),
        ElementKind::F32 => lift::<f32>(scalar, non_finite),
        ElementKind::F64 => lift::<f64>(scalar, non_finite),
    }
}

/// Conversion rule for integer element types.
pub(crate) fn integer_from_scalar<T: Element>(scalar: Scalar) -> Result<T, ArrayError> {
    match scalar {
        Scalar::Int(v) => <T as NumCast>::from(v).ok_or(ArrayError::OutOfRange {
            kind: T::KIND,
            value: scalar,
        }),
        Scalar::Float(_) => Err(ArrayError::ScalarKindMismatch {
            kind: T::KIND,
            found: scalar.type_name(),
        }),
    }
}

/// Conversion rule for float element types.
pub(crate) fn float_from_scalar<T: Element>(
    scalar: Scalar,
    non_finite: NonFinite,
) -> Result<T, ArrayError> {
    let out_of_range = ArrayError::OutOfRange {
        kind: T::KIND,
        value: scalar,
    };
    let value = match scalar {
        Scalar::Int(v) => v as f64,
        Scalar::Float(v) => v,
    };

    if !value.is_finite() {
        return match non_finite {
            NonFinite::Reject => Err(out_of_range),
            NonFinite::Allow => <T as NumCast>::from(value).ok_or(out_of_range),
        };
    }

    let max = largest_finite::<T>();
    if Float::abs(value) > max {
        return Err(out_of_range);
    }
    <T as NumCast>::from(value).ok_or(out_of_range)
}

/// Largest finite magnitude of a float element type, widened to `f64`.
#[inline]
fn largest_finite<T: Element>() -> f64 {
    <T as Bounded>::max_value().to_f64().unwrap_or(f64::MAX)
}
