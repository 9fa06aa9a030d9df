//! Numeric element trait implemented by every supported native type.
//!
//! ## Purpose
//!
//! [`Element`] is the single abstraction every kernel is generic over. It
//! exposes the kind tag, the representable range, scalar conversion, the
//! per-type arithmetic rules, and typed access to dynamic buffer views.
//!
//! ## Design notes
//!
//! * **Sealed**: Implemented for the ten native numeric types only.
//! * **Macro-generated impls**: One macro per family (integer, float) keeps
//!   the per-type code to a single line each.
//! * **Generic arithmetic**: Integer rules are written once over
//!   `num_traits::PrimInt`, float rules once over `num_traits::Float`.
//!
//! ## Key concepts
//!
//! * **Checked integer arithmetic**: overflow and zero divisors are domain
//!   errors; suppressed mode wraps on overflow but a zero divisor still fails.
//! * **Checked float arithmetic**: non-finite inputs or results are domain
//!   errors; suppressed mode returns the raw IEEE-754 result.
//!
//! ## Invariants
//!
//! * `T::KIND` names the buffer variant `T::view` accepts.
//! * `combine` never panics.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{
    Bounded, CheckedRem, Float, NumCast, PrimInt, WrappingAdd, WrappingMul, WrappingSub,
};

// Internal dependencies
use crate::math::convert::{self, NonFinite};
use crate::math::operators::{ErrorMode, MathOp};
use crate::primitives::buffer::{ArrayMut, ArrayRef};
use crate::primitives::errors::ArrayError;
use crate::primitives::kind::ElementKind;
use crate::primitives::scalar::Scalar;

mod private {
    pub trait Sealed {}
}

// ============================================================================
// Element Trait
// ============================================================================

/// A fixed-width native numeric type a buffer may hold.
pub trait Element:
    Copy + PartialOrd + Debug + Display + Bounded + NumCast + Send + Sync + 'static + private::Sealed
{
    /// Registry entry for this type.
    const KIND: ElementKind;

    /// Convert a dynamic scalar, validating range, kind and finiteness.
    fn from_scalar(scalar: Scalar, non_finite: NonFinite) -> Result<Self, ArrayError>;

    /// Apply `lhs OP rhs`, returning `None` on a domain error.
    fn combine(op: MathOp, lhs: Self, rhs: Self, mode: ErrorMode) -> Option<Self>;

    /// Whether the value is NaN. Always `false` for integers.
    fn is_nan_value(self) -> bool;

    /// Typed access to a shared view of matching kind.
    fn view(buf: ArrayRef<'_>) -> Option<&[Self]>;

    /// Typed access to a mutable view of matching kind.
    fn view_mut(buf: ArrayMut<'_>) -> Option<&mut [Self]>;

    /// Wrap a typed slice as a dynamic view.
    fn wrap(s: &[Self]) -> ArrayRef<'_>;

    /// Wrap a typed mutable slice as a dynamic view.
    fn wrap_mut(s: &mut [Self]) -> ArrayMut<'_>;

    /// Lift a value into a dynamic scalar without loss.
    fn to_scalar(self) -> Scalar;
}

// ============================================================================
// Arithmetic Rules
// ============================================================================

/// Integer arithmetic shared by all integer kinds.
#[inline]
fn integer_combine<T>(op: MathOp, lhs: T, rhs: T, mode: ErrorMode) -> Option<T>
where
    T: PrimInt + CheckedRem + WrappingAdd + WrappingSub + WrappingMul,
{
    match (op, mode) {
        (MathOp::Add, ErrorMode::Checked) => lhs.checked_add(&rhs),
        (MathOp::Add, ErrorMode::Suppressed) => Some(lhs.wrapping_add(&rhs)),
        (MathOp::Sub, ErrorMode::Checked) => lhs.checked_sub(&rhs),
        (MathOp::Sub, ErrorMode::Suppressed) => Some(lhs.wrapping_sub(&rhs)),
        (MathOp::Mul, ErrorMode::Checked) => lhs.checked_mul(&rhs),
        (MathOp::Mul, ErrorMode::Suppressed) => Some(lhs.wrapping_mul(&rhs)),
        (MathOp::Div, mode) => floor_div(lhs, rhs, mode),
        (MathOp::Fmod, _) => truncated_rem(lhs, rhs),
    }
}

/// Quotient rounded towards negative infinity.
#[inline]
fn floor_div<T: PrimInt>(lhs: T, rhs: T, mode: ErrorMode) -> Option<T> {
    if rhs.is_zero() {
        return None;
    }
    let quotient = match lhs.checked_div(&rhs) {
        Some(q) => q,
        // MIN / -1 is the only overflowing quotient; it wraps back to MIN.
        None => {
            return match mode {
                ErrorMode::Checked => None,
                ErrorMode::Suppressed => Some(lhs),
            }
        }
    };
    let remainder = lhs - quotient * rhs;
    if !remainder.is_zero() && ((remainder < T::zero()) != (rhs < T::zero())) {
        Some(quotient - T::one())
    } else {
        Some(quotient)
    }
}

/// Remainder with the sign of the dividend.
#[inline]
fn truncated_rem<T: PrimInt + CheckedRem>(lhs: T, rhs: T) -> Option<T> {
    if rhs.is_zero() {
        return None;
    }
    // MIN % -1 overflows in hardware but is exactly zero.
    Some(lhs.checked_rem(&rhs).unwrap_or_else(T::zero))
}

/// Float arithmetic shared by both float kinds.
#[inline]
fn float_combine<T: Float>(op: MathOp, lhs: T, rhs: T, mode: ErrorMode) -> Option<T> {
    let result = match op {
        MathOp::Add => lhs + rhs,
        MathOp::Sub => lhs - rhs,
        MathOp::Mul => lhs * rhs,
        MathOp::Div => lhs / rhs,
        MathOp::Fmod => lhs % rhs,
    };
    match mode {
        ErrorMode::Suppressed => Some(result),
        ErrorMode::Checked => {
            // NaN is always a domain error; an infinity only when both
            // inputs were finite (overflow, zero divisor).
            let overflowed = result.is_infinite() && lhs.is_finite() && rhs.is_finite();
            if result.is_nan() || overflowed {
                None
            } else {
                Some(result)
            }
        }
    }
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_integer_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const KIND: ElementKind = ElementKind::$variant;

                #[inline]
                fn from_scalar(scalar: Scalar, _non_finite: NonFinite) -> Result<Self, ArrayError> {
                    convert::integer_from_scalar(scalar)
                }

                #[inline(always)]
                fn combine(op: MathOp, lhs: Self, rhs: Self, mode: ErrorMode) -> Option<Self> {
                    integer_combine(op, lhs, rhs, mode)
                }

                #[inline(always)]
                fn is_nan_value(self) -> bool {
                    false
                }

                fn view(buf: ArrayRef<'_>) -> Option<&[Self]> {
                    match buf {
                        ArrayRef::$variant(s) => Some(s),
                        _ => None,
                    }
                }

                fn view_mut(buf: ArrayMut<'_>) -> Option<&mut [Self]> {
                    match buf {
                        ArrayMut::$variant(s) => Some(s),
                        _ => None,
                    }
                }

                #[inline]
                fn wrap(s: &[Self]) -> ArrayRef<'_> {
                    ArrayRef::$variant(s)
                }

                #[inline]
                fn wrap_mut(s: &mut [Self]) -> ArrayMut<'_> {
                    ArrayMut::$variant(s)
                }

                #[inline]
                fn to_scalar(self) -> Scalar {
                    Scalar::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const KIND: ElementKind = ElementKind::$variant;

                #[inline]
                fn from_scalar(scalar: Scalar, non_finite: NonFinite) -> Result<Self, ArrayError> {
                    convert::float_from_scalar(scalar, non_finite)
                }

                #[inline(always)]
                fn combine(op: MathOp, lhs: Self, rhs: Self, mode: ErrorMode) -> Option<Self> {
                    float_combine(op, lhs, rhs, mode)
                }

                #[inline(always)]
                fn is_nan_value(self) -> bool {
                    self.is_nan()
                }

                fn view(buf: ArrayRef<'_>) -> Option<&[Self]> {
                    match buf {
                        ArrayRef::$variant(s) => Some(s),
                        _ => None,
                    }
                }

                fn view_mut(buf: ArrayMut<'_>) -> Option<&mut [Self]> {
                    match buf {
                        ArrayMut::$variant(s) => Some(s),
                        _ => None,
                    }
                }

                #[inline]
                fn wrap(s: &[Self]) -> ArrayRef<'_> {
                    ArrayRef::$variant(s)
                }

                #[inline]
                fn wrap_mut(s: &mut [Self]) -> ArrayMut<'_> {
                    ArrayMut::$variant(s)
                }

                #[inline]
                fn to_scalar(self) -> Scalar {
                    Scalar::from(self)
                }
            }
        )*
    };
}

impl_integer_element!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
);

impl_float_element!(f32 => F32, f64 => F64);
