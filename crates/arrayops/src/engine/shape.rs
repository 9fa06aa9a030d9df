//! Call-shape resolution.
//!
//! ## Purpose
//!
//! A caller may pass a buffer or a scalar in either operand position. This
//! module decides which [`CallShape`] was supplied, which element kind the
//! call runs at, and, once the kind is fixed, turns the dynamic operands into
//! the typed forms the kernels consume.
//!
//! ## Design notes
//!
//! * **Two steps**: [`resolve`] only inspects kinds, so lengths can be checked
//!   before any scalar is converted. [`typed_operands`] and
//!   [`typed_transform`] then convert scalars and borrow typed slices.
//! * **In place**: Without a destination a transform writes into the buffer
//!   operand (the first one when both are buffers), which is read through
//!   [`Source::Output`]. A buffer combined with itself reads both sides
//!   that way ([`typed_self`]).
//!
//! ## Invariants
//!
//! * At least one operand is a buffer; two scalars are rejected.
//! * All buffers of a call share one kind (search destinations excepted).
//! * An in-place target is always a writable buffer.

// Internal dependencies
use crate::algorithms::operands::{CallShape, Operands, Source};
use crate::engine::validator::Validator;
use crate::math::convert::{convert, NonFinite};
use crate::math::element::Element;
use crate::primitives::buffer::{ArrayMut, ArrayRef};
use crate::primitives::errors::ArrayError;
use crate::primitives::kind::ElementKind;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Dynamic Operands
// ============================================================================

/// A read-only operand: a buffer of any kind, or a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// A buffer operand.
    Buffer(ArrayRef<'a>),
    /// A scalar operand.
    Scalar(Scalar),
}

/// A transform operand, which may receive the results when no destination
/// is given.
#[derive(Debug, PartialEq)]
pub enum OperandMut<'a> {
    /// A writable buffer operand.
    Buffer(ArrayMut<'a>),
    /// A buffer operand that is only read.
    ReadOnly(ArrayRef<'a>),
    /// A scalar operand.
    Scalar(Scalar),
}

impl<'a> Operand<'a> {
    /// Buffer operand from a typed slice.
    pub fn buffer<T: Element>(s: &'a [T]) -> Self {
        Operand::Buffer(T::wrap(s))
    }

    /// Scalar operand from a typed value.
    pub fn scalar<T: Element>(v: T) -> Self {
        Operand::Scalar(v.to_scalar())
    }

    /// Kind of the buffer, or `None` for a scalar.
    pub fn buffer_kind(&self) -> Option<ElementKind> {
        match self {
            Operand::Buffer(b) => Some(b.kind()),
            Operand::Scalar(_) => None,
        }
    }

    /// Length of the buffer, or `None` for a scalar.
    pub fn buffer_len(&self) -> Option<usize> {
        match self {
            Operand::Buffer(b) => Some(b.len()),
            Operand::Scalar(_) => None,
        }
    }
}

impl<'a> OperandMut<'a> {
    /// Writable buffer operand from a typed slice.
    pub fn buffer<T: Element>(s: &'a mut [T]) -> Self {
        OperandMut::Buffer(T::wrap_mut(s))
    }

    /// Read-only buffer operand from a typed slice.
    pub fn read_only<T: Element>(s: &'a [T]) -> Self {
        OperandMut::ReadOnly(T::wrap(s))
    }

    /// Scalar operand from a typed value.
    pub fn scalar<T: Element>(v: T) -> Self {
        OperandMut::Scalar(v.to_scalar())
    }

    /// Kind of the buffer, or `None` for a scalar.
    pub fn buffer_kind(&self) -> Option<ElementKind> {
        match self {
            OperandMut::Buffer(b) => Some(b.kind()),
            OperandMut::ReadOnly(b) => Some(b.kind()),
            OperandMut::Scalar(_) => None,
        }
    }

    /// Length of the buffer, or `None` for a scalar.
    pub fn buffer_len(&self) -> Option<usize> {
        match self {
            OperandMut::Buffer(b) => Some(b.len()),
            OperandMut::ReadOnly(b) => Some(b.len()),
            OperandMut::Scalar(_) => None,
        }
    }

    /// Whether results can be written into this operand.
    pub fn is_writable(&self) -> bool {
        matches!(self, OperandMut::Buffer(_))
    }
}

macro_rules! operand_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a [$t]> for Operand<'a> {
                #[inline]
                fn from(s: &'a [$t]) -> Self {
                    Operand::Buffer(ArrayRef::from(s))
                }
            }

            impl<'a> From<&'a [$t]> for OperandMut<'a> {
                #[inline]
                fn from(s: &'a [$t]) -> Self {
                    OperandMut::ReadOnly(ArrayRef::from(s))
                }
            }

            impl<'a> From<&'a mut [$t]> for OperandMut<'a> {
                #[inline]
                fn from(s: &'a mut [$t]) -> Self {
                    OperandMut::Buffer(ArrayMut::from(s))
                }
            }

            impl<'a> From<$t> for Operand<'a> {
                #[inline]
                fn from(v: $t) -> Self {
                    Operand::Scalar(Scalar::from(v))
                }
            }

            impl<'a> From<$t> for OperandMut<'a> {
                #[inline]
                fn from(v: $t) -> Self {
                    OperandMut::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

operand_from!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl<'a> From<Scalar> for Operand<'a> {
    fn from(s: Scalar) -> Self {
        Operand::Scalar(s)
    }
}

impl<'a> From<Scalar> for OperandMut<'a> {
    fn from(s: Scalar) -> Self {
        OperandMut::Scalar(s)
    }
}

impl<'a> From<ArrayRef<'a>> for Operand<'a> {
    fn from(b: ArrayRef<'a>) -> Self {
        Operand::Buffer(b)
    }
}

impl<'a> From<ArrayRef<'a>> for OperandMut<'a> {
    fn from(b: ArrayRef<'a>) -> Self {
        OperandMut::ReadOnly(b)
    }
}

impl<'a> From<ArrayMut<'a>> for OperandMut<'a> {
    fn from(b: ArrayMut<'a>) -> Self {
        OperandMut::Buffer(b)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Shape and element kind of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Which operand positions hold buffers.
    pub shape: CallShape,
    /// Element kind every buffer operand shares.
    pub kind: ElementKind,
}

/// Classify an operand pair by which positions hold buffers.
pub fn classify(lhs_is_buffer: bool, rhs_is_buffer: bool) -> Result<CallShape, ArrayError> {
    match (lhs_is_buffer, rhs_is_buffer) {
        (true, false) => Ok(CallShape::BufferScalar),
        (false, true) => Ok(CallShape::ScalarBuffer),
        (true, true) => Ok(CallShape::BufferBuffer),
        (false, false) => Err(ArrayError::NoBufferOperand),
    }
}

/// Resolve the shape and kind from the operand kinds (`None` for scalars).
pub fn resolve(lhs: Option<ElementKind>, rhs: Option<ElementKind>) -> Result<Resolved, ArrayError> {
    let shape = classify(lhs.is_some(), rhs.is_some())?;
    let kind = match (lhs, rhs) {
        (Some(a), Some(b)) => {
            Validator::validate_kind(a, b)?;
            a
        }
        (Some(k), None) | (None, Some(k)) => k,
        (None, None) => return Err(ArrayError::NoBufferOperand),
    };
    Ok(Resolved { shape, kind })
}

/// The operand an in-place transform writes into.
pub fn in_place_target<'o, 'a>(
    shape: CallShape,
    lhs: &'o OperandMut<'a>,
    rhs: &'o OperandMut<'a>,
) -> &'o OperandMut<'a> {
    match shape {
        CallShape::BufferScalar | CallShape::BufferBuffer => lhs,
        CallShape::ScalarBuffer => rhs,
    }
}

// ============================================================================
// Typed Resolution
// ============================================================================

fn typed_view<T: Element>(buf: ArrayRef<'_>) -> Result<&[T], ArrayError> {
    let found = buf.kind();
    T::view(buf).ok_or(ArrayError::KindMismatch {
        expected: T::KIND,
        found,
    })
}

fn typed_view_mut<T: Element>(buf: ArrayMut<'_>) -> Result<&mut [T], ArrayError> {
    let found = buf.kind();
    T::view_mut(buf).ok_or(ArrayError::KindMismatch {
        expected: T::KIND,
        found,
    })
}

/// Typed comparison operands, with scalars converted under `non_finite`.
pub fn typed_operands<'a, T: Element>(
    lhs: Operand<'a>,
    rhs: Operand<'a>,
    non_finite: NonFinite,
) -> Result<Operands<'a, T>, ArrayError> {
    match (lhs, rhs) {
        (Operand::Buffer(a), Operand::Scalar(s)) => Ok(Operands::BufferScalar(
            typed_view(a)?,
            convert(s, non_finite)?,
        )),
        (Operand::Scalar(s), Operand::Buffer(b)) => Ok(Operands::ScalarBuffer(
            convert(s, non_finite)?,
            typed_view(b)?,
        )),
        (Operand::Buffer(a), Operand::Buffer(b)) => {
            Ok(Operands::BufferBuffer(typed_view(a)?, typed_view(b)?))
        }
        (Operand::Scalar(_), Operand::Scalar(_)) => Err(ArrayError::NoBufferOperand),
    }
}

/// Typed transform sources and output buffer.
///
/// Scalars are converted with NaN and infinities allowed.
#[allow(clippy::type_complexity)]
pub fn typed_transform<'a, T: Element>(
    lhs: OperandMut<'a>,
    rhs: OperandMut<'a>,
    dest: Option<ArrayMut<'a>>,
) -> Result<(Source<'a, T>, Source<'a, T>, &'a mut [T]), ArrayError> {
    if let Some(dest) = dest {
        let lhs = separate_source(lhs)?;
        let rhs = separate_source(rhs)?;
        return Ok((lhs, rhs, typed_view_mut(dest)?));
    }

    match (lhs, rhs) {
        (OperandMut::Buffer(a), rhs) => {
            let rhs = separate_source(rhs)?;
            Ok((Source::Output, rhs, typed_view_mut(a)?))
        }
        (OperandMut::Scalar(s), OperandMut::Buffer(b)) => Ok((
            Source::Scalar(convert(s, NonFinite::Allow)?),
            Source::Output,
            typed_view_mut(b)?,
        )),
        (OperandMut::Scalar(_), OperandMut::Scalar(_)) => Err(ArrayError::NoBufferOperand),
        _ => Err(ArrayError::ReadOnlyBuffer),
    }
}

/// Typed output buffer of a self-combining transform.
pub fn typed_self<T: Element>(buf: ArrayMut<'_>) -> Result<&mut [T], ArrayError> {
    typed_view_mut(buf)
}

fn separate_source<'a, T: Element>(operand: OperandMut<'a>) -> Result<Source<'a, T>, ArrayError> {
    match operand {
        OperandMut::Buffer(b) => {
            let b: &'a [T] = typed_view_mut(b)?;
            Ok(Source::Buffer(b))
        }
        OperandMut::ReadOnly(b) => Ok(Source::Buffer(typed_view(b)?)),
        OperandMut::Scalar(s) => Ok(Source::Scalar(convert(s, NonFinite::Allow)?)),
    }
}
