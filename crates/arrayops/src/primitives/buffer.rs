//! Dynamically typed buffer views.
//!
//! ## Purpose
//!
//! A binding layer holds buffers whose element kind is only known at run time.
//! [`ArrayRef`] and [`ArrayMut`] wrap a borrowed slice of any supported kind so
//! the engine can check kinds and lengths before dispatching to a generic
//! kernel.
//!
//! ## Design notes
//!
//! * **Borrowed**: Views never own or resize the caller's memory.
//! * **One variant per kind**: The variant is the buffer's [`ElementKind`].
//!
//! ## Invariants
//!
//! * `view.kind()` always names the element type of the wrapped slice.

// Internal dependencies
use crate::primitives::kind::ElementKind;

// ============================================================================
// Views
// ============================================================================

/// Shared view of a buffer of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayRef<'a> {
    I8(&'a [i8]),
    U8(&'a [u8]),
    I16(&'a [i16]),
    U16(&'a [u16]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    I64(&'a [i64]),
    U64(&'a [u64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

/// Mutable view of a buffer of any supported kind.
#[derive(Debug, PartialEq)]
pub enum ArrayMut<'a> {
    I8(&'a mut [i8]),
    U8(&'a mut [u8]),
    I16(&'a mut [i16]),
    U16(&'a mut [u16]),
    I32(&'a mut [i32]),
    U32(&'a mut [u32]),
    I64(&'a mut [i64]),
    U64(&'a mut [u64]),
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
}

/// Apply `$body` to the slice inside any variant of a view.
macro_rules! with_slice {
    ($view:expr, $enum:ident, $s:ident => $body:expr) => {
        match $view {
            $enum::I8($s) => $body,
            $enum::U8($s) => $body,
            $enum::I16($s) => $body,
            $enum::U16($s) => $body,
            $enum::I32($s) => $body,
            $enum::U32($s) => $body,
            $enum::I64($s) => $body,
            $enum::U64($s) => $body,
            $enum::F32($s) => $body,
            $enum::F64($s) => $body,
        }
    };
}

impl<'a> ArrayRef<'a> {
    /// Element kind of the buffer.
    pub const fn kind(&self) -> ElementKind {
        match self {
            ArrayRef::I8(_) => ElementKind::I8,
            ArrayRef::U8(_) => ElementKind::U8,
            ArrayRef::I16(_) => ElementKind::I16,
            ArrayRef::U16(_) => ElementKind::U16,
            ArrayRef::I32(_) => ElementKind::I32,
            ArrayRef::U32(_) => ElementKind::U32,
            ArrayRef::I64(_) => ElementKind::I64,
            ArrayRef::U64(_) => ElementKind::U64,
            ArrayRef::F32(_) => ElementKind::F32,
            ArrayRef::F64(_) => ElementKind::F64,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        with_slice!(self, ArrayRef, s => s.len())
    }

    /// Whether the buffer has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> ArrayMut<'a> {
    /// Element kind of the buffer.
    pub fn kind(&self) -> ElementKind {
        self.as_view().kind()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        with_slice!(self, ArrayMut, s => s.len())
    }

    /// Whether the buffer has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reborrow as a shared view.
    pub fn as_view(&self) -> ArrayRef<'_> {
        match self {
            ArrayMut::I8(s) => ArrayRef::I8(s),
            ArrayMut::U8(s) => ArrayRef::U8(s),
            ArrayMut::I16(s) => ArrayRef::I16(s),
            ArrayMut::U16(s) => ArrayRef::U16(s),
            ArrayMut::I32(s) => ArrayRef::I32(s),
            ArrayMut::U32(s) => ArrayRef::U32(s),
            ArrayMut::I64(s) => ArrayRef::I64(s),
            ArrayMut::U64(s) => ArrayRef::U64(s),
            ArrayMut::F32(s) => ArrayRef::F32(s),
            ArrayMut::F64(s) => ArrayRef::F64(s),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! view_from_slice {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a [$t]> for ArrayRef<'a> {
                #[inline]
                fn from(s: &'a [$t]) -> Self {
                    ArrayRef::$variant(s)
                }
            }

            impl<'a> From<&'a mut [$t]> for ArrayMut<'a> {
                #[inline]
                fn from(s: &'a mut [$t]) -> Self {
                    ArrayMut::$variant(s)
                }
            }
        )*
    };
}

view_from_slice!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);
