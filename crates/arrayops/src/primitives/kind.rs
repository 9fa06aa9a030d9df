//! Element kind registry.
//!
//! ## Purpose
//!
//! This module enumerates the fixed-width numeric element kinds a buffer may
//! hold, together with their width, signedness, float-ness and representable
//! range. It also maps the host's array type codes onto these kinds.
//!
//! ## Design notes
//!
//! * **Closed set**: The registry is a plain `enum`; every table is `const`.
//! * **Type codes**: The 12 host type codes (`b B h H i I l L q Q f d`) map onto
//!   10 native kinds. `l`/`L` are 64-bit on LP64 targets and share `i64`/`u64`
//!   with `q`/`Q`.
//! * **Exact bounds**: Integer bounds are reported as `i128` so every 64-bit
//!   bound and its neighbours are representable.
//!
//! ## Invariants
//!
//! * `min_value() <= max_value()` for every kind.
//! * The search index kind is always [`ElementKind::INDEX`] (`i64`).
//!
//! ## Non-goals
//!
//! * This module does not convert values (see `math::convert`).

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Element Kind
// ============================================================================

/// Fixed-width numeric type of a buffer's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 64-bit integer.
    U64,
    /// Single precision float.
    F32,
    /// Double precision float.
    F64,
}

/// Representable bound of an element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// Exact integer bound.
    Int(i128),
    /// Largest finite float magnitude, signed.
    Float(f64),
}

impl ElementKind {
    /// Every supported kind, in registry order.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::I8,
        ElementKind::U8,
        ElementKind::I16,
        ElementKind::U16,
        ElementKind::I32,
        ElementKind::U32,
        ElementKind::I64,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Dedicated kind of the destination buffer written by index search.
    pub const INDEX: ElementKind = ElementKind::I64;

    /// Host type codes recognised by [`ElementKind::from_typecode`].
    pub const TYPECODES: [char; 12] = ['b', 'B', 'h', 'H', 'i', 'I', 'l', 'L', 'q', 'Q', 'f', 'd'];

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Rust name of the kind.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ElementKind::I8 => "i8",
            ElementKind::U8 => "u8",
            ElementKind::I16 => "i16",
            ElementKind::U16 => "u16",
            ElementKind::I32 => "i32",
            ElementKind::U32 => "u32",
            ElementKind::I64 => "i64",
            ElementKind::U64 => "u64",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }

    /// Width of one element in bytes.
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
        }
    }

    /// Whether the kind can hold negative values.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        !matches!(
            self,
            ElementKind::U8 | ElementKind::U16 | ElementKind::U32 | ElementKind::U64
        )
    }

    /// Whether the kind is a floating point kind.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Whether the kind is an integer kind.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Smallest representable value (most negative finite value for floats).
    pub fn min_value(&self) -> Limit {
        match self {
            ElementKind::I8 => Limit::Int(i8::MIN as i128),
            ElementKind::I16 => Limit::Int(i16::MIN as i128),
            ElementKind::I32 => Limit::Int(i32::MIN as i128),
            ElementKind::I64 => Limit::Int(i64::MIN as i128),
            ElementKind::U8 | ElementKind::U16 | ElementKind::U32 | ElementKind::U64 => {
                Limit::Int(0)
            }
            ElementKind::F32 => Limit::Float(f32::MIN as f64),
            ElementKind::F64 => Limit::Float(f64::MIN),
        }
    }

    /// Largest representable value (largest finite value for floats).
    pub fn max_value(&self) -> Limit {
        match self {
            ElementKind::I8 => Limit::Int(i8::MAX as i128),
            ElementKind::U8 => Limit::Int(u8::MAX as i128),
            ElementKind::I16 => Limit::Int(i16::MAX as i128),
            ElementKind::U16 => Limit::Int(u16::MAX as i128),
            ElementKind::I32 => Limit::Int(i32::MAX as i128),
            ElementKind::U32 => Limit::Int(u32::MAX as i128),
            ElementKind::I64 => Limit::Int(i64::MAX as i128),
            ElementKind::U64 => Limit::Int(u64::MAX as i128),
            ElementKind::F32 => Limit::Float(f32::MAX as f64),
            ElementKind::F64 => Limit::Float(f64::MAX),
        }
    }

    // ========================================================================
    // Type Codes
    // ========================================================================

    /// Canonical host type code of the kind.
    #[inline]
    pub const fn typecode(&self) -> char {
        match self {
            ElementKind::I8 => 'b',
            ElementKind::U8 => 'B',
            ElementKind::I16 => 'h',
            ElementKind::U16 => 'H',
            ElementKind::I32 => 'i',
            ElementKind::U32 => 'I',
            ElementKind::I64 => 'q',
            ElementKind::U64 => 'Q',
            ElementKind::F32 => 'f',
            ElementKind::F64 => 'd',
        }
    }

    /// Look up the kind for a host type code.
    ///
    /// Returns `None` for codes outside [`ElementKind::TYPECODES`].
    pub const fn from_typecode(code: char) -> Option<ElementKind> {
        match code {
            'b' => Some(ElementKind::I8),
            'B' => Some(ElementKind::U8),
            'h' => Some(ElementKind::I16),
            'H' => Some(ElementKind::U16),
            'i' => Some(ElementKind::I32),
            'I' => Some(ElementKind::U32),
            'l' | 'q' => Some(ElementKind::I64),
            'L' | 'Q' => Some(ElementKind::U64),
            'f' => Some(ElementKind::F32),
            'd' => Some(ElementKind::F64),
            _ => None,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
