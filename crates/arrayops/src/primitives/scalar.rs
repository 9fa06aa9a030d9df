//! Dynamically typed scalar operands.
//!
//! ## Purpose
//!
//! A [`Scalar`] is the number a caller supplies in place of a buffer. It keeps
//! the value exactly as given so the converter can decide whether it fits the
//! buffer's element kind.
//!
//! ## Design notes
//!
//! * **Exact integers**: Integers are held as `i128`, which covers every 64-bit
//!   value plus one past either end of the `i64`/`u64` ranges.
//! * **Transient**: Scalars are converted fresh on every call and never stored.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Dynamically typed input number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// An integral value.
    Int(i128),

    /// A floating point value, possibly NaN or infinite.
    Float(f64),
}

impl Scalar {
    /// Name of the value's dynamic type, used in error messages.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
        }
    }

    /// Whether the value is NaN or infinite.
    #[inline]
    pub fn is_non_finite(&self) -> bool {
        match self {
            Scalar::Int(_) => false,
            Scalar::Float(v) => !v.is_finite(),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(v: $t) -> Self {
                    Scalar::Int(v as i128)
                }
            }
        )*
    };
}

scalar_from_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128, isize, usize);

impl From<f32> for Scalar {
    #[inline]
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}
