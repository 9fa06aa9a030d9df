//! High-level API for elementwise array operations.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the any/all reductions,
//! index search and the binary transform, plus the [`Options`] builder that
//! carries the per-call settings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Operands accept slices, scalars or dynamic views through
//!   `Into`, so one function covers every call shape and element kind.
//! * **Validated**: Each call checks its opcode first, then its options, and
//!   only then hands over to the engine.
//! * **Fluent options**: Setting an option twice is recorded and reported as
//!   [`ArrayError::DuplicateParameter`] when the call runs.
//!
//! ## Key concepts
//!
//! * **Opcode**: An integer from [`opcodes`]. A non-integer opcode is a type
//!   error; an unknown integer is an invalid operation.
//! * **maxlen**: Only the leading `maxlen` elements take part. Zero, negative
//!   or absent means the full length.
//! * **Error suppression**: Transform only. Domain errors leave NaN (floats) or
//!   wrap (integers) instead of failing the call.
//!
//! ### Call Flow
//!
//! 1. Build [`Options`] via `Options::new()` and chain settings.
//! 2. Call an operation with an opcode, operands and the options.
//! 3. Inspect the `Result`; [`ArrayError::category`] names the error family.

// Internal dependencies
use crate::algorithms::reduce::Reduction;
use crate::engine::executor::Executor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::operands::CallShape;
pub use crate::engine::shape::{Operand, OperandMut};
pub use crate::math::convert::{convert_dyn, NonFinite};
pub use crate::math::element::Element;
pub use crate::math::operators::{opcodes, CompareOp, ErrorMode, MathOp, OpCode, Operation};
pub use crate::primitives::buffer::{ArrayMut, ArrayRef};
pub use crate::primitives::errors::{ArrayError, ErrorCategory};
pub use crate::primitives::kind::{ElementKind, Limit};
pub use crate::primitives::scalar::Scalar;

// ============================================================================
// Options
// ============================================================================

/// Fluent builder for per-call settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Options {
    /// Number of leading elements to process (`<= 0` means all).
    pub maxlen: Option<isize>,

    /// Transform error mode; `Some(true)` suppresses domain errors.
    pub suppress_errors: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Options {
    /// Create options with every setting at its default.
    pub fn new() -> Self {
        Self {
            maxlen: None,
            suppress_errors: None,
            duplicate_param: None,
        }
    }

    /// Restrict the call to the leading `maxlen` elements.
    pub fn maxlen(mut self, maxlen: isize) -> Self {
        if self.maxlen.is_some() {
            self.duplicate_param = Some("maxlen");
        }
        self.maxlen = Some(maxlen);
        self
    }

    /// Choose whether transform domain errors are suppressed.
    pub fn matherrors(mut self, suppress: bool) -> Self {
        if self.suppress_errors.is_some() {
            self.duplicate_param = Some("suppress_errors");
        }
        self.suppress_errors = Some(suppress);
        self
    }

    /// Suppress transform domain errors.
    pub fn suppress_errors(self) -> Self {
        self.matherrors(true)
    }

    /// Error mode a transform runs in.
    pub fn error_mode(&self) -> ErrorMode {
        match self.suppress_errors {
            Some(true) => ErrorMode::Suppressed,
            _ => ErrorMode::Checked,
        }
    }

    fn validate(&self, operation: &'static str, allows_suppress: bool) -> Result<(), ArrayError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if !allows_suppress {
            Validator::validate_option_absent(
                self.suppress_errors.is_some(),
                operation,
                "suppress_errors",
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Whether any element satisfies the comparison.
///
/// An empty participating range yields `false`.
///
/// # Examples
///
/// ```
/// use arrayops::prelude::*;
///
/// let data = [1i32, 5, 3];
/// assert!(reduce_any(opcodes::GT, &data[..], 4i32, &Options::new())?);
/// assert!(!reduce_any(opcodes::GT, &data[..], 4i32, &Options::new().maxlen(1))?);
/// # Result::<(), ArrayError>::Ok(())
/// ```
pub fn reduce_any<'a>(
    opcode: impl Into<OpCode>,
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
    options: &Options,
) -> Result<bool, ArrayError> {
    run_reduction(Reduction::Any, opcode.into(), lhs.into(), rhs.into(), options)
}

/// Whether every element satisfies the comparison.
///
/// An empty participating range yields `true`.
///
/// # Examples
///
/// ```
/// use arrayops::prelude::*;
///
/// let data = [5u8; 20];
/// assert!(reduce_all(opcodes::NE, &data[..], 6u8, &Options::new())?);
/// assert!(!reduce_all(opcodes::NE, &data[..], 5u8, &Options::new())?);
/// # Result::<(), ArrayError>::Ok(())
/// ```
pub fn reduce_all<'a>(
    opcode: impl Into<OpCode>,
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
    options: &Options,
) -> Result<bool, ArrayError> {
    run_reduction(Reduction::All, opcode.into(), lhs.into(), rhs.into(), options)
}

fn run_reduction(
    reduction: Reduction,
    opcode: OpCode,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    options: &Options,
) -> Result<bool, ArrayError> {
    let op = opcode.resolve()?.as_compare(reduction.name())?;
    options.validate(reduction.name(), false)?;
    Executor::reduce(reduction, op, lhs, rhs, options.maxlen)
}

// ============================================================================
// Search
// ============================================================================

/// Write the indices of matching elements into `dest` and return the count.
///
/// `dest` must be an `i64` buffer at least as long as `input`. Entries past
/// the returned count keep their previous values.
///
/// # Examples
///
/// ```
/// use arrayops::prelude::*;
///
/// let data = [97i8, 97, 97, 98, 99, 101, 101, 102, 95, 103];
/// let mut dest = [-1i64; 10];
/// let count = find_indices(opcodes::EQ, &data[..], 97i8, &mut dest[..], &Options::new())?;
/// assert_eq!(count, 3);
/// assert_eq!(&dest[..4], &[0, 1, 2, -1]);
/// # Result::<(), ArrayError>::Ok(())
/// ```
pub fn find_indices<'a>(
    opcode: impl Into<OpCode>,
    input: impl Into<ArrayRef<'a>>,
    rhs: impl Into<Operand<'a>>,
    dest: impl Into<ArrayMut<'a>>,
    options: &Options,
) -> Result<usize, ArrayError> {
    let op = opcode.into().resolve()?.as_compare("find_indices")?;
    options.validate("find_indices", false)?;
    Executor::find_indices(op, input.into(), rhs.into(), dest.into(), options.maxlen)
}

/// Index of the first matching element, if any.
pub fn find_first<'a>(
    opcode: impl Into<OpCode>,
    input: impl Into<ArrayRef<'a>>,
    rhs: impl Into<Operand<'a>>,
    options: &Options,
) -> Result<Option<usize>, ArrayError> {
    let op = opcode.into().resolve()?.as_compare("find_first")?;
    options.validate("find_first", false)?;
    Executor::find_first(op, input.into(), rhs.into(), options.maxlen)
}

// ============================================================================
// Transform
// ============================================================================

/// Compute `lhs OP rhs` elementwise.
///
/// With `dest` the results go there; without it they overwrite the buffer
/// operand (the left one when both are buffers). Elements at or past the
/// effective length are never written. To combine a buffer with itself in
/// place, use [`transform_self`].
///
/// # Examples
///
/// ```
/// use arrayops::prelude::*;
///
/// let mut data = [1.0f64, 2.0, 3.0];
/// transform(opcodes::MUL, &mut data[..], 2.0f64, None, &Options::new())?;
/// assert_eq!(data, [2.0, 4.0, 6.0]);
///
/// let src = [7i32, -7];
/// let mut out = [0i32; 2];
/// transform(opcodes::DIV, &src[..], 2i32, Some(ArrayMut::from(&mut out[..])), &Options::new())?;
/// assert_eq!(out, [3, -4]);
/// # Result::<(), ArrayError>::Ok(())
/// ```
pub fn transform<'a>(
    opcode: impl Into<OpCode>,
    lhs: impl Into<OperandMut<'a>>,
    rhs: impl Into<OperandMut<'a>>,
    dest: Option<ArrayMut<'a>>,
    options: &Options,
) -> Result<(), ArrayError> {
    let op = opcode.into().resolve()?.as_math("transform")?;
    options.validate("transform", true)?;
    Executor::transform(
        op,
        lhs.into(),
        rhs.into(),
        dest,
        options.maxlen,
        options.error_mode(),
    )
}

/// Compute `buf OP buf` elementwise, in place.
///
/// Each element is combined with itself and the result overwrites it. This
/// is the fully aliased form of [`transform`], which cannot be expressed
/// with two separate borrows of the same buffer.
///
/// # Examples
///
/// ```
/// use arrayops::prelude::*;
///
/// let mut data = [1.5f64, -2.0, 3.0];
/// transform_self(opcodes::MUL, &mut data[..], &Options::new())?;
/// assert_eq!(data, [2.25, 4.0, 9.0]);
/// # Result::<(), ArrayError>::Ok(())
/// ```
pub fn transform_self<'a>(
    opcode: impl Into<OpCode>,
    buf: impl Into<ArrayMut<'a>>,
    options: &Options,
) -> Result<(), ArrayError> {
    let op = opcode.into().resolve()?.as_math("transform_self")?;
    options.validate("transform_self", true)?;
    Executor::transform_self(op, buf.into(), options.maxlen, options.error_mode())
}
