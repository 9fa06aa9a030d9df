//! Error types for array operations.
//!
//! ## Purpose
//!
//! This module defines every failure an operation can report, and groups them
//! into the five categories a binding layer translates into its own native
//! error objects.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (kinds,
//!   lengths, the offending scalar, the failing index).
//! * **Allocation-free**: Variants hold only `Copy` data, so the type works in
//!   `no_std` builds without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! * **Category**: [`ErrorCategory`] is the coarse taxonomy: type/kind mismatch,
//!   invalid operation, range, length and arithmetic errors.
//! * **Check order**: opcode, options, buffer kinds, buffer lengths, scalar
//!   range, then per-element arithmetic. A call reports exactly one error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::kind::ElementKind;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Error Category
// ============================================================================

/// Coarse classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Wrong buffer, scalar or opcode kind.
    TypeKindMismatch,

    /// Unrecognised opcode value.
    InvalidOperation,

    /// Scalar outside the representable range of the buffer kind.
    RangeError,

    /// Zero-length input or undersized destination.
    LengthError,

    /// Domain error or NaN production during a checked transform.
    ArithmeticError,
}

impl ErrorCategory {
    /// Name of the category.
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCategory::TypeKindMismatch => "TypeKindMismatch",
            ErrorCategory::InvalidOperation => "InvalidOperation",
            ErrorCategory::RangeError => "RangeError",
            ErrorCategory::LengthError => "LengthError",
            ErrorCategory::ArithmeticError => "ArithmeticError",
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayError {
    /// A buffer's element kind differs from the kind the call requires.
    KindMismatch {
        /// Kind required by the call.
        expected: ElementKind,
        /// Kind of the offending buffer.
        found: ElementKind,
    },

    /// A scalar's dynamic type cannot be stored in the buffer kind
    /// (a float offered to an integer buffer).
    ScalarKindMismatch {
        /// Element kind of the buffer.
        kind: ElementKind,
        /// Dynamic type of the scalar.
        found: &'static str,
    },

    /// The opcode argument is not an integer.
    OpcodeType(&'static str),

    /// Neither operand is a buffer.
    NoBufferOperand,

    /// An in-place transform would write into a read-only buffer.
    ReadOnlyBuffer,

    /// An option was supplied to an operation that does not accept it.
    UnsupportedOption {
        /// Name of the operation.
        operation: &'static str,
        /// Name of the rejected option.
        option: &'static str,
    },

    /// Option was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the option that was set multiple times.
        parameter: &'static str,
    },

    /// The opcode value is not in the operator table.
    InvalidOperation(i64),

    /// The opcode is known but belongs to another operation family.
    WrongOperationFamily {
        /// Name of the operation that rejected the opcode.
        operation: &'static str,
        /// The rejected opcode.
        opcode: i64,
    },

    /// The scalar cannot be represented by the buffer kind.
    OutOfRange {
        /// Element kind of the buffer.
        kind: ElementKind,
        /// The offending scalar.
        value: Scalar,
    },

    /// An input buffer has no elements.
    EmptyInput,

    /// Two buffers that must match in length do not.
    MismatchedLengths {
        /// Length of the first buffer.
        lhs: usize,
        /// Length of the second buffer.
        rhs: usize,
    },

    /// The destination buffer is shorter than the input.
    DestinationTooShort {
        /// Length of the destination.
        got: usize,
        /// Minimum required length.
        min: usize,
    },

    /// An element produced a domain error or a non-finite result.
    Arithmetic {
        /// Index of the first failing element.
        index: usize,
    },
}

impl ArrayError {
    /// Category of the error in the public taxonomy.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::KindMismatch { .. }
            | Self::ScalarKindMismatch { .. }
            | Self::OpcodeType(_)
            | Self::NoBufferOperand
            | Self::ReadOnlyBuffer
            | Self::UnsupportedOption { .. }
            | Self::DuplicateParameter { .. } => ErrorCategory::TypeKindMismatch,
            Self::InvalidOperation(_) | Self::WrongOperationFamily { .. } => {
                ErrorCategory::InvalidOperation
            }
            Self::OutOfRange { .. } => ErrorCategory::RangeError,
            Self::EmptyInput | Self::MismatchedLengths { .. } | Self::DestinationTooShort { .. } => {
                ErrorCategory::LengthError
            }
            Self::Arithmetic { .. } => ErrorCategory::ArithmeticError,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(f, "Buffer kind mismatch: expected {expected}, found {found}")
            }
            Self::ScalarKindMismatch { kind, found } => {
                write!(f, "Cannot use a {found} scalar with a {kind} buffer")
            }
            Self::OpcodeType(found) => {
                write!(f, "Opcode must be an integer, got {found}")
            }
            Self::NoBufferOperand => write!(f, "At least one operand must be a buffer"),
            Self::ReadOnlyBuffer => {
                write!(f, "In-place transform needs a writable buffer operand")
            }
            Self::UnsupportedOption { operation, option } => {
                write!(f, "Operation '{operation}' does not accept option: {option}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidOperation(code) => write!(f, "Unknown opcode: {code}"),
            Self::WrongOperationFamily { operation, opcode } => {
                write!(f, "Opcode {opcode} is not valid for '{operation}'")
            }
            Self::OutOfRange { kind, value } => {
                write!(f, "Value {value} is out of range for {kind}")
            }
            Self::EmptyInput => write!(f, "Input buffer is empty"),
            Self::MismatchedLengths { lhs, rhs } => {
                write!(f, "Length mismatch: first buffer has {lhs} elements, second has {rhs}")
            }
            Self::DestinationTooShort { got, min } => {
                write!(f, "Destination too short: got {got}, need at least {min}")
            }
            Self::Arithmetic { index } => {
                write!(f, "Arithmetic error at index {index}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
