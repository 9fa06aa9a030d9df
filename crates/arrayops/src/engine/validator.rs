//! Eager validation of call arguments.
//!
//! ## Purpose
//!
//! This module provides the checks every operation runs before touching any
//! element: buffer kinds, buffer lengths, destination sizing, option support,
//! and the effective `maxlen`.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Callers run kind checks before length checks, and both
//!   before any scalar conversion, so a call always reports the earliest
//!   failing category.
//! * **Stateless**: All methods are associated functions.
//!
//! ## Key concepts
//!
//! * **Effective length**: `maxlen <= 0` (or absent) means the full length; a
//!   positive `maxlen` larger than the buffers is clamped to them.
//!
//! ## Non-goals
//!
//! * This module does not convert scalars (see `math::convert`).
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::ArrayError;
use crate::primitives::kind::ElementKind;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operation arguments.
///
/// All methods return `Result<_, ArrayError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Kind Validation
    // ========================================================================

    /// Validate that a buffer has the kind the call requires.
    pub fn validate_kind(expected: ElementKind, found: ElementKind) -> Result<(), ArrayError> {
        if expected != found {
            return Err(ArrayError::KindMismatch { expected, found });
        }
        Ok(())
    }

    // ========================================================================
    // Length Validation
    // ========================================================================

    /// Validate that every present buffer length is equal, returning it.
    ///
    /// Scalar positions are passed as `None`.
    pub fn validate_matching_lengths(lengths: &[Option<usize>]) -> Result<Option<usize>, ArrayError> {
        let mut common: Option<usize> = None;
        for &len in lengths.iter().flatten() {
            match common {
                None => common = Some(len),
                Some(first) if first != len => {
                    return Err(ArrayError::MismatchedLengths {
                        lhs: first,
                        rhs: len,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(common)
    }

    /// Validate that an input buffer has at least one element.
    pub fn validate_non_empty(len: usize) -> Result<(), ArrayError> {
        if len == 0 {
            return Err(ArrayError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that a destination can hold one entry per input element.
    ///
    /// The requirement is on the full input length; `maxlen` does not relax it.
    pub fn validate_destination_len(got: usize, min: usize) -> Result<(), ArrayError> {
        if got < min {
            return Err(ArrayError::DestinationTooShort { got, min });
        }
        Ok(())
    }

    /// Number of leading elements a call processes.
    ///
    /// # Notes
    ///
    /// * `None`, zero and negative values select the full length.
    /// * Positive values beyond `len` are clamped to `len`.
    #[inline]
    pub fn effective_len(maxlen: Option<isize>, len: usize) -> usize {
        match maxlen {
            Some(k) if k > 0 => (k as usize).min(len),
            _ => len,
        }
    }

    // ========================================================================
    // Option Validation
    // ========================================================================

    /// Validate that an option is not supplied to an operation that lacks it.
    pub fn validate_option_absent(
        supplied: bool,
        operation: &'static str,
        option: &'static str,
    ) -> Result<(), ArrayError> {
        if supplied {
            return Err(ArrayError::UnsupportedOption { operation, option });
        }
        Ok(())
    }

    /// Validate that no options were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), ArrayError> {
        if let Some(param) = duplicate_param {
            return Err(ArrayError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
