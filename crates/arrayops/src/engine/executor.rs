//! Execution engine: validation, dispatch and kernel invocation.
//!
//! ## Purpose
//!
//! This module runs one operation end to end on dynamically typed operands.
//! It validates the call in a fixed order, picks the native element type from
//! the resolved kind, and hands typed slices to the generic kernels.
//!
//! ## Design notes
//!
//! * **Check order**: buffer kinds, then buffer lengths, then scalar
//!   conversion, then per-element arithmetic. Opcode and option checks happen
//!   in the API layer before the executor is reached.
//! * **Monomorphised dispatch**: [`dispatch_kind!`] expands one arm per element
//!   kind, each calling the same generic function at a concrete type.
//!   Float reductions take the lane-parallel path of [`LaneReduce`].
//! * **Logging**: Each call emits one `trace` record with the operation, kind,
//!   shape and effective length.
//!
//! ## Key concepts
//!
//! * **Reductions** reject NaN/infinite scalars; **search** and **transform**
//!   accept them as ordinary IEEE-754 operands.
//!
//! ## Invariants
//!
//! * Exactly one error is returned from a failing call.
//! * No buffer is written before every up-front check has passed.

// Internal dependencies
use crate::algorithms::operands::Source;
use crate::algorithms::reduce::{LaneReduce, Reduction};
use crate::algorithms::search;
use crate::algorithms::transform;
use crate::engine::shape::{self, Operand, OperandMut};
use crate::engine::validator::Validator;
use crate::math::convert::NonFinite;
use crate::math::element::Element;
use crate::math::operators::{CompareOp, ErrorMode, MathOp};
use crate::primitives::buffer::{ArrayMut, ArrayRef};
use crate::primitives::errors::ArrayError;
use crate::primitives::kind::ElementKind;

// ============================================================================
// Dispatch
// ============================================================================

/// Call a generic function at the native type named by an [`ElementKind`].
macro_rules! dispatch_kind {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            ElementKind::I8 => $func::<i8>($($arg),*),
            ElementKind::U8 => $func::<u8>($($arg),*),
            ElementKind::I16 => $func::<i16>($($arg),*),
            ElementKind::U16 => $func::<u16>($($arg),*),
            ElementKind::I32 => $func::<i32>($($arg),*),
            ElementKind::U32 => $func::<u32>($($arg),*),
            ElementKind::I64 => $func::<i64>($($arg),*),
            ElementKind::U64 => $func::<u64>($($arg),*),
            ElementKind::F32 => $func::<f32>($($arg),*),
            ElementKind::F64 => $func::<f64>($($arg),*),
        }
    };
}

// ============================================================================
// Executor
// ============================================================================

/// Entry points for running operations on dynamic operands.
pub struct Executor;

impl Executor {
    // ========================================================================
    // Reductions
    // ========================================================================

    /// Run an any/all reduction.
    pub fn reduce(
        reduction: Reduction,
        op: CompareOp,
        lhs: Operand<'_>,
        rhs: Operand<'_>,
        maxlen: Option<isize>,
    ) -> Result<bool, ArrayError> {
        let call = shape::resolve(lhs.buffer_kind(), rhs.buffer_kind())?;
        let full = Validator::validate_matching_lengths(&[lhs.buffer_len(), rhs.buffer_len()])?
            .unwrap_or(0);
        let len = Validator::effective_len(maxlen, full);

        log::trace!(
            "{} {} on {} ({}): {} of {} elements",
            reduction.name(),
            op.symbol(),
            call.kind,
            call.shape.name(),
            len,
            full
        );

        dispatch_kind!(call.kind, reduce_typed(reduction, op, lhs, rhs, len))
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Write the indices of matching elements into `dest`; return the count.
    pub fn find_indices(
        op: CompareOp,
        input: ArrayRef<'_>,
        rhs: Operand<'_>,
        dest: ArrayMut<'_>,
        maxlen: Option<isize>,
    ) -> Result<usize, ArrayError> {
        let lhs = Operand::Buffer(input);
        let call = shape::resolve(lhs.buffer_kind(), rhs.buffer_kind())?;
        Validator::validate_kind(ElementKind::INDEX, dest.kind())?;

        Validator::validate_non_empty(input.len())?;
        Validator::validate_matching_lengths(&[Some(input.len()), rhs.buffer_len()])?;
        Validator::validate_destination_len(dest.len(), input.len())?;
        let len = Validator::effective_len(maxlen, input.len());

        log::trace!(
            "find_indices {} on {} ({}): {} of {} elements",
            op.symbol(),
            call.kind,
            call.shape.name(),
            len,
            input.len()
        );

        dispatch_kind!(call.kind, find_indices_typed(op, lhs, rhs, dest, len))
    }

    /// Index of the first matching element.
    pub fn find_first(
        op: CompareOp,
        input: ArrayRef<'_>,
        rhs: Operand<'_>,
        maxlen: Option<isize>,
    ) -> Result<Option<usize>, ArrayError> {
        let lhs = Operand::Buffer(input);
        let call = shape::resolve(lhs.buffer_kind(), rhs.buffer_kind())?;

        Validator::validate_non_empty(input.len())?;
        Validator::validate_matching_lengths(&[Some(input.len()), rhs.buffer_len()])?;
        let len = Validator::effective_len(maxlen, input.len());

        log::trace!(
            "find_first {} on {} ({}): {} of {} elements",
            op.symbol(),
            call.kind,
            call.shape.name(),
            len,
            input.len()
        );

        dispatch_kind!(call.kind, find_first_typed(op, lhs, rhs, len))
    }

    // ========================================================================
    // Transform
    // ========================================================================

    /// Apply `op` elementwise, into `dest` or in place.
    pub fn transform(
        op: MathOp,
        lhs: OperandMut<'_>,
        rhs: OperandMut<'_>,
        dest: Option<ArrayMut<'_>>,
        maxlen: Option<isize>,
        mode: ErrorMode,
    ) -> Result<(), ArrayError> {
        let call = shape::resolve(lhs.buffer_kind(), rhs.buffer_kind())?;
        match &dest {
            Some(dest) => Validator::validate_kind(call.kind, dest.kind())?,
            None => {
                if !shape::in_place_target(call.shape, &lhs, &rhs).is_writable() {
                    return Err(ArrayError::ReadOnlyBuffer);
                }
            }
        }

        let dest_len = dest.as_ref().map(|d| d.len());
        let full = Validator::validate_matching_lengths(&[lhs.buffer_len(), rhs.buffer_len(), dest_len])?
            .unwrap_or(0);
        Validator::validate_non_empty(full)?;
        let len = Validator::effective_len(maxlen, full);

        log::trace!(
            "transform {} on {} ({}, {}, {:?}): {} of {} elements",
            op.name(),
            call.kind,
            call.shape.name(),
            if dest.is_some() { "into destination" } else { "in place" },
            mode,
            len,
            full
        );

        dispatch_kind!(call.kind, transform_typed(op, lhs, rhs, dest, len, mode))
    }

    /// Apply `op` to each element and itself, in place.
    pub fn transform_self(
        op: MathOp,
        buf: ArrayMut<'_>,
        maxlen: Option<isize>,
        mode: ErrorMode,
    ) -> Result<(), ArrayError> {
        let kind = buf.kind();
        let full = buf.len();
        Validator::validate_non_empty(full)?;
        let len = Validator::effective_len(maxlen, full);

        log::trace!(
            "transform {} on {} (self, in place, {:?}): {} of {} elements",
            op.name(),
            kind,
            mode,
            len,
            full
        );

        dispatch_kind!(kind, transform_self_typed(op, buf, len, mode))
    }
}

// ============================================================================
// Typed Bodies
// ============================================================================

fn reduce_typed<T: LaneReduce>(
    reduction: Reduction,
    op: CompareOp,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    len: usize,
) -> Result<bool, ArrayError> {
    let operands = shape::typed_operands::<T>(lhs, rhs, NonFinite::Reject)?;
    Ok(T::reduce_lanes(reduction, op, &operands, len))
}

fn find_indices_typed<T: Element>(
    op: CompareOp,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    dest: ArrayMut<'_>,
    len: usize,
) -> Result<usize, ArrayError> {
    let operands = shape::typed_operands::<T>(lhs, rhs, NonFinite::Allow)?;
    let found = dest.kind();
    let dest = i64::view_mut(dest).ok_or(ArrayError::KindMismatch {
        expected: ElementKind::INDEX,
        found,
    })?;
    Ok(search::find_indices(op, &operands, dest, len))
}

fn find_first_typed<T: Element>(
    op: CompareOp,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    len: usize,
) -> Result<Option<usize>, ArrayError> {
    let operands = shape::typed_operands::<T>(lhs, rhs, NonFinite::Allow)?;
    Ok(search::find_first(op, &operands, len))
}

fn transform_typed<T: Element>(
    op: MathOp,
    lhs: OperandMut<'_>,
    rhs: OperandMut<'_>,
    dest: Option<ArrayMut<'_>>,
    len: usize,
    mode: ErrorMode,
) -> Result<(), ArrayError> {
    let (lhs, rhs, out) = shape::typed_transform::<T>(lhs, rhs, dest)?;
    transform::transform(op, lhs, rhs, out, len, mode)
}

fn transform_self_typed<T: Element>(
    op: MathOp,
    buf: ArrayMut<'_>,
    len: usize,
    mode: ErrorMode,
) -> Result<(), ArrayError> {
    let out = shape::typed_self::<T>(buf)?;
    transform::transform(op, Source::Output, Source::Output, out, len, mode)
}
