//! Typed operand shapes consumed by the kernels.
//!
//! ## Purpose
//!
//! Once the engine has resolved which operands are buffers and which are
//! scalars, and converted every scalar to the buffer's native type, the
//! result is expressed with the types in this module.
//!
//! ## Key concepts
//!
//! * **CallShape**: which operand positions hold buffers.
//! * **Operands**: a read-only operand pair for comparisons.
//! * **Source**: one side of a transform; it may read from the output buffer
//!   itself, which is how in-place (aliased) transforms are expressed.
//!
//! ## Invariants
//!
//! * Both buffers of `Operands::BufferBuffer` have the same length.

// Internal dependencies
use crate::math::element::Element;
use crate::math::operators::CompareOp;

// ============================================================================
// Call Shape
// ============================================================================

/// Which operand positions hold buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `buffer OP scalar`
    BufferScalar,
    /// `scalar OP buffer`
    ScalarBuffer,
    /// `buffer OP buffer`, elementwise.
    BufferBuffer,
}

impl CallShape {
    /// Name of the shape, used in log output.
    pub const fn name(&self) -> &'static str {
        match self {
            CallShape::BufferScalar => "buffer-scalar",
            CallShape::ScalarBuffer => "scalar-buffer",
            CallShape::BufferBuffer => "buffer-buffer",
        }
    }
}

// ============================================================================
// Comparison Operands
// ============================================================================

/// Read-only operand pair of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'a, T> {
    /// Each element is the left operand.
    BufferScalar(&'a [T], T),
    /// Each element is the right operand.
    ScalarBuffer(T, &'a [T]),
    /// Elements are paired by index.
    BufferBuffer(&'a [T], &'a [T]),
}

impl<'a, T: Element> Operands<'a, T> {
    /// Shape of the pair.
    pub fn shape(&self) -> CallShape {
        match self {
            Operands::BufferScalar(..) => CallShape::BufferScalar,
            Operands::ScalarBuffer(..) => CallShape::ScalarBuffer,
            Operands::BufferBuffer(..) => CallShape::BufferBuffer,
        }
    }

    /// Number of elements in the participating buffers.
    pub fn len(&self) -> usize {
        match self {
            Operands::BufferScalar(a, _) => a.len(),
            Operands::ScalarBuffer(_, b) => b.len(),
            Operands::BufferBuffer(a, b) => a.len().min(b.len()),
        }
    }

    /// Whether the participating buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate the predicate at index `i`.
    #[inline(always)]
    pub fn test(&self, op: CompareOp, i: usize) -> bool {
        match *self {
            Operands::BufferScalar(a, s) => op.eval(a[i], s),
            Operands::ScalarBuffer(s, b) => op.eval(s, b[i]),
            Operands::BufferBuffer(a, b) => op.eval(a[i], b[i]),
        }
    }
}

// ============================================================================
// Transform Sources
// ============================================================================

/// One side of a binary transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a, T> {
    /// The same value at every index.
    Scalar(T),
    /// A separate input buffer.
    Buffer(&'a [T]),
    /// The output buffer itself, read before it is written.
    Output,
}

impl<'a, T: Element> Source<'a, T> {
    /// Operand value at index `i`.
    #[inline(always)]
    pub fn read(&self, i: usize, out: &[T]) -> T {
        match *self {
            Source::Scalar(s) => s,
            Source::Buffer(b) => b[i],
            Source::Output => out[i],
        }
    }

    /// Whether this side is a buffer (separate or the output itself).
    pub fn is_buffer(&self) -> bool {
        !matches!(self, Source::Scalar(_))
    }
}
