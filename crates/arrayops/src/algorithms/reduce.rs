//! Predicate reductions: any-match and all-match.
//!
//! ## Purpose
//!
//! These kernels answer whether at least one, or every, participating element
//! satisfies a comparison.
//!
//! ## Design notes
//!
//! * **Short-circuit**: `any` stops at the first match, `all` at the first
//!   miss. The polarity is carried by [`Reduction`].
//! * **Shape hoisting**: The operand shape is matched once, outside the loop.
//! * **NaN**: Comparisons follow `PartialOrd`; NaN elements satisfy only `Ne`.
//! * **SIMD**: [`LaneReduce`] runs `f64` and `f32` reductions on `wide` lane
//!   vectors and finishes the remainder with the scalar predicate.
//!
//! ## Invariants
//!
//! * An empty range yields `false` for `any` and `true` for `all`.
//! * No index at or beyond `len` is read.

// Internal dependencies
use crate::algorithms::operands::Operands;
use crate::math::element::Element;
use crate::math::operators::CompareOp;

// External dependencies
use wide::{f32x8, f64x2, CmpEq, CmpGe, CmpGt, CmpLe, CmpLt};

/// Short-circuit polarity of a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// True iff some element matches.
    Any,
    /// True iff every element matches.
    All,
}

impl Reduction {
    /// Name of the reduction.
    pub const fn name(&self) -> &'static str {
        match self {
            Reduction::Any => "reduce_any",
            Reduction::All => "reduce_all",
        }
    }
}

/// Run the reduction over the first `len` elements.
///
/// # Panics
///
/// Panics if `len` exceeds the length of a participating buffer.
pub fn reduce<T: Element>(
    reduction: Reduction,
    op: CompareOp,
    operands: &Operands<'_, T>,
    len: usize,
) -> bool {
    match reduction {
        Reduction::Any => any_match(op, operands, len),
        Reduction::All => all_match(op, operands, len),
    }
}

/// True iff at least one of the first `len` elements satisfies `op`.
pub fn any_match<T: Element>(op: CompareOp, operands: &Operands<'_, T>, len: usize) -> bool {
    match *operands {
        Operands::BufferScalar(a, s) => a[..len].iter().any(|&x| op.eval(x, s)),
        Operands::ScalarBuffer(s, b) => b[..len].iter().any(|&y| op.eval(s, y)),
        Operands::BufferBuffer(a, b) => a[..len]
            .iter()
            .zip(&b[..len])
            .any(|(&x, &y)| op.eval(x, y)),
    }
}

/// True iff every one of the first `len` elements satisfies `op`.
pub fn all_match<T: Element>(op: CompareOp, operands: &Operands<'_, T>, len: usize) -> bool {
    match *operands {
        Operands::BufferScalar(a, s) => a[..len].iter().all(|&x| op.eval(x, s)),
        Operands::ScalarBuffer(s, b) => b[..len].iter().all(|&y| op.eval(s, y)),
        Operands::BufferBuffer(a, b) => a[..len]
            .iter()
            .zip(&b[..len])
            .all(|(&x, &y)| op.eval(x, y)),
    }
}

// ============================================================================
// Lane-Parallel Reductions (SIMD)
// ============================================================================

/// Reductions with a lane-parallel fast path for float kinds.
///
/// Integer kinds use the scalar kernels above.
pub trait LaneReduce: Element {
    /// Run the reduction over the first `len` elements.
    #[inline]
    fn reduce_lanes(
        reduction: Reduction,
        op: CompareOp,
        operands: &Operands<'_, Self>,
        len: usize,
    ) -> bool {
        reduce(reduction, op, operands, len)
    }
}

macro_rules! impl_scalar_lanes {
    ($($t:ty),* $(,)?) => {
        $(impl LaneReduce for $t {})*
    };
}

impl_scalar_lanes!(i8, u8, i16, u16, i32, u32, i64, u64);

#[inline(always)]
fn load<const N: usize, T: Copy + Default>(s: &[T], i: usize) -> [T; N] {
    let mut out = [T::default(); N];
    out.copy_from_slice(&s[i..i + N]);
    out
}

macro_rules! impl_simd_lanes {
    ($t:ty, $v:ident, $n:literal, $func:ident) => {
        /// Lane-parallel reduction over the first `len` elements.
        ///
        /// `Ne` is computed as the negation of `Eq` so NaN lanes match it,
        /// as with scalar `!=`.
        pub fn $func(
            reduction: Reduction,
            op: CompareOp,
            operands: &Operands<'_, $t>,
            len: usize,
        ) -> bool {
            let head = len - len % $n;
            let mut i = 0;

            while i < head {
                let (a, b) = match *operands {
                    Operands::BufferScalar(a, s) => ($v::new(load(a, i)), $v::splat(s)),
                    Operands::ScalarBuffer(s, b) => ($v::splat(s), $v::new(load(b, i))),
                    Operands::BufferBuffer(a, b) => ($v::new(load(a, i)), $v::new(load(b, i))),
                };
                let mask = match op {
                    CompareOp::Eq => a.cmp_eq(b),
                    CompareOp::Ne => !a.cmp_eq(b),
                    CompareOp::Lt => a.cmp_lt(b),
                    CompareOp::Le => a.cmp_le(b),
                    CompareOp::Gt => a.cmp_gt(b),
                    CompareOp::Ge => a.cmp_ge(b),
                };
                match reduction {
                    Reduction::Any if mask.any() => return true,
                    Reduction::All if !mask.all() => return false,
                    _ => {}
                }
                i += $n;
            }

            match reduction {
                Reduction::Any => (head..len).any(|k| operands.test(op, k)),
                Reduction::All => (head..len).all(|k| operands.test(op, k)),
            }
        }

        impl LaneReduce for $t {
            #[inline]
            fn reduce_lanes(
                reduction: Reduction,
                op: CompareOp,
                operands: &Operands<'_, $t>,
                len: usize,
            ) -> bool {
                $func(reduction, op, operands, len)
            }
        }
    };
}

impl_simd_lanes!(f64, f64x2, 2, reduce_simd_f64);
impl_simd_lanes!(f32, f32x8, 8, reduce_simd_f32);
