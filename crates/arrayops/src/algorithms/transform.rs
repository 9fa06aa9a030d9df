//! Binary elementwise transform.
//!
//! ## Purpose
//!
//! This kernel computes `lhs OP rhs` for every index in `[0, len)` and stores
//! the result in an output buffer. Either side may be a scalar, a separate
//! buffer, or the output buffer itself.
//!
//! ## Design notes
//!
//! * **Aliasing**: Strictly left to right; both operands of index `i` are read
//!   before index `i` is written, so reading from the output buffer is safe.
//! * **Checked mode**: Stops at the first domain error. Writes to earlier
//!   indices are kept.
//! * **Suppressed mode**: Every element is computed; float domain errors leave
//!   NaN, integer overflow wraps. A zero integer divisor still fails.
//!
//! ## Invariants
//!
//! * Output elements at or beyond `len` are never written.
//! * On `Err(Arithmetic { index })`, outputs `[0, index)` hold results and
//!   `[index, ..)` are untouched.

// Internal dependencies
use crate::algorithms::operands::Source;
use crate::math::element::Element;
use crate::math::operators::{ErrorMode, MathOp};
use crate::primitives::errors::ArrayError;

/// Apply `op` elementwise over `[0, len)`, writing into `out`.
///
/// # Panics
///
/// Panics if `len` exceeds `out` or a source buffer.
pub fn transform<T: Element>(
    op: MathOp,
    lhs: Source<'_, T>,
    rhs: Source<'_, T>,
    out: &mut [T],
    len: usize,
    mode: ErrorMode,
) -> Result<(), ArrayError> {
    let mut nan_results = 0usize;

    for i in 0..len {
        let a = lhs.read(i, out);
        let b = rhs.read(i, out);
        match T::combine(op, a, b, mode) {
            Some(value) => {
                if value.is_nan_value() {
                    nan_results += 1;
                }
                out[i] = value;
            }
            None => {
                log::debug!(
                    "{} on {} stopped at index {} ({} {})",
                    op.name(),
                    T::KIND,
                    i,
                    a,
                    b
                );
                return Err(ArrayError::Arithmetic { index: i });
            }
        }
    }

    if nan_results > 0 {
        log::debug!(
            "{} on {} produced {} NaN results with errors suppressed",
            op.name(),
            T::KIND,
            nan_results
        );
    }
    Ok(())
}
