//! Compacting index search.
//!
//! ## Purpose
//!
//! [`find_indices`] collects the index of every matching element into a
//! destination buffer of the dedicated index kind (`i64`), packed from the
//! front. [`find_first`] returns only the first match.
//!
//! ## Design notes
//!
//! * **Single pass**: Left to right over `[0, len)`; indices are written in
//!   ascending order with no gaps.
//! * **No tail clearing**: Destination elements past the returned count keep
//!   whatever they held before the call. Callers reusing a destination buffer
//!   across calls must only read the first `count` entries.
//!
//! ## Invariants
//!
//! * Written indices are strictly increasing and all lie in `[0, len)`.
//! * Repeated calls with identical inputs write identical prefixes.

// Internal dependencies
use crate::algorithms::operands::Operands;
use crate::math::element::Element;
use crate::math::operators::CompareOp;

/// Write the index of every matching element in `[0, len)` to the front of
/// `dest` and return the number written.
///
/// # Panics
///
/// Panics if `len` exceeds a participating buffer or `dest` holds fewer than
/// the number of matches. The engine validates `dest.len() >= input.len()`
/// before calling.
pub fn find_indices<T: Element>(
    op: CompareOp,
    operands: &Operands<'_, T>,
    dest: &mut [i64],
    len: usize,
) -> usize {
    let mut count = 0;
    for i in 0..len {
        if operands.test(op, i) {
            dest[count] = i as i64;
            count += 1;
        }
    }
    count
}

/// Index of the first matching element in `[0, len)`.
pub fn find_first<T: Element>(op: CompareOp, operands: &Operands<'_, T>, len: usize) -> Option<usize> {
    (0..len).find(|&i| operands.test(op, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_is_left_untouched() {
        let input = [1u8, 2, 1, 2];
        let mut dest = [-7i64; 4];
        let n = find_indices(CompareOp::Eq, &Operands::BufferScalar(&input[..], 2), &mut dest, 4);
        assert_eq!(n, 2);
        assert_eq!(dest, [1, 3, -7, -7]);
    }
}
