//! Layer 3: Algorithms
//!
//! This layer implements the elementwise kernels: predicate reductions,
//! compacting index search and the binary transform. The kernels are generic
//! over `Element` and assume validated input; they are orchestrated by the
//! engine layer.

// Typed operand shapes.
pub mod operands;

// Any-match and all-match reductions.
pub mod reduce;

// Compacting index search.
pub mod search;

// Binary elementwise transform.
pub mod transform;
