//! # arrayops — Vectorized Elementwise Operations on Numeric Buffers
//!
//! Comparison reductions, index search and checked arithmetic over flat
//! buffers of fixed-width native numbers, with overflow-safe scalar
//! conversion and one error taxonomy for every failure.
//!
//! ## What does it do?
//!
//! Every operation takes an integer opcode, two operands and an [`Options`]
//! value. At least one operand is a buffer; the other may be a scalar or a
//! second buffer of the same element kind. The engine checks kinds, lengths
//! and scalar ranges up front, then runs a single generic kernel for the
//! buffer's native type.
//!
//! | Operation        | Opcodes         | Result                               |
//! |------------------|-----------------|--------------------------------------|
//! | [`reduce_any`]   | `EQ ..= GE`     | `true` if some element matches       |
//! | [`reduce_all`]   | `EQ ..= GE`     | `true` if every element matches      |
//! | [`find_indices`] | `EQ ..= GE`     | matching indices written to an `i64` buffer |
//! | [`find_first`]   | `EQ ..= GE`     | index of the first match             |
//! | [`transform`]    | `ADD ..= FMOD`  | elementwise result, into a destination or in place |
//! | [`transform_self`] | `ADD ..= FMOD` | each element combined with itself, in place |
//!
//! ## Quick Start
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let samples = [3i16, -4, 12, 7, -1];
//! let opts = Options::new();
//!
//! // Is any sample negative?
//! assert!(reduce_any(opcodes::LT, &samples[..], 0i16, &opts)?);
//!
//! // Where are the positive ones?
//! let mut idx = [0i64; 5];
//! let n = find_indices(opcodes::GT, &samples[..], 0i16, &mut idx[..], &opts)?;
//! assert_eq!(&idx[..n], &[0, 2, 3]);
//!
//! // Scale the first three in place.
//! let mut scaled = samples;
//! transform(opcodes::MUL, &mut scaled[..], 10i16, None, &Options::new().maxlen(3))?;
//! assert_eq!(scaled, [30, -40, 120, 7, -1]);
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every call returns `Result<_, ArrayError>`. [`ArrayError::category`] maps
//! each error onto one of five families:
//!
//! - **TypeKindMismatch**: mixed buffer kinds, a float scalar for an integer
//!   buffer, a non-integer opcode, an unsupported option.
//! - **InvalidOperation**: an unknown opcode, or one from the wrong family.
//! - **RangeError**: a scalar outside the buffer kind's range.
//! - **LengthError**: empty or mismatched buffers, a short destination.
//! - **ArithmeticError**: overflow, a zero divisor, a non-finite float.
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let data = [1u8, 2, 3];
//! let err = reduce_any(opcodes::EQ, &data[..], 300i32, &Options::new()).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::RangeError);
//! ```
//!
//! Arithmetic errors can be suppressed for a transform. Float domain errors
//! then produce NaN and integer overflow wraps:
//!
//! ```rust
//! use arrayops::prelude::*;
//!
//! let mut data = [1.0f64, f64::INFINITY, 5.0];
//! let checked = transform(opcodes::FMOD, &mut data[..], 2.0f64, None, &Options::new());
//! assert_eq!(checked.unwrap_err().category(), ErrorCategory::ArithmeticError);
//!
//! let mut data = [1.0f64, f64::INFINITY, 5.0];
//! transform(opcodes::FMOD, &mut data[..], 2.0f64, None, &Options::new().suppress_errors())?;
//! assert!(data[1].is_nan());
//! assert_eq!(data[2], 1.0);
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! The crate emits records through the [`log`](https://docs.rs/log) facade:
//! one `trace` record per dispatched call and a `debug` record when a
//! transform stops on an arithmetic error. Install any `log` backend to see
//! them.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! arrayops = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - kind registry, dynamic views and errors.
mod primitives;

// Layer 2: Math - element trait, scalar conversion and operators.
mod math;

// Layer 3: Algorithms - elementwise kernels.
mod algorithms;

// Layer 4: Engine - validation and dispatch.
mod engine;

// High-level API for elementwise operations.
mod api;

pub use crate::api::*;

// Standard arrayops prelude.
pub mod prelude {
    pub use crate::api::{
        find_first, find_indices, opcodes, reduce_all, reduce_any, transform, transform_self,
        ArrayError, ArrayMut, ArrayRef, CompareOp, Element, ElementKind, ErrorCategory, MathOp,
        OpCode, Operand, OperandMut, Operation, Options, Scalar,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
