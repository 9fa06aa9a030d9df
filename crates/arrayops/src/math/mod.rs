//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric building blocks every kernel shares:
//! - The `Element` trait over the native numeric types
//! - Overflow-safe scalar conversion
//! - The operator table and per-type comparison/arithmetic rules
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Numeric element trait.
pub mod element;

/// Overflow-safe scalar conversion.
pub mod convert;

/// Opcodes and operator rules.
pub mod operators;
