//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns a dynamically typed call into a typed kernel invocation.
//! It resolves the call shape and element kind, runs the up-front checks in
//! their fixed order, and dispatches to the algorithms layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation, dispatch and kernel invocation.
pub mod executor;

/// Call-shape and element-kind resolution.
pub mod shape;

/// Validation utilities.
pub mod validator;
