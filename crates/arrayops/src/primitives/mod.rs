//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the element kind registry, the dynamically typed
//! scalar and buffer views, and the shared error types. It has zero internal
//! dependencies outside itself.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Element kind registry.
pub mod kind;

/// Dynamically typed scalars.
pub mod scalar;

/// Dynamically typed buffer views.
pub mod buffer;

/// Shared error types.
pub mod errors;
