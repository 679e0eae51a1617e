// src/data/mod.rs
//! GPU-facing data layouts for the light-field viewer.
//!
//! This module provides:
//! - The vertex layout and contents of the static image-plane quad.
//! - The uniform block consumed by the refocus shader.

pub mod types;

// Re-export commonly used types for convenience.
pub use self::types::{LightFieldUniformsStd140, QuadVertex, QUAD_INDICES, QUAD_VERTICES};
