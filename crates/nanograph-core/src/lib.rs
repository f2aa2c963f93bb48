//! Core types for the NanoGraph layout engine.
//!
//! This crate provides the node tree the layout engine operates on:
//! - Geometry value types (rects, sizes, thickness, colors)
//! - Per-node layout properties (mode, orientation, dock edge, alignment, grid)
//! - The arena-backed [`LayoutTree`] with its growth and traversal operations
//! - Error types

pub mod errors;
pub mod geometry;
pub mod style;
pub mod tree;

pub use errors::*;
pub use geometry::*;
pub use style::*;
pub use tree::*;
