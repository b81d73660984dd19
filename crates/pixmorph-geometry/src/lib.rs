#![deny(missing_docs)]
//! Geometry primitives used by the warping operators

/// 2D point and vector arithmetic.
pub mod point;

/// Oriented line segments and segment correspondences.
pub mod segment;

/// Error types for the geometry module.
pub mod error;

pub use crate::error::GeometryError;
pub use crate::point::Point2D;
pub use crate::segment::{source_position, OrientedLineSegment, SegmentPair, SegmentWeight};
