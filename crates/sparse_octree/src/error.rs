//! Error types for arena and tree operations.

use glam::Vec3;
use thiserror::Error;

use crate::octree::NodeHandle;

/// Errors that can occur while mutating or traversing an octree.
///
/// Every failing operation leaves the tree exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OctreeError {
  /// The arena has no free slot left and may not grow any further.
  #[error("node arena exhausted (capacity: {capacity})")]
  OutOfCapacity { capacity: usize },

  /// Split requested on a node that already owns eight children.
  #[error("node {0} is already split")]
  AlreadySplit(NodeHandle),

  /// The point could not be classified into any octant (non-finite input).
  #[error("no octant of center {center} matches point {point}")]
  NoMatchingOctant { point: Vec3, center: Vec3 },

  /// The caller-supplied vertex buffer cannot hold the generated lines.
  #[error("vertex buffer too small (required: {required}, available: {available})")]
  BufferTooSmall { required: usize, available: usize },

  /// Handle was never issued by the arena or its slot has been freed.
  #[error("invalid node handle {0}")]
  InvalidHandle(NodeHandle),

  /// Handle was freed twice.
  #[error("node {0} freed twice")]
  DoubleFree(NodeHandle),

  /// Traversal started below the requested maximum depth.
  #[error("depth {depth} exceeds maximum depth {max_depth}")]
  DepthOutOfRange { depth: u32, max_depth: u32 },

  /// Tree bounds must be finite with a positive edge size.
  #[error("octree bounds must be finite with a positive edge size (size: {size})")]
  InvalidBounds { size: f32 },

  /// Arena sizing cannot be satisfied.
  #[error("invalid octree config: {0}")]
  InvalidConfig(&'static str),
}

pub type OctreeResult<T> = Result<T, OctreeError>;
