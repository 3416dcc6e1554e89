//! sparse_octree - arena-backed sparse octree for interactive viewers
//!
//! This crate provides the spatial core of a 3D viewer: an explicit octree
//! whose nodes live in a growable arena, point insertion by recursive octant
//! classification, and wireframe line-list generation for debug rendering.
//! Windowing, GPU buffers and camera math stay with the host; the crate
//! consumes points and cube bounds and produces flat vertex buffers.
//!
//! # Features
//!
//! - **Node Arena**: handle-addressed slots, FIFO reuse of freed slots,
//!   block-wise growth that never moves a live node
//! - **Insertion**: descends and splits down to a maximum depth, flagging
//!   the terminal cell occupied; planned up front so failures leave the tree
//!   untouched
//! - **Debug Lines**: division planes of every split cell as a bounded,
//!   restartable line list
//! - **Picking**: ray/plane and ray/cube intersection for cursor picking
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use sparse_octree::Octree;
//!
//! let mut tree = Octree::with_bounds(Vec3::ZERO, 4.0).unwrap();
//! tree.insert(Vec3::new(1.0, 1.0, 1.0), 3).unwrap();
//!
//! let lines = tree.debug_lines(8).unwrap();
//! assert_eq!(lines.len(), 3 * 30);
//! ```

pub mod arena;
pub mod debug_draw;
pub mod error;
pub mod octree;
pub mod picking;

// Re-export commonly used items
pub use arena::NodeArena;
pub use debug_draw::LineBatch;
pub use error::{OctreeError, OctreeResult};
pub use octree::{
  flatten_vertices, CubeBounds, NodeHandle, Occupancy, OccupiedCell, Octree, OctreeConfig,
  OctreeNode, OctreeStats,
};
pub use picking::Ray;
