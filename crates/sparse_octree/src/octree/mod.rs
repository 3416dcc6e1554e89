//! Octree module: explicit sparse octree over an arena of nodes.
//!
//! Nodes are records in a [`NodeArena`](crate::arena::NodeArena) linked by
//! [`NodeHandle`]s. A node is either a leaf or owns exactly eight children.
//!
//! # Geometry Convention
//!
//! The root cube is given by its center and edge length. Depth 0 = root.
//!
//! ```text
//! Cell Size    = size / 2^depth
//! Child Center = center + OCTANT_OFFSETS[octant] * size / 2^(depth + 1)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `NodeHandle`, `OctreeNode`, `Occupancy`
//! - [`octant`]: octant offset table and point classification
//! - [`config`]: `OctreeConfig` - bounds and arena sizing
//! - [`bounds`]: `CubeBounds`
//! - [`tree`]: `Octree` - split, insert, collapse
//! - [`debug_lines`]: wireframe line-list generation
//! - [`stats`]: traversal statistics

pub mod bounds;
pub mod config;
pub mod debug_lines;
pub mod node;
pub mod octant;
pub mod stats;
pub mod tree;

// Re-exports
pub use bounds::CubeBounds;
pub use config::OctreeConfig;
pub use debug_lines::{flatten_vertices, DEBUG_DIVISION, DIVISION_VERTEX_COUNT};
pub use node::{NodeHandle, Occupancy, OctreeNode};
pub use octant::OCTANT_OFFSETS;
pub use stats::{OccupiedCell, OctreeStats};
pub use tree::Octree;
