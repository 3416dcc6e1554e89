//! Tree statistics and occupied-cell listing.

use glam::Vec3;
use smallvec::SmallVec;

use super::octant::child_center;
use super::{NodeHandle, Octree, OctreeNode};

/// Counters gathered by a full traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
	/// Nodes reachable from the root, root included.
	pub live_nodes: usize,
	/// Nodes with children.
	pub split_nodes: usize,
	/// Nodes carrying the occupancy flag.
	pub occupied_nodes: usize,
	/// Deepest level reached.
	pub max_depth: u32,
	/// Slots currently backed by arena memory.
	pub capacity: usize,
	/// Freed slots waiting for reuse.
	pub free_slots: usize,
}

/// A cell flagged occupied, with its world-space geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OccupiedCell {
	pub handle: NodeHandle,
	pub center: Vec3,
	/// Edge length.
	pub size: f32,
	pub depth: u32,
}

/// Explicit DFS stack: (node, cell center, depth).
type NodeStack = SmallVec<[(NodeHandle, Vec3, u32); 64]>;

impl Octree {
	/// Walk the tree and count nodes.
	pub fn stats(&self) -> OctreeStats {
		let mut stats = OctreeStats {
			capacity: self.arena().capacity(),
			free_slots: self.arena().free_len(),
			..OctreeStats::default()
		};
		self.visit(|_, node, _, depth| {
			stats.live_nodes += 1;
			stats.split_nodes += node.has_children() as usize;
			stats.occupied_nodes += node.is_occupied() as usize;
			stats.max_depth = stats.max_depth.max(depth);
		});
		stats
	}

	/// Occupied cells in depth-first octant order.
	pub fn occupied_cells(&self) -> Vec<OccupiedCell> {
		let mut cells = Vec::new();
		self.visit(|handle, node, center, depth| {
			if node.is_occupied() {
				cells.push(OccupiedCell {
					handle,
					center,
					size: self.config().cell_size(depth),
					depth,
				});
			}
		});
		cells
	}

	/// Depth-first pre-order traversal, children in octant order.
	fn visit(&self, mut f: impl FnMut(NodeHandle, &OctreeNode, Vec3, u32)) {
		let mut stack: NodeStack = SmallVec::new();
		stack.push((self.root(), self.center(), 0));

		while let Some((handle, center, depth)) = stack.pop() {
			let Ok(node) = self.node(handle) else {
				debug_assert!(false, "child link {} points at a free slot", handle);
				continue;
			};
			f(handle, node, center, depth);

			if let Some(children) = node.children {
				let cell_size = self.config().cell_size(depth);
				for (octant, child) in children.into_iter().enumerate().rev() {
					stack.push((child, child_center(center, octant, cell_size), depth + 1));
				}
			}
		}
	}
}
