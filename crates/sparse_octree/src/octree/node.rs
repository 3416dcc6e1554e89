//! OctreeNode - a single arena record with its parent and child links.
//!
//! Nodes never hold references to each other. Links are [`NodeHandle`]s into
//! the owning arena, and "no children" is spelled `None` rather than a
//! reserved handle value, so slot 0 (the root) is an ordinary handle.

use std::fmt;

/// Opaque index of a node slot in a [`NodeArena`](crate::arena::NodeArena).
///
/// A handle stays valid while its slot is allocated. After the slot is freed
/// the arena may hand the same value out again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeHandle(u32);

impl NodeHandle {
  /// The root always lives in the first slot.
  pub const ROOT: Self = Self(0);

  #[inline]
  pub(crate) fn from_index(index: usize) -> Self {
    debug_assert!(index <= u32::MAX as usize, "node index overflows u32");
    Self(index as u32)
  }

  /// Slot index inside the arena.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl fmt::Display for NodeHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Occupancy marker of a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Occupancy {
  #[default]
  Empty,
  /// Terminal cell reached by an insertion at maximum depth.
  Occupied,
}

/// Octree node record.
///
/// Children are stored as a fixed array indexed by octant, present either
/// all together or not at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OctreeNode {
  /// Occupancy of this cell.
  pub occupancy: Occupancy,
  /// Parent link. `None` only for the root (or a freshly reset slot).
  pub parent: Option<NodeHandle>,
  /// Eight children in octant order, or `None` for a leaf.
  pub children: Option<[NodeHandle; 8]>,
}

impl OctreeNode {
  /// Empty leaf attached to `parent`.
  pub fn with_parent(parent: NodeHandle) -> Self {
    Self {
      parent: Some(parent),
      ..Self::default()
    }
  }

  #[inline]
  pub fn has_children(&self) -> bool {
    self.children.is_some()
  }

  #[inline]
  pub fn is_occupied(&self) -> bool {
    self.occupancy == Occupancy::Occupied
  }

  /// Child in the given octant, if this node is split.
  #[inline]
  pub fn child(&self, octant: usize) -> Option<NodeHandle> {
    self.children.map(|children| children[octant])
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
