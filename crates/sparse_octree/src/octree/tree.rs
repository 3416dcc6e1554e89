//! Octree - owns the node arena and implements split, insertion and
//! collapse.
//!
//! # Insertion
//!
//! Insertion descends from a node towards `max_depth`, splitting leaves on
//! the way and flagging the final cell [`Occupancy::Occupied`]:
//!
//! ```text
//! depth 0      [root]                 classify(point - center) -> octant
//!                 │ split if leaf
//! depth 1   [0][1][2][3][4][5][6][7]  center += offset * size / 2^(depth+1)
//!                       │
//! depth 2            [.. 8 ..]
//!                       │
//! max_depth          occupied
//! ```
//!
//! The whole path is planned before the first mutation: classification of
//! every level and the arena capacity for every split the path needs. A
//! failed insertion leaves the tree untouched.

use glam::Vec3;
use smallvec::SmallVec;
use tracing::trace;

use super::octant::{child_center, classify};
use super::{CubeBounds, NodeHandle, Occupancy, OctreeConfig, OctreeNode};
use crate::arena::NodeArena;
use crate::error::{OctreeError, OctreeResult};

/// Sparse octree over a cube.
pub struct Octree {
  config: OctreeConfig,
  arena: NodeArena,
}

impl Octree {
  /// Create a tree holding a single empty root.
  pub fn new(config: OctreeConfig) -> OctreeResult<Self> {
    config.validate()?;
    let mut arena = NodeArena::new(config.block_size, config.max_blocks)?;
    let root = arena.allocate()?;
    debug_assert_eq!(root, NodeHandle::ROOT);
    Ok(Self { config, arena })
  }

  /// Create a tree with default arena sizing.
  pub fn with_bounds(center: Vec3, size: f32) -> OctreeResult<Self> {
    Self::new(OctreeConfig::new(center, size))
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  #[inline]
  pub fn center(&self) -> Vec3 {
    self.config.center
  }

  /// Edge length of the root cube.
  #[inline]
  pub fn size(&self) -> f32 {
    self.config.size
  }

  #[inline]
  pub fn bounds(&self) -> CubeBounds {
    self.config.bounds()
  }

  #[inline]
  pub fn root(&self) -> NodeHandle {
    NodeHandle::ROOT
  }

  #[inline]
  pub fn arena(&self) -> &NodeArena {
    &self.arena
  }

  /// Number of live nodes, root included.
  #[inline]
  pub fn len(&self) -> usize {
    self.arena.len()
  }

  /// A tree always holds its root.
  #[inline]
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn node(&self, handle: NodeHandle) -> OctreeResult<&OctreeNode> {
    self.arena.get(handle)
  }

  /// Give `handle` eight empty children in octant order.
  ///
  /// Fails with [`OctreeError::AlreadySplit`] if the node already has
  /// children and with [`OctreeError::OutOfCapacity`] if eight slots cannot
  /// be provided. The tree is unchanged on failure.
  pub fn split_node(&mut self, handle: NodeHandle) -> OctreeResult<()> {
    if self.arena.get(handle)?.has_children() {
      return Err(OctreeError::AlreadySplit(handle));
    }
    self.arena.reserve(8)?;

    let mut children = [NodeHandle::ROOT; 8];
    for child in children.iter_mut() {
      *child = self.arena.allocate()?;
      *self.arena.get_mut(*child)? = OctreeNode::with_parent(handle);
    }
    self.arena.get_mut(handle)?.children = Some(children);

    trace!(node = %handle, first_child = %children[0], "split node");
    Ok(())
  }

  /// Insert `point` below `handle`, whose cell is centered at `center` and
  /// sits at `depth`.
  ///
  /// Returns the handle of the cell at `max_depth` that now carries the
  /// occupancy flag.
  #[tracing::instrument(level = "trace", skip(self), name = "octree::insert_point")]
  pub fn insert_point(
    &mut self,
    handle: NodeHandle,
    center: Vec3,
    point: Vec3,
    depth: u32,
    max_depth: u32,
  ) -> OctreeResult<NodeHandle> {
    if depth > max_depth {
      return Err(OctreeError::DepthOutOfRange { depth, max_depth });
    }

    // Plan the descent: one octant per level plus the splits it needs.
    let mut path: SmallVec<[usize; 16]> = SmallVec::new();
    let mut cell_center = center;
    let mut existing = Some(handle);
    let mut splits = 0usize;
    for level in depth..max_depth {
      let octant = classify(cell_center, point).ok_or(OctreeError::NoMatchingOctant {
        point,
        center: cell_center,
      })?;

      existing = match existing {
        Some(node) => match self.arena.get(node)?.child(octant) {
          Some(child) => Some(child),
          None => {
            splits += 1;
            None
          }
        },
        // Cells created by an earlier split of this path are leaves.
        None => {
          splits += 1;
          None
        }
      };

      // Stop planning once the path can no longer fit.
      if splits * 8 > self.arena.available() {
        return Err(OctreeError::OutOfCapacity {
          capacity: self.arena.max_capacity(),
        });
      }

      cell_center = child_center(cell_center, octant, self.config.cell_size(level));
      path.push(octant);
    }
    // Validates `handle` even when there is nothing to descend.
    self.arena.get(handle)?;
    self.arena.reserve(splits * 8)?;

    let mut current = handle;
    for &octant in &path {
      if !self.arena.get(current)?.has_children() {
        self.split_node(current)?;
      }
      current = self
        .arena
        .get(current)?
        .child(octant)
        .ok_or(OctreeError::InvalidHandle(current))?;
    }
    self.arena.get_mut(current)?.occupancy = Occupancy::Occupied;

    Ok(current)
  }

  /// Insert `point` from the root down to `max_depth`.
  pub fn insert(&mut self, point: Vec3, max_depth: u32) -> OctreeResult<NodeHandle> {
    self.insert_point(NodeHandle::ROOT, self.config.center, point, 0, max_depth)
  }

  /// Free every descendant of `handle` and turn it back into a leaf.
  ///
  /// Returns the number of freed nodes. Freed slots are reused by later
  /// splits in the order they were freed: each child's subtree first, then
  /// the child, children in octant order.
  pub fn collapse(&mut self, handle: NodeHandle) -> OctreeResult<usize> {
    let Some(children) = self.arena.get(handle)?.children else {
      return Ok(0);
    };

    // (node, expanded): a node is freed once its subtree has been freed.
    let mut stack: SmallVec<[(NodeHandle, bool); 64]> =
      children.iter().rev().map(|&child| (child, false)).collect();
    let mut freed = 0;
    while let Some((node, expanded)) = stack.pop() {
      if !expanded {
        if let Some(grandchildren) = self.arena.get(node)?.children {
          stack.push((node, true));
          stack.extend(grandchildren.iter().rev().map(|&child| (child, false)));
          continue;
        }
      }
      self.arena.free(node)?;
      freed += 1;
    }
    self.arena.get_mut(handle)?.children = None;

    trace!(node = %handle, freed, "collapsed node");
    Ok(freed)
  }

  /// Drop every node and start over with an empty root.
  pub fn clear(&mut self) {
    self.arena.reset();
    // The first block always holds at least one slot.
    let root = self.arena.allocate();
    debug_assert_eq!(root, Ok(NodeHandle::ROOT));
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
