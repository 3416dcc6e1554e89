//! NodeArena - block-chunked node storage with FIFO slot reuse.
//!
//! Slots live in fixed-size blocks reached through a block table. Growing
//! the arena appends a block and never moves an existing one, so every
//! issued [`NodeHandle`] keeps addressing the same record.
//!
//! ```text
//! handle index = block * block_size + slot
//!
//! blocks: [ Box<[Slot; block_size]> , Box<[Slot; block_size]> , ... ]
//!           └── 0 .. block_size-1 ──┘ └── block_size .. ────────┘
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{OctreeError, OctreeResult};
use crate::octree::{NodeHandle, OctreeNode};

#[derive(Clone, Copy, Default)]
struct Slot {
  node: OctreeNode,
  live: bool,
}

/// Store of octree nodes addressed by [`NodeHandle`].
pub struct NodeArena {
  blocks: Vec<Box<[Slot]>>,
  block_size: usize,
  max_blocks: usize,
  /// High-water mark: slots `0..used` have been issued at least once.
  used: usize,
  /// Freed handles, reissued oldest first.
  free: VecDeque<NodeHandle>,
}

impl NodeArena {
  /// Create an arena with one block of `block_size` slots.
  pub fn new(block_size: usize, max_blocks: usize) -> OctreeResult<Self> {
    if block_size == 0 {
      return Err(OctreeError::InvalidConfig("block_size must be non-zero"));
    }
    if max_blocks == 0 {
      return Err(OctreeError::InvalidConfig("max_blocks must be non-zero"));
    }
    // Handles are u32 slot indices.
    if block_size.saturating_mul(max_blocks) > u32::MAX as usize {
      return Err(OctreeError::InvalidConfig(
        "block_size * max_blocks exceeds the handle range",
      ));
    }
    let mut arena = Self {
      blocks: Vec::new(),
      block_size,
      max_blocks,
      used: 0,
      free: VecDeque::new(),
    };
    arena.push_block()?;
    Ok(arena)
  }

  /// Slots currently backed by memory.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.blocks.len() * self.block_size
  }

  /// Slots the arena may grow to.
  #[inline]
  pub fn max_capacity(&self) -> usize {
    self.max_blocks * self.block_size
  }

  #[inline]
  pub fn block_count(&self) -> usize {
    self.blocks.len()
  }

  /// Number of slots issued at least once.
  #[inline]
  pub fn used(&self) -> usize {
    self.used
  }

  /// Number of freed slots waiting for reuse.
  #[inline]
  pub fn free_len(&self) -> usize {
    self.free.len()
  }

  /// Number of live nodes.
  #[inline]
  pub fn len(&self) -> usize {
    self.used - self.free.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// How many more allocations can succeed, counting future growth.
  #[inline]
  pub fn available(&self) -> usize {
    self.free.len() + (self.max_capacity() - self.used)
  }

  /// Make sure the next `count` allocations succeed.
  ///
  /// Grows ahead of time when needed. Fails without touching the arena when
  /// `count` slots can never be provided.
  pub fn reserve(&mut self, count: usize) -> OctreeResult<()> {
    if count > self.available() {
      return Err(OctreeError::OutOfCapacity {
        capacity: self.max_capacity(),
      });
    }
    let fresh = count.saturating_sub(self.free.len());
    while self.capacity() < self.used + fresh {
      self.push_block()?;
    }
    Ok(())
  }

  /// Allocate an empty node slot.
  ///
  /// Freed slots are reused first-in first-out; otherwise the next fresh
  /// slot is issued, growing by one block when the current blocks are full.
  pub fn allocate(&mut self) -> OctreeResult<NodeHandle> {
    let handle = match self.free.pop_front() {
      Some(handle) => handle,
      None => {
        if self.used == self.capacity() {
          self.push_block()?;
        }
        let handle = NodeHandle::from_index(self.used);
        self.used += 1;
        handle
      }
    };

    *self.slot_mut(handle.index()) = Slot {
      node: OctreeNode::default(),
      live: true,
    };
    Ok(handle)
  }

  /// Return a slot to the free-list.
  pub fn free(&mut self, handle: NodeHandle) -> OctreeResult<()> {
    if handle.index() >= self.used {
      return Err(OctreeError::InvalidHandle(handle));
    }
    let slot = self.slot_mut(handle.index());
    if !slot.live {
      return Err(OctreeError::DoubleFree(handle));
    }
    *slot = Slot::default();
    self.free.push_back(handle);
    Ok(())
  }

  /// Check if `handle` addresses a live slot.
  #[inline]
  pub fn contains(&self, handle: NodeHandle) -> bool {
    handle.index() < self.used && self.slot(handle.index()).live
  }

  pub fn get(&self, handle: NodeHandle) -> OctreeResult<&OctreeNode> {
    if !self.contains(handle) {
      return Err(OctreeError::InvalidHandle(handle));
    }
    Ok(&self.slot(handle.index()).node)
  }

  pub fn get_mut(&mut self, handle: NodeHandle) -> OctreeResult<&mut OctreeNode> {
    if !self.contains(handle) {
      return Err(OctreeError::InvalidHandle(handle));
    }
    Ok(&mut self.slot_mut(handle.index()).node)
  }

  /// Reset a live slot to an empty, detached node.
  pub fn clear(&mut self, handle: NodeHandle) -> OctreeResult<()> {
    *self.get_mut(handle)? = OctreeNode::default();
    Ok(())
  }

  /// Drop every block but the first and forget all issued handles.
  pub fn reset(&mut self) {
    self.blocks.truncate(1);
    self.blocks[0].fill(Slot::default());
    self.used = 0;
    self.free.clear();
  }

  /// Iterate over live nodes in slot order.
  pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &OctreeNode)> {
    (0..self.used).filter_map(move |index| {
      let slot = self.slot(index);
      if slot.live {
        Some((NodeHandle::from_index(index), &slot.node))
      } else {
        None
      }
    })
  }

  fn push_block(&mut self) -> OctreeResult<()> {
    if self.blocks.len() >= self.max_blocks {
      return Err(OctreeError::OutOfCapacity {
        capacity: self.max_capacity(),
      });
    }
    self
      .blocks
      .push(vec![Slot::default(); self.block_size].into_boxed_slice());
    debug!(
      blocks = self.blocks.len(),
      capacity = self.capacity(),
      "node arena grew"
    );
    Ok(())
  }

  #[inline]
  fn slot(&self, index: usize) -> &Slot {
    &self.blocks[index / self.block_size][index % self.block_size]
  }

  #[inline]
  fn slot_mut(&mut self, index: usize) -> &mut Slot {
    &mut self.blocks[index / self.block_size][index % self.block_size]
  }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;
