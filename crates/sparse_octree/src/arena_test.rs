use super::*;
use crate::octree::Occupancy;

// =========================================================================
// Allocation
// =========================================================================

/// Fresh slots are issued in index order starting at the root slot.
#[test]
fn test_allocate_sequential() {
  let mut arena = NodeArena::new(16, 1).unwrap();

  let handles: Vec<_> = (0..4).map(|_| arena.allocate().unwrap()).collect();

  assert_eq!(handles[0], NodeHandle::ROOT);
  for (i, handle) in handles.iter().enumerate() {
    assert_eq!(handle.index(), i);
  }
  assert_eq!(arena.len(), 4);
  assert_eq!(arena.used(), 4);
}

/// Freeing X and allocating once returns X (FIFO reuse).
#[test]
fn test_free_then_allocate_reuses_handle() {
  let mut arena = NodeArena::new(16, 1).unwrap();
  let handles: Vec<_> = (0..5).map(|_| arena.allocate().unwrap()).collect();

  arena.free(handles[3]).unwrap();
  assert_eq!(arena.allocate().unwrap(), handles[3]);
}

/// Multiple freed handles come back oldest first.
#[test]
fn test_free_list_is_fifo() {
  let mut arena = NodeArena::new(16, 1).unwrap();
  let handles: Vec<_> = (0..6).map(|_| arena.allocate().unwrap()).collect();

  arena.free(handles[4]).unwrap();
  arena.free(handles[1]).unwrap();
  arena.free(handles[2]).unwrap();

  assert_eq!(arena.allocate().unwrap(), handles[4]);
  assert_eq!(arena.allocate().unwrap(), handles[1]);
  assert_eq!(arena.allocate().unwrap(), handles[2]);
  // Free-list drained, next one is fresh
  assert_eq!(arena.allocate().unwrap().index(), 6);
}

/// Reused slots come back reset.
#[test]
fn test_reused_slot_is_reset() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  let root = arena.allocate().unwrap();
  let node = arena.allocate().unwrap();
  {
    let record = arena.get_mut(node).unwrap();
    record.occupancy = Occupancy::Occupied;
    record.parent = Some(root);
  }

  arena.free(node).unwrap();
  let reused = arena.allocate().unwrap();

  assert_eq!(reused, node);
  assert_eq!(*arena.get(reused).unwrap(), OctreeNode::default());
}

// =========================================================================
// Growth
// =========================================================================

/// Crossing a block boundary appends a block and keeps old records intact.
#[test]
fn test_growth_preserves_existing_handles() {
  let mut arena = NodeArena::new(4, 3).unwrap();
  let first: Vec<_> = (0..4).map(|_| arena.allocate().unwrap()).collect();
  for (i, handle) in first.iter().enumerate().skip(1) {
    arena.get_mut(*handle).unwrap().parent = Some(first[i - 1]);
  }
  assert_eq!(arena.block_count(), 1);

  let grown = arena.allocate().unwrap();

  assert_eq!(grown.index(), 4);
  assert_eq!(arena.block_count(), 2);
  assert_eq!(arena.capacity(), 8);
  for (i, handle) in first.iter().enumerate().skip(1) {
    assert_eq!(arena.get(*handle).unwrap().parent, Some(first[i - 1]));
  }
}

/// Once every block is full the arena reports exhaustion.
#[test]
fn test_out_of_capacity() {
  let mut arena = NodeArena::new(4, 2).unwrap();
  for _ in 0..8 {
    arena.allocate().unwrap();
  }

  assert_eq!(
    arena.allocate(),
    Err(OctreeError::OutOfCapacity { capacity: 8 })
  );
  assert_eq!(arena.len(), 8);
}

/// A full arena still serves freed slots.
#[test]
fn test_full_arena_reuses_freed_slot() {
  let mut arena = NodeArena::new(4, 1).unwrap();
  let handles: Vec<_> = (0..4).map(|_| arena.allocate().unwrap()).collect();

  arena.free(handles[2]).unwrap();
  assert_eq!(arena.allocate().unwrap(), handles[2]);
  assert!(arena.allocate().is_err());
}

// =========================================================================
// Reserve
// =========================================================================

#[test]
fn test_reserve_grows_ahead() {
  let mut arena = NodeArena::new(4, 4).unwrap();
  arena.allocate().unwrap();

  arena.reserve(8).unwrap();

  // 1 used + 8 reserved needs 9 slots -> 3 blocks
  assert_eq!(arena.block_count(), 3);
  assert_eq!(arena.len(), 1);
}

/// Freed slots count towards a reservation.
#[test]
fn test_reserve_counts_free_list() {
  let mut arena = NodeArena::new(4, 1).unwrap();
  let handles: Vec<_> = (0..4).map(|_| arena.allocate().unwrap()).collect();
  arena.free(handles[1]).unwrap();
  arena.free(handles[3]).unwrap();

  assert!(arena.reserve(2).is_ok());
  assert!(arena.reserve(3).is_err());
}

/// A failed reservation leaves the arena untouched.
#[test]
fn test_reserve_failure_does_not_grow() {
  let mut arena = NodeArena::new(4, 2).unwrap();
  arena.allocate().unwrap();

  assert_eq!(
    arena.reserve(8),
    Err(OctreeError::OutOfCapacity { capacity: 8 })
  );
  assert_eq!(arena.block_count(), 1);
  assert_eq!(arena.used(), 1);
}

// =========================================================================
// Handle validation
// =========================================================================

#[test]
fn test_double_free() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  arena.allocate().unwrap();
  let node = arena.allocate().unwrap();

  arena.free(node).unwrap();
  assert_eq!(arena.free(node), Err(OctreeError::DoubleFree(node)));
  assert_eq!(arena.free_len(), 1);
}

#[test]
fn test_free_never_issued_handle() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  arena.allocate().unwrap();
  let stray = NodeHandle::from_index(5);

  assert_eq!(arena.free(stray), Err(OctreeError::InvalidHandle(stray)));
}

/// Freed handles cannot be read or written.
#[test]
fn test_access_after_free() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  arena.allocate().unwrap();
  let node = arena.allocate().unwrap();
  arena.free(node).unwrap();

  assert!(!arena.contains(node));
  assert_eq!(arena.get(node), Err(OctreeError::InvalidHandle(node)));
  assert!(arena.get_mut(node).is_err());
  assert!(arena.clear(node).is_err());
}

#[test]
fn test_clear_resets_live_slot() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  let root = arena.allocate().unwrap();
  arena.get_mut(root).unwrap().occupancy = Occupancy::Occupied;

  arena.clear(root).unwrap();

  assert!(arena.contains(root));
  assert_eq!(*arena.get(root).unwrap(), OctreeNode::default());
}

// =========================================================================
// Reset & iteration
// =========================================================================

#[test]
fn test_reset_releases_blocks() {
  let mut arena = NodeArena::new(4, 4).unwrap();
  for _ in 0..10 {
    arena.allocate().unwrap();
  }
  arena.free(NodeHandle::from_index(2)).unwrap();

  arena.reset();

  assert_eq!(arena.block_count(), 1);
  assert!(arena.is_empty());
  assert_eq!(arena.free_len(), 0);
  assert_eq!(arena.allocate().unwrap(), NodeHandle::ROOT);
}

#[test]
fn test_iter_skips_freed() {
  let mut arena = NodeArena::new(8, 1).unwrap();
  for _ in 0..4 {
    arena.allocate().unwrap();
  }
  arena.free(NodeHandle::from_index(1)).unwrap();

  let live: Vec<_> = arena.iter().map(|(handle, _)| handle.index()).collect();
  assert_eq!(live, vec![0, 2, 3]);
}

#[test]
fn test_new_rejects_zero_sizes() {
  assert!(NodeArena::new(0, 1).is_err());
  assert!(NodeArena::new(1, 0).is_err());
}

/// Sizing beyond the u32 handle range is rejected up front.
#[test]
fn test_new_rejects_capacity_beyond_handle_range() {
  assert_eq!(
    NodeArena::new(1 << 16, 1 << 17).err(),
    Some(OctreeError::InvalidConfig(
      "block_size * max_blocks exceeds the handle range"
    ))
  );
  assert!(NodeArena::new(1 << 16, 1 << 16).is_ok());
}

#[test]
fn test_invalid_config_message() {
  let err = NodeArena::new(0, 1).err().unwrap();
  assert_eq!(
    err.to_string(),
    "invalid octree config: block_size must be non-zero"
  );
}
