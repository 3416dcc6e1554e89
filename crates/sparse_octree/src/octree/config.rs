//! OctreeConfig - spatial bounds of the tree and arena sizing.

use glam::Vec3;

use super::CubeBounds;
use crate::error::{OctreeError, OctreeResult};

/// Number of node slots per arena block.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Default growth limit: 64 blocks of 1024 slots.
pub const DEFAULT_MAX_BLOCKS: usize = 64;

/// Configuration for an [`Octree`](super::Octree).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
  /// World-space center of the root cube.
  pub center: Vec3,

  /// Edge length of the root cube.
  pub size: f32,

  /// Node slots allocated per arena block.
  pub block_size: usize,

  /// Maximum number of blocks the arena may grow to.
  pub max_blocks: usize,
}

impl OctreeConfig {
  /// Config for a cube at `center` with edge length `size`.
  pub fn new(center: Vec3, size: f32) -> Self {
    Self {
      center,
      size,
      ..Self::default()
    }
  }

  /// Override arena sizing.
  pub fn with_blocks(mut self, block_size: usize, max_blocks: usize) -> Self {
    self.block_size = block_size;
    self.max_blocks = max_blocks;
    self
  }

  /// Edge length of a cell at `depth`.
  /// cell_size = size / 2^depth
  #[inline]
  pub fn cell_size(&self, depth: u32) -> f32 {
    self.size * 0.5f32.powi(depth as i32)
  }

  /// Root cube bounds.
  #[inline]
  pub fn bounds(&self) -> CubeBounds {
    CubeBounds::new(self.center, self.size)
  }

  /// Largest number of slots the arena can ever hold.
  #[inline]
  pub fn max_capacity(&self) -> usize {
    self.block_size.saturating_mul(self.max_blocks)
  }

  pub fn validate(&self) -> OctreeResult<()> {
    if !self.size.is_finite() || self.size <= 0.0 || !self.center.is_finite() {
      return Err(OctreeError::InvalidBounds { size: self.size });
    }
    if self.block_size == 0 {
      return Err(OctreeError::InvalidConfig("block_size must be non-zero"));
    }
    if self.max_blocks == 0 {
      return Err(OctreeError::InvalidConfig("max_blocks must be non-zero"));
    }
    // Handles are u32 slot indices.
    if self.max_capacity() > u32::MAX as usize {
      return Err(OctreeError::InvalidConfig(
        "block_size * max_blocks exceeds the handle range",
      ));
    }
    Ok(())
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      size: 1.0,
      block_size: DEFAULT_BLOCK_SIZE,
      max_blocks: DEFAULT_MAX_BLOCKS,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
