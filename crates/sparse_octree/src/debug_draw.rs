//! LineBatch - per-frame staging of debug line vertices.
//!
//! Lines, wire spheres and octree division lines are collected into one
//! line list and handed to the renderer with [`LineBatch::flush`].

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::{OctreeError, OctreeResult};
use crate::octree::Octree;

/// Default vertex budget of a batch.
pub const DEFAULT_BATCH_VERTICES: usize = 16 * 1024;

/// Bounded line-list accumulator.
#[derive(Clone, Debug)]
pub struct LineBatch {
  vertices: Vec<Vec3>,
  max_vertices: usize,
}

impl LineBatch {
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_BATCH_VERTICES)
  }

  /// Batch holding at most `max_vertices` vertices.
  pub fn with_capacity(max_vertices: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(max_vertices),
      max_vertices,
    }
  }

  /// Staged vertex count.
  #[inline]
  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  #[inline]
  pub fn max_vertices(&self) -> usize {
    self.max_vertices
  }

  #[inline]
  pub fn vertices(&self) -> &[Vec3] {
    &self.vertices
  }

  fn ensure_room(&self, count: usize) -> OctreeResult<()> {
    let required = self.vertices.len() + count;
    if required > self.max_vertices {
      return Err(OctreeError::BufferTooSmall {
        required,
        available: self.max_vertices,
      });
    }
    Ok(())
  }

  pub fn draw_line(&mut self, a: Vec3, b: Vec3) -> OctreeResult<()> {
    self.ensure_room(2)?;
    self.vertices.push(a);
    self.vertices.push(b);
    Ok(())
  }

  /// Three axis-aligned circles (XY, XZ, YZ) of `segments` lines each.
  pub fn draw_sphere(&mut self, center: Vec3, radius: f32, segments: u16) -> OctreeResult<()> {
    let segments = segments as usize;
    self.ensure_room(segments * 6)?;

    let step = TAU / segments as f32;
    let planes: [fn(f32, f32) -> Vec3; 3] = [
      |c, s| Vec3::new(c, s, 0.0),
      |c, s| Vec3::new(c, 0.0, s),
      |c, s| Vec3::new(0.0, c, s),
    ];
    for plane in planes {
      for i in 0..segments {
        let a0 = step * i as f32;
        let a1 = step * (i + 1) as f32;
        self
          .vertices
          .push(center + plane(a0.cos() * radius, a0.sin() * radius));
        self
          .vertices
          .push(center + plane(a1.cos() * radius, a1.sin() * radius));
      }
    }
    Ok(())
  }

  /// Append the tree's division lines down to `max_depth`.
  pub fn extend_from_octree(&mut self, tree: &Octree, max_depth: u32) -> OctreeResult<usize> {
    let count = tree.debug_line_count(tree.root(), 0, max_depth)?;
    self.ensure_room(count)?;

    let start = self.vertices.len();
    self.vertices.resize(start + count, Vec3::ZERO);
    tree.debug_line_list(
      tree.root(),
      tree.center(),
      0,
      max_depth,
      &mut self.vertices[start..],
    )
  }

  /// Take the staged vertices, leaving the batch empty for the next frame.
  pub fn flush(&mut self) -> Vec<Vec3> {
    std::mem::replace(&mut self.vertices, Vec::with_capacity(self.max_vertices))
  }
}

impl Default for LineBatch {
  fn default() -> Self {
    Self::new()
  }
}
