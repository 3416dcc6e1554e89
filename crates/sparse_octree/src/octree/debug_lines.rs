//! Wireframe line-list generation for split cells.
//!
//! Every split node contributes the three planes that divide it into
//! octants, drawn as 15 segments (30 vertices) of the [`DEBUG_DIVISION`]
//! table scaled by the cell edge and translated to the cell center. The
//! output is a flat line list: vertices `2k` and `2k + 1` form segment `k`.

use glam::Vec3;
use smallvec::SmallVec;

use super::octant::child_center;
use super::{NodeHandle, Octree};
use crate::error::{OctreeError, OctreeResult};

/// Vertices emitted per split node.
pub const DIVISION_VERTEX_COUNT: usize = 30;

/// Segments of a cell's internal division planes, in units of the cell edge.
#[rustfmt::skip]
pub const DEBUG_DIVISION: [Vec3; DIVISION_VERTEX_COUNT] = [
  // Axis crosshair through the center
  Vec3::new(0.5, 0.0, 0.0),  Vec3::new(-0.5, 0.0, 0.0),
  Vec3::new(0.0, 0.5, 0.0),  Vec3::new(0.0, -0.5, 0.0),
  Vec3::new(0.0, 0.0, 0.5),  Vec3::new(0.0, 0.0, -0.5),

  // Top and bottom face midlines
  Vec3::new(0.5, 0.5, 0.0),  Vec3::new(-0.5, 0.5, 0.0),
  Vec3::new(0.0, 0.5, 0.5),  Vec3::new(0.0, 0.5, -0.5),
  Vec3::new(0.5, -0.5, 0.0), Vec3::new(-0.5, -0.5, 0.0),
  Vec3::new(0.0, -0.5, 0.5), Vec3::new(0.0, -0.5, -0.5),

  // Right and left face midlines
  Vec3::new(0.5, 0.5, 0.0),  Vec3::new(0.5, -0.5, 0.0),
  Vec3::new(0.5, 0.0, 0.5),  Vec3::new(0.5, 0.0, -0.5),
  Vec3::new(-0.5, 0.5, 0.0), Vec3::new(-0.5, -0.5, 0.0),
  Vec3::new(-0.5, 0.0, 0.5), Vec3::new(-0.5, 0.0, -0.5),

  // Front and back face midlines
  Vec3::new(0.5, 0.0, 0.5),  Vec3::new(-0.5, 0.0, 0.5),
  Vec3::new(0.0, 0.5, 0.5),  Vec3::new(0.0, -0.5, 0.5),
  Vec3::new(0.5, 0.0, -0.5), Vec3::new(-0.5, 0.0, -0.5),
  Vec3::new(0.0, 0.5, -0.5), Vec3::new(0.0, -0.5, -0.5),
];

impl Octree {
  /// Number of vertices [`Octree::debug_line_list`] would write for the
  /// same arguments.
  pub fn debug_line_count(
    &self,
    handle: NodeHandle,
    depth: u32,
    max_depth: u32,
  ) -> OctreeResult<usize> {
    let mut stack: SmallVec<[(NodeHandle, u32); 64]> = SmallVec::new();
    stack.push((handle, depth));

    let mut count = 0;
    while let Some((node, depth)) = stack.pop() {
      let Some(children) = self.node(node)?.children else {
        continue;
      };
      if depth >= max_depth {
        continue;
      }
      count += DIVISION_VERTEX_COUNT;
      stack.extend(children.iter().map(|&child| (child, depth + 1)));
    }
    Ok(count)
  }

  /// Write the division lines of `handle` and its descendants into `out`.
  ///
  /// `start` is the center of `handle`'s cell and `depth` its level. Cells at
  /// `max_depth` and leaves contribute nothing. Children are visited
  /// depth-first in octant order.
  ///
  /// Returns the number of vertices written, always starting at `out[0]`.
  /// If `out` is too short the call fails with
  /// [`OctreeError::BufferTooSmall`] before writing anything.
  #[tracing::instrument(level = "trace", skip(self, out), name = "octree::debug_line_list")]
  pub fn debug_line_list(
    &self,
    handle: NodeHandle,
    start: Vec3,
    depth: u32,
    max_depth: u32,
    out: &mut [Vec3],
  ) -> OctreeResult<usize> {
    if depth > max_depth {
      return Err(OctreeError::DepthOutOfRange { depth, max_depth });
    }
    let required = self.debug_line_count(handle, depth, max_depth)?;
    if required > out.len() {
      return Err(OctreeError::BufferTooSmall {
        required,
        available: out.len(),
      });
    }

    let mut cursor = 0;
    self.emit_division_lines(handle, start, depth, max_depth, out, &mut cursor)?;
    debug_assert_eq!(cursor, required);
    Ok(cursor)
  }

  /// Line list for the whole tree down to `max_depth`, sized exactly.
  pub fn debug_lines(&self, max_depth: u32) -> OctreeResult<Vec<Vec3>> {
    let count = self.debug_line_count(self.root(), 0, max_depth)?;
    let mut vertices = vec![Vec3::ZERO; count];
    self.debug_line_list(self.root(), self.center(), 0, max_depth, &mut vertices)?;
    Ok(vertices)
  }

  /// Pre-order walk, children in octant order.
  fn emit_division_lines(
    &self,
    handle: NodeHandle,
    start: Vec3,
    depth: u32,
    max_depth: u32,
    out: &mut [Vec3],
    cursor: &mut usize,
  ) -> OctreeResult<()> {
    let mut stack: SmallVec<[(NodeHandle, Vec3, u32); 64]> = SmallVec::new();
    stack.push((handle, start, depth));

    while let Some((node, start, depth)) = stack.pop() {
      let Some(children) = self.node(node)?.children else {
        continue;
      };
      if depth >= max_depth {
        continue;
      }

      let cell_size = self.config().cell_size(depth);
      let lines = &mut out[*cursor..*cursor + DIVISION_VERTEX_COUNT];
      for (vertex, offset) in lines.iter_mut().zip(DEBUG_DIVISION) {
        *vertex = start + offset * cell_size;
      }
      *cursor += DIVISION_VERTEX_COUNT;

      for (octant, child) in children.into_iter().enumerate().rev() {
        stack.push((child, child_center(start, octant, cell_size), depth + 1));
      }
    }
    Ok(())
  }
}

/// Flatten positions into the `[x, y, z, x, y, z, ...]` layout of a vertex
/// buffer.
pub fn flatten_vertices(vertices: &[Vec3]) -> Vec<f32> {
  vertices.iter().flat_map(|v| v.to_array()).collect()
}

#[cfg(test)]
#[path = "debug_lines_test.rs"]
mod debug_lines_test;
