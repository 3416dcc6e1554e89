//! Octant indexing and point classification.
//!
//! Octant bits represent +X, +Y, +Z halves of a cell:
//! - bit 0: X (1 = positive side)
//! - bit 1: Y
//! - bit 2: Z
//!
//! ```text
//!        6 ────── 7
//!       /│       /│      +Y
//!      2 ────── 3 │       │  +Z
//!      │ 4 ─────│ 5       │ /
//!      │/       │/        │/
//!      0 ────── 1         └──── +X
//! ```

use glam::Vec3;

/// Center offset of each octant, in units of the parent's edge length.
pub const OCTANT_OFFSETS: [Vec3; 8] = [
  Vec3::new(-0.5, -0.5, -0.5),
  Vec3::new(0.5, -0.5, -0.5),
  Vec3::new(-0.5, 0.5, -0.5),
  Vec3::new(0.5, 0.5, -0.5),
  Vec3::new(-0.5, -0.5, 0.5),
  Vec3::new(0.5, -0.5, 0.5),
  Vec3::new(-0.5, 0.5, 0.5),
  Vec3::new(0.5, 0.5, 0.5),
];

#[inline]
fn side_matches(delta: f32, offset: f32) -> bool {
  // Zero belongs to the positive half.
  if offset > 0.0 {
    delta >= 0.0
  } else {
    delta < 0.0
  }
}

/// Classify `point` relative to `center`.
///
/// Scans the offset table for the octant whose sign pattern matches
/// `point - center` on every axis. Returns `None` when the offset is not
/// finite.
pub fn classify(center: Vec3, point: Vec3) -> Option<usize> {
  let delta = point - center;
  if !delta.is_finite() {
    return None;
  }
  OCTANT_OFFSETS.iter().position(|offset| {
    side_matches(delta.x, offset.x)
      && side_matches(delta.y, offset.y)
      && side_matches(delta.z, offset.z)
  })
}

/// Center of the child cell in `octant` of a cell with edge `cell_size`.
#[inline]
pub fn child_center(center: Vec3, octant: usize, cell_size: f32) -> Vec3 {
  center + OCTANT_OFFSETS[octant] * (cell_size * 0.5)
}

#[cfg(test)]
#[path = "octant_test.rs"]
mod octant_test;
