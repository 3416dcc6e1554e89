//! Ray picking against planes and cubes.
//!
//! The viewer turns the cursor into a world-space ray and intersects it
//! with the tree's cube to obtain the point handed to
//! [`Octree::insert`](crate::octree::Octree::insert).

use glam::Vec3;

use crate::octree::CubeBounds;

/// Hits closer than this (or rays this close to parallel) are ignored.
pub const RAY_EPSILON: f32 = 1e-6;

/// Half-line `origin + t * direction`, `t >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
  pub origin: Vec3,
  /// Not required to be normalized; `t` is in units of its length.
  pub direction: Vec3,
}

impl Ray {
  pub fn new(origin: Vec3, direction: Vec3) -> Self {
    Self { origin, direction }
  }

  #[inline]
  pub fn point_at(&self, t: f32) -> Vec3 {
    self.origin + self.direction * t
  }

  /// Distance along the ray to the plane through `point` with `normal`.
  ///
  /// Returns `None` for rays parallel to the plane and for hits behind (or
  /// within [`RAY_EPSILON`] of) the origin.
  pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = normal.dot(self.direction);
    if denom.abs() <= RAY_EPSILON {
      return None;
    }
    let t = (point - self.origin).dot(normal) / denom;
    (t >= RAY_EPSILON).then_some(t)
  }

  /// Entry and exit distances through `cube` (slab test).
  ///
  /// `t_min` is negative when the origin is inside the cube. Returns `None`
  /// when the ray misses or the cube lies entirely behind the origin.
  pub fn intersect_cube(&self, cube: &CubeBounds) -> Option<(f32, f32)> {
    let min = cube.min();
    let max = cube.max();
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
      let origin = self.origin[axis];
      let dir = self.direction[axis];
      if dir.abs() <= RAY_EPSILON {
        // Parallel to this slab: must already be inside it.
        if origin < min[axis] || origin > max[axis] {
          return None;
        }
        continue;
      }

      let inv = 1.0 / dir;
      let mut t0 = (min[axis] - origin) * inv;
      let mut t1 = (max[axis] - origin) * inv;
      if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
      }
      t_min = t_min.max(t0);
      t_max = t_max.min(t1);
      if t_min > t_max {
        return None;
      }
    }

    (t_max >= 0.0).then_some((t_min, t_max))
  }

  /// First point of `cube` along the ray; the origin itself when it is
  /// inside.
  pub fn pick(&self, cube: &CubeBounds) -> Option<Vec3> {
    self
      .intersect_cube(cube)
      .map(|(t_min, _)| self.point_at(t_min.max(0.0)))
  }
}
