//! Axis-aligned cube described by its center and edge length.

use glam::Vec3;

/// Axis-aligned cube.
///
/// Used for the root extent of a tree and for the cells below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeBounds {
	/// Cube center.
	pub center: Vec3,
	/// Edge length.
	pub size: f32,
}

impl CubeBounds {
	/// Create a cube from center and edge length.
	///
	/// # Panics
	/// Debug-asserts that `size` is non-negative.
	pub fn new(center: Vec3, size: f32) -> Self {
		debug_assert!(size >= 0.0, "cube size must be non-negative");
		Self { center, size }
	}

	/// Create a cube from its center and half-extent, the form the picking
	/// code hands over.
	pub fn from_half_extent(center: Vec3, half_extent: f32) -> Self {
		Self::new(center, half_extent * 2.0)
	}

	#[inline]
	pub fn half_extent(&self) -> f32 {
		self.size * 0.5
	}

	/// Minimum corner.
	#[inline]
	pub fn min(&self) -> Vec3 {
		self.center - Vec3::splat(self.half_extent())
	}

	/// Maximum corner.
	#[inline]
	pub fn max(&self) -> Vec3 {
		self.center + Vec3::splat(self.half_extent())
	}

	/// Check if this cube contains a point (boundary inclusive).
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		let min = self.min();
		let max = self.max();
		point.x >= min.x
			&& point.x <= max.x
			&& point.y >= min.y
			&& point.y <= max.y
			&& point.z >= min.z
			&& point.z <= max.z
	}
}
