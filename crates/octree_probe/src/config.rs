//! Scene file parsing for the probe.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use sparse_octree::{OctreeConfig, Ray};
use std::path::Path;

/// Root of a scene file.
#[derive(Debug, Deserialize)]
pub struct Scene {
	/// Points inserted as-is, in order.
	#[serde(default)]
	pub points: Vec<Vec3>,
	/// Tree bounds, arena sizing and per-frame limits.
	pub tree: TreeSection,
	/// Pick rays cast against the tree bounds after the points.
	#[serde(default)]
	pub rays: Vec<RayConfig>,
}

/// `[tree]` table.
#[derive(Debug, Deserialize)]
pub struct TreeSection {
	/// Bounds and arena sizing.
	#[serde(flatten)]
	pub octree: OctreeConfig,
	/// Insertion depth.
	#[serde(default = "default_max_depth")]
	pub max_depth: u32,
	/// Depth budget of the debug line list.
	#[serde(default = "default_debug_depth")]
	pub debug_depth: u32,
	/// Vertex buffer length handed to the line-list generator.
	#[serde(default = "default_buffer_len")]
	pub buffer_len: usize,
}

/// A `[[rays]]` entry.
#[derive(Debug, Deserialize)]
pub struct RayConfig {
	pub origin: Vec3,
	pub direction: Vec3,
}

impl RayConfig {
	pub fn to_ray(&self) -> Ray {
		Ray::new(self.origin, self.direction)
	}
}

fn default_max_depth() -> u32 {
	3
}

fn default_debug_depth() -> u32 {
	8
}

fn default_buffer_len() -> usize {
	32_000
}

impl Scene {
	/// Load a scene from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read scene file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate scene TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let scene: Scene = toml::from_str(content).with_context(|| "Failed to parse scene TOML")?;

		scene
			.tree
			.octree
			.validate()
			.with_context(|| "Invalid [tree] section")?;
		if scene.tree.debug_depth > 0 && scene.tree.buffer_len == 0 {
			anyhow::bail!("buffer_len must be non-zero when debug_depth is set");
		}
		if let Some(point) = scene.points.iter().find(|p| !p.is_finite()) {
			anyhow::bail!("points must be finite, found {}", point);
		}
		for (i, ray) in scene.rays.iter().enumerate() {
			if !ray.origin.is_finite() || !ray.direction.is_finite() {
				anyhow::bail!("ray {} must be finite", i);
			}
			if ray.direction.length_squared() == 0.0 {
				anyhow::bail!("ray {} has a zero direction", i);
			}
		}

		Ok(scene)
	}
}
