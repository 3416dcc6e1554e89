//! Headless octree probe.
//!
//! Plays the viewer's frame loop without a window: every frame takes one
//! pick (a scene point, a ray hit on the tree cube, or a scattered point),
//! inserts it, and regenerates the debug line list into a fixed vertex
//! buffer the way the renderer would upload it.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_octree::{CubeBounds, LineBatch, Octree};
use std::path::PathBuf;

use config::Scene;

/// Sparse octree probe.
#[derive(Parser, Debug)]
#[command(name = "octree_probe")]
#[command(about = "Builds a sparse octree from a scene file and emits its debug line list")]
struct Args {
	/// Path to the scene TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Print every vertex of the final line list.
	#[arg(long)]
	dump: bool,

	/// Extra random points scattered inside the tree bounds.
	#[arg(long, default_value_t = 0)]
	scatter: usize,

	/// Seed for --scatter.
	#[arg(long, default_value_t = 0)]
	seed: u64,

	/// Default the log level to debug (RUST_LOG still wins).
	#[arg(short, long)]
	verbose: bool,
}

fn init_logging(verbose: bool) {
	let level = if verbose { "debug" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Insertion points in frame order: scene points, ray picks, then scatter.
fn collect_picks(scene: &Scene, bounds: &CubeBounds, scatter: usize, seed: u64) -> Vec<Vec3> {
	let mut picks = scene.points.clone();

	for (i, ray) in scene.rays.iter().enumerate() {
		match ray.to_ray().pick(bounds) {
			Some(hit) => picks.push(hit),
			None => warn!("ray {} misses the tree bounds, skipped", i),
		}
	}

	let mut rng = StdRng::seed_from_u64(seed);
	let (min, max) = (bounds.min(), bounds.max());
	picks.extend((0..scatter).map(|_| {
		Vec3::new(
			rng.random_range(min.x..=max.x),
			rng.random_range(min.y..=max.y),
			rng.random_range(min.z..=max.z),
		)
	}));

	picks
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	info!("Loading scene from: {}", args.config.display());
	let scene = Scene::load(&args.config)?;
	let mut tree = Octree::new(scene.tree.octree.clone()).context("Creating octree")?;
	let picks = collect_picks(&scene, &tree.bounds(), args.scatter, args.seed);

	info!(
		"Tree center {} size {}, {} picks at depth {}",
		tree.center(),
		tree.size(),
		picks.len(),
		scene.tree.max_depth
	);

	let mut vertex_buffer = vec![Vec3::ZERO; scene.tree.buffer_len];
	let mut vertex_count = 0;
	for (frame, point) in picks.iter().enumerate() {
		let cell = tree
			.insert(*point, scene.tree.max_depth)
			.with_context(|| format!("Frame {}: inserting {}", frame, point))?;

		vertex_count = tree
			.debug_line_list(
				tree.root(),
				tree.center(),
				0,
				scene.tree.debug_depth,
				&mut vertex_buffer,
			)
			.with_context(|| format!("Frame {}: building line list", frame))?;

		debug!(
			"frame {}: {} -> cell {}, {} vertices",
			frame, point, cell, vertex_count
		);
	}

	let stats = tree.stats();
	info!(
		"{} nodes ({} split, {} occupied), depth {}, arena {}/{} slots",
		stats.live_nodes,
		stats.split_nodes,
		stats.occupied_nodes,
		stats.max_depth,
		tree.arena().used(),
		stats.capacity
	);
	info!("lines: {}", vertex_count / 2);

	if args.dump {
		// Occupied cells as small spheres, the way the viewer highlights them.
		const SPHERE_SEGMENTS: u16 = 8;
		let cells = tree.occupied_cells();
		let mut batch =
			LineBatch::with_capacity(vertex_count + cells.len() * SPHERE_SEGMENTS as usize * 6);
		batch.extend_from_octree(&tree, scene.tree.debug_depth)?;
		for cell in &cells {
			batch.draw_sphere(cell.center, cell.size * 0.25, SPHERE_SEGMENTS)?;
		}
		for vertex in batch.flush() {
			println!("{} {} {}", vertex.x, vertex.y, vertex.z);
		}
	}

	Ok(())
}
