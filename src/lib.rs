//! # voxelpart
//!
//! `voxelpart` is a Rust library for recursive Voronoi-style partitioning of
//! dense voxel grids, designed to be used in Rust as well as compiled to
//! WebAssembly (WASM). It subdivides a finite n-dimensional grid of cells
//! into a tree of disjoint sub-regions under a pluggable distance metric and
//! a pluggable assignment rule.
//!
//! ## Features
//!
//! - **Partition Tree**: a recursive [`VoxelPartition`] keyed by sparse
//!   integer labels, with strict set-partition guarantees and tight bounds
//!   tracking per node.
//! - **Pluggable Rules**: nearest-center (Voronoi) assignment with
//!   deterministic tie-breaking, or a fixed-label rule, behind the
//!   [`AssignmentRule`] seam.
//! - **Grid Adapters**: [`GridSource`]/[`GridSink`] traits translating
//!   between a host volume and the flat index space, with octant and
//!   quadrant convenience subdivisions.
//! - **WASM-ready**: built with `wasm-bindgen` bindings over the 3D surface.
//!
//! ## Example
//!
//! See `demos/render_2d.rs` for a runnable 2D walkthrough.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`VoxelPartition`] struct; hosts integrate
//! through [`grid_to_partition`] and [`partition_to_grid`].

mod bounds;
mod error;
mod grid;
mod metric;
mod partition;
mod superset;
pub mod wasm;

pub use bounds::BoundingBox;
pub use error::PartitionError;
pub use grid::ArrayGrid;
pub use grid::GridSink;
pub use grid::GridSource;
pub use grid::grid_to_partition;
pub use grid::oct_partition;
pub use grid::partition_to_grid;
pub use grid::quad_partition;
pub use metric::Metric;
pub use metric::distance;
pub use metric::random_indices;
pub use metric::subdivide_bounds;
pub use partition::AssignmentRule;
pub use partition::Fixed;
pub use partition::NearestCenter;
pub use partition::RENDER_BOUNDED;
pub use partition::RENDER_MEMBER;
pub use partition::UNASSIGNED;
pub use partition::VoxelPartition;
pub use superset::CellSuperset;
pub use superset::Indices;
