//! Stateless placement geometry for the Ideagraph explorer.
//!
//! Every routine works in an abstract, unbounded plane and is deterministic:
//! the same input produces bit-identical output.

pub mod common;
pub mod force;
pub mod grid;
pub mod rings;
pub mod routing;

pub use common::{centroid, Point};
pub use force::{relax, seed_grid, ForceConfig};
pub use grid::{grid_cells, grid_positions, half_columns};
pub use rings::{concentric_rings, ring_capacity, ring_position, tiered_rings};
pub use routing::{route, Handle, Sector};
