//! Tile map model and generation
//!
//! Contains positions, tiles, the grid, and the generation stages.

mod builder;
mod generation;
mod grid;
mod neighbors;
mod pos;
mod seeder;
mod tile;
mod voronoi;

pub use builder::build_grid;
pub use generation::{generate, generate_with_progress, region_seeds};
pub use grid::{Grid, MAX_NEIGHBORS, tile_count};
pub use neighbors::{cardinal_neighbors, link_neighbors};
pub use pos::{Direction, Pos};
pub use seeder::{Seed, place_seeds, seed_count};
pub use tile::{Tile, TileType};
pub use voronoi::{classify, nearest_seed};
