//! vm-core: Core map logic for the voronoi tile map generator
//!
//! This crate contains grid construction, region seeding, nearest-seed
//! classification and adjacency linking. It has no terminal or file I/O
//! dependencies; progress is reported through [`ProgressObserver`].

pub mod export;
pub mod map;

mod config;
mod consts;
mod error;
mod progress;
mod rng;

pub use config::MapConfig;
pub use consts::*;
pub use error::MapError;
pub use map::{Direction, Grid, Pos, Seed, Tile, TileType, generate, generate_with_progress};
pub use progress::{NoProgress, ProgressObserver, Stage, StageReporter, percent_of};
pub use rng::MapRng;
