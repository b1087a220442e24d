//! Region seed placement
//!
//! Seeds are scattered uniformly over the whole grid (border included) with
//! a 50/50 wall/floor type. The count scales with the map: for
//! `avg = (height + width) / 2` it is drawn from `[avg, 2 * avg)`. A final
//! floor seed is appended at the spawn so the player never starts inside a
//! wall region.

use tracing::debug;

use super::pos::Pos;
use super::tile::TileType;
use crate::progress::{ProgressObserver, Stage, StageReporter};
use crate::rng::MapRng;

/// A region center used during classification only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub pos: Pos,
    pub typ: TileType,
}

impl Seed {
    pub const fn new(pos: Pos, typ: TileType) -> Self {
        Self { pos, typ }
    }
}

/// Number of random seeds for a map, before the spawn seed
pub fn seed_count(height: usize, width: usize, rng: &mut MapRng) -> usize {
    let avg = height.saturating_add(width) / 2;
    rng.range(avg, avg.saturating_mul(2))
}

/// Draw the ordered seed sequence; its order decides classification ties
///
/// Per seed the RNG is consumed as row, column, then type.
pub fn place_seeds(
    height: usize,
    width: usize,
    spawn: Pos,
    rng: &mut MapRng,
    observer: &mut dyn ProgressObserver,
) -> Vec<Seed> {
    let count = seed_count(height, width, rng);
    let mut reporter = StageReporter::new(observer, Stage::Seeds, count);

    let mut seeds = Vec::with_capacity(count + 1);
    for i in 0..count {
        let row = rng.rn2(height);
        let col = rng.rn2(width);
        let typ = if rng.coin() {
            TileType::Floor
        } else {
            TileType::Wall
        };
        seeds.push(Seed::new(Pos::new(row, col), typ));
        reporter.tick(i + 1);
    }
    seeds.push(Seed::new(spawn, TileType::Floor));
    reporter.finish();

    debug!(count, spawn = %spawn, "placed region seeds");
    seeds
}
