//! Map generation pipeline
//!
//! Allocate walls, scatter region seeds, classify tiles by nearest seed,
//! then link neighbors. Linking only starts once every tile has its final
//! type.

use tracing::info;

use super::builder::build_grid;
use super::grid::Grid;
use super::neighbors::link_neighbors;
use super::pos::Pos;
use super::seeder::{Seed, place_seeds};
use super::voronoi::classify;
use crate::config::MapConfig;
use crate::error::MapError;
use crate::progress::{NoProgress, ProgressObserver};
use crate::rng::MapRng;

/// Generate a map; identical arguments always produce identical grids
pub fn generate(
    height: usize,
    width: usize,
    spawn_row: usize,
    spawn_col: usize,
    rng_seed: u64,
) -> Result<Grid, MapError> {
    let config = MapConfig::new(height, width)
        .with_spawn(spawn_row, spawn_col)
        .with_seed(rng_seed);
    generate_with_progress(&config, &mut NoProgress)
}

/// Generate a map, reporting each stage to `observer`
///
/// The config is validated before anything is allocated.
pub fn generate_with_progress(
    config: &MapConfig,
    observer: &mut dyn ProgressObserver,
) -> Result<Grid, MapError> {
    config.validate()?;
    let mut rng = config.seed.map_or_else(MapRng::from_entropy, MapRng::new);
    info!(
        height = config.height,
        width = config.width,
        spawn = %config.spawn,
        seed = rng.seed(),
        "generating map"
    );

    let mut grid = build_grid(config.height, config.width, config.spawn, observer)?;
    let seeds = place_seeds(config.height, config.width, config.spawn, &mut rng, observer);
    classify(&mut grid, &seeds, observer);
    link_neighbors(&mut grid, observer);

    info!(tiles = grid.len(), seeds = seeds.len(), "map generated");
    Ok(grid)
}

/// The seed sequence `generate` would draw for these parameters
pub fn region_seeds(height: usize, width: usize, spawn: Pos, rng_seed: u64) -> Vec<Seed> {
    let mut rng = MapRng::new(rng_seed);
    place_seeds(height, width, spawn, &mut rng, &mut NoProgress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileType;
    use crate::progress::Stage;

    #[test]
    fn test_small_map() {
        let grid = generate(10, 10, 5, 5, 42).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.spawn(), Pos::new(5, 5));
        assert_eq!(grid.tile_at(5, 5).unwrap().typ, TileType::Floor);
    }

    #[test]
    fn test_validation_before_work() {
        let mut calls = 0;
        let mut observer = |_: Stage, _: u8| calls += 1;
        let config = MapConfig::new(10, 0).with_seed(1);
        assert!(generate_with_progress(&config, &mut observer).is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_stage_order() {
        let mut stages: Vec<Stage> = Vec::new();
        let mut observer = |stage: Stage, _: u8| {
            if stages.last() != Some(&stage) {
                stages.push(stage);
            }
        };
        let config = MapConfig::square(12).with_seed(3);
        generate_with_progress(&config, &mut observer).unwrap();
        assert_eq!(
            stages,
            vec![Stage::Tiles, Stage::Seeds, Stage::Classify, Stage::Link]
        );
    }

    #[test]
    fn test_region_seeds_match_generation() {
        let seeds = region_seeds(20, 20, Pos::new(5, 5), 11);
        let grid = generate(20, 20, 5, 5, 11).unwrap();
        for tile in grid.tiles().filter(|t| !grid.is_border(t.pos)) {
            let nearest = crate::map::nearest_seed(&seeds, tile.pos).unwrap();
            assert_eq!(tile.typ, nearest.typ);
        }
    }
}
