//! Nearest-seed tile classification
//!
//! Every interior tile takes the type of the closest seed under the
//! Manhattan metric `|dcol| + |drow|`. Seeds are scanned in sequence order
//! and the running best is only replaced on a strictly smaller distance, so
//! the earliest seed wins an exact tie. Border tiles are always wall.
//!
//! The spawn tile is always floor. The spawn seed comes last in the
//! sequence, so a random wall seed drawn on the very same position would
//! otherwise win the zero-distance tie.
//!
//! This is a brute-force scan: O(height * width * seeds).

use tracing::debug;

use super::grid::Grid;
use super::pos::Pos;
use super::seeder::Seed;
use super::tile::TileType;
use crate::progress::{ProgressObserver, Stage, StageReporter};

/// Closest seed to `pos`; the first of several equally close seeds wins
pub fn nearest_seed(seeds: &[Seed], pos: Pos) -> Option<&Seed> {
    let (first, rest) = seeds.split_first()?;
    let mut best = first;
    let mut best_dist = first.pos.manhattan(pos);
    for seed in rest {
        let dist = seed.pos.manhattan(pos);
        if dist < best_dist {
            best = seed;
            best_dist = dist;
        }
    }
    Some(best)
}

/// Assign every tile its region type
///
/// With no seeds, interior tiles keep their current type.
pub fn classify(grid: &mut Grid, seeds: &[Seed], observer: &mut dyn ProgressObserver) {
    let height = grid.height();
    let width = grid.width();
    let spawn = grid.spawn();
    let mut reporter = StageReporter::new(observer, Stage::Classify, height);

    for (i, tile) in grid.tiles_mut().iter_mut().enumerate() {
        let pos = tile.pos;
        if pos.row == 0 || pos.col == 0 || pos.row + 1 == height || pos.col + 1 == width {
            tile.typ = TileType::Wall;
        } else if pos == spawn {
            tile.typ = TileType::Floor;
        } else if let Some(seed) = nearest_seed(seeds, pos) {
            tile.typ = seed.typ;
        }
        if (i + 1) % width == 0 {
            reporter.tick(pos.row + 1);
        }
    }
    reporter.finish();

    debug!(
        floors = grid.count(TileType::Floor),
        walls = grid.count(TileType::Wall),
        "classified tiles"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoProgress;

    fn wall(row: usize, col: usize) -> Seed {
        Seed::new(Pos::new(row, col), TileType::Wall)
    }

    fn floor(row: usize, col: usize) -> Seed {
        Seed::new(Pos::new(row, col), TileType::Floor)
    }

    #[test]
    fn test_earlier_seed_wins_tie() {
        // (4,4) is 6 from (1,1) and (7,7) both
        let cell = Pos::new(4, 4);
        let seeds = [wall(1, 1), floor(7, 7)];
        assert_eq!(nearest_seed(&seeds, cell).unwrap().typ, TileType::Wall);

        let seeds = [floor(7, 7), wall(1, 1)];
        assert_eq!(nearest_seed(&seeds, cell).unwrap().typ, TileType::Floor);
    }

    #[test]
    fn test_metric_is_manhattan() {
        // Euclidean would pick (3,3) (2.83 vs 3.0); Manhattan picks (1,4) (3 vs 4)
        let cell = Pos::new(1, 1);
        let seeds = [floor(3, 3), wall(1, 4)];
        assert_eq!(nearest_seed(&seeds, cell).unwrap().pos, Pos::new(1, 4));
    }

    #[test]
    fn test_strict_improvement_only() {
        let cell = Pos::new(5, 5);
        let seeds = [wall(5, 8), floor(8, 5), floor(2, 5), wall(5, 6)];
        assert_eq!(nearest_seed(&seeds, cell).unwrap(), &wall(5, 6));
    }

    #[test]
    fn test_no_seeds() {
        assert!(nearest_seed(&[], Pos::new(0, 0)).is_none());
    }

    #[test]
    fn test_border_forced_to_wall() {
        let mut grid = Grid::filled(6, 6, Pos::new(2, 2));
        let seeds = [floor(0, 0), floor(5, 5), floor(2, 2)];
        classify(&mut grid, &seeds, &mut NoProgress);

        for tile in grid.tiles() {
            if grid.is_border(tile.pos) {
                assert_eq!(tile.typ, TileType::Wall, "border tile {}", tile.pos);
            } else {
                assert_eq!(tile.typ, TileType::Floor, "interior tile {}", tile.pos);
            }
        }
    }

    #[test]
    fn test_first_seed_type_applies() {
        let mut grid = Grid::filled(5, 5, Pos::new(2, 2));
        classify(&mut grid, &[floor(2, 2)], &mut NoProgress);
        assert_eq!(grid.count(TileType::Floor), 9);
    }

    #[test]
    fn test_spawn_beats_wall_seed_on_same_cell() {
        let mut grid = Grid::filled(8, 8, Pos::new(4, 4));
        let seeds = [wall(4, 4), wall(1, 1), floor(4, 4)];
        classify(&mut grid, &seeds, &mut NoProgress);
        assert_eq!(grid.tile_at(4, 4).unwrap().typ, TileType::Floor);
        // neighbors of the spawn still follow the tie-break: the wall seed is earlier
        assert_eq!(grid.tile_at(4, 5).unwrap().typ, TileType::Wall);
    }

    #[test]
    fn test_progress_per_row() {
        let mut grid = Grid::filled(4, 3, Pos::new(1, 1));
        let mut seen = Vec::new();
        let mut observer = |_: Stage, percent: u8| seen.push(percent);
        classify(&mut grid, &[floor(1, 1)], &mut observer);
        assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    }
}
