//! Grid allocation

use tracing::debug;

use super::grid::{Grid, tile_count};
use super::pos::Pos;
use crate::error::MapError;
use crate::progress::{ProgressObserver, Stage, StageReporter};

/// Allocate a `height x width` grid of wall tiles
pub fn build_grid(
    height: usize,
    width: usize,
    spawn: Pos,
    observer: &mut dyn ProgressObserver,
) -> Result<Grid, MapError> {
    let count = tile_count(height, width)?;
    let reporter = StageReporter::new(observer, Stage::Tiles, count);
    let grid = Grid::filled(height, width, spawn);
    reporter.finish();

    debug!(height, width, tiles = grid.len(), "allocated wall grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoProgress;

    #[test]
    fn test_build_all_walls() {
        let grid = build_grid(5, 7, Pos::new(2, 3), &mut NoProgress).unwrap();
        assert_eq!(grid.len(), 35);
        assert!(grid.tiles().all(|t| t.is_wall() && t.neighbors.is_empty()));
    }

    #[test]
    fn test_build_rejects_zero() {
        assert_eq!(
            build_grid(0, 7, Pos::new(0, 0), &mut NoProgress),
            Err(MapError::InvalidDimensions {
                height: 0,
                width: 7
            })
        );
    }

    #[test]
    fn test_build_rejects_overflowing_area() {
        assert!(matches!(
            build_grid(usize::MAX, usize::MAX, Pos::new(1, 1), &mut NoProgress),
            Err(MapError::TooLarge { .. })
        ));
    }
}
