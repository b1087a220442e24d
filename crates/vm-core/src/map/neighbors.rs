//! Cardinal adjacency linking
//!
//! Each tile records the positions above, below, left and right of it that
//! exist in the grid. Linking ignores tile type; filtering by walkability is
//! left to whoever walks the graph.

use strum::IntoEnumIterator;
use tracing::debug;

use super::grid::Grid;
use super::pos::{Direction, Pos};
use crate::progress::{ProgressObserver, Stage, StageReporter};

/// In-grid cardinal neighbors of `pos`, in up, down, left, right order
pub fn cardinal_neighbors(height: usize, width: usize, pos: Pos) -> Vec<Pos> {
    Direction::iter()
        .filter_map(|dir| pos.offset(dir))
        .filter(|n| n.row < height && n.col < width)
        .collect()
}

/// Fill in every tile's neighbor list; must run after classification
pub fn link_neighbors(grid: &mut Grid, observer: &mut dyn ProgressObserver) {
    let height = grid.height();
    let width = grid.width();
    let total = grid.len();
    let mut reporter = StageReporter::new(observer, Stage::Link, total);

    let mut links = 0;
    for (i, tile) in grid.tiles_mut().iter_mut().enumerate() {
        tile.neighbors = cardinal_neighbors(height, width, tile.pos);
        links += tile.neighbors.len();
        reporter.tick(i + 1);
    }
    reporter.finish();

    debug!(links, "linked neighbors");
}
