//! The finished tile grid
//!
//! A `Grid` owns one [`Tile`] per position in `[0, height) x [0, width)`.
//! Tiles are stored row-major, so a position maps to its tile by index.
//! Once handed to a caller the grid is read-only.

use super::neighbors::cardinal_neighbors;
use super::pos::{Direction, Pos};
use super::tile::{Tile, TileType};
use crate::MAX_MAP_TILES;
use crate::error::MapError;

/// Maximum number of cardinal neighbors a tile can have
pub const MAX_NEIGHBORS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    spawn: Pos,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Allocate a grid with every tile set to wall and no neighbors
    pub(crate) fn filled(height: usize, width: usize, spawn: Pos) -> Self {
        let mut tiles = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                tiles.push(Tile::wall(Pos::new(row, col)));
            }
        }
        Self {
            height,
            width,
            spawn,
            tiles,
        }
    }

    /// Rebuild a grid from stored parts
    ///
    /// Tiles may arrive in any order. Fails unless the parts describe a
    /// generated map: every position present exactly once, neighbor lists
    /// holding exactly the in-grid cardinal positions, border tiles wall and
    /// the spawn tile floor.
    pub fn from_parts(
        height: usize,
        width: usize,
        spawn: Pos,
        tiles: Vec<Tile>,
    ) -> Result<Self, MapError> {
        let expected = tile_count(height, width)?;
        if spawn.row >= height || spawn.col >= width {
            return Err(MapError::SpawnOutOfBounds {
                row: spawn.row,
                col: spawn.col,
                height,
                width,
            });
        }
        if tiles.len() != expected {
            return Err(MapError::InconsistentTiles(format!(
                "expected {expected} tiles, found {}",
                tiles.len()
            )));
        }

        let mut slots: Vec<Option<Tile>> = vec![None; expected];
        for tile in tiles {
            let Some(index) = index_of(height, width, tile.pos) else {
                return Err(MapError::InconsistentTiles(format!(
                    "tile {} is outside the {height}x{width} map",
                    tile.pos
                )));
            };
            if slots[index].is_some() {
                return Err(MapError::InconsistentTiles(format!(
                    "tile {} appears twice",
                    tile.pos
                )));
            }
            check_links(height, width, &tile)?;

            let border = is_border_of(height, width, tile.pos);
            if border && tile.typ != TileType::Wall {
                return Err(MapError::InconsistentTiles(format!(
                    "border tile {} is {}",
                    tile.pos, tile.typ
                )));
            }
            if tile.pos == spawn && tile.typ != TileType::Floor {
                return Err(MapError::InconsistentTiles(format!(
                    "spawn tile {} is {}",
                    tile.pos, tile.typ
                )));
            }
            slots[index] = Some(tile);
        }

        // Every slot is filled: the count matched and no position repeated.
        let tiles = slots.into_iter().flatten().collect();
        Ok(Self {
            height,
            width,
            spawn,
            tiles,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    /// Number of tiles (always `height * width`)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles of one row, left to right
    pub fn row(&self, row: usize) -> &[Tile] {
        if row >= self.height {
            return &[];
        }
        &self.tiles[row * self.width..(row + 1) * self.width]
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tile(Pos::new(row, col))
    }

    /// Neighbor positions of `pos`, empty if `pos` is not in the grid
    pub fn neighbors_of(&self, pos: Pos) -> &[Pos] {
        self.tile(pos).map_or(&[], |t| t.neighbors.as_slice())
    }

    /// Neighbor lookup by textual `"{row}x{col}"` key
    pub fn neighbors_of_key(&self, key: &str) -> &[Pos] {
        Pos::from_key(key).map_or(&[], |pos| self.neighbors_of(pos))
    }

    /// Check if `pos` lies on the outer ring
    pub fn is_border(&self, pos: Pos) -> bool {
        is_border_of(self.height, self.width, pos)
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(|t| t.typ.is_walkable())
    }

    /// Movement rule: step to the adjacent tile in `dir` if it exists and is
    /// floor, otherwise stay at `from`
    pub fn step(&self, from: Pos, dir: Direction) -> Pos {
        match from.offset(dir) {
            Some(to) if self.is_walkable(to) => to,
            _ => from,
        }
    }

    pub fn count(&self, typ: TileType) -> usize {
        self.tiles.iter().filter(|t| t.typ == typ).count()
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        index_of(self.height, self.width, pos)
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

/// Number of tiles in a `height x width` grid
///
/// Rejects empty shapes and shapes above [`MAX_MAP_TILES`], including any
/// whose area does not fit in `usize`.
pub fn tile_count(height: usize, width: usize) -> Result<usize, MapError> {
    if height == 0 || width == 0 {
        return Err(MapError::InvalidDimensions { height, width });
    }
    match height.checked_mul(width) {
        Some(count) if count <= MAX_MAP_TILES => Ok(count),
        _ => Err(MapError::TooLarge {
            height,
            width,
            max: MAX_MAP_TILES,
        }),
    }
}

fn is_border_of(height: usize, width: usize, pos: Pos) -> bool {
    pos.row == 0 || pos.col == 0 || pos.row + 1 == height || pos.col + 1 == width
}

// Links must be exactly the in-grid cardinal positions, in any order.
fn check_links(height: usize, width: usize, tile: &Tile) -> Result<(), MapError> {
    if tile.neighbors.len() <= MAX_NEIGHBORS {
        let mut found = tile.neighbors.clone();
        found.sort();
        let mut wanted = cardinal_neighbors(height, width, tile.pos);
        wanted.sort();
        if found == wanted {
            return Ok(());
        }
    }
    let listed: Vec<String> = tile.neighbors.iter().map(Pos::key).collect();
    Err(MapError::InconsistentTiles(format!(
        "tile {} has neighbors [{}], expected its cardinal neighbors",
        tile.pos,
        listed.join(", ")
    )))
}

fn index_of(height: usize, width: usize, pos: Pos) -> Option<usize> {
    if pos.row < height && pos.col < width {
        Some(pos.row * width + pos.col)
    } else {
        None
    }
}
