//! Map tile types

use serde::{Deserialize, Serialize};
use strum::Display;

use super::pos::Pos;
use crate::{FLOOR_SYM, WALL_SYM};

/// Tile terrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TileType {
    #[default]
    Wall,
    Floor,
}

impl TileType {
    /// Check if the player can stand on this tile
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Wall => WALL_SYM,
            TileType::Floor => FLOOR_SYM,
        }
    }
}

/// A single grid cell
///
/// Neighbors are positions resolved through the owning [`Grid`](super::Grid),
/// never owned tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub pos: Pos,
    pub typ: TileType,
    pub neighbors: Vec<Pos>,
}

impl Tile {
    pub fn new(pos: Pos, typ: TileType) -> Self {
        Self {
            pos,
            typ,
            neighbors: Vec::new(),
        }
    }

    pub fn wall(pos: Pos) -> Self {
        Self::new(pos, TileType::Wall)
    }

    pub fn with_neighbors(pos: Pos, typ: TileType, neighbors: Vec<Pos>) -> Self {
        Self {
            pos,
            typ,
            neighbors,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.typ == TileType::Wall
    }

    pub fn symbol(&self) -> char {
        self.typ.symbol()
    }
}
