//! Validation errors for map generation

use thiserror::Error;

/// Errors raised before any generation work begins
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Invalid map dimensions {height}x{width}: both sides must be positive")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Map size {size} is too small: must be >= {min}")]
    TooSmall { size: usize, min: usize },

    #[error("Map {height}x{width} is too large: at most {max} tiles")]
    TooLarge {
        height: usize,
        width: usize,
        max: usize,
    },

    #[error("Spawn ({row}, {col}) is outside the {height}x{width} map")]
    SpawnOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Spawn ({row}, {col}) lies on the map border, which is always wall")]
    SpawnOnBorder { row: usize, col: usize },

    #[error("Inconsistent tile data: {0}")]
    InconsistentTiles(String),
}
