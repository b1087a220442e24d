//! Generation parameters
//!
//! A `MapConfig` is built once by the caller and passed by reference into
//! generation; nothing in the core keeps map size in global state.

use crate::error::MapError;
use crate::map::{Pos, tile_count};
use crate::{VIEW_HEIGHT, VIEW_WIDTH};

/// Parameters for one `generate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    pub height: usize,
    pub width: usize,
    pub spawn: Pos,
    /// RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl MapConfig {
    /// Config with the default spawn: the viewport midpoint, kept off the border
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            spawn: Self::default_spawn(height, width),
            seed: None,
        }
    }

    /// Square map of the given side
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn with_spawn(mut self, row: usize, col: usize) -> Self {
        self.spawn = Pos::new(row, col);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Midpoint of the on-screen viewport, clamped into the map interior
    pub fn default_spawn(height: usize, width: usize) -> Pos {
        let clamp = |v: usize, side: usize| v.clamp(1, side.saturating_sub(2).max(1));
        Pos::new(
            clamp(height.min(VIEW_HEIGHT) / 2, height),
            clamp(width.min(VIEW_WIDTH) / 2, width),
        )
    }

    /// Check dimensions (non-empty, at most `MAX_MAP_TILES`) and spawn placement
    pub fn validate(&self) -> Result<(), MapError> {
        tile_count(self.height, self.width)?;
        let Pos { row, col } = self.spawn;
        if row >= self.height || col >= self.width {
            return Err(MapError::SpawnOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        if row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1 {
            return Err(MapError::SpawnOnBorder { row, col });
        }
        Ok(())
    }

    /// `validate` plus a minimum side length, as required for user input
    pub fn validate_min(&self, min: usize) -> Result<(), MapError> {
        let size = self.height.min(self.width);
        if size < min {
            return Err(MapError::TooSmall { size, min });
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MIN_MAP_SIZE;

    #[test]
    fn test_default_spawn_is_view_midpoint() {
        let config = MapConfig::square(100);
        assert_eq!(config.spawn, Pos::new(12, 35));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_spawn_small_map() {
        let config = MapConfig::new(3, 3);
        assert_eq!(config.spawn, Pos::new(1, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = MapConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(MapError::InvalidDimensions {
                height: 0,
                width: 10
            })
        );
    }

    #[test]
    fn test_spawn_bounds() {
        let outside = MapConfig::new(10, 10).with_spawn(10, 3);
        assert!(matches!(
            outside.validate(),
            Err(MapError::SpawnOutOfBounds { .. })
        ));

        let border = MapConfig::new(10, 10).with_spawn(0, 3);
        assert_eq!(
            border.validate(),
            Err(MapError::SpawnOnBorder { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_minimum_size() {
        let config = MapConfig::square(49);
        assert_eq!(
            config.validate_min(MIN_MAP_SIZE),
            Err(MapError::TooSmall { size: 49, min: 50 })
        );
        assert!(MapConfig::square(50).validate_min(MIN_MAP_SIZE).is_ok());
    }

    #[test]
    fn test_oversized_rejected() {
        let config = MapConfig::new(usize::MAX, usize::MAX).with_spawn(1, 1);
        assert!(matches!(config.validate(), Err(MapError::TooLarge { .. })));
        assert!(matches!(
            MapConfig::square(1 << 16).validate_min(MIN_MAP_SIZE),
            Err(MapError::TooLarge { .. })
        ));
    }
}
