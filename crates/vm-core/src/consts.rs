//! Map constants
//!
//! Sizes, glyphs and file naming shared by the core, the save crate and the UI.

/// Smallest map side accepted from user input
pub const MIN_MAP_SIZE: usize = 50;

/// Default map side when none is given
pub const DEFAULT_MAP_SIZE: usize = 100;

/// Largest tile count a map may have, generated or loaded
pub const MAX_MAP_TILES: usize = 1 << 24;

/// Viewport dimensions of the map window
pub const VIEW_HEIGHT: usize = 24;
pub const VIEW_WIDTH: usize = 70;

/// Map symbols
pub const WALL_SYM: char = '#';
pub const FLOOR_SYM: char = '.';
pub const PLAYER_SYM: char = '@';

/// Saved map files
pub const MAP_EXTENSION: &str = "map";
pub const DEFAULT_MAPS_DIR: &str = "resources/maps";
pub const DEFAULT_EXPORT_DIR: &str = "resources/html_maps";
