//! On-disk map schema
//!
//! ```json
//! {
//!   "format": "vmap",
//!   "version": 1,
//!   "mapsize": { "height": 60, "width": 60 },
//!   "spawn": { "row": 12, "col": 35 },
//!   "tiles": { "0x0": { "row": 0, "col": 0, "type": "wall", "neighbors": ["1x0", "0x1"] } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vm_core::{Grid, Pos, ProgressObserver, Stage, StageReporter, Tile, TileType};

use crate::SaveError;

/// Format tag written at the top of every map file
pub const FORMAT_TAG: &str = "vmap";

/// Current map file format version
pub const SAVE_VERSION: u32 = 1;

/// Leading fields, read on their own so a file from another format or
/// version is reported as such instead of as a schema mismatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapHeader {
    pub format: String,
    pub version: u32,
}

impl MapHeader {
    pub fn current() -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            version: SAVE_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.format != FORMAT_TAG {
            return Err(SaveError::InvalidHeader(format!(
                "unknown format tag {:?}",
                self.format
            )));
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub height: usize,
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRecord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "type")]
    pub typ: TileType,
    pub neighbors: Vec<String>,
}

/// Complete map file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(flatten)]
    pub header: MapHeader,
    pub mapsize: MapSize,
    pub spawn: SpawnRecord,
    pub tiles: BTreeMap<String, TileRecord>,
}

impl MapFile {
    /// Build the file record for a grid
    pub fn from_grid(grid: &Grid, observer: &mut dyn ProgressObserver) -> Self {
        let mut reporter = StageReporter::new(observer, Stage::Encode, grid.len());
        let mut tiles = BTreeMap::new();
        for (i, tile) in grid.tiles().enumerate() {
            let record = TileRecord {
                row: tile.pos.row,
                col: tile.pos.col,
                typ: tile.typ,
                neighbors: tile.neighbors.iter().map(Pos::key).collect(),
            };
            tiles.insert(tile.pos.key(), record);
            reporter.tick(i + 1);
        }
        reporter.finish();

        let spawn = grid.spawn();
        Self {
            header: MapHeader::current(),
            mapsize: MapSize {
                height: grid.height(),
                width: grid.width(),
            },
            spawn: SpawnRecord {
                row: spawn.row,
                col: spawn.col,
            },
            tiles,
        }
    }

    /// Rebuild the grid, checking keys, positions and neighbor references
    pub fn into_grid(self, observer: &mut dyn ProgressObserver) -> Result<Grid, SaveError> {
        self.header.validate()?;

        let mut reporter = StageReporter::new(observer, Stage::Decode, self.tiles.len());
        let mut tiles = Vec::with_capacity(self.tiles.len());
        for (i, (key, record)) in self.tiles.into_iter().enumerate() {
            let pos = Pos::new(record.row, record.col);
            if Pos::from_key(&key) != Some(pos) {
                return Err(SaveError::Decode(format!(
                    "tile key {key:?} does not match its position {pos}"
                )));
            }
            let neighbors = record
                .neighbors
                .iter()
                .map(|k| {
                    Pos::from_key(k)
                        .ok_or_else(|| SaveError::Decode(format!("bad neighbor key {k:?}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(Tile::with_neighbors(pos, record.typ, neighbors));
            reporter.tick(i + 1);
        }
        reporter.finish();

        let spawn = Pos::new(self.spawn.row, self.spawn.col);
        Grid::from_parts(self.mapsize.height, self.mapsize.width, spawn, tiles)
            .map_err(|e| SaveError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vm_core::{NoProgress, generate};

    #[test]
    fn test_record_shape() {
        let grid = generate(4, 5, 1, 1, 3).unwrap();
        let file = MapFile::from_grid(&grid, &mut NoProgress);
        let json = serde_json::to_value(&file).unwrap();

        assert_eq!(json["format"], "vmap");
        assert_eq!(json["version"], 1);
        assert_eq!(json["mapsize"]["height"], 4);
        assert_eq!(json["mapsize"]["width"], 5);
        assert_eq!(json["spawn"]["row"], 1);
        assert_eq!(json["tiles"]["0x0"]["type"], "wall");
        assert_eq!(
            json["tiles"]["0x0"]["neighbors"],
            serde_json::json!(["1x0", "0x1"])
        );
        assert_eq!(json["tiles"]["1x1"]["type"], "floor");
        assert_eq!(json["tiles"].as_object().unwrap().len(), 20);
    }

    #[test]
    fn test_record_round_trip() {
        let grid = generate(7, 6, 3, 2, 5).unwrap();
        let file = MapFile::from_grid(&grid, &mut NoProgress);
        let json = serde_json::to_string(&file).unwrap();
        let parsed: MapFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.into_grid(&mut NoProgress).unwrap(), grid);
    }

    #[test]
    fn test_header_validation() {
        assert!(MapHeader::current().validate().is_ok());

        let mut bad = MapHeader::current();
        bad.format = "XXXX".to_string();
        assert!(matches!(bad.validate(), Err(SaveError::InvalidHeader(_))));

        let mut old = MapHeader::current();
        old.version = 999;
        assert!(matches!(
            old.validate(),
            Err(SaveError::IncompatibleVersion {
                expected: 1,
                found: 999
            })
        ));
    }

    #[test]
    fn test_mismatched_key_rejected() {
        let grid = generate(4, 4, 1, 1, 3).unwrap();
        let mut file = MapFile::from_grid(&grid, &mut NoProgress);
        let record = file.tiles.remove("2x2").unwrap();
        file.tiles.insert("9x9".to_string(), record);
        assert!(matches!(
            file.into_grid(&mut NoProgress),
            Err(SaveError::Decode(_))
        ));
    }

    #[test]
    fn test_dangling_neighbor_rejected() {
        let grid = generate(4, 4, 1, 1, 3).unwrap();
        let mut file = MapFile::from_grid(&grid, &mut NoProgress);
        if let Some(record) = file.tiles.get_mut("3x3") {
            record.neighbors.push("4x3".to_string());
        }
        assert!(matches!(
            file.into_grid(&mut NoProgress),
            Err(SaveError::Decode(_))
        ));
    }
}
