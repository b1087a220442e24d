//! vm-save: Save/restore of generated maps
//!
//! Maps are stored as gzip-compressed JSON (see [`record`] for the schema).
//! Saving never overwrites: an existing target is an error and is left
//! untouched. Writes go to a uniquely named temporary sibling first, which is
//! hard-linked into place once complete; linking fails instead of replacing a
//! file that appeared in the meantime.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{debug, info};

use vm_core::{Grid, NoProgress, ProgressObserver, Stage, StageReporter};

pub mod compress;
pub mod paths;
pub mod record;

pub use paths::{MapStore, normalize_map_name, validate_map_name};
pub use record::{FORMAT_TAG, MapFile, MapHeader, SAVE_VERSION};

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Map file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Map file corrupted: {0}")]
    Decode(String),

    #[error("Incompatible map version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid map file header: {0}")]
    InvalidHeader(String),

    #[error("Invalid map name {0:?}: use only letters, digits and underscores")]
    InvalidName(String),
}

impl SaveError {
    /// True for every failure caused by the file's contents
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            SaveError::Decode(_) | SaveError::IncompatibleVersion { .. } | SaveError::InvalidHeader(_)
        )
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

/// Save a map to `path`; fails if the file already exists
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), SaveError> {
    save_with_progress(path, grid, &mut NoProgress)
}

/// Save a map, reporting encode and write progress
pub fn save_with_progress(
    path: impl AsRef<Path>,
    grid: &Grid,
    observer: &mut dyn ProgressObserver,
) -> Result<(), SaveError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(SaveError::AlreadyExists(path.to_path_buf()));
    }

    let file = MapFile::from_grid(grid, observer);
    let json = serde_json::to_vec(&file).map_err(|e| SaveError::Io(e.into()))?;

    let reporter = StageReporter::new(observer, Stage::Write, 1);
    let packed = compress::compress(&json)?;
    let staged = staging_path(path);
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&staged)?;
    let result = write_staged(file, &packed).and_then(|()| publish(&staged, path));
    // Created above, so it is ours to remove; a published map keeps its own link
    std::fs::remove_file(&staged).ok();
    result?;
    reporter.finish();

    info!(
        path = %path.display(),
        tiles = grid.len(),
        bytes = packed.len(),
        "saved map"
    );
    Ok(())
}

/// Load a map from `path`
pub fn load(path: impl AsRef<Path>) -> Result<Grid, SaveError> {
    load_with_progress(path, &mut NoProgress)
}

/// Load a map, reporting read and rebuild progress
pub fn load_with_progress(
    path: impl AsRef<Path>,
    observer: &mut dyn ProgressObserver,
) -> Result<Grid, SaveError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SaveError::NotFound(path.to_path_buf()));
    }

    let reporter = StageReporter::new(observer, Stage::Read, 1);
    let mut packed = Vec::new();
    File::open(path)?.read_to_end(&mut packed)?;
    let json = compress::decompress(&packed)?;
    reporter.finish();
    debug!(path = %path.display(), bytes = json.len(), "decompressed map");

    let header: MapHeader = serde_json::from_slice(&json)?;
    header.validate()?;
    let file: MapFile = serde_json::from_slice(&json)?;
    let grid = file.into_grid(observer)?;

    info!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        "loaded map"
    );
    Ok(grid)
}

/// Temporary sibling used while a save is in progress, unique per call
fn staging_path(path: &Path) -> PathBuf {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{n}.tmp", std::process::id()))
}

fn write_staged(file: File, data: &[u8]) -> Result<(), SaveError> {
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

/// Link the finished file in as `path`; never replaces an existing file
fn publish(staged: &Path, path: &Path) -> Result<(), SaveError> {
    match std::fs::hard_link(staged, path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(SaveError::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
