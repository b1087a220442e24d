//! Map file naming and the maps directory
//!
//! Map names are restricted to ASCII letters, digits and underscores, which
//! also keeps them free of path separators and traversal.

use std::path::{Path, PathBuf};

use vm_core::{DEFAULT_MAPS_DIR, MAP_EXTENSION};

use crate::SaveError;

/// Strip whitespace from user input, the way names are typed at a prompt
pub fn normalize_map_name(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check that a map name matches `^\w+$`
pub fn validate_map_name(name: &str) -> Result<(), SaveError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(SaveError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Directory holding saved maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStore {
    dir: PathBuf,
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAPS_DIR)
    }
}

impl MapStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the map called `name`
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SaveError> {
        validate_map_name(name)?;
        Ok(self.dir.join(format!("{name}.{MAP_EXTENSION}")))
    }

    /// Create the maps directory if needed
    pub fn ensure_dir(&self) -> Result<(), SaveError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|p| p.exists())
    }

    /// Names of all saved maps, sorted
    pub fn list(&self) -> Result<Vec<String>, SaveError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == MAP_EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_map_name(stem).is_ok()
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["cave", "Cave_01", "_", "123"] {
            assert!(validate_map_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "my map", "../etc", "a/b", "cave.map", "día", "a-b"] {
            assert!(
                matches!(validate_map_name(name), Err(SaveError::InvalidName(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_map_name("  my cave \n"), "mycave");
    }

    #[test]
    fn test_path_for() {
        let store = MapStore::default();
        assert_eq!(
            store.path_for("cave").unwrap(),
            PathBuf::from("resources/maps/cave.map")
        );
        assert!(store.path_for("../cave").is_err());
    }

    #[test]
    fn test_list() {
        let dir = std::env::temp_dir().join(format!("vmap_store_{}", std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        let store = MapStore::new(&dir);
        assert!(store.list().unwrap().is_empty());

        store.ensure_dir().unwrap();
        std::fs::write(dir.join("beta.map"), b"").unwrap();
        std::fs::write(dir.join("alpha.map"), b"").unwrap();
        std::fs::write(dir.join("notes.txt"), b"").unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);
        assert!(store.exists("alpha"));
        assert!(!store.exists("gamma"));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }
}
