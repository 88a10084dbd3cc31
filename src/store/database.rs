//! JSON documentation databases on disk.

use super::{DocEntry, DocStore, PRIMARY_DATABASE};
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One documentation database: an ordered list of entries with a path index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocDatabase {
    /// Optional label, shown in debug output only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    entries: Vec<DocEntry>,
    #[serde(skip)]
    by_path: HashMap<String, usize>,
}

impl DocDatabase {
    /// Build a database from entries. Later entries with a duplicate path shadow earlier ones
    /// for exact lookup but are all kept for enumeration.
    pub fn new(entries: Vec<DocEntry>) -> Self {
        let mut database = Self {
            name: None,
            entries,
            by_path: HashMap::new(),
        };
        database.reindex();
        database
    }

    /// Reads and parses a database file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, LoadError> {
        let mut database: Self =
            serde_json::from_str(content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        database.reindex();
        Ok(database)
    }

    /// Writes the database as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        use anyhow::Context;

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize documentation")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write database to {}", path.display()))
    }

    fn reindex(&mut self) {
        self.by_path = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.path.clone(), idx))
            .collect();
    }

    pub fn get(&self, path: &str) -> Option<&DocEntry> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Store backed by database files, one of which is loaded at a time.
#[derive(Debug)]
pub struct FileStore {
    primary: PathBuf,
    current: Option<(PathBuf, DocDatabase)>,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    /// Store whose primary database is `.docdb` in the current directory.
    pub fn new() -> Self {
        Self::with_primary(PRIMARY_DATABASE)
    }

    pub fn with_primary(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            current: None,
        }
    }

    /// Location of the database currently loaded, if any.
    pub fn current_location(&self) -> Option<&Path> {
        self.current.as_ref().map(|(location, _)| location.as_path())
    }

    fn current(&self) -> Option<&DocDatabase> {
        self.current.as_ref().map(|(_, database)| database)
    }
}

impl DocStore for FileStore {
    fn primary_location(&self) -> &Path {
        &self.primary
    }

    fn is_reachable(&self, location: &Path) -> bool {
        location.exists()
    }

    fn load(&mut self, location: &Path) -> Result<(), LoadError> {
        if self.current_location() == Some(location) {
            return Ok(());
        }

        let database = DocDatabase::load(location)?;
        tracing::debug!(
            location = %location.display(),
            name = database.name.as_deref().unwrap_or(""),
            entries = database.len(),
            "Loaded documentation database"
        );
        self.current = Some((location.to_path_buf(), database));
        Ok(())
    }

    fn exact_lookup(&self, path: &str) -> Option<DocEntry> {
        self.current()?.get(path).cloned()
    }

    fn all_entries(&self) -> Vec<DocEntry> {
        self.current()
            .map(|database| database.entries().to_vec())
            .unwrap_or_default()
    }
}
