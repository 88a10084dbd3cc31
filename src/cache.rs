//! Persisted memo of which database answered a query.
//!
//! The cache file holds one `<query> <location>` pair per line. It only reorders the
//! search: a cached location is tried right after the primary database, and a stale
//! entry simply misses and falls through to the normal search. Entries are never
//! pruned; every new entry rewrites the whole file from memory.

use crate::error::Result;
use anyhow::Context;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Query → database location mapping backed by a flat text file.
#[derive(Debug, Clone)]
pub struct ResolutionCache {
    file: PathBuf,
    /// Never written as a value: it is always searched first anyway.
    primary: PathBuf,
    entries: IndexMap<String, PathBuf>,
    /// Cleared when the file exists but could not be read, so it is never overwritten.
    persist: bool,
}

impl ResolutionCache {
    /// An empty cache that will persist to `file`.
    pub fn new(file: impl Into<PathBuf>, primary: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            primary: primary.into(),
            entries: IndexMap::new(),
            persist: true,
        }
    }

    /// An empty cache that keeps new entries in memory only.
    ///
    /// Used in place of a cache file that exists but could not be read.
    pub fn in_memory(file: impl Into<PathBuf>, primary: impl Into<PathBuf>) -> Self {
        Self {
            persist: false,
            ..Self::new(file, primary)
        }
    }

    /// Read the cache file. A missing file is an empty cache.
    ///
    /// Each line is split on whitespace; the first token is the query and the second
    /// the location. Lines with fewer than two tokens carry no location and are dropped.
    /// Lines are decoded one at a time, so invalid UTF-8 only affects its own line.
    pub fn load(file: impl Into<PathBuf>, primary: impl Into<PathBuf>) -> Result<Self> {
        let mut cache = Self::new(file, primary);
        let content = match std::fs::read(&cache.file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(cache),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read cache file {}", cache.file.display())
                });
            }
        };

        for line in String::from_utf8_lossy(&content).lines() {
            let mut tokens = line.split_whitespace();
            if let (Some(query), Some(location)) = (tokens.next(), tokens.next()) {
                cache
                    .entries
                    .insert(query.to_string(), PathBuf::from(location));
            }
        }
        tracing::debug!(
            file = %cache.file.display(),
            entries = cache.entries.len(),
            "Loaded resolution cache"
        );
        Ok(cache)
    }

    /// Cached location for `query`.
    pub fn get(&self, query: &str) -> Option<&Path> {
        self.entries.get(query).map(PathBuf::as_path)
    }

    /// Remember that `location` answered `query`, then rewrite the cache file.
    ///
    /// Does nothing for the primary database.
    pub fn record(&mut self, query: &str, location: &Path) -> Result<()> {
        if location == self.primary {
            return Ok(());
        }
        self.entries
            .insert(query.to_string(), location.to_path_buf());
        if !self.persist {
            return Ok(());
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content: String = self
            .entries
            .iter()
            .map(|(query, location)| format!("{} {}\n", query, location.display()))
            .collect();
        std::fs::write(&self.file, content)
            .with_context(|| format!("Failed to write cache file {}", self.file.display()))
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
