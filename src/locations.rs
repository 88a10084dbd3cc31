//! Assembly of the ordered database search list.
//!
//! Priority, highest first: explicit `--db` overrides (last given first), dedicated
//! documentation packages, the extra-search-paths file in file order, then every other
//! package's database. The primary database and the cached location for a query are put
//! in front of this list by the resolver at lookup time.

use crate::discovery::{DiscoveredPackage, PackageDiscovery, discover_or_empty};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ordered, duplicate-free list of database locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLocations {
    locations: Vec<PathBuf>,
}

impl SearchLocations {
    /// Build from an ordered list, dropping later duplicates.
    pub fn new(locations: Vec<PathBuf>) -> Self {
        Self {
            locations: dedup_preserving_order(locations),
        }
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.locations.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// This list with `leading` locations in front, still duplicate-free.
    pub fn with_leading<'a>(&self, leading: impl IntoIterator<Item = &'a Path>) -> Vec<PathBuf> {
        let merged = leading
            .into_iter()
            .map(Path::to_path_buf)
            .chain(self.locations.iter().cloned())
            .collect();
        dedup_preserving_order(merged)
    }
}

/// Keep the first occurrence of every location.
pub fn dedup_preserving_order(locations: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::with_capacity(locations.len());
    locations
        .into_iter()
        .filter(|location| seen.insert(location.clone()))
        .collect()
}

/// Collects locations from every source before deduplicating once.
#[derive(Debug, Default)]
pub struct LocationListBuilder {
    overrides: Vec<PathBuf>,
    locations: Vec<PathBuf>,
}

impl LocationListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every line of the extra-search-paths file, trimmed.
    ///
    /// A missing or unreadable file contributes nothing. Invalid UTF-8 is replaced within
    /// its own line.
    pub fn search_paths_file(mut self, path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(content) => {
                self.locations.extend(
                    String::from_utf8_lossy(&content)
                        .lines()
                        .map(|line| PathBuf::from(line.trim())),
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Ignoring search paths file {}: {}", path.display(), e);
            }
        }
        self
    }

    /// Add package databases: documentation packages in front, the rest at the back.
    pub fn packages(mut self, packages: impl IntoIterator<Item = DiscoveredPackage>) -> Self {
        for package in packages {
            if package.is_doc_package() {
                self.locations.insert(0, package.database);
            } else {
                self.locations.push(package.database);
            }
        }
        self
    }

    /// Run discovery and add whatever it finds; failures add nothing.
    pub fn discover(self, discovery: &dyn PackageDiscovery) -> Self {
        self.packages(discover_or_empty(discovery))
    }

    /// Put an explicitly requested database ahead of everything added so far.
    pub fn prepend(mut self, location: impl Into<PathBuf>) -> Self {
        self.overrides.insert(0, location.into());
        self
    }

    pub fn build(self) -> SearchLocations {
        let mut merged = self.overrides;
        merged.extend(self.locations);
        SearchLocations::new(merged)
    }
}
