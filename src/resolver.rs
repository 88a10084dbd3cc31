//! Resolving a query to documentation entries across the search locations.
//!
//! Exact lookup walks the primary database, then the cached location for the query,
//! then the assembled search list, and stops at the first hit. Pattern search walks the
//! same list without the cache and returns the matches of the first database that has any.

use crate::cache::ResolutionCache;
use crate::error::Result;
use crate::locations::SearchLocations;
use crate::query::QueryPattern;
use crate::store::{DocEntry, DocStore};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Owns the per-session search state: store, location list, and cache.
#[derive(Debug)]
pub struct Resolver<S> {
    store: S,
    locations: SearchLocations,
    cache: ResolutionCache,
}

impl<S: DocStore> Resolver<S> {
    pub const fn new(store: S, locations: SearchLocations, cache: ResolutionCache) -> Self {
        Self {
            store,
            locations,
            cache,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn locations(&self) -> &SearchLocations {
        &self.locations
    }

    pub const fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Locations in the order an exact lookup for `query` tries them.
    pub fn exact_search_order(&self, query: &str) -> Vec<PathBuf> {
        let primary = self.store.primary_location();
        let cached = self.cache.get(query);
        self.locations
            .with_leading(std::iter::once(primary).chain(cached))
    }

    /// Locations in the order a pattern search tries them.
    pub fn pattern_search_order(&self) -> Vec<PathBuf> {
        self.locations
            .with_leading([self.store.primary_location()])
    }

    /// Find the entry whose path is exactly `query`.
    ///
    /// The first database that has it wins and is recorded in the cache.
    pub fn resolve_exact(&mut self, query: &str) -> Option<DocEntry> {
        debug!("Searching for {} in search paths", query);
        for location in self.exact_search_order(query) {
            if !self.load(&location) {
                continue;
            }
            debug!("Searching for {} in {}...", query, location.display());
            if let Some(entry) = self.store.exact_lookup(query) {
                if let Err(e) = self.cache.record(query, &location) {
                    warn!("Could not update resolution cache: {:#}", e);
                }
                return Some(entry);
            }
        }
        None
    }

    /// Find entries whose path matches `query` as a pattern.
    ///
    /// Returns the matches of the first database with any, without merging later ones.
    pub fn resolve_pattern(&mut self, query: &str) -> Result<Vec<DocEntry>> {
        let pattern = QueryPattern::new(query)?;
        debug!(
            "Searching with regular expression /{}/ in search paths",
            pattern.as_str()
        );
        for location in self.pattern_search_order() {
            if !self.load(&location) {
                continue;
            }
            debug!(
                "Searching with regular expression /{}/ in {}...",
                pattern.as_str(),
                location.display()
            );
            let matches = pattern.filter(self.store.all_entries());
            if !matches.is_empty() {
                return Ok(matches);
            }
        }
        Ok(Vec::new())
    }

    /// Follow an alias to its target in the current database.
    ///
    /// Entries that are not aliases, and aliases whose target is missing, come back unchanged.
    pub fn resolve_alias(&self, entry: DocEntry) -> DocEntry {
        let Some(target_path) = entry.alias_target_path() else {
            return entry;
        };
        match self.store.exact_lookup(&target_path) {
            Some(target) => {
                debug!("Following alias {} to {}", entry.path, target.path);
                target
            }
            None => {
                debug!("Alias target {} of {} is unresolved", target_path, entry.path);
                entry
            }
        }
    }

    /// Make `location` current. Unreachable or unreadable databases are skipped.
    fn load(&mut self, location: &Path) -> bool {
        if !self.store.is_reachable(location) {
            return false;
        }
        match self.store.load(location) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping documentation database: {}", e);
                false
            }
        }
    }
}
