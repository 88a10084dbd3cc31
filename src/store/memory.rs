//! In-memory store for embedding docq and for tests.

use super::{DocDatabase, DocEntry, DocStore, PRIMARY_DATABASE};
use crate::error::LoadError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Store whose databases live in memory, keyed by location.
///
/// Records every `load` call so callers can observe the search order.
#[derive(Debug)]
pub struct InMemoryStore {
    primary: PathBuf,
    databases: HashMap<PathBuf, DocDatabase>,
    current: Option<PathBuf>,
    loads: Vec<PathBuf>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            primary: PathBuf::from(PRIMARY_DATABASE),
            databases: HashMap::new(),
            current: None,
            loads: Vec::new(),
        }
    }

    /// Register a database at `location`, replacing any previous one.
    pub fn insert(&mut self, location: impl Into<PathBuf>, entries: Vec<DocEntry>) {
        self.databases
            .insert(location.into(), DocDatabase::new(entries));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_database(mut self, location: impl Into<PathBuf>, entries: Vec<DocEntry>) -> Self {
        self.insert(location, entries);
        self
    }

    /// Every location passed to `load`, in call order.
    pub fn loads(&self) -> &[PathBuf] {
        &self.loads
    }

    fn current(&self) -> Option<&DocDatabase> {
        self.current
            .as_ref()
            .and_then(|location| self.databases.get(location))
    }
}

impl DocStore for InMemoryStore {
    fn primary_location(&self) -> &Path {
        &self.primary
    }

    fn is_reachable(&self, location: &Path) -> bool {
        self.databases.contains_key(location)
    }

    fn load(&mut self, location: &Path) -> Result<(), LoadError> {
        self.loads.push(location.to_path_buf());
        if !self.databases.contains_key(location) {
            return Err(LoadError::NotFound {
                path: location.to_path_buf(),
            });
        }
        self.current = Some(location.to_path_buf());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntryKind;
    use assert2::check;

    #[test]
    fn test_lookups_follow_current_database() {
        let mut store = InMemoryStore::new()
            .with_database("a", vec![DocEntry::new("A", EntryKind::Type)])
            .with_database("b", vec![DocEntry::new("B", EntryKind::Type)]);

        check!(store.exact_lookup("A").is_none());
        store.load(Path::new("a")).unwrap();
        check!(store.exact_lookup("A").is_some());
        store.load(Path::new("b")).unwrap();
        check!(store.exact_lookup("A").is_none());
        check!(store.loads() == [PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_children_of_namespace() {
        let mut store = InMemoryStore::new().with_database(
            "a",
            vec![
                DocEntry::new("Foo", EntryKind::Namespace),
                DocEntry::new("Foo::Bar", EntryKind::Type),
                DocEntry::new("Foo#baz", EntryKind::InstanceMethod),
                DocEntry::new("Foo::Bar#qux", EntryKind::InstanceMethod),
            ],
        );
        store.load(Path::new("a")).unwrap();

        let children: Vec<String> = store
            .children_of("Foo")
            .into_iter()
            .map(|entry| entry.path)
            .collect();
        check!(children == ["Foo::Bar", "Foo#baz"]);
    }
}
