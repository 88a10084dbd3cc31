//! Documentation databases and the store interface the resolver queries.
//!
//! A store holds at most one "current" database at a time. Loading a location
//! makes it current; lookups and enumeration always run against the current one.

pub(crate) mod database;
pub(crate) mod entry;
pub(crate) mod memory;

pub use database::{DocDatabase, FileStore};
pub use entry::{DocEntry, EntryKind, Scope};
pub use memory::InMemoryStore;

use crate::error::LoadError;
use std::path::Path;

/// File name of the primary database, looked up in the current directory.
pub const PRIMARY_DATABASE: &str = ".docdb";

/// Query surface over a set of documentation databases.
pub trait DocStore {
    /// The primary/default database location, always searched first.
    fn primary_location(&self) -> &Path;

    /// Whether a database can be loaded from `location` at all.
    fn is_reachable(&self, location: &Path) -> bool;

    /// Make the database at `location` current. Loading the current location again is a no-op.
    fn load(&mut self, location: &Path) -> Result<(), LoadError>;

    /// Entry with exactly this path in the current database.
    fn exact_lookup(&self, path: &str) -> Option<DocEntry>;

    /// Every entry in the current database, in database order.
    fn all_entries(&self) -> Vec<DocEntry>;

    /// Entries of one kind in the current database, in database order.
    fn all_entries_of_kind(&self, kind: EntryKind) -> Vec<DocEntry> {
        self.all_entries()
            .into_iter()
            .filter(|entry| entry.kind == kind)
            .collect()
    }

    /// Entries whose owning namespace is `namespace`, in database order.
    fn children_of(&self, namespace: &str) -> Vec<DocEntry> {
        self.all_entries()
            .into_iter()
            .filter(|entry| entry.path != namespace && entry.namespace() == namespace)
            .collect()
    }
}
