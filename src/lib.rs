pub mod cache;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod format;
pub mod locations;
pub mod menu;
pub mod pager;
pub mod paths;
pub mod query;
pub mod resolver;
pub mod session;
pub mod store;
pub mod tracing;

pub use cache::ResolutionCache;
pub use error::{LoadError, Result, SessionError};
pub use locations::{LocationListBuilder, SearchLocations};
pub use resolver::Resolver;
pub use session::{Session, SessionConfig};
pub use store::{DocDatabase, DocEntry, DocStore, EntryKind, FileStore, InMemoryStore};
