//! One lookup from query to rendered output.

use crate::cache::ResolutionCache;
use crate::discovery::{CargoDiscovery, NoDiscovery, PackageDiscovery};
use crate::error::{Result, SessionError};
use crate::format::format_entry;
use crate::locations::LocationListBuilder;
use crate::menu;
use crate::pager::Output;
use crate::paths::StatePaths;
use crate::resolver::Resolver;
use crate::store::{DocEntry, DocStore, FileStore};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Startup settings for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub state: StatePaths,
    /// `--db` locations in the order given; the last one is searched first.
    pub databases: Vec<PathBuf>,
    /// Directory cargo package discovery runs in, or `None` to skip discovery.
    pub discovery_dir: Option<PathBuf>,
}

/// Drives one query through the resolver.
#[derive(Debug)]
pub struct Session<S> {
    resolver: Resolver<S>,
}

impl Session<FileStore> {
    /// Assemble the search locations and load the cache for a file-backed session.
    pub fn open(config: &SessionConfig) -> Self {
        let discovery: Box<dyn PackageDiscovery> = match &config.discovery_dir {
            Some(dir) => Box::new(CargoDiscovery::new(dir)),
            None => Box::new(NoDiscovery),
        };
        Self::open_with(FileStore::new(), config, discovery.as_ref())
    }
}

impl<S: DocStore> Session<S> {
    pub const fn new(resolver: Resolver<S>) -> Self {
        Self { resolver }
    }

    /// Assemble a session over any store.
    ///
    /// An unreadable cache file is reported, treated as empty, and left untouched.
    pub fn open_with(store: S, config: &SessionConfig, discovery: &dyn PackageDiscovery) -> Self {
        let mut builder = LocationListBuilder::new()
            .search_paths_file(&config.state.search_paths_file())
            .discover(discovery);
        for database in &config.databases {
            builder = builder.prepend(database.clone());
        }
        let locations = builder.build();
        tracing::debug!("Search locations: {:?}", locations.as_slice());

        let cache_file = config.state.cache_file();
        let primary = store.primary_location().to_path_buf();
        let cache = ResolutionCache::load(&cache_file, &primary).unwrap_or_else(|e| {
            tracing::warn!("Ignoring resolution cache: {:#}", e);
            ResolutionCache::in_memory(cache_file, primary)
        });

        Self::new(Resolver::new(store, locations, cache))
    }

    pub const fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    /// Resolve `query` to the entry to display.
    ///
    /// Tries an exact lookup, then a pattern search; several pattern matches are offered
    /// on `output` and one is chosen from `input`. Aliases are followed to their target.
    pub fn lookup(
        &mut self,
        query: &str,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<DocEntry> {
        if query.trim().is_empty() {
            return Err(SessionError::EmptyQuery.into());
        }

        let entry = match self.resolver.resolve_exact(query) {
            Some(entry) => entry,
            None => {
                let matches = self.resolver.resolve_pattern(query)?;
                if matches.is_empty() {
                    return Err(SessionError::NoDocumentation {
                        query: query.to_string(),
                    }
                    .into());
                }
                menu::choose(matches, input, output)?
            }
        };

        Ok(self.resolver.resolve_alias(entry))
    }

    /// Render an entry with the members of its namespace.
    pub fn render(&self, entry: &DocEntry) -> String {
        let members = if entry.kind.is_callable() {
            Vec::new()
        } else {
            self.resolver.store().children_of(&entry.path)
        };
        format_entry(entry, &members)
    }

    /// Look up `query` interactively on stdin/stdout and write the result to `sink`.
    pub fn run(&mut self, query: &str, sink: &Output) -> Result<()> {
        let stdin = std::io::stdin();
        let entry = self.lookup(query, &mut stdin.lock(), &mut std::io::stdout())?;
        sink.write(&self.render(&entry))
    }
}
