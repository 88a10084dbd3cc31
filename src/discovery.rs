//! Discovery of documentation databases shipped inside installed packages.

use crate::error::Result;
use crate::store::PRIMARY_DATABASE;
use anyhow::Context;
use cargo_metadata::MetadataCommand;
use std::path::{Path, PathBuf};

/// Packages named with this prefix exist only to carry documentation.
pub const DOC_PACKAGE_PREFIX: &str = "docdb-";

/// A package that ships a documentation database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPackage {
    pub name: String,
    pub database: PathBuf,
}

impl DiscoveredPackage {
    pub fn new(name: impl Into<String>, database: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
        }
    }

    /// Whether this is a dedicated documentation package.
    pub fn is_doc_package(&self) -> bool {
        self.name.starts_with(DOC_PACKAGE_PREFIX)
    }
}

/// Source of installed packages that carry documentation databases.
pub trait PackageDiscovery {
    /// Packages with a database, in discovery order.
    fn discover(&self) -> Result<Vec<DiscoveredPackage>>;
}

/// Discovery turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscovery;

impl PackageDiscovery for NoDiscovery {
    fn discover(&self) -> Result<Vec<DiscoveredPackage>> {
        Ok(Vec::new())
    }
}

/// Discovers databases in the packages of the cargo project around a directory.
#[derive(Debug, Clone)]
pub struct CargoDiscovery {
    dir: PathBuf,
}

impl CargoDiscovery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PackageDiscovery for CargoDiscovery {
    fn discover(&self) -> Result<Vec<DiscoveredPackage>> {
        let metadata = MetadataCommand::new()
            .current_dir(&self.dir)
            .exec()
            .context("Failed to run cargo metadata")?;

        Ok(metadata
            .packages
            .iter()
            .filter_map(|package| {
                let package_dir = package.manifest_path.parent()?.as_std_path();
                package_database(package_dir)
                    .map(|database| DiscoveredPackage::new(package.name.to_string(), database))
            })
            .collect())
    }
}

/// The database a package ships, if it has one.
fn package_database(package_dir: &Path) -> Option<PathBuf> {
    let database = package_dir.join(PRIMARY_DATABASE);
    database.is_file().then_some(database)
}

/// Run discovery, treating any failure as "nothing found".
pub fn discover_or_empty(discovery: &dyn PackageDiscovery) -> Vec<DiscoveredPackage> {
    match discovery.discover() {
        Ok(packages) => {
            tracing::debug!(count = packages.len(), "Discovered documentation packages");
            packages
        }
        Err(e) => {
            tracing::debug!("Package discovery unavailable: {:#}", e);
            Vec::new()
        }
    }
}
