//! Locations of docq's persisted state.
//!
//! Everything lives under one state directory: `$DOCQ_HOME` when set, otherwise `~/.docq`.

use std::borrow::Cow;
use std::path::PathBuf;

/// Environment variable overriding the state directory.
pub const HOME_ENV: &str = "DOCQ_HOME";

const CACHE_FILE: &str = "cache";
const SEARCH_PATHS_FILE: &str = "search_paths";

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Files docq reads at startup and writes after a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    root: PathBuf,
}

impl StatePaths {
    /// State rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the state directory from the environment.
    ///
    /// Falls back to a relative `.docq` when no home directory is known.
    pub fn from_env() -> Self {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|dir| !dir.is_empty()) {
            let dir = dir.to_string_lossy().into_owned();
            return Self::new(expand_tilde(&dir).into_owned());
        }
        let home = dirs::home_dir().unwrap_or_default();
        Self::new(home.join(".docq"))
    }

    /// Query → database cache.
    pub fn cache_file(&self) -> PathBuf {
        self.root.join(CACHE_FILE)
    }

    /// Extra database locations, one per line.
    pub fn search_paths_file(&self) -> PathBuf {
        self.root.join(SEARCH_PATHS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use std::path::Path;

    #[test]
    fn test_files_live_under_root() {
        let paths = StatePaths::new("/tmp/state");
        check!(paths.cache_file() == Path::new("/tmp/state/cache"));
        check!(paths.search_paths_file() == Path::new("/tmp/state/search_paths"));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        check!(expand_tilde("/abs/path") == "/abs/path");
        check!(expand_tilde("rel/~/path") == "rel/~/path");
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            check!(expand_tilde("~/x") == home.join("x").display().to_string());
            check!(expand_tilde("~") == home.display().to_string());
        }
    }
}
