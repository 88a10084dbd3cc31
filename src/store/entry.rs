//! Documentation entries and their kinds.

use serde::{Deserialize, Serialize};

/// Separator between nested namespaces in an entry path.
pub const NAMESPACE_SEPARATOR: &str = "::";
/// Separator before an instance-level member name.
pub const INSTANCE_SEPARATOR: char = '#';
/// Separator before a type-level member name.
pub const TYPE_SEPARATOR: char = '.';

/// Whether a member is called on instances or on the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Instance,
    Type,
}

impl Scope {
    /// The path separator that introduces a member of this scope.
    pub const fn separator(self) -> char {
        match self {
            Self::Instance => INSTANCE_SEPARATOR,
            Self::Type => TYPE_SEPARATOR,
        }
    }
}

/// DO NOT rename variants without updating databases on disk; the snake_case
/// names are the serialized `kind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Namespace,
    Type,
    Constant,
    InstanceMethod,
    TypeMethod,
}

impl EntryKind {
    /// Callable kinds are members that carry a scope.
    pub const fn is_callable(self) -> bool {
        self.scope().is_some()
    }

    pub const fn scope(self) -> Option<Scope> {
        match self {
            Self::InstanceMethod => Some(Scope::Instance),
            Self::TypeMethod => Some(Scope::Type),
            Self::Namespace | Self::Type | Self::Constant => None,
        }
    }

    /// Human-readable label used when rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Namespace => "Namespace",
            Self::Type => "Type",
            Self::Constant => "Constant",
            Self::InstanceMethod => "Method",
            Self::TypeMethod => "Type Method",
        }
    }
}

/// A single documented item in a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Fully qualified path, e.g. `Foo::Bar#baz`.
    pub path: String,
    pub kind: EntryKind,
    /// Documentation body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    /// Declaration line shown above the docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Member name this entry forwards to, relative to its namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
}

impl DocEntry {
    /// Create an undocumented entry.
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
            docs: None,
            signature: None,
            alias_of: None,
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_alias_of(mut self, target: impl Into<String>) -> Self {
        self.alias_of = Some(target.into());
        self
    }

    pub const fn scope(&self) -> Option<Scope> {
        self.kind.scope()
    }

    pub fn is_alias(&self) -> bool {
        self.kind.is_callable() && self.alias_of.is_some()
    }

    /// Path of the owning namespace.
    ///
    /// Members are split at their last `#` or `.`; namespaces and types at their
    /// last `::`. Top-level items live in the empty (root) namespace.
    pub fn namespace(&self) -> &str {
        let split = if self.kind.is_callable() {
            self.path.rfind([INSTANCE_SEPARATOR, TYPE_SEPARATOR])
        } else {
            self.path.rfind(NAMESPACE_SEPARATOR)
        };
        split.map_or("", |idx| &self.path[..idx])
    }

    /// Final path component, without its separator.
    pub fn name(&self) -> &str {
        let namespace = self.namespace();
        if namespace.is_empty() && !self.path.starts_with([INSTANCE_SEPARATOR, TYPE_SEPARATOR]) {
            return &self.path;
        }
        let rest = &self.path[namespace.len()..];
        rest.strip_prefix(NAMESPACE_SEPARATOR)
            .or_else(|| rest.strip_prefix([INSTANCE_SEPARATOR, TYPE_SEPARATOR]))
            .unwrap_or(rest)
    }

    /// Path the alias forwards to, if this entry is an alias.
    pub fn alias_target_path(&self) -> Option<String> {
        if !self.is_alias() {
            return None;
        }
        let scope = self.scope()?;
        let target = self.alias_of.as_deref()?;
        Some(format!("{}{}{}", self.namespace(), scope.separator(), target))
    }
}
