//! Turning a free-form query into a search pattern over entry paths.

use crate::error::Result;
use crate::store::DocEntry;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `Foo.bar`: a capitalized name, then a literal `.` and a word character.
static TYPE_MEMBER_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9_]*\.[A-Za-z0-9_]").expect("valid regex"));

/// `Foo` or `Foo::Bar`: capitalized, with no member separator anywhere.
static BARE_TYPE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][^#.]*$").expect("valid regex"));

/// Escape the first `.` of a `Type.member` query so it matches literally.
///
/// Every other query is returned unchanged and keeps its regex meaning.
pub fn normalize_query(query: &str) -> Cow<'_, str> {
    if TYPE_MEMBER_QUERY.is_match(query) {
        Cow::Owned(query.replacen('.', r"\.", 1))
    } else {
        Cow::Borrowed(query)
    }
}

/// Whether the query looks like a plain type name, which should not match members.
///
/// Only capitalized queries qualify; `foo` still matches members.
pub fn is_bare_type_query(query: &str) -> bool {
    BARE_TYPE_QUERY.is_match(query)
}

/// A compiled, unanchored pattern over entry paths.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    regex: Regex,
    exclude_callables: bool,
}

impl QueryPattern {
    /// Compile a query. A query that is not a valid regular expression matches literally.
    pub fn new(query: &str) -> Result<Self> {
        let normalized = normalize_query(query);
        let regex = match Regex::new(&normalized) {
            Ok(regex) => regex,
            Err(e) => {
                tracing::debug!("Query {:?} is not a valid pattern ({}), matching literally", query, e);
                Regex::new(&regex::escape(query))?
            }
        };

        Ok(Self {
            regex,
            exclude_callables: is_bare_type_query(&normalized),
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, entry: &DocEntry) -> bool {
        if self.exclude_callables && entry.kind.is_callable() {
            return false;
        }
        self.regex.is_match(&entry.path)
    }

    /// Matching entries, in database order.
    pub fn filter(&self, entries: Vec<DocEntry>) -> Vec<DocEntry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntryKind;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Foo.bar", r"Foo\.bar")]
    #[case("A.f", r"A\.f")]
    #[case("Foo.bar.baz", r"Foo\.bar.baz")]
    #[case("foo.bar", "foo.bar")]
    #[case("Foo.", "Foo.")]
    #[case("Foo::Bar.baz", "Foo::Bar.baz")]
    #[case("A#f", "A#f")]
    #[case("r$", "r$")]
    fn test_normalize_query(#[case] query: &str, #[case] expected: &str) {
        check!(normalize_query(query) == expected);
    }

    #[rstest]
    #[case("Awe", true)]
    #[case("Foo::Bar", true)]
    #[case("A#f", false)]
    #[case(r"A\.f", false)]
    #[case("awe", false)]
    #[case("r$", false)]
    fn test_bare_type_query(#[case] query: &str, #[case] expected: bool) {
        check!(is_bare_type_query(query) == expected);
    }

    #[test]
    fn test_invalid_regex_matches_literally() {
        let pattern = QueryPattern::new("Foo(").unwrap();
        check!(pattern.matches(&DocEntry::new("Foo(bar)", EntryKind::Type)));
        check!(!pattern.matches(&DocEntry::new("Foo", EntryKind::Type)));
    }

    #[test]
    fn test_unanchored_match() {
        let pattern = QueryPattern::new("wes").unwrap();
        check!(pattern.matches(&DocEntry::new("So::Awesome", EntryKind::Type)));
        check!(pattern.matches(&DocEntry::new("Awesome#fan", EntryKind::InstanceMethod)));
    }
}
