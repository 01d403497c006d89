//! Group configuration, classification, and canonical rendering.
//!
//! Imports are bucketed into an ordered list of prefix groups: the
//! longest configured prefix matching an import decides its group.
//! Within a group, imports are clustered by their owning package
//! prefix, each cluster sorted and followed by a blank line. The
//! resulting text is both the rewrite target and the no-op comparison
//! baseline.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::import::Import;

/// Order in which imports are grouped by prefix. The empty string is
/// the catch-all that guarantees every import classifies somewhere.
/// A `static` variant of every entry is derived automatically and
/// ordered after all regular groups.
pub const DEFAULT_ORDERING: &[&str] = &["flash", "java", "javax", "android", "scala", ""];

/// Owning-prefix pattern used to cluster imports within one group:
/// the leading word, optionally preceded by a reversed-domain prefix,
/// so `com.foo.*` and `com.bar.*` land in separate clusters.
static SPLIT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:com\.|net\.|org\.)?\w+)").expect("SPLIT_PREFIX regex is invalid")
});

/// The ordered prefix groups every import is sorted into.
///
/// Built once at startup and read-only afterwards.
pub struct GroupSet {
    /// Prefixes in render order, static pseudo-groups last.
    ordering: Vec<String>,
    /// Indices into `ordering`, longest prefix first.
    by_precision: Vec<usize>,
}

impl GroupSet {
    /// Build a group set from prefixes in render order. For each prefix
    /// a `static `-qualified pseudo-group is added after the regular
    /// groups, so static imports sort identically but later.
    pub fn new(prefixes: &[&str]) -> Self {
        let mut ordering: Vec<String> = prefixes.iter().map(|p| (*p).to_string()).collect();
        ordering.extend(prefixes.iter().map(|p| format!("static {p}")));

        let mut by_precision: Vec<usize> = (0..ordering.len()).collect();
        by_precision.sort_by_key(|&i| std::cmp::Reverse(ordering[i].len()));

        Self {
            ordering,
            by_precision,
        }
    }

    fn classify_index(&self, import: &Import) -> Result<usize> {
        for &i in &self.by_precision {
            if import.raw().starts_with(&self.ordering[i]) {
                return Ok(i);
            }
        }
        Err(Error::UnknownGroup(import.raw().to_string()))
    }

    /// The group prefix an import belongs to. Longest matching prefix
    /// wins; no match at all is a fatal configuration error.
    pub fn classify(&self, import: &Import) -> Result<&str> {
        self.classify_index(import).map(|i| self.ordering[i].as_str())
    }

    /// Render the canonical text for one section's imports.
    ///
    /// Groups appear in configured order. Inside a group, imports are
    /// clustered by owning prefix; clusters are ordered
    /// lexicographically and sorted internally, each followed by a
    /// blank line. The final blank separator collapses to a single
    /// newline, so canonical text ends with exactly one blank line
    /// between the section and the code that follows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use regroup::{GroupSet, Import};
    ///
    /// let groups = GroupSet::new(&["flash", "java", ""]);
    /// let imports = [
    ///     Import::parse("import java.util.List;").unwrap(),
    ///     Import::parse("import flash.events.Event;").unwrap(),
    /// ];
    /// assert_eq!(
    ///     groups.render(&imports).unwrap(),
    ///     "import flash.events.Event;\n\nimport java.util.List;\n\n"
    /// );
    /// ```
    pub fn render<'a, I>(&self, imports: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Import>,
    {
        let mut grouped: BTreeMap<usize, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();
        for import in imports {
            let group = self.classify_index(import)?;
            grouped
                .entry(group)
                .or_default()
                .entry(owning_prefix(import.raw()))
                .or_default()
                .insert(import.statement());
        }

        let mut lines: Vec<String> = Vec::new();
        for clusters in grouped.into_values() {
            for statements in clusters.into_values() {
                lines.extend(statements);
                lines.push(String::new());
            }
        }
        if let Some(last) = lines.last_mut() {
            if last.is_empty() {
                *last = "\n".to_string();
            }
        }
        Ok(lines.join("\n"))
    }
}

impl Default for GroupSet {
    fn default() -> Self {
        Self::new(DEFAULT_ORDERING)
    }
}

fn owning_prefix(raw: &str) -> String {
    SPLIT_PREFIX
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
