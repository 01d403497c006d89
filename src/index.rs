//! Class-name index: simple name to fully-qualified candidates.
//!
//! An explicitly constructed value, built by scanning source trees for
//! `package` and type declarations, persisted as JSON, and queried to
//! produce import statements for a bare class name. Nothing here is
//! process-wide state; callers build an index and pass it around.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::walk::{is_source_file, source_walk};

static PACKAGE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*package\s+([\w.]+)").expect("PACKAGE_DECL regex is invalid"));

static TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:public|private|protected|internal|final|abstract|sealed|static|case)\s+)*(?:class|interface|trait|object)\s+([A-Za-z_$][\w$]*)",
    )
    .expect("TYPE_DECL regex is invalid")
});

/// Map from simple class name to every fully-qualified name that
/// declares it. Candidate sets stay sorted so repeated lookups present
/// choices in a stable order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClassIndex {
    classes: BTreeMap<String, BTreeSet<String>>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fully-qualified class name.
    pub fn insert(&mut self, fully_qualified: &str) {
        let simple = fully_qualified
            .rsplit('.')
            .next()
            .unwrap_or(fully_qualified);
        self.classes
            .entry(simple.to_string())
            .or_default()
            .insert(fully_qualified.to_string());
    }

    /// Harvest declarations from one file's text. The `package` line
    /// qualifies every type declared after it; types in the default
    /// package are skipped because they can't be imported.
    pub fn scan_source(&mut self, content: &str) {
        let mut package: Option<String> = None;
        for line in content.lines() {
            if let Some(caps) = PACKAGE_DECL.captures(line) {
                package = Some(caps[1].to_string());
                continue;
            }
            if let Some(caps) = TYPE_DECL.captures(line) {
                if let Some(pkg) = &package {
                    self.insert(&format!("{}.{}", pkg, &caps[1]));
                }
            }
        }
    }

    /// Scan every source file under `root`, skipping files that can't
    /// be read as text. Returns the number of files scanned.
    pub fn scan_tree(&mut self, root: &Path) -> usize {
        let mut scanned = 0;
        for entry in source_walk(root).flatten() {
            let path = entry.path();
            if !path.is_file() || !is_source_file(path) {
                continue;
            }
            let Ok(content) = fs::read_to_string(path) else {
                continue;
            };
            self.scan_source(&content);
            scanned += 1;
        }
        scanned
    }

    /// Every fully-qualified candidate for a simple name, sorted.
    pub fn lookup(&self, name: &str) -> Vec<&str> {
        self.classes
            .get(name)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Fold another index's entries into this one.
    pub fn merge(&mut self, other: ClassIndex) {
        for (simple, fulls) in other.classes {
            self.classes.entry(simple).or_default().extend(fulls);
        }
    }

    /// Number of distinct simple names indexed.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Read an index previously written by [`ClassIndex::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Index {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist the index as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Index {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The import declaration for a fully-qualified name.
pub fn import_statement(fully_qualified: &str) -> String {
    format!("import {fully_qualified};")
}

/// Insert an import directly below the file's `package` line, or at the
/// top of the file when there is none.
///
/// # Examples
///
/// ```
/// use regroup::insert_import;
///
/// let source = "package com.app;\n\nclass Main {}\n";
/// let updated = insert_import(source, "com.app.util.Helper");
/// assert!(updated.starts_with("package com.app;\nimport com.app.util.Helper;\n"));
/// ```
pub fn insert_import(source: &str, fully_qualified: &str) -> String {
    let statement = import_statement(fully_qualified);
    let mut out = String::with_capacity(source.len() + statement.len() + 1);
    let mut inserted = false;
    for line in source.split_inclusive('\n') {
        out.push_str(line);
        if !inserted && line.starts_with("package ") {
            if !line.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&statement);
            out.push('\n');
            inserted = true;
        }
    }
    if inserted {
        out
    } else {
        format!("{statement}\n{source}")
    }
}
