//! The organize pipeline: parse, canonicalize, compare, rewrite.
//!
//! A file is rewritten only when some section's raw text differs from
//! its canonical rendering byte for byte, which makes the whole
//! operation idempotent and keeps already-tidy files untouched.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::groups::GroupSet;
use crate::scanner::parse_sections;

/// Behavior switches for the organizer.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Drop imports whose simple name is never referenced in their
    /// section's scope. Wildcard imports are never dropped.
    pub drop_unused: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self { drop_unused: true }
    }
}

/// What `organize_file` did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Rewritten,
}

/// Canonicalize the import sections of `content`.
///
/// Returns `None` when every section already matches its canonical
/// form, `Some(rewritten)` otherwise. Lines outside import sections are
/// passed through untouched, and multiple sections keep their relative
/// order.
pub fn organize_source(
    content: &str,
    groups: &GroupSet,
    config: &OrganizerConfig,
) -> Result<Option<String>> {
    let sections = parse_sections(content);
    if sections.is_empty() {
        return Ok(None);
    }

    let mut canonical = Vec::with_capacity(sections.len());
    let mut changed = false;
    for section in &sections {
        let rendered = groups.render(section.kept_imports(config.drop_unused))?;
        if rendered != content[section.span.clone()] {
            changed = true;
        }
        canonical.push(rendered);
    }
    if !changed {
        return Ok(None);
    }

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for (section, rendered) in sections.iter().zip(&canonical) {
        out.push_str(&content[cursor..section.span.start]);
        out.push_str(rendered);
        cursor = section.span.end;
    }
    out.push_str(&content[cursor..]);
    Ok(Some(out))
}

/// Organize one file in place. The rewrite is a plain whole-file write,
/// not a temp-file-and-rename.
pub fn organize_file(path: &Path, groups: &GroupSet, config: &OrganizerConfig) -> Result<Outcome> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match organize_source(&content, groups, config)? {
        None => Ok(Outcome::Unchanged),
        Some(rewritten) => {
            fs::write(path, rewritten).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Outcome::Rewritten)
        }
    }
}
