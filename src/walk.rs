//! Path dispatch: explicit files versus recursive directory trees.
//!
//! Directories are walked with hidden entries filtered out, which skips
//! version-control droppings like `.svn` and `.git`. A failure on one
//! file during a walk is reported and the walk moves on; classification
//! failures abort the invocation instead.

use std::io::Write;
use std::path::Path;

use ignore::WalkBuilder;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::error::{Error, Result};
use crate::groups::GroupSet;
use crate::organize::{organize_file, Outcome, OrganizerConfig};

/// Extensions the tools will touch when walking a directory.
pub const SOURCE_EXTENSIONS: &[&str] = &["as", "java", "scala"];

/// True for files the directory walk should organize or index.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.as_str()))
}

/// Walk a directory tree in deterministic order, skipping hidden
/// entries but applying no gitignore-style filtering.
pub(crate) fn source_walk(root: &Path) -> ignore::Walk {
    WalkBuilder::new(root)
        .hidden(true)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

/// Organize one explicit file, or every source file under a directory.
///
/// Explicit-file errors propagate to the caller. During a directory
/// walk, per-file I/O failures are reported on `out` and the walk
/// continues; an unclassifiable import is fatal either way.
pub fn process_path(
    path: &Path,
    groups: &GroupSet,
    config: &OrganizerConfig,
    out: &mut StandardStream,
) -> Result<()> {
    if !path.is_dir() {
        // Explicit files skip the extension filter; a missing path
        // surfaces here as the read error it is.
        if organize_file(path, groups, config)? == Outcome::Rewritten {
            report_reordered(out, path);
        }
        return Ok(());
    }

    for entry in source_walk(path).flatten() {
        let entry_path = entry.path();
        if !entry_path.is_file() || !is_source_file(entry_path) {
            continue;
        }
        match organize_file(entry_path, groups, config) {
            Ok(Outcome::Rewritten) => report_reordered(out, entry_path),
            Ok(Outcome::Unchanged) => {}
            Err(err) if err.is_per_file() => report_skipped(out, &err),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn report_reordered(out: &mut StandardStream, path: &Path) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = write!(out, "Reordered imports:");
    let _ = out.reset();
    let _ = writeln!(out, " {}", path.display());
}

fn report_skipped(out: &mut StandardStream, err: &Error) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = write!(out, "Unable to organize:");
    let _ = out.reset();
    let _ = writeln!(out, " {err}");
}
