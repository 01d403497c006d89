//! Line scanning and import-section discovery.
//!
//! A small state machine walks a file's lines: an import line starts or
//! continues a section, blank lines and commented-out imports keep the
//! section open, and any other line closes it. Lines between a section
//! and the start of the next are token-scanned to decide which of the
//! section's imports are actually used. Lines inside a `/* ... */`
//! block can never start a section.

use std::collections::HashSet;
use std::ops::Range;

use crate::import::Import;

/// One contiguous run of import declarations within a file.
#[derive(Debug)]
pub struct Section {
    /// Byte range of the section's raw text, including interior blank
    /// lines and commented-out imports.
    pub span: Range<usize>,
    /// Deduplicated imports in declaration order.
    pub imports: Vec<Import>,
    used: HashSet<String>,
}

impl Section {
    /// True when the import was referenced after its declaration.
    /// Wildcard imports always count as used.
    pub fn is_used(&self, import: &Import) -> bool {
        self.used.contains(import.raw())
    }

    /// Imports surviving the unused-import filter, in declaration order.
    pub fn kept_imports(&self, drop_unused: bool) -> Vec<&Import> {
        self.imports
            .iter()
            .filter(|i| !drop_unused || self.is_used(i))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideSection,
    InSection,
    InBlockComment,
}

/// Split a file into import sections and mark which imports are used.
///
/// Usage scanning for a section covers every line from its first import
/// up to the start of the next section, so nested helper classes late
/// in a file each get their own scope.
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut state = State::OutsideSection;
    let mut offset = 0;

    for raw_line in content.split_inclusive('\n') {
        let start = offset;
        offset += raw_line.len();
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match state {
            State::InBlockComment => {
                // Commented-out code still counts toward usage.
                scan_usage(&mut sections, line);
                if !in_block_comment_after(line, true) {
                    state = State::OutsideSection;
                }
            }
            State::OutsideSection | State::InSection => {
                if let Some(import) = Import::parse(line) {
                    if state == State::OutsideSection {
                        sections.push(Section {
                            span: start..start,
                            imports: Vec::new(),
                            used: HashSet::new(),
                        });
                    }
                    if let Some(section) = sections.last_mut() {
                        section.span.end = offset;
                        if section.imports.iter().all(|i| i.raw() != import.raw()) {
                            if import.is_wildcard() {
                                section.used.insert(import.raw().to_string());
                            }
                            section.imports.push(import);
                        }
                    }
                    state = State::InSection;
                } else if state == State::InSection && keeps_section_open(line) {
                    if let Some(section) = sections.last_mut() {
                        section.span.end = offset;
                    }
                } else {
                    scan_usage(&mut sections, line);
                    state = if in_block_comment_after(line, false) {
                        State::InBlockComment
                    } else {
                        State::OutsideSection
                    };
                }
            }
        }
    }

    sections
}

/// Blank lines and commented-out imports don't close an import section.
fn keeps_section_open(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || (trimmed.starts_with("//") && trimmed.contains("import"))
}

/// Mark imports of the most recent section used when their simple name
/// occurs in `line` as a whole token.
fn scan_usage(sections: &mut [Section], line: &str) {
    let Some(section) = sections.last_mut() else {
        return;
    };
    let Section { imports, used, .. } = section;
    for import in imports.iter() {
        if !used.contains(import.raw()) && contains_token(line, import.name()) {
            used.insert(import.raw().to_string());
        }
    }
}

/// Tracks `/*` and `*/` pairs across one line, returning whether a
/// block comment is still open at the end of it. String literals are
/// not understood; comment detection is best effort.
fn in_block_comment_after(line: &str, mut open: bool) -> bool {
    let mut rest = line;
    loop {
        let (needle, next) = if open { ("*/", false) } else { ("/*", true) };
        match rest.find(needle) {
            None => return open,
            Some(pos) => {
                open = next;
                rest = &rest[pos + 2..];
            }
        }
    }
}

/// Whole-token occurrence check: tokens are runs of identifier
/// characters, with `$` included for inner-class names.
fn contains_token(line: &str, token: &str) -> bool {
    line.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .any(|word| word == token)
}
