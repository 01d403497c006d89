//! The import-statement line shape.
//!
//! The only structural contract the organizer relies on is the import
//! declaration itself: `import <dotted.path>;` at the start of a line,
//! with an optional `static` qualifier and an optional semicolon.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an import declaration at the start of a line. The first
/// capture is the path exactly as written (including a `static`
/// qualifier and the trailing semicolon when present); the second is
/// the trailing simple name or wildcard marker.
static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import (.*\.([\w*$]+);?)").expect("IMPORT_LINE regex is invalid"));

/// A single parsed import declaration.
///
/// Immutable once parsed. The raw path keeps whatever qualifier and
/// punctuation the source had, so ActionScript imports without
/// semicolons round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    raw: String,
    name: String,
}

impl Import {
    /// Parse an import declaration from one line of source.
    ///
    /// Only lines that begin with `import ` in the first column are
    /// recognized; anything else returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use regroup::Import;
    ///
    /// let import = Import::parse("import flash.events.Event;").unwrap();
    /// assert_eq!(import.raw(), "flash.events.Event;");
    /// assert_eq!(import.name(), "Event");
    /// assert!(Import::parse("    import indented.Not;").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let caps = IMPORT_LINE.captures(line)?;
        Some(Self {
            raw: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }

    /// The path as written, `static` qualifier and semicolon included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trailing simple name: a class name, `*`, or `_`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wildcard imports pull in a whole package, so a token scan can
    /// never prove them unused. Covers both `*` and Scala's trailing
    /// underscore form (`import foo._`).
    pub fn is_wildcard(&self) -> bool {
        self.name.ends_with('*') || self.name.ends_with('_')
    }

    /// The declaration as it renders in canonical output.
    pub fn statement(&self) -> String {
        format!("import {}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let import = Import::parse("import com.example.util.StringUtil;").unwrap();
        assert_eq!(import.raw(), "com.example.util.StringUtil;");
        assert_eq!(import.name(), "StringUtil");
        assert!(!import.is_wildcard());
    }

    #[test]
    fn test_parse_without_semicolon() {
        // ActionScript 2 style imports have no trailing semicolon.
        let import = Import::parse("import flash.display.Sprite").unwrap();
        assert_eq!(import.raw(), "flash.display.Sprite");
        assert_eq!(import.name(), "Sprite");
    }

    #[test]
    fn test_parse_static_qualifier() {
        let import = Import::parse("import static java.util.Arrays.sort;").unwrap();
        assert_eq!(import.raw(), "static java.util.Arrays.sort;");
        assert_eq!(import.name(), "sort");
    }

    #[test]
    fn test_parse_star_wildcard() {
        let import = Import::parse("import flash.events.*;").unwrap();
        assert_eq!(import.name(), "*");
        assert!(import.is_wildcard());
    }

    #[test]
    fn test_parse_scala_underscore_wildcard() {
        let import = Import::parse("import scala.collection.mutable._").unwrap();
        assert_eq!(import.name(), "_");
        assert!(import.is_wildcard());
    }

    #[test]
    fn test_parse_inner_class_dollar_sign() {
        let import = Import::parse("import com.example.Outer$Inner;").unwrap();
        assert_eq!(import.name(), "Outer$Inner");
    }

    #[test]
    fn test_indented_line_is_not_an_import() {
        assert!(Import::parse("    import com.example.Foo;").is_none());
        assert!(Import::parse("\timport com.example.Foo;").is_none());
    }

    #[test]
    fn test_undotted_path_is_not_an_import() {
        // A bare name has no package to group by; treat it as code.
        assert!(Import::parse("import Foo;").is_none());
    }

    #[test]
    fn test_non_import_lines() {
        assert!(Import::parse("class Foo {").is_none());
        assert!(Import::parse("// import com.example.Foo;").is_none());
        assert!(Import::parse("").is_none());
    }

    #[test]
    fn test_statement_round_trips_raw() {
        let import = Import::parse("import java.util.List;").unwrap();
        assert_eq!(import.statement(), "import java.util.List;");
    }
}
