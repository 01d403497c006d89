//! Regroup - keeps import statements grouped, sorted, and deduplicated
//! in ActionScript, Java, and Scala sources, and answers "where does
//! this class live?" from an index built out of the same trees.

pub mod error;
pub mod groups;
pub mod import;
pub mod index;
pub mod organize;
pub mod scanner;
pub mod walk;

pub use error::{Error, Result};
pub use groups::{GroupSet, DEFAULT_ORDERING};
pub use import::Import;
pub use index::{import_statement, insert_import, ClassIndex};
pub use organize::{organize_file, organize_source, OrganizerConfig, Outcome};
pub use scanner::{parse_sections, Section};
pub use walk::{is_source_file, process_path, SOURCE_EXTENSIONS};
