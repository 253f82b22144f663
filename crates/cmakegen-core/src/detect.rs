//! Detection of classes that describe their own API.
//!
//! A source file `Foo.cc` is API-bearing when it defines
//! `Foo::get_api_definition`. The raw text is searched first; only files that
//! pass that cheap check pay for comment stripping, which rules out
//! occurrences that live in comments.

use std::path::Path;

use tracing::debug;

use crate::comments::strip_comments;

const API_ENTRY_POINT: &str = "get_api_definition";

/// Name of the class a file is expected to define: its file name up to the
/// first `.`.
pub fn base_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Whether `contents` defines `<base_name>::get_api_definition` outside of
/// any comment.
pub fn has_api_definition(base_name: &str, contents: &str) -> bool {
    let needle = format!("{}::{}", base_name, API_ENTRY_POINT);

    if !contents.contains(&needle) {
        return false;
    }

    let flattened = strip_comments(contents)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    flattened.contains(&needle)
}

/// Read `path` and decide whether it is API-bearing.
pub fn file_has_api_definition(path: &Path) -> std::io::Result<bool> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let contents = std::fs::read_to_string(path)?;
    let found = has_api_definition(base_name(&file_name), &contents);
    debug!(path = %path.display(), found, "Checked for API definition");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"
#include <core/api/MasalaObjectAPIDefinition.hh>

namespace masala {

base::api::MasalaObjectAPIDefinitionCWP
Foo::get_api_definition() {
    return api_definition_;
}

}
"#;

    #[test]
    fn test_base_name_stops_at_first_dot() {
        assert_eq!(base_name("Foo.cc"), "Foo");
        assert_eq!(base_name("Foo.fwd.hh"), "Foo");
        assert_eq!(base_name("Makefile"), "Makefile");
    }

    #[test]
    fn test_detects_uncommented_definition() {
        assert!(has_api_definition("Foo", DEFINITION));
    }

    #[test]
    fn test_other_class_does_not_count() {
        assert!(!has_api_definition("Bar", DEFINITION));
    }

    #[test]
    fn test_line_commented_occurrence_is_rejected() {
        let contents = "// See Foo::get_api_definition for details.\nvoid Foo::run() {}\n";
        assert!(!has_api_definition("Foo", contents));
    }

    #[test]
    fn test_block_commented_occurrence_is_rejected() {
        let contents = "/**\n * @brief Wraps\n * Foo::get_api_definition()\n */\nint x;\n";
        assert!(!has_api_definition("Foo", contents));
    }

    #[test]
    fn test_one_live_occurrence_is_enough() {
        let contents = format!("// Foo::get_api_definition is below\n{}", DEFINITION);
        assert!(has_api_definition("Foo", &contents));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(file_has_api_definition(&dir.path().join("Missing.cc")).is_err());
    }

    #[test]
    fn test_reads_file_and_uses_its_base_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Foo.cc");
        std::fs::write(&path, DEFINITION).unwrap();
        assert!(file_has_api_definition(&path).unwrap());

        let other = dir.path().join("Baz.cc");
        std::fs::write(&other, DEFINITION).unwrap();
        assert!(!file_has_api_definition(&other).unwrap());
    }
}
