//! Classification of a library's files for one generation run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detect::base_name;

/// Everything known about a library after scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryProject {
    /// Library name, e.g. `core`.
    pub name: String,

    /// Library sources and headers.
    pub library_files: Vec<String>,

    /// Generated and hand-written API files.
    pub api_files: Vec<String>,

    /// Application sources, one executable each.
    pub application_files: Vec<String>,

    /// Unit-test sources.
    pub test_files: Vec<String>,

    /// Libraries to link against, from `link_dependencies.txt`.
    pub dependencies: Vec<String>,
}

impl LibraryProject {
    /// Create an empty project for a library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name of the API library target.
    pub fn api_target(&self) -> String {
        format!("{}_api", self.name)
    }

    /// Name of the unit-test executable target.
    pub fn test_target(&self) -> String {
        format!("{}_tests", self.name)
    }

    /// Name of the executable that dumps the library's API description.
    pub fn api_generator_target(&self) -> String {
        format!("generate_{}_api", self.name)
    }
}

/// Executable target name for an application source: its file name up to
/// the first `.`.
pub fn application_name(path: &str) -> String {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    base_name(&file_name).to_string()
}
