//! Request DTO for a generation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Everything a generation run needs from its invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Library name, e.g. `core`.
    pub library: String,

    /// Library source directory, e.g. `../src/core`.
    pub source_dir: PathBuf,

    /// Where the library descriptor goes.
    pub library_output: PathBuf,

    /// Where the API descriptor goes, or `None` to suppress it.
    pub api_output: Option<PathBuf>,

    /// Where the test descriptor goes, or `None` to suppress it.
    pub tests_output: Option<PathBuf>,
}

impl GenerateRequest {
    /// Create a request that writes only the library descriptor.
    pub fn new(
        library: impl Into<String>,
        source_dir: impl Into<PathBuf>,
        library_output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            library: library.into(),
            source_dir: source_dir.into(),
            library_output: library_output.into(),
            api_output: None,
            tests_output: None,
        }
    }

    /// Build a request from the five positional values of the command line,
    /// mapping the suppression sentinel to `None`.
    pub fn from_positional(
        library: &str,
        source_dir: &str,
        library_output: &str,
        api_output: &str,
        tests_output: &str,
        settings: &Settings,
    ) -> Self {
        let optional = |value: &str| (!settings.is_suppressed(value)).then(|| PathBuf::from(value));
        Self {
            library: library.to_string(),
            source_dir: PathBuf::from(source_dir),
            library_output: PathBuf::from(library_output),
            api_output: optional(api_output),
            tests_output: optional(tests_output),
        }
    }

    /// Also write the API descriptor.
    pub fn with_api_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_output = Some(path.into());
        self
    }

    /// Also write the test descriptor.
    pub fn with_tests_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.tests_output = Some(path.into());
        self
    }

    /// Directory holding hand-written API sources: `<source_dir>_api`.
    pub fn api_source_dir(&self) -> PathBuf {
        let mut dir = self.source_dir.as_os_str().to_owned();
        dir.push("_api");
        PathBuf::from(dir)
    }

    /// Directory holding application sources: `<source_dir>/<library>_apps`.
    pub fn apps_dir(&self) -> PathBuf {
        self.source_dir.join(format!("{}_apps", self.library))
    }

    /// Directory holding unit tests: `<tests_root>/<library>`.
    pub fn tests_dir(&self, settings: &Settings) -> PathBuf {
        settings.tests_root.join(&self.library)
    }
}
