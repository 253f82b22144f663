//! Settings for descriptor generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Settings shared by every stage of a generation run.
///
/// Built once at the entry point and passed by reference; nothing in the
/// crate reads invocation state from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding one unit-test directory per library.
    #[serde(default = "default_tests_root")]
    pub tests_root: PathBuf,

    /// Output path value meaning "do not write this descriptor".
    #[serde(default = "default_suppress_sentinel")]
    pub suppress_sentinel: String,

    /// Target linked privately into every library and executable.
    #[serde(default = "default_threads_target")]
    pub threads_target: String,

    /// Script, relative to the project root, that turns the JSON API
    /// description into C++ sources.
    #[serde(default = "default_api_generator_script")]
    pub api_generator_script: String,

    /// Arguments handed to the API generator script.
    #[serde(default = "default_api_generator_args")]
    pub api_generator_args: Vec<String>,

    /// Source paths never treated as API-bearing, compared literally.
    #[serde(default = "default_api_exclusions")]
    pub api_exclusions: Vec<String>,

    /// Sort directory entries by name instead of using listing order.
    #[serde(default)]
    pub sort_entries: bool,
}

fn default_tests_root() -> PathBuf {
    PathBuf::from("../tests/unit")
}

fn default_suppress_sentinel() -> String {
    "NONE".to_string()
}

fn default_threads_target() -> String {
    "Threads::Threads".to_string()
}

fn default_api_generator_script() -> String {
    "code_templates/generate_library_api.py".to_string()
}

fn default_api_generator_args() -> Vec<String> {
    vec!["core".to_string(), "build/core_api.json".to_string()]
}

fn default_api_exclusions() -> Vec<String> {
    vec!["../src/base/MasalaObject.cc".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tests_root: default_tests_root(),
            suppress_sentinel: default_suppress_sentinel(),
            threads_target: default_threads_target(),
            api_generator_script: default_api_generator_script(),
            api_generator_args: default_api_generator_args(),
            api_exclusions: default_api_exclusions(),
            sort_entries: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> GenResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> GenResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Whether an output argument is the suppression sentinel.
    pub fn is_suppressed(&self, value: &str) -> bool {
        value == self.suppress_sentinel
    }

    /// Whether a source path is exempt from API detection.
    pub fn is_api_excluded(&self, path: &str) -> bool {
        self.api_exclusions.iter().any(|excluded| excluded == path)
    }

    /// Get a setting value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "tests_root" => Some(self.tests_root.display().to_string()),
            "suppress_sentinel" => Some(self.suppress_sentinel.clone()),
            "threads_target" => Some(self.threads_target.clone()),
            "api_generator_script" => Some(self.api_generator_script.clone()),
            "api_generator_args" => Some(self.api_generator_args.join(" ")),
            "api_exclusions" => Some(self.api_exclusions.join(" ")),
            "sort_entries" => Some(self.sort_entries.to_string()),
            _ => None,
        }
    }

    /// Set a setting value by key. List values are whitespace separated.
    pub fn set(&mut self, key: &str, value: &str) -> GenResult<()> {
        match key {
            "tests_root" => {
                self.tests_root = PathBuf::from(value);
            }
            "suppress_sentinel" => {
                self.suppress_sentinel = value.to_string();
            }
            "threads_target" => {
                self.threads_target = value.to_string();
            }
            "api_generator_script" => {
                self.api_generator_script = value.to_string();
            }
            "api_generator_args" => {
                self.api_generator_args = value.split_whitespace().map(str::to_string).collect();
            }
            "api_exclusions" => {
                self.api_exclusions = value.split_whitespace().map(str::to_string).collect();
            }
            "sort_entries" => {
                self.sort_entries = value
                    .parse()
                    .map_err(|_| GenError::Settings(format!("Invalid boolean: {}", value)))?;
            }
            _ => {
                return Err(GenError::Settings(format!("Unknown setting: {}", key)));
            }
        }
        Ok(())
    }
}
