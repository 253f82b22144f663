//! Response DTO for a generation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::project::LibraryProject;

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The classification the descriptors were rendered from.
    pub project: LibraryProject,

    /// Descriptor files written, in library, API, test order.
    pub written: Vec<PathBuf>,

    /// The library descriptor path, if it was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_output: Option<PathBuf>,
}

impl GenerateResponse {
    /// Number of descriptor files written.
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}
