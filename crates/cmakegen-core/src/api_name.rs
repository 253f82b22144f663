//! Naming convention for auto-generated API sources.
//!
//! For a library source `../src/core/foo/Bar.cc` the generated API class lives
//! at `../src/core_api/auto_generated_api/foo/Bar_API` with the usual `.cc`,
//! `.hh` and `.fwd.hh` extensions. The mapping is purely syntactic.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Index of the path segment naming the library (`core` in `../src/core/...`).
const LIBRARY_SEGMENT: usize = 2;

/// Derive the extensionless API path for a library source path.
///
/// The path must have more than three `/`-separated segments and its file
/// name must contain exactly one `.`.
pub fn api_stem_from_path(path: &str) -> GenResult<String> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() <= 3 {
        return Err(GenError::precondition(format!(
            "{} has {} path segments; at least 4 are needed to name its API counterpart",
            path,
            segments.len()
        )));
    }

    let last = segments.len() - 1;
    let mut mapped = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        if index == LIBRARY_SEGMENT {
            mapped.push(format!("{}_api/auto_generated_api", segment));
        } else if index == last {
            let parts: Vec<&str> = segment.split('.').collect();
            if parts.len() != 2 {
                return Err(GenError::precondition(format!(
                    "{} must have exactly one extension to name its API counterpart",
                    segment
                )));
            }
            mapped.push(format!("{}_API", parts[0]));
        } else {
            mapped.push(segment.to_string());
        }
    }

    Ok(mapped.join("/"))
}

/// The three generated files that accompany an API-bearing source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCounterpart {
    pub source: String,
    pub header: String,
    pub forward_header: String,
}

impl ApiCounterpart {
    /// Build the counterpart of a library source path.
    pub fn from_source_path(path: &str) -> GenResult<Self> {
        let stem = api_stem_from_path(path)?;
        Ok(Self {
            source: format!("{}.cc", stem),
            header: format!("{}.hh", stem),
            forward_header: format!("{}.fwd.hh", stem),
        })
    }

    /// Paths in descriptor order: source, header, forward declarations.
    pub fn into_paths(self) -> [String; 3] {
        [self.source, self.header, self.forward_header]
    }
}
