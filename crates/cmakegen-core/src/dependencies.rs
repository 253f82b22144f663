//! Link dependencies declared next to a library's sources.

use std::path::Path;

use tracing::debug;

use crate::error::{GenError, GenResult};

/// Name of the dependency file inside a library's source directory.
pub const LINK_DEPENDENCIES_FILE: &str = "link_dependencies.txt";

/// Read the libraries `dir` links against.
///
/// The file is a whitespace-separated list of library names. A token
/// starting with `#` opens a comment that runs to the end of its line. A
/// missing file means no dependencies.
pub fn read_link_dependencies(dir: &Path) -> GenResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(GenError::directory_not_found(dir));
    }

    let path = dir.join(LINK_DEPENDENCIES_FILE);
    if !path.is_file() {
        debug!(path = %path.display(), "No link dependencies file");
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path)?;
    let dependencies = parse_link_dependencies(&contents);
    debug!(path = %path.display(), count = dependencies.len(), "Read link dependencies");
    Ok(dependencies)
}

/// Split dependency file contents into library names, dropping comments.
pub fn parse_link_dependencies(contents: &str) -> Vec<String> {
    contents
        .lines()
        .flat_map(|line| {
            line.split_whitespace()
                .take_while(|token| !token.starts_with('#'))
        })
        .map(str::to_string)
        .collect()
}
