//! Directory scanning for C++ sources and headers.
//!
//! Paths are reported as the scanned directory string joined with entry names
//! by `/`, so they keep whatever relative form the caller used. The generated
//! descriptors and the API naming convention both depend on that form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use crate::api_name::ApiCounterpart;
use crate::config::Settings;
use crate::detect::file_has_api_definition;
use crate::error::{GenError, GenResult};

/// Extension of compiled sources.
pub const SOURCE_EXTENSION: &str = ".cc";

/// Extension of headers.
pub const HEADER_EXTENSION: &str = ".hh";

/// How a directory tree is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Library pass: skip `<library>_apps` and split out API-bearing sources.
    Partition,
    /// Application, test and API-directory passes: skip
    /// `<library>/auto_generated_api`, no API detection.
    Flat,
}

impl ScanMode {
    fn excluded_suffix(self, library: &str) -> String {
        match self {
            ScanMode::Partition => format!("{}_apps", library),
            ScanMode::Flat => format!("{}/auto_generated_api", library),
        }
    }
}

/// Result of the library pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySources {
    /// Every source and header of the library, API-bearing ones included.
    pub files: Vec<String>,
    /// Generated API paths for each API-bearing source, three per source.
    pub api_files: Vec<String>,
}

/// Scan a library tree, collecting its files and the API files they imply.
///
/// Directories ending in `<library>_apps` are skipped; applications are
/// built separately.
pub fn scan_library_sources(
    library: &str,
    dir: &Path,
    settings: &Settings,
) -> GenResult<LibrarySources> {
    let mut sources = LibrarySources::default();

    for path in walk_source_files(library, dir, ScanMode::Partition, settings)? {
        if path.ends_with(SOURCE_EXTENSION)
            && !settings.is_api_excluded(&path)
            && file_has_api_definition(Path::new(&path))?
        {
            let counterpart = ApiCounterpart::from_source_path(&path)?;
            sources.api_files.extend(counterpart.into_paths());
        }
        sources.files.push(path);
    }

    debug!(
        library,
        dir = %dir.display(),
        files = sources.files.len(),
        api_files = sources.api_files.len(),
        "Scanned library sources"
    );
    Ok(sources)
}

/// Scan a tree without API detection.
///
/// Directories ending in `<library>/auto_generated_api` are skipped so that
/// generated sources already listed by the library pass are not repeated.
pub fn scan_sources(library: &str, dir: &Path, settings: &Settings) -> GenResult<Vec<String>> {
    let files = walk_source_files(library, dir, ScanMode::Flat, settings)?;
    debug!(library, dir = %dir.display(), files = files.len(), "Scanned sources");
    Ok(files)
}

/// Depth-first walk returning every `.cc` and `.hh` file outside excluded
/// directories.
fn walk_source_files(
    library: &str,
    dir: &Path,
    mode: ScanMode,
    settings: &Settings,
) -> GenResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(GenError::directory_not_found(dir));
    }

    let root = dir.to_string_lossy().into_owned();
    let excluded = mode.excluded_suffix(library);

    let mut walker = WalkDir::new(dir).follow_links(true);
    if settings.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker.into_iter().filter_entry(|e| {
        !(e.file_type().is_dir() && is_excluded_dir(&joined_path(&root, dir, e.path()), &excluded))
    }) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                debug!(path = ?err.path(), "Skipping dangling symlink");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_source_or_header(&entry.file_name().to_string_lossy()) {
            files.push(joined_path(&root, dir, entry.path()));
        }
    }

    Ok(files)
}

/// A followed link whose target is gone. It is neither a file nor a
/// directory, so it is skipped like any other non-source entry. Link loops
/// carry no I/O error and stay fatal.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map_or(false, |io| io.kind() == std::io::ErrorKind::NotFound);
    not_found
        && err
            .path()
            .and_then(|path| path.symlink_metadata().ok())
            .map_or(false, |meta| meta.file_type().is_symlink())
}

/// Check a directory path against an exclusion suffix, with or without a
/// trailing slash.
fn is_excluded_dir(path: &str, suffix: &str) -> bool {
    path.ends_with(suffix) || path.ends_with(&format!("{}/", suffix))
}

fn is_source_or_header(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_EXTENSION) || file_name.ends_with(HEADER_EXTENSION)
}

/// Rebuild `path` as `root` followed by its components below `dir`, joined
/// with `/`.
fn joined_path(root: &str, dir: &Path, path: &Path) -> String {
    let relative: Vec<String> = path
        .strip_prefix(dir)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    if relative.is_empty() {
        root.to_string()
    } else if root.ends_with('/') {
        format!("{}{}", root, relative.join("/"))
    } else {
        format!("{}/{}", root, relative.join("/"))
    }
}
