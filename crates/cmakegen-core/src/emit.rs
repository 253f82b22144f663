//! CMake descriptor rendering and writing.
//!
//! Rendering is a pure function of the classified project; the same project
//! always renders to the same bytes.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Settings;
use crate::error::GenResult;
use crate::project::{application_name, LibraryProject};
use crate::requests::GenerateRequest;

const VERSION_PROPERTY: &str = "PROPERTIES VERSION ${PROJECT_VERSION}";

/// Rendered descriptor texts; `None` means the descriptor is not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptors {
    pub library: Option<String>,
    pub api: Option<String>,
    pub tests: Option<String>,
}

/// Render every descriptor the request asks for and the project can fill.
pub fn render_descriptors(
    project: &LibraryProject,
    request: &GenerateRequest,
    settings: &Settings,
) -> Descriptors {
    let library = (!project.library_files.is_empty() || !project.application_files.is_empty())
        .then(|| render_library_descriptor(project, settings));
    let api = (request.api_output.is_some() && !project.api_files.is_empty())
        .then(|| render_api_descriptor(project, settings));
    let tests = (request.tests_output.is_some() && !project.test_files.is_empty())
        .then(|| render_test_descriptor(project, settings));

    Descriptors {
        library,
        api,
        tests,
    }
}

/// Library target plus one executable per application source.
pub fn render_library_descriptor(project: &LibraryProject, settings: &Settings) -> String {
    let lib = &project.name;
    let mut out = String::new();

    if !project.library_files.is_empty() {
        out.push_str(&format!("ADD_LIBRARY({} SHARED", lib));
        push_entries(&mut out, &project.library_files);
        out.push_str("\n)\n");
        out.push_str(&format!("SET_TARGET_PROPERTIES({} {})\n", lib, VERSION_PROPERTY));
        if !project.dependencies.is_empty() {
            out.push_str(&format!("TARGET_LINK_LIBRARIES({}", lib));
            push_public_links(&mut out, &project.dependencies);
            out.push_str(&format!("\n\tPRIVATE {}", settings.threads_target));
            out.push_str("\n)\n");
        }
    }

    for app in &project.application_files {
        let app_name = application_name(app);
        out.push_str(&format!("\nADD_EXECUTABLE( {} {})\n", app_name, app));
        out.push_str(&format!("TARGET_LINK_LIBRARIES({}", app_name));
        push_public_links(&mut out, &project.dependencies);
        out.push_str(&format!("\n\tPRIVATE {}", settings.threads_target));
        out.push_str(&format!("\n\tPUBLIC {}\n)\n", lib));
    }

    out
}

/// Custom command that generates the API sources, and the API library built
/// from them.
pub fn render_api_descriptor(project: &LibraryProject, settings: &Settings) -> String {
    let generator = project.api_generator_target();
    let api_target = project.api_target();
    let mut out = String::new();

    out.push_str("ADD_CUSTOM_COMMAND(\n");
    out.push_str(&format!("\tDEPENDS {} POST_BUILD\n", generator));
    out.push_str("\tOUTPUT\n");
    for entry in &project.api_files {
        out.push_str(&format!("\t\t{}\n", entry));
    }
    out.push_str("\tCOMMAND echo \"Generating JSON description of core API.\"\n");
    out.push_str(&format!("\tCOMMAND ./{}\n", generator));
    out.push_str("\tCOMMAND echo \"Auto-generating core API C++ code.\"\n");
    out.push_str(&format!(
        "\tCOMMAND sh -c \"cd .. && python3 {} && cd build\"\n",
        generator_invocation(settings)
    ));
    out.push_str("\tVERBATIM\n)\n\n");

    out.push_str(&format!("ADD_LIBRARY({} SHARED", api_target));
    push_entries(&mut out, &project.api_files);
    out.push_str("\n)\n");
    out.push_str(&format!(
        "SET_TARGET_PROPERTIES({} {})\n",
        api_target, VERSION_PROPERTY
    ));
    out.push_str(&format!("TARGET_LINK_LIBRARIES({}", api_target));
    out.push_str(&format!("\n\tPUBLIC {}", project.name));
    push_public_links(&mut out, &project.dependencies);
    out.push_str(&format!("\n\tPRIVATE {}", settings.threads_target));
    out.push_str("\n)\n");

    out
}

/// Unit-test executable linked against the library.
pub fn render_test_descriptor(project: &LibraryProject, settings: &Settings) -> String {
    let test_target = project.test_target();
    let mut out = String::new();

    out.push_str(&format!("ADD_EXECUTABLE({} ", test_target));
    push_entries(&mut out, &project.test_files);
    out.push_str("\n)\n");
    out.push_str(&format!(
        "SET_TARGET_PROPERTIES({} {})\n",
        test_target, VERSION_PROPERTY
    ));
    out.push_str(&format!("TARGET_LINK_LIBRARIES({}", test_target));
    out.push_str(&format!("\n\tPUBLIC {}", project.name));
    push_public_links(&mut out, &project.dependencies);
    out.push_str(&format!("\n\tPRIVATE {}", settings.threads_target));
    out.push_str("\n)\n");

    out
}

/// Write rendered descriptors to the request's output paths.
///
/// Returns the paths written, in library, API, test order.
pub fn write_descriptors(
    descriptors: &Descriptors,
    request: &GenerateRequest,
) -> GenResult<Vec<PathBuf>> {
    let targets = [
        (descriptors.library.as_ref(), Some(&request.library_output)),
        (descriptors.api.as_ref(), request.api_output.as_ref()),
        (descriptors.tests.as_ref(), request.tests_output.as_ref()),
    ];

    let mut written = Vec::new();
    for (text, path) in targets {
        if let (Some(text), Some(path)) = (text, path) {
            write_file(path, text)?;
            info!(path = %path.display(), bytes = text.len(), "Wrote descriptor");
            written.push(path.clone());
        }
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> GenResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

fn generator_invocation(settings: &Settings) -> String {
    std::iter::once(settings.api_generator_script.as_str())
        .chain(settings.api_generator_args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_entries(out: &mut String, entries: &[String]) {
    for entry in entries {
        out.push_str("\n\t");
        out.push_str(entry);
    }
}

fn push_public_links(out: &mut String, dependencies: &[String]) {
    for dependency in dependencies {
        out.push_str("\n\tPUBLIC ");
        out.push_str(dependency);
    }
}
