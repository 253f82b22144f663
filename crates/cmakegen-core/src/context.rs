//! GeneratorContext - runs the scan, classify, emit pipeline.
//!
//! The context holds the settings for a run and exposes each stage
//! separately so callers can inspect a classification without writing
//! anything.

use tracing::{debug, info};

use crate::config::Settings;
use crate::dependencies::read_link_dependencies;
use crate::emit::{render_descriptors, write_descriptors};
use crate::error::{GenError, GenResult};
use crate::project::LibraryProject;
use crate::requests::GenerateRequest;
use crate::responses::GenerateResponse;
use crate::scan::{scan_library_sources, scan_sources};

/// The main generator service.
#[derive(Debug, Clone, Default)]
pub struct GeneratorContext {
    /// Settings for every stage.
    pub settings: Settings,
}

impl GeneratorContext {
    /// Create a context with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Scan and classify the library without writing descriptors.
    pub fn classify(&self, request: &GenerateRequest) -> GenResult<LibraryProject> {
        let settings = &self.settings;
        let library = request.library.as_str();
        let mut project = LibraryProject::new(library);

        let sources = scan_library_sources(library, &request.source_dir, settings)?;
        project.library_files = sources.files;
        project.api_files = sources.api_files;

        let api_library = project.api_target();
        project
            .api_files
            .extend(scan_sources(&api_library, &request.api_source_dir(), settings)?);

        project.dependencies = read_link_dependencies(&request.source_dir)?;

        let apps_dir = request.apps_dir();
        if apps_dir.is_dir() {
            debug!(dir = %apps_dir.display(), "Checking for apps");
            project.application_files = scan_sources(library, &apps_dir, settings)?;
        }

        if request.tests_output.is_some() {
            let tests_dir = request.tests_dir(settings);
            if !tests_dir.is_dir() {
                return Err(GenError::directory_not_found(tests_dir));
            }
            debug!(dir = %tests_dir.display(), "Checking for tests");
            project.test_files = scan_sources(&project.test_target(), &tests_dir, settings)?;
        }

        info!(
            library,
            library_files = project.library_files.len(),
            api_files = project.api_files.len(),
            applications = project.application_files.len(),
            tests = project.test_files.len(),
            dependencies = project.dependencies.len(),
            "Classified library"
        );
        Ok(project)
    }

    /// Classify the library and write its descriptors.
    pub fn generate(&self, request: &GenerateRequest) -> GenResult<GenerateResponse> {
        let project = self.classify(request)?;
        let descriptors = render_descriptors(&project, request, &self.settings);
        let written = write_descriptors(&descriptors, request)?;

        let library_output = descriptors
            .library
            .is_some()
            .then(|| request.library_output.clone());

        Ok(GenerateResponse {
            project,
            written,
            library_output,
        })
    }
}
