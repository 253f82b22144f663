//! cmakegen core
//!
//! Walks a C++ library's source tree, classifies its files and writes the
//! CMake descriptors that build the library, its applications, its unit tests
//! and its auto-generated API library.
//!
//! ## Pipeline
//!
//! - **Scan**: recursive walk collecting `.cc`/`.hh` files, skipping
//!   application and generated-API directories by name suffix
//! - **Detect**: sources defining `<Class>::get_api_definition` outside of
//!   comments are API-bearing, and imply three `_API` files
//! - **Emit**: deterministic rendering of the classification to CMake text
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmakegen_core::{GenerateRequest, GeneratorContext, Settings};
//!
//! fn main() -> Result<(), cmakegen_core::GenError> {
//!     let ctx = GeneratorContext::new(Settings::default());
//!     let request = GenerateRequest::new("core", "../src/core", "core.cmake")
//!         .with_api_output("core_api.cmake");
//!     let response = ctx.generate(&request)?;
//!     println!("Wrote {} descriptors", response.written_count());
//!     Ok(())
//! }
//! ```

mod api_name;
mod comments;
mod config;
mod context;
mod dependencies;
mod detect;
mod emit;
mod error;
mod project;
mod requests;
mod responses;
mod scan;

// Re-export public API
pub use api_name::{api_stem_from_path, ApiCounterpart};
pub use comments::strip_comments;
pub use config::Settings;
pub use context::GeneratorContext;
pub use dependencies::{parse_link_dependencies, read_link_dependencies, LINK_DEPENDENCIES_FILE};
pub use detect::{base_name, file_has_api_definition, has_api_definition};
pub use emit::{
    render_api_descriptor, render_descriptors, render_library_descriptor,
    render_test_descriptor, write_descriptors, Descriptors,
};
pub use error::{GenError, GenResult};
pub use project::{application_name, LibraryProject};
pub use requests::GenerateRequest;
pub use responses::GenerateResponse;
pub use scan::{
    scan_library_sources, scan_sources, LibrarySources, HEADER_EXTENSION, SOURCE_EXTENSION,
};
