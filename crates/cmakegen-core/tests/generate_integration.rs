//! End-to-end tests for GeneratorContext using temporary library trees.

use std::fs;
use std::path::{Path, PathBuf};

use cmakegen_core::{
    api_stem_from_path, GenError, GenerateRequest, GeneratorContext, Settings,
    LINK_DEPENDENCIES_FILE,
};
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

const API_SOURCE: &str = r#"
#include <core/Widget.hh>

namespace masala {
namespace core {

/// @brief Describe this class's API.
base::api::MasalaObjectAPIDefinitionCWP
Widget::get_api_definition() {
    return api_definition_;
}

} // namespace core
} // namespace masala
"#;

const COMMENTED_API_SOURCE: &str = r#"
// TODO: add Helper::get_api_definition() once the class is stable.
/* Helper::get_api_definition
   would go here. */
void helper() {}
"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `src/core` and `src/core_api` trees inside a temp dir, plus an output
/// directory.
struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            temp: TempDir::new().unwrap(),
        };
        fs::create_dir_all(fixture.lib_dir()).unwrap();
        fs::create_dir_all(fixture.api_dir()).unwrap();
        fixture
    }

    fn lib_dir(&self) -> PathBuf {
        self.temp.path().join("src/core")
    }

    fn api_dir(&self) -> PathBuf {
        self.temp.path().join("src/core_api")
    }

    fn out(&self, name: &str) -> PathBuf {
        self.temp.path().join("build").join(name)
    }

    fn request(&self) -> GenerateRequest {
        GenerateRequest::new("core", self.lib_dir(), self.out("core.cmake"))
    }

    fn settings(&self) -> Settings {
        Settings {
            tests_root: self.temp.path().join("tests/unit"),
            ..Settings::default()
        }
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.out(name)).unwrap()
    }
}

// ============================================================================
// Library descriptor
// ============================================================================

#[test]
fn test_plain_source_without_dependencies() {
    let fixture = Fixture::new();
    let source = fixture.lib_dir().join("Plain.cc");
    write(&source, "int plain() { return 1; }\n");

    let ctx = GeneratorContext::new(fixture.settings());
    let request = fixture.request().with_api_output(fixture.out("core_api.cmake"));
    let response = ctx.generate(&request).unwrap();

    assert_eq!(response.written, vec![fixture.out("core.cmake")]);
    assert_eq!(response.library_output, Some(fixture.out("core.cmake")));
    assert_eq!(
        fixture.read("core.cmake"),
        format!(
            "ADD_LIBRARY(core SHARED\n\t{}\n)\nSET_TARGET_PROPERTIES(core PROPERTIES VERSION ${{PROJECT_VERSION}})\n",
            display(&source)
        )
    );
    assert!(!fixture.out("core_api.cmake").exists());
}

#[test]
fn test_dependencies_and_applications() {
    let fixture = Fixture::new();
    write(&fixture.lib_dir().join("A.cc"), "");
    write(
        &fixture.lib_dir().join(LINK_DEPENDENCIES_FILE),
        "# Libraries that core links against\nbase numeric\n",
    );
    let app = fixture.lib_dir().join("core_apps/run_core.cc");
    write(&app, "int main() { return 0; }\n");

    let ctx = GeneratorContext::new(fixture.settings());
    let response = ctx.generate(&fixture.request()).unwrap();

    assert_eq!(response.project.dependencies, vec!["base", "numeric"]);
    assert_eq!(response.project.library_files.len(), 1);
    assert_eq!(response.project.application_files, vec![display(&app)]);

    let text = fixture.read("core.cmake");
    assert!(text.contains("TARGET_LINK_LIBRARIES(core\n\tPUBLIC base\n\tPUBLIC numeric\n\tPRIVATE Threads::Threads\n)\n"));
    assert!(text.contains(&format!("\nADD_EXECUTABLE( run_core {})\n", display(&app))));
    assert!(text.ends_with("\tPRIVATE Threads::Threads\n\tPUBLIC core\n)\n"));
}

// ============================================================================
// API descriptor
// ============================================================================

#[test]
fn test_api_bearing_source_produces_api_descriptor() {
    let fixture = Fixture::new();
    let widget = fixture.lib_dir().join("Widget.cc");
    write(&widget, API_SOURCE);
    write(&fixture.lib_dir().join("Widget.hh"), "class Widget;\n");
    write(&fixture.lib_dir().join("Helper.cc"), COMMENTED_API_SOURCE);

    let ctx = GeneratorContext::new(fixture.settings());
    let request = fixture.request().with_api_output(fixture.out("core_api.cmake"));
    let response = ctx.generate(&request).unwrap();

    assert_eq!(response.written_count(), 2);
    let library = fixture.read("core.cmake");
    assert!(library.contains(&format!("\n\t{}\n", display(&widget))));

    let stem = api_stem_from_path(&display(&widget)).unwrap();
    let api = fixture.read("core_api.cmake");
    assert!(api.contains(&format!(
        "\tOUTPUT\n\t\t{stem}.cc\n\t\t{stem}.hh\n\t\t{stem}.fwd.hh\n\tCOMMAND",
        stem = stem
    )));
    assert!(api.contains("\tDEPENDS generate_core_api POST_BUILD\n"));
    assert!(api.contains("ADD_LIBRARY(core_api SHARED\n"));
    assert!(!api.contains("Helper_API"));
}

#[test]
fn test_api_source_directory_is_appended() {
    let fixture = Fixture::new();
    let widget = fixture.lib_dir().join("Widget.cc");
    write(&widget, API_SOURCE);

    let api_dir = fixture.api_dir();
    let handwritten = api_dir.join("utility/convert.cc");
    write(&handwritten, "");
    write(
        &api_dir.join("auto_generated_api/Widget_API.cc"),
        "// generated on a previous build\n",
    );

    let ctx = GeneratorContext::new(fixture.settings());
    let request = fixture.request().with_api_output(fixture.out("core_api.cmake"));
    let project = ctx.classify(&request).unwrap();

    assert_eq!(project.api_files.len(), 4);
    assert_eq!(project.api_files[3], display(&handwritten));
    assert!(!project
        .api_files
        .iter()
        .any(|path| path.ends_with("auto_generated_api/Widget_API.cc")
            && path.starts_with(&display(&api_dir))));
}

#[test]
fn test_suppressed_api_output_is_not_written() {
    let fixture = Fixture::new();
    write(&fixture.lib_dir().join("Widget.cc"), API_SOURCE);

    let ctx = GeneratorContext::new(fixture.settings());
    let response = ctx.generate(&fixture.request()).unwrap();

    assert_eq!(response.project.api_files.len(), 3);
    assert_eq!(response.written, vec![fixture.out("core.cmake")]);
}

// ============================================================================
// Test descriptor
// ============================================================================

#[test]
fn test_tests_descriptor() {
    let fixture = Fixture::new();
    write(&fixture.lib_dir().join("A.cc"), "");
    let test_source = fixture.temp.path().join("tests/unit/core/ATests.cc");
    write(&test_source, "TEST_CASE(\"a\") {}\n");

    let ctx = GeneratorContext::new(fixture.settings());
    let request = fixture
        .request()
        .with_tests_output(fixture.out("core_tests.cmake"));
    ctx.generate(&request).unwrap();

    assert_eq!(
        fixture.read("core_tests.cmake"),
        format!(
            "ADD_EXECUTABLE(core_tests \n\t{}\n)\n\
             SET_TARGET_PROPERTIES(core_tests PROPERTIES VERSION ${{PROJECT_VERSION}})\n\
             TARGET_LINK_LIBRARIES(core_tests\n\tPUBLIC core\n\tPRIVATE Threads::Threads\n)\n",
            display(&test_source)
        )
    );
}

#[test]
fn test_missing_tests_directory_is_fatal() {
    let fixture = Fixture::new();
    write(&fixture.lib_dir().join("A.cc"), "");

    let ctx = GeneratorContext::new(fixture.settings());
    let request = fixture
        .request()
        .with_tests_output(fixture.out("core_tests.cmake"));
    let err = ctx.generate(&request).unwrap_err();

    assert!(matches!(err, GenError::DirectoryNotFound { .. }));
    assert!(!fixture.out("core.cmake").exists());
}

// ============================================================================
// Preconditions and determinism
// ============================================================================

#[test]
fn test_missing_source_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let request = GenerateRequest::new("core", temp.path().join("absent"), "core.cmake");
    let err = GeneratorContext::default().classify(&request).unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_missing_api_source_directory_is_fatal() {
    let fixture = Fixture::new();
    write(&fixture.lib_dir().join("A.cc"), "");
    fs::remove_dir(fixture.api_dir()).unwrap();

    let err = GeneratorContext::new(fixture.settings())
        .generate(&fixture.request())
        .unwrap_err();

    match err {
        GenError::DirectoryNotFound { path } => assert_eq!(path, fixture.api_dir()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fixture.out("core.cmake").exists());
}

#[test]
fn test_sorted_runs_are_byte_identical() {
    let fixture = Fixture::new();
    for name in ["Zeta.cc", "alpha.hh", "mid/Beta.cc", "mid/beta.hh"] {
        write(&fixture.lib_dir().join(name), "");
    }
    let settings = Settings {
        sort_entries: true,
        ..fixture.settings()
    };
    let ctx = GeneratorContext::new(settings);

    ctx.generate(&fixture.request()).unwrap();
    let first = fixture.read("core.cmake");
    ctx.generate(&fixture.request()).unwrap();
    assert_eq!(first, fixture.read("core.cmake"));
}
