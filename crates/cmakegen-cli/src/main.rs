//! cmakegen CLI - writes the CMake descriptors for one C++ library.
//!
//! Usage:
//!   cmakegen <LIBRARY> <SOURCE_DIR> <LIBRARY_OUTPUT> <API_OUTPUT|NONE> <TESTS_OUTPUT|NONE>

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cmakegen_core::{GenerateRequest, GeneratorContext, Settings};
use tracing::{debug, Level};

/// Generate CMake descriptors for a library, its applications, its unit
/// tests and its auto-generated API library.
#[derive(Parser, Debug)]
#[command(name = "cmakegen", author, version, long_about = None)]
struct Cli {
    /// Library name, e.g. `core`.
    library: String,

    /// Library source directory, e.g. `../src/core`.
    source_dir: String,

    /// Output path for the library descriptor.
    library_output: String,

    /// Output path for the API descriptor, or NONE.
    api_output: String,

    /// Output path for the test descriptor, or NONE.
    tests_output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// JSON settings file.
    #[arg(long, env = "CMAKEGEN_SETTINGS")]
    settings: Option<PathBuf>,

    /// Override a setting (KEY=VALUE, can be repeated).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Sort directory entries by name instead of using listing order.
    #[arg(long)]
    sort: bool,

    /// Also write the file classification as JSON.
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(&cli)?;
    debug!(?settings, "Loaded settings");

    let request = GenerateRequest::from_positional(
        &cli.library,
        &cli.source_dir,
        &cli.library_output,
        &cli.api_output,
        &cli.tests_output,
        &settings,
    );

    let apps_dir = request.apps_dir();
    if apps_dir.is_dir() {
        println!("\tChecking {} for apps.", apps_dir.display());
    }
    if request.tests_output.is_some() {
        println!("\tChecking {} for tests.", request.tests_dir(&settings).display());
    }

    let ctx = GeneratorContext::new(settings);
    let response = ctx
        .generate(&request)
        .with_context(|| format!("Error generating CMake files for {}", request.library))?;

    if let Some(plan_path) = &cli.plan {
        let json = serde_json::to_string_pretty(&response.project)?;
        std::fs::write(plan_path, json)
            .with_context(|| format!("Failed to write {}", plan_path.display()))?;
    }

    match &response.library_output {
        Some(path) => println!("Wrote {}.", path.display()),
        None => println!(
            "No sources found for {}; {} not written.",
            request.library,
            request.library_output.display()
        ),
    }

    Ok(())
}

/// Settings from the optional file, then `--sort`, then `--set` overrides.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_or_default(cli.settings.as_deref()).with_context(|| {
        format!(
            "Failed to load settings from {}",
            cli.settings
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    if cli.sort {
        settings.sort_entries = true;
    }

    for item in &cli.overrides {
        let (key, value) = item
            .split_once('=')
            .with_context(|| format!("Expected KEY=VALUE, got {}", item))?;
        settings.set(key, value)?;
    }

    Ok(settings)
}
