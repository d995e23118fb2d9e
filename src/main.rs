//! iconforge - Tree-shakable TypeScript icon libraries from SVG sources
//!
//! Main entry point for the one-shot conversion tool.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/iconforge_<date>.log plus console output
//! 2. Load `iconforge.yaml` from the config directory (first CLI argument,
//!    defaulting to the current directory)
//! 3. Create the tokio runtime
//! 4. Run the conversion pipeline once per configured conversion
//! 5. On the first failure: log the raw error, exit non-zero
//!
//! There is no watch mode, no rollback, and no partial-success reporting; a
//! failed run leaves whatever partial output existed at failure time and is
//! retried by simply running the tool again.

use anyhow::Result;
use iconforge::models::ConversionConfig;
use iconforge::services::{ConversionPipeline, SvgFileProvider, TypeScriptCompiler};
use iconforge::{APP_NAME, ConfigManager, VERSION};

/// Main entry point for the iconforge conversion tool
///
/// # Errors
///
/// This function can fail if:
/// - Logging initialization fails (disk space, permissions)
/// - Tokio runtime creation fails (system resources)
/// - The config file is present but invalid YAML
/// - Any conversion stage fails (discovery, generation, filesystem, compile)
fn main() -> Result<()> {
    // Setup logging with both file and console output
    let log_guard = iconforge::logging::setup_logging("logs", "iconforge", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Config directory is the only accepted argument; defaults to cwd
    let config_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let config_manager = ConfigManager::new(config_dir.as_str())?;
    let config = config_manager.load_config()?;

    tracing::info!("Loaded configuration with {} conversions", config.conversions.len());

    if let Err(error) = run_conversions(&config) {
        // One generic fatal path for every failure kind.
        tracing::error!("Something went wrong: {error:#}");
        eprintln!("Something went wrong: {error:#}");
        // The non-blocking writer flushes on guard drop; exit would skip it.
        drop(log_guard);
        std::process::exit(1);
    }

    tracing::info!("All conversions complete");
    Ok(())
}

/// Run every configured conversion in order, stopping at the first failure.
fn run_conversions(config: &ConversionConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let pipeline = ConversionPipeline::new(SvgFileProvider::new(), TypeScriptCompiler::new());

    for options in &config.conversions {
        let summary = runtime.block_on(pipeline.convert(options))?;
        tracing::info!("generated {}", summary.summary());
        println!(
            "your files were successfully created under: {}",
            summary.output_directory
        );
    }

    Ok(())
}
