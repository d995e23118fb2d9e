// iconforge - Tree-shakable TypeScript icon libraries from SVG sources
//
// This is the library crate containing the conversion pipeline and its
// collaborators. The binary crate (main.rs) provides the one-shot entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{ConversionConfig, ConversionOptions, ConversionSummary, IconDefinition};
pub use services::{ConversionPipeline, SvgFileProvider, TypeScriptCompiler};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
