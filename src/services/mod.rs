//! Services module - the conversion pipeline and its collaborators.
//!
//! Everything the tool does lives here, split along the collaborator seams:
//!
//! - [`ConversionPipeline`]: The orchestrator. Sequences cleanup, concurrent
//!   per-icon emission, barrel/model composition, and the optional
//!   compile-and-prune step under a fail-fast error policy.
//! - [`IconDefinitionProvider`] / [`SvgFileProvider`]: Discovery of icon
//!   definitions from SVG sources (glob matching, minification, identifier
//!   derivation).
//! - [`generators`]: Pure text functions producing the TypeScript sources.
//! - [`FilesystemGateway`]: Folder deletion, file writes with the fixed `.ts`
//!   extension, glob resolution, batch deletion.
//! - [`SourceCompiler`] / [`TypeScriptCompiler`]: Compilation of generated
//!   sources to distributable JS + declaration artifacts.
//!
//! # Design Philosophy
//!
//! - **Pure where possible**: Text generation has no side effects; all I/O is
//!   concentrated in the gateway and compiler.
//! - **Trait seams for the failure-prone edges**: Provider and compiler are
//!   traits so failure injection and substitution need no filesystem tricks.
//! - **Fail-fast**: No stage recovers locally; errors propagate to the binary
//!   which logs them and exits non-zero.

pub mod compiler;
pub mod conversion;
pub mod fs_gateway;
pub mod generators;
pub mod provider;

pub use compiler::{CompileError, SourceCompiler, TypeScriptCompiler};
pub use conversion::ConversionPipeline;
pub use fs_gateway::{FilesystemGateway, GatewayError};
pub use provider::{IconDefinitionProvider, ProviderError, SvgFileProvider};
