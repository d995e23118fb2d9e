use anyhow::Result;
use camino::Utf8PathBuf;
use std::process::Command;
use thiserror::Error;

/// Errors that can occur during source compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Failed to spawn compiler '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Compiler '{command}' exited with status {code}")]
    Failed { command: String, code: i32 },
}

/// Compiles a set of generated source paths to distributable artifacts.
///
/// Compilation is synchronous from the pipeline's point of view: it runs to
/// completion before pruning may start, and any failure is fatal.
pub trait SourceCompiler {
    fn compile(&self, paths: &[Utf8PathBuf]) -> Result<()>;
}

/// Compiler that shells out to the TypeScript compiler.
///
/// Emits ES2015 modules plus declaration files next to the sources, which is
/// what remains after the pipeline prunes the generated `.ts` files.
#[derive(Debug, Clone)]
pub struct TypeScriptCompiler {
    command: String,
}

impl TypeScriptCompiler {
    pub fn new() -> Self {
        Self::with_command("tsc")
    }

    /// Use a custom compiler executable, e.g. a workspace-local tsc wrapper.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Fixed flag set passed to the compiler ahead of the file list.
    fn compile_args(&self) -> [&'static str; 6] {
        [
            "--target",
            "es2015",
            "--module",
            "es2015",
            "--declaration",
            "--sourceMap",
        ]
    }
}

impl Default for TypeScriptCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceCompiler for TypeScriptCompiler {
    fn compile(&self, paths: &[Utf8PathBuf]) -> Result<()> {
        if paths.is_empty() {
            tracing::debug!("no generated sources to compile");
            return Ok(());
        }

        tracing::info!("compiling {} generated sources with {}", paths.len(), self.command);

        let status = Command::new(&self.command)
            .args(self.compile_args())
            .args(paths.iter().map(|path| path.as_str()))
            .status()
            .map_err(|source| CompileError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CompileError::Failed {
                command: self.command.clone(),
                code: status.code().unwrap_or(-1),
            }
            .into());
        }

        Ok(())
    }
}
