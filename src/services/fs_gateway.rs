use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tokio::fs;

/// Extension given to every generated source file.
const GENERATED_EXTENSION: &str = "ts";

/// Errors that can occur while resolving generated paths
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),

    #[error("Resolved path is not valid UTF-8: {0:?}")]
    NonUtf8Path(std::path::PathBuf),
}

/// Filesystem operations for the conversion pipeline.
///
/// All writes land as `dir/base.ts`; the extension is fixed for the whole
/// tool. Deletions tolerate missing targets so a clean on a fresh output
/// directory is a no-op rather than an error.
#[derive(Debug, Clone, Default)]
pub struct FilesystemGateway;

impl FilesystemGateway {
    pub fn new() -> Self {
        Self
    }

    /// Recursively delete a folder. Missing folders are fine.
    pub async fn delete_folder(&self, path: &Utf8Path) -> Result<()> {
        match fs::remove_dir_all(path).await {
            Ok(()) => {
                tracing::debug!("deleted folder: {path}");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete folder: {path}")),
        }
    }

    /// Persist `content` as `dir/base_name.ts`, creating `dir` as needed.
    ///
    /// Returns the path that was written.
    pub async fn write_file(
        &self,
        dir: &Utf8Path,
        base_name: &str,
        content: &str,
    ) -> Result<Utf8PathBuf> {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create output directory: {dir}"))?;

        let path = dir.join(format!("{base_name}.{GENERATED_EXTENSION}"));
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write generated file: {path}"))?;

        tracing::info!("write file: {path}");
        Ok(path)
    }

    /// Resolve glob patterns to a sorted list of existing paths.
    pub fn resolve_paths(&self, patterns: &[String]) -> Result<Vec<Utf8PathBuf>> {
        let mut paths = Vec::new();

        for pattern in patterns {
            let matches = glob::glob(pattern)
                .map_err(|e| GatewayError::InvalidPattern(pattern.clone(), e))?;

            for entry in matches {
                let path =
                    entry.with_context(|| format!("Failed to read glob entry for '{pattern}'"))?;
                let path = Utf8PathBuf::from_path_buf(path).map_err(GatewayError::NonUtf8Path)?;
                paths.push(path);
            }
        }

        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    /// Delete every path in the set. Fails on the first error.
    pub async fn delete_files(&self, paths: &[Utf8PathBuf]) -> Result<()> {
        for path in paths {
            fs::remove_file(path)
                .await
                .with_context(|| format!("Failed to delete generated file: {path}"))?;
            tracing::debug!("deleted file: {path}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    #[tokio::test]
    async fn test_write_file_creates_directory_and_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let gateway = FilesystemGateway::new();

        let path = gateway
            .write_file(&root.join("icons"), "md-home.icon", "content")
            .await
            .unwrap();

        assert_eq!(path, root.join("icons/md-home.icon.ts"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[tokio::test]
    async fn test_delete_missing_folder_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let gateway = FilesystemGateway::new();

        gateway.delete_folder(&root.join("missing")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_folder_removes_contents() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let gateway = FilesystemGateway::new();

        gateway
            .write_file(&root.join("icons"), "a", "x")
            .await
            .unwrap();
        gateway.delete_folder(&root.join("icons")).await.unwrap();

        assert!(!root.join("icons").exists());
    }

    #[tokio::test]
    async fn test_resolve_paths_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let gateway = FilesystemGateway::new();

        gateway.write_file(&root, "b", "x").await.unwrap();
        gateway.write_file(&root, "a", "x").await.unwrap();

        let paths = gateway
            .resolve_paths(&[format!("{root}/*.ts")])
            .unwrap();

        assert_eq!(paths, vec![root.join("a.ts"), root.join("b.ts")]);
    }

    #[tokio::test]
    async fn test_delete_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let gateway = FilesystemGateway::new();

        let path = gateway.write_file(&root, "a", "x").await.unwrap();
        gateway.delete_files(&[path.clone()]).await.unwrap();

        assert!(!path.exists());
    }
}
