// file: src/workspace/mod.rs
// version: 1.0.0
// guid: 5e0b6c27-9d41-4ab8-fc65-3a7c4b9d1e80

//! Workspace operations
//!
//! The scaffolder bootstraps a fresh pipeline workspace, the restructurer
//! migrates a legacy one to the current layout, and the inspector reports the
//! state of either.

pub mod inspector;
pub mod restructurer;
pub mod scaffolder;

pub use inspector::{CheckResult, WorkspaceInspector, WorkspaceReport};
pub use restructurer::{LegacyBootstrapAction, RestructureOptions, WorkspaceRestructurer};
pub use scaffolder::{BootstrapOptions, WorkspaceScaffolder};

use crate::steps::{
    failure_result, skipped_result, success_result, ScaffoldStep, StepContext, StepResult,
};
use async_trait::async_trait;
use std::time::Instant;

/// Step that writes one template file into the workspace
///
/// Used by both the bootstrap and the restructuring plans. Without
/// `overwrite`, an existing file is reported as skipped and left untouched;
/// the chapter map is the only template written unconditionally.
pub struct WriteTemplateStep {
    name: &'static str,
    description: String,
    relative_path: String,
    content: String,
    overwrite: bool,
}

impl WriteTemplateStep {
    /// Create a step that writes the file only when absent
    pub fn new(name: &'static str, relative_path: &str, content: impl Into<String>) -> Self {
        Self {
            name,
            description: format!("Write {} if absent", relative_path),
            relative_path: relative_path.to_string(),
            content: content.into(),
            overwrite: false,
        }
    }

    /// Create a step that replaces any existing file
    pub fn overwriting(name: &'static str, relative_path: &str, content: impl Into<String>) -> Self {
        Self {
            name,
            description: format!("Write {}", relative_path),
            relative_path: relative_path.to_string(),
            content: content.into(),
            overwrite: true,
        }
    }
}

#[async_trait]
impl ScaffoldStep for WriteTemplateStep {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();
        let path = context.root.join(&self.relative_path);

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would write {}", self.relative_path),
                start.elapsed(),
            );
        }

        if self.overwrite {
            match fsops::write_file(&path, &self.content).await {
                Ok(()) => success_result(format!("wrote {}", self.relative_path), start.elapsed()),
                Err(e) => failure_result(
                    format!("failed to write {}", self.relative_path),
                    e.to_string(),
                    start.elapsed(),
                ),
            }
        } else {
            match fsops::write_if_absent(&path, &self.content).await {
                Ok(true) => success_result(format!("wrote {}", self.relative_path), start.elapsed()),
                Ok(false) => skipped_result(format!("{} already exists", self.relative_path)),
                Err(e) => failure_result(
                    format!("failed to write {}", self.relative_path),
                    e.to_string(),
                    start.elapsed(),
                ),
            }
        }
    }
}

/// Filesystem primitives shared by the scaffolding steps
pub mod fsops {
    use crate::Result;
    use std::path::Path;
    use tokio::fs;
    use tracing::debug;

    /// Create a directory and any missing parents
    pub async fn ensure_directory(path: &Path) -> Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path).await.map_err(|e| {
                crate::ScaffoldError::workspace(format!(
                    "Failed to create directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            debug!("Created directory {}", path.display());
        }
        Ok(())
    }

    /// Create an empty file if it does not exist
    ///
    /// Returns `true` when the file was created. An existing file is left
    /// untouched whatever its content; the bootstrap must never truncate a
    /// placeholder the user has already filled in.
    pub async fn touch_file(path: &Path) -> Result<bool> {
        if let Some(parent) = path.parent() {
            ensure_directory(parent).await?;
        }

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
        {
            Ok(_) => {
                debug!("Touched {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(crate::ScaffoldError::workspace(format!(
                "Failed to touch {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Write a file only when it does not exist yet
    ///
    /// Returns `true` when the file was written.
    pub async fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        write_file(path, content).await?;
        Ok(true)
    }

    /// Write a file, replacing any existing content
    pub async fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            ensure_directory(parent).await?;
        }
        fs::write(path, content).await.map_err(|e| {
            crate::ScaffoldError::workspace(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Rename a file, refusing to clobber the destination
    pub async fn archive_file(from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(crate::ScaffoldError::workspace(format!(
                "{} not found",
                from.display()
            )));
        }
        if to.exists() {
            return Err(crate::ScaffoldError::workspace(format!(
                "archive target {} already exists",
                to.display()
            )));
        }
        fs::rename(from, to).await.map_err(|e| {
            crate::ScaffoldError::workspace(format!(
                "Failed to archive {} to {}: {}",
                from.display(),
                to.display(),
                e
            ))
        })?;
        debug!("Archived {} to {}", from.display(), to.display());
        Ok(())
    }

    /// Remove a file if it exists
    ///
    /// Returns `true` when a file was removed.
    pub async fn remove_if_present(path: &Path) -> Result<bool> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(crate::ScaffoldError::workspace(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fsops;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_touch_file_never_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.py");

        let created = fsops::touch_file(&path).await.unwrap();
        assert!(created);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        std::fs::write(&path, "print('hello')").unwrap();
        let created = fsops::touch_file(&path).await.unwrap();
        assert!(!created);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "print('hello')");
    }

    #[tokio::test]
    async fn test_write_if_absent_preserves_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");

        let written = fsops::write_if_absent(&path, "GEMINI_API_KEY=\n").await.unwrap();
        assert!(written);

        let written = fsops::write_if_absent(&path, "other\n").await.unwrap();
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "GEMINI_API_KEY=\n");
    }

    #[tokio::test]
    async fn test_archive_file_moves_source() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("topic_map.csv");
        let to = temp.path().join("topic_map.csv.bak");
        std::fs::write(&from, "legacy").unwrap();

        fsops::archive_file(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "legacy");
    }

    #[tokio::test]
    async fn test_archive_file_missing_source_errors() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("missing.csv");
        let to = temp.path().join("missing.csv.bak");

        let result = fsops::archive_file(&from, &to).await;
        assert!(result.is_err());
        assert!(!to.exists());
    }

    #[tokio::test]
    async fn test_archive_file_refuses_to_clobber() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("topic_map.csv");
        let to = temp.path().join("topic_map.csv.bak");
        std::fs::write(&from, "new").unwrap();
        std::fs::write(&to, "old backup").unwrap();

        let result = fsops::archive_file(&from, &to).await;
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "old backup");
    }

    #[tokio::test]
    async fn test_remove_if_present() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("01_scrape_and_parse.py");

        assert!(!fsops::remove_if_present(&path).await.unwrap());

        std::fs::write(&path, "stale").unwrap();
        assert!(fsops::remove_if_present(&path).await.unwrap());
        assert!(!path.exists());
    }
}
