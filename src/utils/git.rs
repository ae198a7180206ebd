// file: src/utils/git.rs
// version: 1.0.0
// guid: 3c8f4a05-7b29-4e96-da43-1e5a2f7b9c68

//! Git repository initialization

use crate::utils::system::SystemUtils;
use crate::Result;
use std::path::Path;
use tracing::debug;

/// Git operations used by the bootstrap
pub struct GitUtils;

impl GitUtils {
    /// Check if the workspace root is already a git repository
    pub fn is_repository(root: &Path) -> bool {
        root.join(".git").exists()
    }

    /// Initialize a git repository at the workspace root
    pub async fn init_repository(root: &Path) -> Result<()> {
        debug!("Initializing git repository in {}", root.display());
        SystemUtils::run_command_checked("git", &["init"], root, "git init").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_repository_detects_git_dir() {
        let temp = TempDir::new().unwrap();
        assert!(!GitUtils::is_repository(temp.path()));

        std::fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(GitUtils::is_repository(temp.path()));
    }

    #[tokio::test]
    async fn test_init_repository() {
        if !SystemUtils::command_exists("git") {
            return;
        }

        let temp = TempDir::new().unwrap();
        GitUtils::init_repository(temp.path()).await.unwrap();
        assert!(GitUtils::is_repository(temp.path()));
    }
}
