// file: src/config/layout.rs
// version: 1.0.0
// guid: b5d82f09-7c31-4a64-8e92-0d4f6a1c3e78

//! Workspace layout model
//!
//! Describes what a scaffolded pipeline workspace contains: the directory
//! tree, the empty placeholder files the bootstrap touches, and the legacy
//! artifacts the restructuring pass recognizes.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::Result;

/// Relative path of the legacy topic map within a workspace
pub const TOPIC_MAP_PATH: &str = "config/topic_map.csv";

/// Relative path the topic map is archived to during restructuring
pub const TOPIC_MAP_BACKUP_PATH: &str = "config/topic_map.csv.bak";

/// Relative path of the chapter map written during restructuring
pub const CHAPTER_MAP_PATH: &str = "config/chapter_map.csv";

/// Relative path of the credential template
pub const ENV_FILE: &str = ".env";

/// Relative path of the git ignore file
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Relative path of the Python dependency manifest
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Relative path of the Python virtual environment
pub const VENV_DIR: &str = "venv";

/// Expected layout of a question bank pipeline workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceLayout {
    /// Directories the bootstrap creates
    pub directories: Vec<String>,

    /// Empty placeholder files the bootstrap touches
    pub placeholders: Vec<String>,

    /// Stale per-stage scripts removed during restructuring
    #[serde(default)]
    pub legacy_scripts: Vec<String>,

    /// Legacy bootstrap script the restructuring pass offers to delete
    #[serde(default = "default_legacy_bootstrap")]
    pub legacy_bootstrap: String,
}

fn default_legacy_bootstrap() -> String {
    "setup_pipeline.sh".to_string()
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            directories: vec![
                "data/raw_jee_materials".to_string(),
                "data/processed".to_string(),
                "scripts".to_string(),
                "output".to_string(),
                "config".to_string(),
                "templates".to_string(),
            ],
            placeholders: vec![
                "app.py".to_string(),
                "templates/index.html".to_string(),
                "templates/validate.html".to_string(),
                "scripts/run_pipeline.py".to_string(),
                "scripts/utils.py".to_string(),
                TOPIC_MAP_PATH.to_string(),
            ],
            legacy_scripts: vec![
                "scripts/01_scrape_and_parse.py".to_string(),
                "scripts/02_transform_questions.py".to_string(),
                "scripts/03_check_duplicates.py".to_string(),
                "scripts/04_validate_questions.py".to_string(),
                "scripts/05_generate_pdf.py".to_string(),
                "scripts/06_export_to_csv.py".to_string(),
                "scripts/07_extract_question_pages.py".to_string(),
                "scripts/emergency_approve_all.py".to_string(),
            ],
            legacy_bootstrap: default_legacy_bootstrap(),
        }
    }
}

impl WorkspaceLayout {
    /// Validate the layout definition
    ///
    /// Every entry must be a relative path confined to the workspace root.
    /// The restructuring pass deletes and renames files by these paths, so an
    /// absolute path or a `..` component is rejected outright.
    pub fn validate(&self) -> Result<()> {
        if self.directories.is_empty() {
            return Err(crate::ScaffoldError::validation(
                "layout defines no directories",
            ));
        }

        let all_paths = self
            .directories
            .iter()
            .chain(self.placeholders.iter())
            .chain(self.legacy_scripts.iter())
            .chain(std::iter::once(&self.legacy_bootstrap));

        for path in all_paths {
            if path.trim().is_empty() {
                return Err(crate::ScaffoldError::validation("layout contains an empty path"));
            }
            Self::validate_relative(path)?;
        }

        Ok(())
    }

    fn validate_relative(path: &str) -> Result<()> {
        let p = Path::new(path);
        if p.is_absolute() {
            return Err(crate::ScaffoldError::validation(format!(
                "layout path must be relative: {}",
                path
            )));
        }
        if p.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(crate::ScaffoldError::validation(format!(
                "layout path must not contain '..': {}",
                path
            )));
        }
        Ok(())
    }

    /// All workspace entries the status report checks, in display order
    pub fn expected_entries(&self) -> Vec<LayoutEntry> {
        let mut entries: Vec<LayoutEntry> = self
            .directories
            .iter()
            .map(|d| LayoutEntry::directory(d.clone()))
            .collect();
        entries.extend(self.placeholders.iter().map(|f| LayoutEntry::file(f.clone())));
        entries
    }
}

/// A single expected workspace entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Relative path within the workspace
    pub path: String,

    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl LayoutEntry {
    fn directory(path: String) -> Self {
        Self { path, is_dir: true }
    }

    fn file(path: String) -> Self {
        Self { path, is_dir: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = WorkspaceLayout::default();
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_default_layout_contents() {
        let layout = WorkspaceLayout::default();
        assert!(layout.directories.contains(&"data/raw_jee_materials".to_string()));
        assert!(layout.directories.contains(&"data/processed".to_string()));
        assert!(layout.placeholders.contains(&TOPIC_MAP_PATH.to_string()));
        assert_eq!(layout.legacy_bootstrap, "setup_pipeline.sh");
        assert_eq!(layout.legacy_scripts.len(), 8);
    }

    #[test]
    fn test_absolute_path_rejected() {
        let mut layout = WorkspaceLayout::default();
        layout.directories.push("/etc".to_string());
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let mut layout = WorkspaceLayout::default();
        layout.legacy_scripts.push("../outside.py".to_string());
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_empty_directories_rejected() {
        let layout = WorkspaceLayout {
            directories: vec![],
            ..WorkspaceLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_expected_entries_order() {
        let layout = WorkspaceLayout::default();
        let entries = layout.expected_entries();
        assert_eq!(entries.len(), layout.directories.len() + layout.placeholders.len());
        assert!(entries[0].is_dir);
        assert!(!entries[entries.len() - 1].is_dir);
    }
}
