// file: src/workspace/restructurer.rs
// version: 1.1.0
// guid: 7a2d8e49-1f63-4cd0-be87-5c9e6d1f3a02

//! Legacy workspace migration
//!
//! Moves a workspace from the per-stage script era to the consolidated
//! pipeline layout: stale numbered scripts are deleted, the topic map is
//! archived in favor of the chapter map, the rotated-key credential template
//! is installed, and the old bootstrap shell script can be removed.
//!
//! The whole pass is fail-fast. The first failing step aborts the run and the
//! process exits non-zero, so a half-migrated workspace is always visible.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::layout::{
    CHAPTER_MAP_PATH, ENV_FILE, TOPIC_MAP_BACKUP_PATH, TOPIC_MAP_PATH,
};
use crate::config::{templates, WorkspaceLayout};
use crate::steps::{
    failure_result, skipped_result, success_result, FailureMode, RunReport, ScaffoldStep,
    StepContext, StepResult, StepRunner,
};
use crate::workspace::scaffolder::CreateDirectoriesStep;
use crate::workspace::{fsops, WriteTemplateStep};
use crate::Result;

/// What to do with the legacy bootstrap script
///
/// The interactive prompt is resolved in the CLI layer before the plan runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyBootstrapAction {
    /// Delete the legacy bootstrap script if present
    Remove,

    /// Leave the legacy bootstrap script in place
    Keep,
}

/// Options for the restructuring operation
#[derive(Debug, Clone)]
pub struct RestructureOptions {
    /// Workspace root to migrate
    pub root: PathBuf,

    /// Log intended actions without touching anything
    pub dry_run: bool,

    /// Decision on the legacy bootstrap script
    pub legacy_bootstrap: LegacyBootstrapAction,
}

/// Migrates a legacy workspace to the consolidated layout
pub struct WorkspaceRestructurer {
    layout: WorkspaceLayout,
    options: RestructureOptions,
}

impl WorkspaceRestructurer {
    /// Create a restructurer with a custom layout
    pub fn new(layout: WorkspaceLayout, options: RestructureOptions) -> Self {
        Self { layout, options }
    }

    /// Create a restructurer with the built-in layout
    pub fn with_default_layout(options: RestructureOptions) -> Self {
        Self::new(WorkspaceLayout::default(), options)
    }

    /// Run the migration and return the per-step report
    pub async fn restructure(&self) -> Result<RunReport> {
        self.layout.validate()?;

        if !self.options.root.is_dir() {
            return Err(crate::ScaffoldError::validation(format!(
                "workspace root {} does not exist",
                self.options.root.display()
            )));
        }

        let runner = StepRunner::new(FailureMode::FailFast);
        let report = runner
            .run(&self.options.root, self.options.dry_run, &self.plan())
            .await;

        Ok(report)
    }

    fn plan(&self) -> Vec<Box<dyn ScaffoldStep>> {
        vec![
            Box::new(RemoveStaleScriptsStep {
                scripts: self.layout.legacy_scripts.clone(),
            }),
            Box::new(ArchiveTopicMapStep),
            Box::new(WriteTemplateStep::overwriting(
                "write-chapter-map",
                CHAPTER_MAP_PATH,
                templates::chapter_map_csv(),
            )),
            Box::new(CreateDirectoriesStep {
                directories: vec!["data/processed".to_string()],
            }),
            Box::new(WriteTemplateStep::new(
                "write-env-template",
                ENV_FILE,
                templates::ENV_ROTATED,
            )),
            Box::new(RemoveLegacyBootstrapStep {
                script: self.layout.legacy_bootstrap.clone(),
                action: self.options.legacy_bootstrap,
            }),
        ]
    }
}

/// Step that deletes the stale per-stage pipeline scripts
struct RemoveStaleScriptsStep {
    scripts: Vec<String>,
}

#[async_trait]
impl ScaffoldStep for RemoveStaleScriptsStep {
    fn name(&self) -> &str {
        "remove-stale-scripts"
    }

    fn description(&self) -> &str {
        "Delete the stale per-stage pipeline scripts"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        if context.dry_run {
            let present = self
                .scripts
                .iter()
                .filter(|s| context.root.join(s.as_str()).exists())
                .count();
            return success_result(
                format!("DRY RUN: would delete {} stale scripts", present),
                start.elapsed(),
            );
        }

        let mut removed = 0;
        for script in &self.scripts {
            match fsops::remove_if_present(&context.root.join(script)).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => {
                    return failure_result(
                        format!("failed to delete {}", script),
                        e.to_string(),
                        start.elapsed(),
                    )
                }
            }
        }

        success_result(format!("deleted {} stale scripts", removed), start.elapsed())
    }
}

/// Step that archives the legacy topic map
///
/// A workspace without `config/topic_map.csv` has either never been
/// scaffolded or was already migrated; both abort the run here.
struct ArchiveTopicMapStep;

#[async_trait]
impl ScaffoldStep for ArchiveTopicMapStep {
    fn name(&self) -> &str {
        "archive-topic-map"
    }

    fn description(&self) -> &str {
        "Archive config/topic_map.csv to config/topic_map.csv.bak"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();
        let from = context.root.join(TOPIC_MAP_PATH);
        let to = context.root.join(TOPIC_MAP_BACKUP_PATH);

        if !from.exists() {
            return failure_result(
                "cannot archive topic map",
                format!("{} not found", TOPIC_MAP_PATH),
                start.elapsed(),
            );
        }

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would archive {} to {}", TOPIC_MAP_PATH, TOPIC_MAP_BACKUP_PATH),
                start.elapsed(),
            );
        }

        match fsops::archive_file(&from, &to).await {
            Ok(()) => success_result(
                format!("archived {} to {}", TOPIC_MAP_PATH, TOPIC_MAP_BACKUP_PATH),
                start.elapsed(),
            ),
            Err(e) => failure_result("cannot archive topic map", e.to_string(), start.elapsed()),
        }
    }
}

/// Step that removes the legacy bootstrap shell script
struct RemoveLegacyBootstrapStep {
    script: String,
    action: LegacyBootstrapAction,
}

#[async_trait]
impl ScaffoldStep for RemoveLegacyBootstrapStep {
    fn name(&self) -> &str {
        "remove-legacy-bootstrap"
    }

    fn description(&self) -> &str {
        "Delete the legacy bootstrap script"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();
        let path = context.root.join(&self.script);

        if self.action == LegacyBootstrapAction::Keep {
            return skipped_result(format!("{} kept", self.script));
        }

        if !path.exists() {
            return skipped_result(format!("{} not present", self.script));
        }

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would delete {}", self.script),
                start.elapsed(),
            );
        }

        match fsops::remove_if_present(&path).await {
            Ok(_) => success_result(format!("deleted {}", self.script), start.elapsed()),
            Err(e) => failure_result(
                format!("failed to delete {}", self.script),
                e.to_string(),
                start.elapsed(),
            ),
        }
    }
}
