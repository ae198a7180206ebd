// file: src/workspace/scaffolder.rs
// version: 1.2.0
// guid: 6f1c7d38-0e52-4bc9-ad76-4b8d5c0e2f91

//! Workspace bootstrap
//!
//! Creates the directory tree and placeholder files of a fresh pipeline
//! workspace, writes the credential and dependency templates, then prepares
//! the development environment (git repository, Python virtual environment,
//! installed requirements).
//!
//! The environment phase runs in keep-going mode: a missing tool or a failed
//! `pip install` is recorded and reported, but the remaining steps still run
//! and the workspace files are left in place. The legacy shell bootstrap
//! behaved the same way, minus the reporting.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::layout::{ENV_FILE, GITIGNORE_FILE, REQUIREMENTS_FILE};
use crate::config::{templates, WorkspaceLayout};
use crate::steps::{
    failure_result, skipped_result, success_result, FailureMode, RunReport, ScaffoldStep,
    StepContext, StepResult, StepRunner,
};
use crate::utils::{GitUtils, PythonUtils, SystemUtils};
use crate::workspace::{fsops, WriteTemplateStep};
use crate::Result;

/// Options for the bootstrap operation
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Workspace root to scaffold
    pub root: PathBuf,

    /// Log intended actions without touching anything
    pub dry_run: bool,

    /// Skip the git/venv/pip environment phase
    pub skip_env_setup: bool,

    /// Explicit Python interpreter for the virtual environment
    pub python: Option<String>,
}

/// Bootstraps a question bank pipeline workspace
pub struct WorkspaceScaffolder {
    layout: WorkspaceLayout,
    options: BootstrapOptions,
}

impl WorkspaceScaffolder {
    /// Create a scaffolder with a custom layout
    pub fn new(layout: WorkspaceLayout, options: BootstrapOptions) -> Self {
        Self { layout, options }
    }

    /// Create a scaffolder with the built-in layout
    pub fn with_default_layout(options: BootstrapOptions) -> Self {
        Self::new(WorkspaceLayout::default(), options)
    }

    /// Run the bootstrap and return the per-step report
    pub async fn bootstrap(&self) -> Result<RunReport> {
        self.layout.validate()?;

        if SystemUtils::is_root() {
            warn!("Running as root: the virtual environment will be root-owned");
        }

        if !self.options.dry_run {
            fsops::ensure_directory(&self.options.root).await?;
        }

        let filesystem_runner = StepRunner::new(FailureMode::FailFast);
        let mut report = filesystem_runner
            .run(&self.options.root, self.options.dry_run, &self.filesystem_plan())
            .await;

        if report.aborted {
            return Ok(report);
        }

        if self.options.skip_env_setup {
            info!("Skipping environment setup as requested");
            return Ok(report);
        }

        let environment_runner = StepRunner::new(FailureMode::KeepGoing);
        let environment_report = environment_runner
            .run(&self.options.root, self.options.dry_run, &self.environment_plan())
            .await;

        report.steps.extend(environment_report.steps);
        report.aborted |= environment_report.aborted;

        Ok(report)
    }

    /// Directory, placeholder, and template steps (fail-fast)
    fn filesystem_plan(&self) -> Vec<Box<dyn ScaffoldStep>> {
        vec![
            Box::new(CreateDirectoriesStep {
                directories: self.layout.directories.clone(),
            }),
            Box::new(TouchPlaceholdersStep {
                placeholders: self.layout.placeholders.clone(),
            }),
            Box::new(WriteTemplateStep::new(
                "write-gitignore",
                GITIGNORE_FILE,
                templates::GITIGNORE,
            )),
            Box::new(WriteTemplateStep::new(
                "write-env-template",
                ENV_FILE,
                templates::ENV_BOOTSTRAP,
            )),
            Box::new(WriteTemplateStep::new(
                "write-requirements",
                REQUIREMENTS_FILE,
                templates::REQUIREMENTS,
            )),
        ]
    }

    /// External-tool steps (keep-going)
    fn environment_plan(&self) -> Vec<Box<dyn ScaffoldStep>> {
        vec![
            Box::new(GitInitStep),
            Box::new(CreateVenvStep {
                python: self.options.python.clone(),
            }),
            Box::new(InstallRequirementsStep),
        ]
    }
}

/// Step that creates workspace directories
pub(crate) struct CreateDirectoriesStep {
    pub(crate) directories: Vec<String>,
}

#[async_trait]
impl ScaffoldStep for CreateDirectoriesStep {
    fn name(&self) -> &str {
        "create-directories"
    }

    fn description(&self) -> &str {
        "Create the workspace directory tree"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would create {} directories", self.directories.len()),
                start.elapsed(),
            );
        }

        for dir in &self.directories {
            if let Err(e) = fsops::ensure_directory(&context.root.join(dir)).await {
                return failure_result(
                    format!("failed to create {}", dir),
                    e.to_string(),
                    start.elapsed(),
                );
            }
        }

        success_result(
            format!("{} directories in place", self.directories.len()),
            start.elapsed(),
        )
    }
}

/// Step that touches the empty placeholder files
struct TouchPlaceholdersStep {
    placeholders: Vec<String>,
}

#[async_trait]
impl ScaffoldStep for TouchPlaceholdersStep {
    fn name(&self) -> &str {
        "touch-placeholders"
    }

    fn description(&self) -> &str {
        "Touch empty placeholder files"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would touch {} placeholder files", self.placeholders.len()),
                start.elapsed(),
            );
        }

        let mut created = 0;
        for file in &self.placeholders {
            match fsops::touch_file(&context.root.join(file)).await {
                Ok(true) => created += 1,
                Ok(false) => {}
                Err(e) => {
                    return failure_result(
                        format!("failed to touch {}", file),
                        e.to_string(),
                        start.elapsed(),
                    )
                }
            }
        }

        success_result(
            format!(
                "created {} placeholder files ({} already present)",
                created,
                self.placeholders.len() - created
            ),
            start.elapsed(),
        )
    }
}

/// Step that initializes the git repository
struct GitInitStep;

#[async_trait]
impl ScaffoldStep for GitInitStep {
    fn name(&self) -> &str {
        "git-init"
    }

    fn description(&self) -> &str {
        "Initialize a git repository"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        if GitUtils::is_repository(context.root) {
            warn!("{} is already a git repository", context.root.display());
            return skipped_result("already a git repository");
        }

        if context.dry_run {
            return success_result("DRY RUN: would run git init", start.elapsed());
        }

        match GitUtils::init_repository(context.root).await {
            Ok(()) => success_result("initialized empty git repository", start.elapsed()),
            Err(e) => failure_result("git init failed", e.to_string(), start.elapsed()),
        }
    }
}

/// Step that creates the Python virtual environment
struct CreateVenvStep {
    python: Option<String>,
}

#[async_trait]
impl ScaffoldStep for CreateVenvStep {
    fn name(&self) -> &str {
        "create-venv"
    }

    fn description(&self) -> &str {
        "Create the Python virtual environment"
    }

    async fn should_skip(&self, context: &StepContext<'_>) -> bool {
        PythonUtils::venv_exists(context.root)
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        let interpreter = match PythonUtils::resolve_interpreter(self.python.as_deref()) {
            Ok(path) => path,
            Err(e) => {
                return failure_result("no usable Python interpreter", e.to_string(), start.elapsed())
            }
        };

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would create venv with {}", interpreter.display()),
                start.elapsed(),
            );
        }

        match PythonUtils::create_venv(context.root, &interpreter).await {
            Ok(()) => success_result(
                format!("virtual environment created with {}", interpreter.display()),
                start.elapsed(),
            ),
            Err(e) => failure_result("venv creation failed", e.to_string(), start.elapsed()),
        }
    }
}

/// Step that installs requirements.txt into the virtual environment
struct InstallRequirementsStep;

#[async_trait]
impl ScaffoldStep for InstallRequirementsStep {
    fn name(&self) -> &str {
        "install-requirements"
    }

    fn description(&self) -> &str {
        "Install Python dependencies into the virtual environment"
    }

    async fn execute(&self, context: &StepContext<'_>) -> StepResult {
        let start = Instant::now();

        if context.dry_run {
            return success_result(
                format!("DRY RUN: would run pip install -r {}", REQUIREMENTS_FILE),
                start.elapsed(),
            );
        }

        match PythonUtils::install_requirements(context.root).await {
            Ok(()) => success_result("requirements installed", start.elapsed()),
            Err(e) => failure_result("pip install failed", e.to_string(), start.elapsed()),
        }
    }
}
