// file: src/steps/mod.rs
// version: 1.0.0
// guid: 09c4f1a8-3d27-4b85-96e0-1f58b2c7d436

//! Scaffolding step execution
//!
//! Both workspace operations run as an ordered plan of named steps. The
//! bootstrap tolerates failures in its environment steps and keeps going,
//! matching the original bootstrap script which had no abort-on-error guard;
//! the restructuring pass aborts on the first failure, matching `set -e`.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Context passed to each scaffolding step
#[derive(Debug, Clone)]
pub struct StepContext<'a> {
    /// Current run session ID
    pub session_id: Uuid,

    /// Workspace root the step operates on
    pub root: &'a Path,

    /// Log intended actions without touching the filesystem
    pub dry_run: bool,

    /// Current step number (1-based)
    pub step_number: usize,

    /// Total number of steps
    pub total_steps: usize,
}

/// Result of executing a scaffolding step
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Status of the step execution
    pub status: StepStatus,

    /// Human-readable message describing the result
    pub message: String,

    /// Error message if the step failed
    pub error_message: Option<String>,

    /// Time taken to execute the step
    pub execution_time: Duration,
}

/// Status of a step execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step completed successfully
    Completed,

    /// Step failed
    Failed,

    /// Step was skipped (already done, or not applicable)
    Skipped,
}

/// Trait for scaffolding steps
#[async_trait]
pub trait ScaffoldStep: Send + Sync {
    /// Get the name of this step
    fn name(&self) -> &str;

    /// Get a description of what this step does
    fn description(&self) -> &str;

    /// Execute the step
    async fn execute(&self, context: &StepContext<'_>) -> StepResult;

    /// Check if this step should be skipped
    async fn should_skip(&self, _context: &StepContext<'_>) -> bool {
        false
    }
}

/// How the runner reacts to a failing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort the run on the first failure
    FailFast,

    /// Record the failure and run the remaining steps
    KeepGoing,
}

/// Helper for creating successful step results
pub fn success_result(message: impl Into<String>, execution_time: Duration) -> StepResult {
    StepResult {
        status: StepStatus::Completed,
        message: message.into(),
        error_message: None,
        execution_time,
    }
}

/// Helper for creating failed step results
pub fn failure_result(
    message: impl Into<String>,
    error: impl Into<String>,
    execution_time: Duration,
) -> StepResult {
    StepResult {
        status: StepStatus::Failed,
        message: message.into(),
        error_message: Some(error.into()),
        execution_time,
    }
}

/// Helper for creating skipped step results
pub fn skipped_result(reason: impl Into<String>) -> StepResult {
    StepResult {
        status: StepStatus::Skipped,
        message: format!("Step skipped: {}", reason.into()),
        error_message: None,
        execution_time: Duration::from_secs(0),
    }
}

/// Report for one executed step
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name
    pub name: String,

    /// Execution result
    pub result: StepResult,
}

/// Outcome of a full scaffolding run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Session ID of the run
    pub session_id: Uuid,

    /// Per-step results, in execution order
    pub steps: Vec<StepReport>,

    /// Whether the run was aborted before all steps executed
    pub aborted: bool,
}

impl RunReport {
    /// Whether every executed step succeeded or was skipped
    pub fn succeeded(&self) -> bool {
        !self.aborted && self.failed_steps().is_empty()
    }

    /// Names of the steps that failed
    pub fn failed_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.result.status == StepStatus::Failed)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Count of steps with the given status
    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.result.status == status).count()
    }
}

/// Executes a plan of scaffolding steps
pub struct StepRunner {
    mode: FailureMode,
}

impl StepRunner {
    /// Create a runner with the given failure mode
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }

    /// Execute the plan against a workspace root
    pub async fn run(
        &self,
        root: &Path,
        dry_run: bool,
        plan: &[Box<dyn ScaffoldStep>],
    ) -> RunReport {
        let session_id = Uuid::new_v4();
        let mut report = RunReport {
            session_id,
            steps: Vec::with_capacity(plan.len()),
            aborted: false,
        };

        info!(
            "Starting run {} ({} steps) in {}",
            session_id,
            plan.len(),
            root.display()
        );

        for (index, step) in plan.iter().enumerate() {
            let context = StepContext {
                session_id,
                root,
                dry_run,
                step_number: index + 1,
                total_steps: plan.len(),
            };

            info!(
                "[{}/{}] {}: {}",
                context.step_number,
                context.total_steps,
                step.name(),
                step.description()
            );

            let result = if step.should_skip(&context).await {
                skipped_result("not applicable")
            } else {
                step.execute(&context).await
            };

            match result.status {
                StepStatus::Completed => info!("{}: {}", step.name(), result.message),
                StepStatus::Skipped => info!("{}: {}", step.name(), result.message),
                StepStatus::Failed => {
                    let detail = result.error_message.as_deref().unwrap_or("unknown error");
                    match self.mode {
                        FailureMode::FailFast => {
                            error!("{}: {} ({})", step.name(), result.message, detail)
                        }
                        FailureMode::KeepGoing => {
                            warn!("{}: {} ({}) - continuing", step.name(), result.message, detail)
                        }
                    }
                }
            }

            let failed = result.status == StepStatus::Failed;
            report.steps.push(StepReport {
                name: step.name().to_string(),
                result,
            });

            if failed && self.mode == FailureMode::FailFast {
                report.aborted = true;
                error!(
                    "Aborting run {} after failed step '{}'",
                    session_id,
                    step.name()
                );
                break;
            }
        }

        report
    }
}
