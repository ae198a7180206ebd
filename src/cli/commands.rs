// file: src/cli/commands.rs
// version: 1.3.0
// guid: 1e6b2c83-5da7-40b4-fc21-9a3c0b5d7e46

//! Command implementations for the CLI

use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::{
    config::{templates, LayoutLoader, WorkspaceLayout},
    steps::{RunReport, StepStatus},
    utils::SystemUtils,
    workspace::{
        BootstrapOptions, LegacyBootstrapAction, RestructureOptions, WorkspaceInspector,
        WorkspaceRestructurer, WorkspaceScaffolder,
    },
    Result,
};

/// Bootstrap a fresh pipeline workspace
pub async fn init_command(
    root: &str,
    layout_path: Option<String>,
    dry_run: bool,
    skip_env_setup: bool,
    python: Option<String>,
) -> Result<()> {
    let root = resolve_root(root);
    let layout = load_layout(layout_path)?;

    info!("Bootstrapping pipeline workspace in {}", root.display());

    let scaffolder = WorkspaceScaffolder::new(
        layout,
        BootstrapOptions {
            root,
            dry_run,
            skip_env_setup,
            python,
        },
    );

    let report = scaffolder.bootstrap().await?;
    print_run_summary(&report);

    if !report.succeeded() {
        return Err(crate::ScaffoldError::workspace(format!(
            "bootstrap finished with {} failed step(s): {}",
            report.failed_steps().len(),
            report.failed_steps().join(", ")
        )));
    }

    if !dry_run {
        println!();
        println!("{}", templates::NEXT_STEPS_BOOTSTRAP);
    }

    Ok(())
}

/// Migrate a legacy workspace to the consolidated layout
pub async fn restructure_command(
    root: &str,
    layout_path: Option<String>,
    dry_run: bool,
    yes: bool,
    keep_legacy_script: bool,
) -> Result<()> {
    let root = resolve_root(root);
    let layout = load_layout(layout_path)?;

    info!("Restructuring workspace in {}", root.display());

    let legacy_bootstrap =
        resolve_legacy_bootstrap_action(&root, &layout, yes, keep_legacy_script)?;

    let restructurer = WorkspaceRestructurer::new(
        layout,
        RestructureOptions {
            root,
            dry_run,
            legacy_bootstrap,
        },
    );

    let report = restructurer.restructure().await?;
    print_run_summary(&report);

    if !report.succeeded() {
        return Err(crate::ScaffoldError::workspace(format!(
            "restructuring aborted: {}",
            report.failed_steps().join(", ")
        )));
    }

    if !dry_run {
        println!();
        println!("{}", templates::NEXT_STEPS_RESTRUCTURE);
    }

    Ok(())
}

/// Report workspace state against the expected layout
pub async fn status_command(root: &str, layout_path: Option<String>, json: bool) -> Result<()> {
    let root = resolve_root(root);
    let layout = load_layout(layout_path)?;

    let inspector = WorkspaceInspector::new(layout);
    let report = inspector.inspect(&root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Workspace status for {}", report.root);
    for check in &report.checks {
        let label = if check.is_dir {
            format!("{}/", check.path)
        } else {
            check.path.clone()
        };
        if check.present {
            println!("  {} {}", "✓".green(), label);
        } else {
            println!("  {} {} {}", "✗".red(), label, "(missing)".red());
        }
    }

    if !report.legacy_artifacts.is_empty() {
        println!();
        println!("Legacy artifacts (run `qbank-scaffold restructure`):");
        for artifact in &report.legacy_artifacts {
            println!("  {} {}", "!".yellow(), artifact);
        }
    }

    println!();
    if report.complete {
        println!("{}", "Workspace layout is complete".green());
    } else {
        println!(
            "{}",
            format!("{} of {} expected entries missing", report.missing, report.checks.len()).red()
        );
    }

    Ok(())
}

/// Check external tool prerequisites
pub async fn check_prereqs_command() -> Result<()> {
    info!("Checking prerequisites for workspace scaffolding");

    let git_ok = SystemUtils::command_exists("git");
    if git_ok {
        println!("  {} git", "✓".green());
    } else {
        println!("  {} git (bootstrap will skip repository init)", "✗".red());
    }

    let python = crate::utils::PythonUtils::resolve_interpreter(None);
    match python {
        Ok(path) => println!("  {} python ({})", "✓".green(), path.display()),
        Err(_) => println!(
            "  {} python (bootstrap cannot create the virtual environment)",
            "✗".red()
        ),
    }

    if SystemUtils::is_root() {
        warn!("Running as root: scaffolded files will be root-owned");
    }

    Ok(())
}

/// Expand and normalize the workspace root argument
fn resolve_root(root: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(root).into_owned())
}

/// Load the layout manifest, or fall back to the built-in layout
fn load_layout(layout_path: Option<String>) -> Result<WorkspaceLayout> {
    match layout_path {
        Some(path) => {
            let path = shellexpand::tilde(&path).into_owned();
            LayoutLoader::new().load_layout(path)
        }
        None => Ok(WorkspaceLayout::default()),
    }
}

/// Decide what happens to the legacy bootstrap script
///
/// Flags win over the prompt; the prompt only appears when the script is
/// actually present in the workspace.
fn resolve_legacy_bootstrap_action(
    root: &std::path::Path,
    layout: &WorkspaceLayout,
    yes: bool,
    keep_legacy_script: bool,
) -> Result<LegacyBootstrapAction> {
    if keep_legacy_script {
        return Ok(LegacyBootstrapAction::Keep);
    }
    if yes {
        return Ok(LegacyBootstrapAction::Remove);
    }
    if !root.join(&layout.legacy_bootstrap).is_file() {
        return Ok(LegacyBootstrapAction::Keep);
    }

    print!(
        "Delete the legacy bootstrap script '{}'? [y/N] ",
        layout.legacy_bootstrap
    );
    std::io::stdout().flush().map_err(crate::ScaffoldError::IoError)?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(crate::ScaffoldError::IoError)?;

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(LegacyBootstrapAction::Remove),
        _ => Ok(LegacyBootstrapAction::Keep),
    }
}

/// Print the per-step outcome of a run
fn print_run_summary(report: &RunReport) {
    println!();
    println!("Run summary ({}):", report.session_id);
    for step in &report.steps {
        let marker = match step.result.status {
            StepStatus::Completed => "✓".green(),
            StepStatus::Skipped => "-".yellow(),
            StepStatus::Failed => "✗".red(),
        };
        println!("  {} {}: {}", marker, step.name, step.result.message);
    }

    let completed = report.count(StepStatus::Completed);
    let skipped = report.count(StepStatus::Skipped);
    let failed = report.count(StepStatus::Failed);
    println!(
        "  {} completed, {} skipped, {} failed{}",
        completed,
        skipped,
        failed,
        if report.aborted { " (aborted)" } else { "" }
    );
}
