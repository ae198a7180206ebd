// file: tests/integration_test.rs
// version: 1.0.0
// guid: 3a8d4e05-7fc9-42d6-be43-1c5e2d7f9a68

//! Integration tests for the question bank scaffolding agent

use std::path::Path;
use tempfile::TempDir;
use qbank_scaffold::{
    config::{LayoutLoader, WorkspaceLayout},
    workspace::{
        BootstrapOptions, LegacyBootstrapAction, RestructureOptions, WorkspaceInspector,
        WorkspaceRestructurer, WorkspaceScaffolder,
    },
    Result,
};

fn bootstrap_options(root: &Path) -> BootstrapOptions {
    BootstrapOptions {
        root: root.to_path_buf(),
        dry_run: false,
        skip_env_setup: true,
        python: None,
    }
}

fn restructure_options(root: &Path) -> RestructureOptions {
    RestructureOptions {
        root: root.to_path_buf(),
        dry_run: false,
        legacy_bootstrap: LegacyBootstrapAction::Remove,
    }
}

#[tokio::test]
async fn test_full_workspace_lifecycle() -> Result<()> {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // Fresh directory: inspector reports everything missing
    let inspector = WorkspaceInspector::with_default_layout();
    let report = inspector.inspect(root)?;
    assert!(!report.complete);

    // Bootstrap the workspace
    let scaffolder = WorkspaceScaffolder::with_default_layout(bootstrap_options(root));
    let run = scaffolder.bootstrap().await?;
    assert!(run.succeeded());

    let report = inspector.inspect(root)?;
    assert!(report.complete);
    assert!(report.legacy_artifacts.is_empty());

    // Simulate the legacy era: stale stage scripts and the old bootstrap
    std::fs::write(root.join("scripts/01_scrape_and_parse.py"), "# stage 1").unwrap();
    std::fs::write(root.join("scripts/02_transform_questions.py"), "# stage 2").unwrap();
    std::fs::write(root.join("setup_pipeline.sh"), "#!/bin/bash\n").unwrap();

    let report = inspector.inspect(root)?;
    assert_eq!(report.legacy_artifacts.len(), 3);

    // Restructure the workspace
    let restructurer = WorkspaceRestructurer::with_default_layout(restructure_options(root));
    let run = restructurer.restructure().await?;
    assert!(run.succeeded());

    // Legacy artifacts are gone, the chapter map era is in place
    let report = inspector.inspect(root)?;
    assert!(report.legacy_artifacts.is_empty());
    assert!(!root.join("config/topic_map.csv").exists());
    assert!(root.join("config/topic_map.csv.bak").is_file());
    assert!(root.join("config/chapter_map.csv").is_file());

    // The archived topic map still satisfies the layout check
    assert!(report.complete);

    Ok(())
}

#[tokio::test]
async fn test_restructure_requires_scaffolded_workspace() -> Result<()> {
    let temp = TempDir::new().unwrap();

    // An existing but never-scaffolded directory aborts at the archive step
    let restructurer =
        WorkspaceRestructurer::with_default_layout(restructure_options(temp.path()));
    let run = restructurer.restructure().await?;

    assert!(run.aborted);
    assert!(!run.succeeded());
    assert!(!temp.path().join("config/topic_map.csv.bak").exists());

    Ok(())
}

#[tokio::test]
async fn test_chapter_map_content_exact() -> Result<()> {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    WorkspaceScaffolder::with_default_layout(bootstrap_options(root))
        .bootstrap()
        .await?;
    WorkspaceRestructurer::with_default_layout(restructure_options(root))
        .restructure()
        .await?;

    let content = std::fs::read_to_string(root.join("config/chapter_map.csv")).unwrap();
    assert_eq!(
        content,
        "Subject,PDF_File,Chapter,Start_Page,End_Page\n\
         # Example: Physics,hc_verma_vol1.pdf,Kinematics,45,62\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_env_survives_bootstrap_and_restructure() -> Result<()> {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    WorkspaceScaffolder::with_default_layout(bootstrap_options(root))
        .bootstrap()
        .await?;

    // The user fills in real credentials
    std::fs::write(root.join(".env"), "GEMINI_API_KEY_1=sk-real\n").unwrap();

    WorkspaceScaffolder::with_default_layout(bootstrap_options(root))
        .bootstrap()
        .await?;
    WorkspaceRestructurer::with_default_layout(restructure_options(root))
        .restructure()
        .await?;

    assert_eq!(
        std::fs::read_to_string(root.join(".env")).unwrap(),
        "GEMINI_API_KEY_1=sk-real\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_custom_layout_manifest_drives_bootstrap() -> Result<()> {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("layout.yaml");
    std::fs::write(
        &manifest,
        r#"
directories:
  - data/raw
  - notes
placeholders:
  - notes/README.md
"#,
    )
    .unwrap();

    let layout = LayoutLoader::new().load_layout(&manifest)?;
    let root = temp.path().join("workspace");
    let scaffolder = WorkspaceScaffolder::new(
        layout,
        BootstrapOptions {
            root: root.clone(),
            dry_run: false,
            skip_env_setup: true,
            python: None,
        },
    );

    let run = scaffolder.bootstrap().await?;
    assert!(run.succeeded());

    assert!(root.join("data/raw").is_dir());
    assert!(root.join("notes/README.md").is_file());
    // Built-in layout directories are not created for a custom manifest
    assert!(!root.join("output").exists());

    Ok(())
}

#[tokio::test]
async fn test_default_layout_matches_pipeline_expectations() {
    // The review app and pipeline read these paths; the layout must agree.
    let layout = WorkspaceLayout::default();
    assert!(layout.directories.contains(&"data/raw_jee_materials".to_string()));
    assert!(layout.directories.contains(&"output".to_string()));
    assert!(layout.placeholders.contains(&"config/topic_map.csv".to_string()));
    assert!(layout.placeholders.contains(&"templates/index.html".to_string()));
    assert!(layout.placeholders.contains(&"templates/validate.html".to_string()));
}
