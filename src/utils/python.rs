// file: src/utils/python.rs
// version: 1.1.0
// guid: 4d9a5b16-8c30-4fa7-eb54-2f6b3a8c0d79

//! Python environment setup
//!
//! The pipeline this agent scaffolds is a Python project. The bootstrap
//! creates its virtual environment and installs `requirements.txt` into it,
//! always through the venv's own pip so the system interpreter stays clean.

use crate::config::layout::{REQUIREMENTS_FILE, VENV_DIR};
use crate::utils::system::SystemUtils;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Python environment operations used by the bootstrap
pub struct PythonUtils;

impl PythonUtils {
    /// Resolve the Python interpreter to use
    ///
    /// An explicitly requested interpreter must resolve; otherwise `python3`
    /// is preferred with `python` as the fallback.
    pub fn resolve_interpreter(explicit: Option<&str>) -> Result<PathBuf> {
        if let Some(name) = explicit {
            return which::which(name).map_err(|e| {
                crate::ScaffoldError::system(format!(
                    "Requested Python interpreter '{}' not found: {}",
                    name, e
                ))
            });
        }

        which::which("python3")
            .or_else(|_| which::which("python"))
            .map_err(|_| {
                crate::ScaffoldError::system(
                    "No Python interpreter found in PATH (tried python3, python)".to_string(),
                )
            })
    }

    /// Check if the workspace already has a virtual environment
    pub fn venv_exists(root: &Path) -> bool {
        root.join(VENV_DIR).join("pyvenv.cfg").exists()
    }

    /// Create the virtual environment at `<root>/venv`
    pub async fn create_venv(root: &Path, interpreter: &Path) -> Result<()> {
        debug!(
            "Creating virtual environment with {} in {}",
            interpreter.display(),
            root.display()
        );

        let interpreter = interpreter.to_string_lossy();
        SystemUtils::run_command_checked(
            &interpreter,
            &["-m", "venv", VENV_DIR],
            root,
            "venv creation",
        )
        .await?;

        Ok(())
    }

    /// Path to the virtual environment's pip executable
    pub fn venv_pip(root: &Path) -> PathBuf {
        #[cfg(unix)]
        {
            root.join(VENV_DIR).join("bin").join("pip")
        }
        #[cfg(windows)]
        {
            root.join(VENV_DIR).join("Scripts").join("pip.exe")
        }
    }

    /// Install the workspace's `requirements.txt` into the virtual environment
    pub async fn install_requirements(root: &Path) -> Result<()> {
        let pip = Self::venv_pip(root);
        if !pip.exists() {
            return Err(crate::ScaffoldError::system(format!(
                "pip not found at {} (was the virtual environment created?)",
                pip.display()
            )));
        }

        let pip = pip.to_string_lossy();
        SystemUtils::run_command_checked(
            &pip,
            &["install", "-r", REQUIREMENTS_FILE],
            root,
            "pip install",
        )
        .await?;

        Ok(())
    }
}
