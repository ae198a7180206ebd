// file: src/utils/system.rs
// version: 1.0.0
// guid: 2b7e3f94-6a18-4d85-c932-0d4f1e6a8b57

//! System utility functions

use crate::Result;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(windows)]
        {
            false
        }
    }

    /// Execute an external command in the given working directory
    pub async fn run_command(
        program: &str,
        args: &[&str],
        cwd: &Path,
        context: &str,
    ) -> Result<Output> {
        debug!("Executing command: {} {}", program, args.join(" "));

        Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .await
            .map_err(|e| {
                crate::ScaffoldError::command(format!("{}: failed to spawn {}: {}", context, program, e))
            })
    }

    /// Execute an external command and fail on a non-zero exit status
    ///
    /// The error carries the exit code and stderr so a failed `git init` or
    /// `pip install` is diagnosable from the run report alone.
    pub async fn run_command_checked(
        program: &str,
        args: &[&str],
        cwd: &Path,
        context: &str,
    ) -> Result<String> {
        let output = Self::run_command(program, args, cwd, context).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(crate::ScaffoldError::command(format!(
                "{} failed with exit code {}: {}",
                context,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
