//! Package manager and version control invocation
//!
//! Commands run in the project directory with their output streamed line
//! by line, so long installs show progress.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single install invocation (10 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Timeout for quick commands like `npm init` and `git init`
const COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the package manager for one project
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: String,
}

impl PackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Create a default `package.json`
    pub async fn init(&self, dir: &Path) -> Result<()> {
        run_streaming(&self.program, &["init", "-y"], dir, COMMAND_TIMEOUT).await
    }

    /// Arguments for installing `packages`
    pub fn install_args(&self, packages: &[String], dev: bool, lockfile_only: bool) -> Vec<String> {
        let mut args = vec!["install".to_string(), "--loglevel=error".to_string()];
        if lockfile_only {
            args.push("--package-lock-only".to_string());
        }
        if dev {
            args.push("--save-dev".to_string());
        }
        args.extend(packages.iter().cloned());
        args
    }

    /// Full command line, for display
    pub fn install_command(&self, packages: &[String], dev: bool, lockfile_only: bool) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.install_args(packages, dev, lockfile_only));
        parts.join(" ")
    }

    /// Install one bucket; an empty bucket is a no-op
    pub async fn install(
        &self,
        dir: &Path,
        packages: &[String],
        dev: bool,
        lockfile_only: bool,
    ) -> Result<()> {
        if packages.is_empty() {
            tracing::debug!(dev, "no packages to install");
            return Ok(());
        }
        let args = self.install_args(packages, dev, lockfile_only);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_streaming(&self.program, &args, dir, INSTALL_TIMEOUT).await
    }

    /// Manual instruction for packages that must be installed globally
    pub fn global_install_hint(&self, packages: &[String]) -> Option<String> {
        if packages.is_empty() {
            return None;
        }
        Some(format!("{} install -g {}", self.program, packages.join(" ")))
    }
}

/// Initialize a git repository in `dir`
pub async fn git_init(dir: &Path) -> Result<()> {
    run_streaming("git", &["init"], dir, COMMAND_TIMEOUT).await
}

/// Run a command, streaming stdout and stderr with indentation
async fn run_streaming(program: &str, args: &[&str], dir: &Path, limit: Duration) -> Result<()> {
    let cmd = format!("{} {}", program, args.join(" "));
    tracing::info!(command = %cmd, dir = %dir.display(), "running");

    let mut child = TokioCommand::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to run: {}", cmd))?;

    let stdout = child
        .stdout
        .take()
        .context("Failed to capture stdout")?;
    let stderr = child
        .stderr
        .take()
        .context("Failed to capture stderr")?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        let mut stdout_open = true;
        let mut stderr_open = true;
        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }
    };

    if timeout(limit, output_task).await.is_err() {
        let _ = child.kill().await;
        anyhow::bail!(
            "'{}' timed out after {} seconds. Please run it manually.",
            cmd,
            limit.as_secs()
        );
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => anyhow::bail!(
            "'{}' failed with exit code: {}",
            cmd,
            status.code().unwrap_or(-1)
        ),
        Ok(Err(e)) => anyhow::bail!("Failed to wait for '{}': {}", cmd, e),
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!("'{}' hung. Please run it manually.", cmd)
        }
    }
}
