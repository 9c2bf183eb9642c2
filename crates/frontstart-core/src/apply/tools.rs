//! Availability checks for the external tools the application stage invokes

use anyhow::Result;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub available: bool,
}

/// Check whether `program` can be launched
pub fn check_tool(program: &str) -> ToolInfo {
    let available = Command::new(program)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);

    ToolInfo {
        name: program.to_string(),
        available,
    }
}

/// Optional tools found for a run. A missing package manager fails the
/// check outright; a missing git just skips repository init.
#[derive(Debug, Clone)]
pub struct ToolReport {
    pub git: Option<ToolInfo>,
}

impl ToolReport {
    pub fn git_available(&self) -> bool {
        self.git.as_ref().is_some_and(|g| g.available)
    }
}

/// Check the package manager and, when a repository is requested, git
pub fn check_tools(npm: &str, needs_git: bool) -> Result<ToolReport> {
    if !check_tool(npm).available {
        anyhow::bail!(
            "Missing required tool:\n  - {} (install Node.js from https://nodejs.org)",
            npm
        );
    }

    let git = needs_git.then(|| check_tool("git"));
    Ok(ToolReport { git })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_unavailable() {
        let info = check_tool("frontstart-definitely-not-a-real-binary");
        assert!(!info.available);
        assert_eq!(info.name, "frontstart-definitely-not-a-real-binary");
    }

    #[test]
    fn test_missing_package_manager_fails() {
        let err = check_tools("frontstart-definitely-not-a-real-binary", false).unwrap_err();
        assert!(err.to_string().contains("Missing required tool"));
    }

    #[test]
    fn test_git_not_checked_unless_needed() {
        let report = ToolReport { git: None };
        assert!(!report.git_available());

        let report = ToolReport {
            git: Some(ToolInfo {
                name: "git".to_string(),
                available: true,
            }),
        };
        assert!(report.git_available());
    }
}
