//! Artifact application
//!
//! This module provides:
//! - Writing composed documents and the merged `package.json`
//! - Package manager and git invocation
//! - Availability checks for those tools

pub mod installer;
pub mod tools;
pub mod writer;

pub use installer::{git_init, PackageManager};
pub use tools::{check_tool, check_tools, ToolInfo, ToolReport};
pub use writer::{prepare_artifacts, write_artifacts, PreparedArtifacts, MANIFEST_FILE};

use crate::compose::Composition;
use anyhow::Result;
use std::path::Path;

/// Apply a composition to `project_dir`.
///
/// Order: create the directory, `npm init -y` when there is no
/// `package.json`, parse and patch the manifest and render every document,
/// then `git init`, then write. A manifest that cannot be patched fails
/// before the repository is created.
pub async fn apply_project(
    npm: &PackageManager,
    project_dir: &Path,
    composition: &Composition,
    git_available: bool,
) -> Result<Vec<String>> {
    tokio::fs::create_dir_all(project_dir).await?;

    if !project_dir.join(MANIFEST_FILE).exists() {
        tracing::info!(dir = %project_dir.display(), "creating {}", MANIFEST_FILE);
        npm.init(project_dir).await?;
    }

    let prepared = prepare_artifacts(project_dir, composition).await?;

    if composition.init_repository {
        if git_available {
            git_init(project_dir).await?;
        } else {
            tracing::warn!("git is not installed, skipping repository init");
        }
    }

    prepared.write(project_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::options::AnswerSet;
    use crate::seeds::SeedSet;

    #[tokio::test]
    async fn test_bad_manifest_fails_before_git_init() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "{ \"name\": ").unwrap();

        let composition = compose(&AnswerSet::defaults(), &SeedSet::builtin().unwrap()).unwrap();
        assert!(composition.init_repository);

        let npm = PackageManager::new("frontstart-definitely-not-a-real-binary");
        let result = apply_project(&npm, dir.path(), &composition, true).await;

        assert!(result.is_err());
        assert!(!dir.path().join(".git").exists());
        assert!(!dir.path().join(".gitignore").exists());
    }

    #[tokio::test]
    async fn test_git_skipped_when_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), r#"{ "name": "demo" }"#).unwrap();

        let composition = compose(&AnswerSet::defaults(), &SeedSet::builtin().unwrap()).unwrap();
        let npm = PackageManager::new("frontstart-definitely-not-a-real-binary");
        let written = apply_project(&npm, dir.path(), &composition, false)
            .await
            .unwrap();

        assert!(!dir.path().join(".git").exists());
        assert!(written.contains(&".gitignore".to_string()));
    }
}
