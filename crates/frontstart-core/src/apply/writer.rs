//! Writing composed documents into the project directory

use crate::compose::document::to_json_string;
use crate::compose::{Composition, RenderedDocument};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Directories every project gets
const PROJECT_DIRS: &[&str] = &[".vscode", "src"];

/// Everything a run writes, rendered and checked against the existing
/// `package.json` before any file is touched
#[derive(Debug)]
pub struct PreparedArtifacts {
    documents: Vec<RenderedDocument>,
    manifest_path: PathBuf,
    manifest: String,
}

/// Read and parse `package.json`, merge the script patch and render every
/// document. Nothing is written.
pub async fn prepare_artifacts(
    project_dir: &Path,
    composition: &Composition,
) -> Result<PreparedArtifacts> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    let manifest_content = fs::read_to_string(&manifest_path)
        .await
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let mut manifest: Value = serde_json::from_str(&manifest_content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;
    composition.manifest.merge_into(&mut manifest)?;

    Ok(PreparedArtifacts {
        documents: composition.render()?,
        manifest: to_json_string(&manifest)?,
        manifest_path,
    })
}

impl PreparedArtifacts {
    /// Create the project directories, replace every document and write the
    /// merged `package.json` last. Returns the written paths, relative to
    /// `project_dir`.
    pub async fn write(self, project_dir: &Path) -> Result<Vec<String>> {
        for dir in PROJECT_DIRS {
            let path = project_dir.join(dir);
            fs::create_dir_all(&path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        let mut written = Vec::new();
        for document in &self.documents {
            let target_path = project_dir.join(document.path);
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&target_path, &document.contents)
                .await
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
            tracing::debug!(path = document.path, "wrote document");
            written.push(document.path.to_string());
        }

        fs::write(&self.manifest_path, self.manifest)
            .await
            .with_context(|| format!("Failed to write file: {}", self.manifest_path.display()))?;
        written.push(MANIFEST_FILE.to_string());

        Ok(written)
    }
}

/// Write every document (replacing existing files) and merge the script
/// patch into `package.json`
pub async fn write_artifacts(project_dir: &Path, composition: &Composition) -> Result<Vec<String>> {
    prepare_artifacts(project_dir, composition)
        .await?
        .write(project_dir)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::options::{AnswerSet, Bundler};
    use crate::seeds::SeedSet;

    fn composition(answers: &AnswerSet) -> Composition {
        compose(answers, &SeedSet::builtin().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_writes_documents_and_merges_scripts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "name": "demo", "version": "1.0.0", "scripts": { "lint": "eslint ." } }"#,
        )
        .unwrap();

        let answers = AnswerSet {
            bundler: Bundler::None,
            ..AnswerSet::defaults()
        };
        let written = write_artifacts(dir.path(), &composition(&answers))
            .await
            .unwrap();

        assert!(written.contains(&".vscode/settings.json".to_string()));
        assert!(written.contains(&".gitignore".to_string()));
        assert_eq!(written.last().map(String::as_str), Some(MANIFEST_FILE));
        assert!(dir.path().join("src").is_dir());

        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "node_modules\n.cache\ndist");

        let manifest: Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["scripts"]["lint"], "eslint .");
        assert_eq!(manifest["scripts"]["dev"], "live-server src/index.html");
    }

    #[tokio::test]
    async fn test_existing_documents_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), r#"{ "name": "demo" }"#).unwrap();
        std::fs::write(dir.path().join(".browserslistrc"), "defaults\nnot dead").unwrap();

        write_artifacts(dir.path(), &composition(&AnswerSet::defaults()))
            .await
            .unwrap();

        let browserslist = std::fs::read_to_string(dir.path().join(".browserslistrc")).unwrap();
        assert_eq!(browserslist, "last 1 version\n> 2%\nIE 11");
    }

    #[tokio::test]
    async fn test_missing_manifest_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_artifacts(dir.path(), &composition(&AnswerSet::defaults())).await;

        assert!(result.is_err());
        assert!(!dir.path().join(".eslintrc.json").exists());
        assert!(!dir.path().join(".vscode").exists());
    }

    #[tokio::test]
    async fn test_prepare_rejects_scripts_that_are_not_an_object() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{ "name": "demo", "scripts": "eslint ." }"#,
        )
        .unwrap();

        let result = prepare_artifacts(dir.path(), &composition(&AnswerSet::defaults())).await;

        assert!(result.is_err());
        assert!(!dir.path().join("src").exists());
    }
}
