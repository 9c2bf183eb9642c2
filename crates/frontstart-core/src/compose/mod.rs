//! Configuration composition engine
//!
//! Maps a complete `AnswerSet` to the documents, script patch and
//! dependency buckets of a new project. Composition is a pure,
//! synchronous pass:
//!
//! 1. Per-question rules run in question order (`rules`)
//! 2. The always-written documents are seeded (lint, editor settings)
//! 3. Cross-option rules mutate them (`interactions`)
//!
//! Nothing here touches disk beyond what `SeedSet` already loaded.

pub mod deps;
pub mod document;
pub mod interactions;
pub mod manifest;
pub mod rules;

pub use deps::{Bucket, Dependencies, DependencyBucket};
pub use document::{ArtifactPath, ConfigDocument, DocumentBody, DocumentSet};
pub use manifest::ManifestPatch;
pub use rules::Contribution;

use crate::error::Result;
use crate::options::{AnswerSet, AutoInstall};
use crate::seeds::SeedSet;
use serde::Serialize;

/// Everything the application stage needs from one run
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub documents: DocumentSet,
    pub manifest: ManifestPatch,
    pub dependencies: Dependencies,
    pub init_repository: bool,
    pub auto_install: AutoInstall,
}

/// A document in its on-disk form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub path: &'static str,
    pub contents: String,
}

impl Composition {
    /// Render every document, in composition order
    pub fn render(&self) -> Result<Vec<RenderedDocument>> {
        self.documents
            .iter()
            .map(|doc| {
                Ok(RenderedDocument {
                    path: doc.path.relative_path(),
                    contents: doc.render()?,
                })
            })
            .collect()
    }

    /// Whether the package manager should only resolve the lockfile
    pub fn lockfile_only(&self) -> bool {
        self.auto_install == AutoInstall::LockfileOnly
    }

    fn absorb(&mut self, contribution: Contribution) {
        for document in contribution.documents {
            self.documents.insert(document);
        }
        for (name, command) in &contribution.scripts {
            self.manifest.set(name, command);
        }
        self.dependencies.extend(&contribution.dependencies);
        self.init_repository |= contribution.init_repository;
    }
}

/// Compose the full configuration for `answers`
pub fn compose(answers: &AnswerSet, seeds: &SeedSet) -> Result<Composition> {
    let mut composition = Composition {
        documents: DocumentSet::new(),
        manifest: ManifestPatch::new(),
        dependencies: Dependencies::default(),
        init_repository: false,
        auto_install: answers.auto_install,
    };

    let contributions = [
        rules::baseline(),
        rules::transpilation(answers.transpilation),
        rules::compatibility(answers.compatibility),
        rules::lint(answers.lint, seeds.lint())?,
        rules::version_control(answers.version_control),
        rules::post_processing(answers.post_processing),
        rules::style_lint(answers.style_lint),
        rules::bundler(answers.bundler),
        rules::framework(answers.framework),
    ];
    for contribution in contributions {
        composition.absorb(contribution);
    }

    // The lint document is written even when linting is off
    if !composition.documents.contains(ArtifactPath::Eslint) {
        composition
            .documents
            .insert(ConfigDocument::json(ArtifactPath::Eslint, seeds.lint().clone()));
    }

    if let Some(lint) = composition
        .documents
        .get_mut(ArtifactPath::Eslint)
        .and_then(ConfigDocument::as_json_mut)
    {
        let extra = interactions::framework_lint(answers, lint)?;
        composition.dependencies.extend(&extra);
    }

    let mut settings = seeds.editor().clone();
    interactions::editor_settings(answers, &mut settings)?;
    composition
        .documents
        .insert(ConfigDocument::json(ArtifactPath::EditorSettings, settings));

    tracing::debug!(
        documents = composition.documents.len(),
        development = composition.dependencies.development.len(),
        runtime = composition.dependencies.runtime.len(),
        global = composition.dependencies.global.len(),
        "composition complete"
    );

    Ok(composition)
}
