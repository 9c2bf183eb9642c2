//! Dry-run report of what `create` would write and install

use crate::apply::PackageManager;
use crate::compose::{compose, Composition, Dependencies, ManifestPatch, RenderedDocument};
use crate::config::{self, AnswerArgs};
use crate::options::{AnswerSet, AutoInstall, Question};
use anyhow::Result;
use serde::Serialize;

/// One resolved answer
#[derive(Debug, Clone, Serialize)]
pub struct PlannedAnswer {
    pub question: Question,
    pub level: usize,
    pub label: &'static str,
}

/// Everything a run would produce, without touching disk
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub answers: Vec<PlannedAnswer>,
    pub documents: Vec<RenderedDocument>,
    pub scripts: ManifestPatch,
    pub dependencies: Dependencies,
    pub init_repository: bool,
    pub auto_install: AutoInstall,
    pub commands: Vec<String>,
    pub global_hint: Option<String>,
}

impl PlanReport {
    pub fn new(answers: &AnswerSet, composition: &Composition, npm: &PackageManager) -> Result<Self> {
        let lockfile_only = composition.lockfile_only();
        let deps = &composition.dependencies;

        let mut commands = Vec::new();
        if composition.init_repository {
            commands.push("git init".to_string());
        }
        if !deps.development.is_empty() {
            commands.push(npm.install_command(deps.development.names(), true, lockfile_only));
        }
        if !deps.runtime.is_empty() {
            commands.push(npm.install_command(deps.runtime.names(), false, lockfile_only));
        }

        Ok(Self {
            answers: answers
                .levels()
                .into_iter()
                .map(|(question, level)| PlannedAnswer {
                    question,
                    level,
                    label: question.menu()[level],
                })
                .collect(),
            documents: composition.render()?,
            scripts: composition.manifest.clone(),
            dependencies: deps.clone(),
            init_repository: composition.init_repository,
            auto_install: composition.auto_install,
            commands,
            global_hint: npm.global_install_hint(deps.global.names()),
        })
    }
}

/// Resolve answers (defaults for anything unanswered) and compose them
pub fn plan(args: &AnswerArgs) -> Result<PlanReport> {
    let seeds = args.seeds()?;
    let raw = args.raw_answers()?.with_defaults();
    let answers = AnswerSet::resolve(&raw)?;
    let composition = compose(&answers, &seeds)?;
    let npm = PackageManager::new(config::npm_program());
    PlanReport::new(&answers, &composition, &npm)
}
