//! Answer sets and the option resolver

use super::choice::{
    AutoInstall, Bundler, Choice, Compatibility, Framework, LintStyle, PostCss, StyleLint,
    Transpilation, VersionControl,
};
use super::question::Question;
use crate::error::{ComposeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Unvalidated answers keyed by question key, as read from a file or flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnswers(BTreeMap<String, usize>);

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML mapping of `key: level`
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawAnswers = serde_yaml::from_str(content)?;
        raw.validate()?;
        Ok(raw)
    }

    /// Read an answers file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn insert(&mut self, question: Question, level: usize) {
        self.0.retain(|key, _| Question::from_key(key) != Some(question));
        self.0.insert(question.key().to_string(), level);
    }

    pub fn get(&self, question: Question) -> Option<usize> {
        self.0
            .iter()
            .find(|(key, _)| Question::from_key(key) == Some(question))
            .map(|(_, level)| *level)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply `KEY=LEVEL` assignments; later ones win
    pub fn apply_assignments<S: AsRef<str>>(&mut self, assignments: &[S]) -> Result<()> {
        for assignment in assignments {
            let (question, level) = parse_assignment(assignment.as_ref())?;
            self.insert(question, level);
        }
        Ok(())
    }

    /// Fill every unanswered question with its default level
    pub fn with_defaults(mut self) -> Self {
        for question in Question::ALL {
            if self.get(question).is_none() {
                self.insert(question, question.default_level());
            }
        }
        self
    }

    /// Check every supplied answer: known key, one answer per question,
    /// level inside the question's menu
    pub fn validate(&self) -> Result<()> {
        let mut seen = Vec::new();
        for (key, level) in &self.0 {
            let question =
                Question::from_key(key).ok_or_else(|| ComposeError::UnknownQuestion(key.clone()))?;
            if seen.contains(&question) {
                return Err(ComposeError::DuplicateAnswer(question));
            }
            seen.push(question);
            AnswerSet::defaults().set_level(question, *level)?;
        }
        Ok(())
    }
}

/// Parse a single `KEY=LEVEL` assignment
pub fn parse_assignment(assignment: &str) -> Result<(Question, usize)> {
    let (key, level) = assignment
        .split_once('=')
        .ok_or_else(|| ComposeError::InvalidAssignment(assignment.to_string()))?;
    let question = Question::from_key(key)
        .ok_or_else(|| ComposeError::UnknownQuestion(key.trim().to_string()))?;
    let level = level
        .trim()
        .parse::<usize>()
        .map_err(|_| ComposeError::InvalidAssignment(assignment.to_string()))?;
    Ok((question, level))
}

/// A complete, validated set of answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    pub transpilation: Transpilation,
    pub compatibility: Compatibility,
    pub lint: LintStyle,
    pub version_control: VersionControl,
    pub post_processing: PostCss,
    pub style_lint: StyleLint,
    pub bundler: Bundler,
    pub framework: Framework,
    pub auto_install: AutoInstall,
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl AnswerSet {
    /// The answers a user gets by accepting every default
    pub fn defaults() -> Self {
        Self {
            transpilation: Transpilation::PresetEnv,
            compatibility: Compatibility::Medium,
            lint: LintStyle::Standard,
            version_control: VersionControl::Git,
            post_processing: PostCss::Full,
            style_lint: StyleLint::Standard,
            bundler: Bundler::Parcel,
            framework: Framework::None,
            auto_install: AutoInstall::LockfileOnly,
        }
    }

    /// Resolve raw answers. Every question must be answered and in range.
    pub fn resolve(raw: &RawAnswers) -> Result<Self> {
        raw.validate()?;

        let mut answers = Self::defaults();
        for question in Question::ALL {
            let level = raw
                .get(question)
                .ok_or(ComposeError::MissingAnswer(question))?;
            answers.set_level(question, level)?;
            tracing::debug!(%question, level, "resolved answer");
        }
        Ok(answers)
    }

    /// Level of the answer for `question`
    pub fn level(&self, question: Question) -> usize {
        match question {
            Question::Transpilation => self.transpilation.level(),
            Question::Compatibility => self.compatibility.level(),
            Question::Lint => self.lint.level(),
            Question::VersionControl => self.version_control.level(),
            Question::PostProcessing => self.post_processing.level(),
            Question::StyleLint => self.style_lint.level(),
            Question::Bundler => self.bundler.level(),
            Question::Framework => self.framework.level(),
            Question::AutoInstall => self.auto_install.level(),
        }
    }

    pub fn set_level(&mut self, question: Question, level: usize) -> Result<()> {
        match question {
            Question::Transpilation => self.transpilation = Choice::from_level(level)?,
            Question::Compatibility => self.compatibility = Choice::from_level(level)?,
            Question::Lint => self.lint = Choice::from_level(level)?,
            Question::VersionControl => self.version_control = Choice::from_level(level)?,
            Question::PostProcessing => self.post_processing = Choice::from_level(level)?,
            Question::StyleLint => self.style_lint = Choice::from_level(level)?,
            Question::Bundler => self.bundler = Choice::from_level(level)?,
            Question::Framework => self.framework = Choice::from_level(level)?,
            Question::AutoInstall => self.auto_install = Choice::from_level(level)?,
        }
        Ok(())
    }

    /// The resolved-level table, in question order
    pub fn levels(&self) -> Vec<(Question, usize)> {
        Question::ALL
            .into_iter()
            .map(|q| (q, self.level(q)))
            .collect()
    }
}
