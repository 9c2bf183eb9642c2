//! Error types for answer resolution and configuration composition
//!
//! Every variant is fatal: composition is all-or-nothing, so these errors
//! surface before any artifact is written.

use crate::options::Question;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving answers or composing configuration
#[derive(Error, Debug)]
pub enum ComposeError {
    /// An answer is outside the question's menu
    #[error("Invalid answer for '{question}': level {level} is out of range (expected 0..{options})")]
    InvalidLevel {
        question: Question,
        level: usize,
        options: usize,
    },

    /// A question was left unanswered
    #[error("Missing answer for '{0}'")]
    MissingAnswer(Question),

    /// Two supplied answers resolve to the same question
    #[error("Duplicate answer for '{0}'")]
    DuplicateAnswer(Question),

    /// An answer names a question that does not exist
    #[error("Unknown question '{0}'")]
    UnknownQuestion(String),

    /// A `key=level` assignment could not be parsed
    #[error("Invalid assignment '{0}' (expected KEY=LEVEL)")]
    InvalidAssignment(String),

    /// A template seed file is absent from the seed directory
    #[error("Template seed '{name}' not found at {}", .path.display())]
    MissingSeed { name: &'static str, path: PathBuf },

    /// A template seed exists but does not have the expected shape
    #[error("Template seed '{name}' is invalid: {reason}")]
    InvalidSeed { name: &'static str, reason: String },

    /// The project manifest cannot take a script patch
    #[error("Invalid project manifest: {0}")]
    InvalidManifest(String),

    /// Reading a seed or answers file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or render failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Answers file parse failure
    #[error("Answers file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for composition operations
pub type Result<T> = std::result::Result<T, ComposeError>;
