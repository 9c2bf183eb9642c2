//! Question menus, typed options and answer resolution
//!
//! This module provides:
//! - The fixed question catalogue (`Question`) with menus and defaults
//! - One enum per question (`Choice`), where the variant order is the level
//! - `AnswerSet`, the validated input of the composition engine

pub mod answers;
pub mod choice;
pub mod question;

pub use answers::{parse_assignment, AnswerSet, RawAnswers};
pub use choice::{
    AutoInstall, Bundler, Choice, Compatibility, Framework, LintStyle, PostCss, StyleLint,
    Transpilation, VersionControl,
};
pub use question::Question;
