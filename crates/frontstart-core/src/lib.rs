//! Frontstart Core - configuration composition for front-end project scaffolding
//!
//! This library turns a fixed set of preference answers (transpiler, browser
//! targets, linting, git, PostCSS, stylelint, bundler, framework, install
//! mode) into the configuration files, `package.json` scripts and
//! dependency lists of a new front-end project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Option Model** - Questions, typed options and answer resolution
//! - **Layer 2: Composition Engine** - Pure mapping from answers to documents,
//!   script patch and dependency buckets
//! - **Layer 3: Application** - Writing files, running npm and git
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use frontstart_core::{compose, AnswerSet, SeedSet};
//!
//! let seeds = SeedSet::builtin()?;
//! let composition = compose(&AnswerSet::defaults(), &seeds)?;
//! for doc in composition.render()? {
//!     println!("{}:\n{}", doc.path, doc.contents);
//! }
//! ```

pub mod apply;
pub mod compose;
pub mod config;
pub mod error;
pub mod options;
pub mod plan;
pub mod seeds;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use compose::{compose, ArtifactPath, Composition, Dependencies, ManifestPatch};
pub use error::ComposeError;
pub use options::{AnswerSet, Question, RawAnswers};
pub use plan::{plan, PlanReport};
pub use seeds::SeedSet;

#[cfg(feature = "tui")]
pub use tui::run;
