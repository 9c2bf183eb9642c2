//! Run configuration: answer sources, seed location and tool overrides

use crate::error::Result;
use crate::options::RawAnswers;
use crate::seeds::SeedSet;
use std::path::PathBuf;

/// Environment variable overriding the template seed directory
pub const SEED_DIR_ENV: &str = "FRONTSTART_SEED_DIR";

/// Environment variable overriding the package manager program
pub const NPM_ENV: &str = "FRONTSTART_NPM";

const DEFAULT_NPM: &str = "npm";

/// Where answers and seeds come from, shared by `create` and `plan`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AnswerArgs {
    /// YAML file mapping question keys to option levels
    #[arg(long = "answers", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Answer a question directly (repeatable, e.g. --set eslint=2)
    #[arg(long = "set", value_name = "KEY=LEVEL")]
    pub assignments: Vec<String>,

    /// Directory with .eslintrc.json.sample and settings.json.sample
    #[arg(long = "seed-dir", value_name = "DIR")]
    pub seed_dir: Option<PathBuf>,
}

impl AnswerArgs {
    /// Answers from the file (if any), overridden by `--set` flags
    pub fn raw_answers(&self) -> Result<RawAnswers> {
        let mut raw = match &self.answers_file {
            Some(path) => RawAnswers::load(path)?,
            None => RawAnswers::new(),
        };
        raw.apply_assignments(&self.assignments)?;
        raw.validate()?;
        Ok(raw)
    }

    /// Seed directory from the flag, then the environment
    pub fn seed_dir(&self) -> Option<PathBuf> {
        self.seed_dir
            .clone()
            .or_else(|| std::env::var_os(SEED_DIR_ENV).map(PathBuf::from))
    }

    /// Load seeds from the configured directory, or the built-in ones
    pub fn seeds(&self) -> Result<SeedSet> {
        match self.seed_dir() {
            Some(dir) => SeedSet::load(&dir),
            None => SeedSet::builtin(),
        }
    }
}

/// Package manager program, honouring `FRONTSTART_NPM`
pub fn npm_program() -> String {
    std::env::var(NPM_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NPM.to_string())
}
