//! Template seeds: base documents the engine augments
//!
//! The built-in seeds are compiled into the library. A seed directory can
//! replace them; both files must then be present.

use crate::error::{ComposeError, Result};
use serde_json::Value;
use std::path::Path;

/// File name of the lint baseline
pub const LINT_SEED_FILE: &str = ".eslintrc.json.sample";

/// File name of the editor-settings baseline
pub const EDITOR_SEED_FILE: &str = "settings.json.sample";

const BUILTIN_LINT_SEED: &str = include_str!("../seeds/.eslintrc.json.sample");
const BUILTIN_EDITOR_SEED: &str = include_str!("../seeds/settings.json.sample");

/// The lint and editor-settings baselines
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSet {
    lint: Value,
    editor: Value,
}

impl SeedSet {
    /// Seeds shipped with the library
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_LINT_SEED, BUILTIN_EDITOR_SEED)
    }

    /// Read both seeds from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let lint = read_seed(dir, "lint", LINT_SEED_FILE)?;
        let editor = read_seed(dir, "editor settings", EDITOR_SEED_FILE)?;
        tracing::debug!(dir = %dir.display(), "loaded template seeds");
        Self::parse(&lint, &editor)
    }

    /// Parse and validate seed sources
    pub fn parse(lint: &str, editor: &str) -> Result<Self> {
        let lint = parse_object("lint", lint)?;
        if !lint.get("extends").is_some_and(Value::is_array) {
            return Err(ComposeError::InvalidSeed {
                name: "lint",
                reason: "'extends' must be an array".to_string(),
            });
        }
        if !lint.get("rules").is_some_and(Value::is_object) {
            return Err(ComposeError::InvalidSeed {
                name: "lint",
                reason: "'rules' must be an object".to_string(),
            });
        }

        let editor = parse_object("editor settings", editor)?;
        Ok(Self { lint, editor })
    }

    pub fn lint(&self) -> &Value {
        &self.lint
    }

    pub fn editor(&self) -> &Value {
        &self.editor
    }
}

fn read_seed(dir: &Path, name: &'static str, file: &str) -> Result<String> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(ComposeError::MissingSeed { name, path });
    }
    Ok(std::fs::read_to_string(&path)?)
}

fn parse_object(name: &'static str, source: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(source).map_err(|e| ComposeError::InvalidSeed {
        name,
        reason: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(ComposeError::InvalidSeed {
            name,
            reason: "top level must be an object".to_string(),
        });
    }
    Ok(value)
}
