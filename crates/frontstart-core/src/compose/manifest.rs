//! Script patch for the project's package manifest

use crate::error::{ComposeError, Result};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Script entries to merge into `package.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPatch {
    scripts: Vec<(String, String)>,
}

impl ManifestPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a script; an existing entry keeps its position and takes the new command
    pub fn set(&mut self, name: &str, command: &str) {
        match self.scripts.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = command.to_string(),
            None => self.scripts.push((name.to_string(), command.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.scripts.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Merge into a parsed manifest, keeping unrelated fields and scripts
    pub fn merge_into(&self, manifest: &mut Value) -> Result<()> {
        let root = manifest
            .as_object_mut()
            .ok_or_else(|| ComposeError::InvalidManifest("top level is not an object".into()))?;

        let scripts = root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| ComposeError::InvalidManifest("'scripts' is not an object".into()))?;

        for (name, command) in &self.scripts {
            scripts.insert(name.clone(), Value::String(command.clone()));
        }
        Ok(())
    }
}

impl Serialize for ManifestPatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.scripts.iter().map(|(n, c)| (n, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_set_overwrites_in_place() {
        let mut patch = ManifestPatch::new();
        patch.set("dev", "live-server src/index.html");
        patch.set("test", "npx eslint src/*");
        patch.set("dev", "parcel serve src/index.html --open");

        assert_eq!(patch.names(), vec!["dev", "test"]);
        assert_eq!(patch.get("dev"), Some("parcel serve src/index.html --open"));
    }

    #[test]
    fn test_merge_preserves_unrelated_scripts() {
        let mut manifest = json!({
            "name": "demo",
            "scripts": { "lint": "eslint .", "test": "echo \"Error: no test specified\" && exit 1" }
        });
        let mut patch = ManifestPatch::new();
        patch.set("test", "npx eslint src/*");
        patch.set("dev", "live-server src/index.html");

        patch.merge_into(&mut manifest).unwrap();

        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["scripts"]["lint"], "eslint .");
        assert_eq!(manifest["scripts"]["test"], "npx eslint src/*");
        assert_eq!(manifest["scripts"]["dev"], "live-server src/index.html");
    }

    #[test]
    fn test_merge_creates_scripts_table() {
        let mut manifest = json!({ "name": "demo" });
        let mut patch = ManifestPatch::new();
        patch.set("dev", "live-server src/index.html");

        patch.merge_into(&mut manifest).unwrap();
        assert_eq!(manifest["scripts"], json!({ "dev": "live-server src/index.html" }));
    }

    #[test]
    fn test_merge_rejects_non_object_scripts() {
        let mut manifest = json!({ "scripts": ["build"] });
        let mut patch = ManifestPatch::new();
        patch.set("dev", "x");
        assert!(matches!(
            patch.merge_into(&mut manifest),
            Err(ComposeError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut patch = ManifestPatch::new();
        patch.set("watch", "parcel watch src/index.html");
        patch.set("build", "parcel build");
        let rendered = serde_json::to_string(&patch).unwrap();
        assert_eq!(
            rendered,
            r#"{"watch":"parcel watch src/index.html","build":"parcel build"}"#
        );
    }
}
