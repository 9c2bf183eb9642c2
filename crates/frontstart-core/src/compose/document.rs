//! Configuration documents and their target paths

use crate::error::{ComposeError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Target file of a generated configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactPath {
    Babel,
    Browserslist,
    Eslint,
    Gitignore,
    Postcss,
    Stylelint,
    EditorSettings,
}

impl ArtifactPath {
    /// Path relative to the project root
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactPath::Babel => ".babelrc",
            ArtifactPath::Browserslist => ".browserslistrc",
            ArtifactPath::Eslint => ".eslintrc.json",
            ArtifactPath::Gitignore => ".gitignore",
            ArtifactPath::Postcss => ".postcssrc",
            ArtifactPath::Stylelint => ".stylelintrc",
            ArtifactPath::EditorSettings => ".vscode/settings.json",
        }
    }
}

/// Body of a configuration document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBody {
    Json(Value),
    Text(String),
}

/// A named, structured document destined for a file in the project
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    pub path: ArtifactPath,
    pub body: DocumentBody,
}

impl ConfigDocument {
    pub fn json(path: ArtifactPath, value: Value) -> Self {
        Self {
            path,
            body: DocumentBody::Json(value),
        }
    }

    pub fn text(path: ArtifactPath, text: impl Into<String>) -> Self {
        Self {
            path,
            body: DocumentBody::Text(text.into()),
        }
    }

    pub fn as_json_mut(&mut self) -> Option<&mut Value> {
        match &mut self.body {
            DocumentBody::Json(value) => Some(value),
            DocumentBody::Text(_) => None,
        }
    }

    /// Serialize the document to its on-disk form
    pub fn render(&self) -> Result<String> {
        match &self.body {
            DocumentBody::Json(value) => to_json_string(value),
            DocumentBody::Text(text) => Ok(text.clone()),
        }
    }
}

/// Render JSON with four-space indentation, keys in insertion order
pub fn to_json_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Documents keyed by target path; inserting an existing path replaces it in place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    documents: Vec<ConfigDocument>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, document: ConfigDocument) {
        match self.documents.iter_mut().find(|d| d.path == document.path) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    pub fn get(&self, path: ArtifactPath) -> Option<&ConfigDocument> {
        self.documents.iter().find(|d| d.path == path)
    }

    pub fn get_mut(&mut self, path: ArtifactPath) -> Option<&mut ConfigDocument> {
        self.documents.iter_mut().find(|d| d.path == path)
    }

    pub fn contains(&self, path: ArtifactPath) -> bool {
        self.get(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Append `value` unless an equal entry is already present
pub fn push_unique(array: &mut Vec<Value>, value: Value) {
    if !array.contains(&value) {
        array.push(value);
    }
}

/// Borrow `doc[key]` as an array, creating it when absent
pub fn array_field<'a>(doc: &'a mut Value, key: &str) -> Result<&'a mut Vec<Value>> {
    let field = object(doc)?
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));
    field
        .as_array_mut()
        .ok_or_else(|| ComposeError::InvalidSeed {
            name: "document",
            reason: format!("'{}' is not an array", key),
        })
}

/// Borrow `doc[key]` as an object, creating it when absent
pub fn object_field<'a>(doc: &'a mut Value, key: &str) -> Result<&'a mut Map<String, Value>> {
    let field = object(doc)?
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    field
        .as_object_mut()
        .ok_or_else(|| ComposeError::InvalidSeed {
            name: "document",
            reason: format!("'{}' is not an object", key),
        })
}

/// Borrow a document as a JSON object
pub fn object(doc: &mut Value) -> Result<&mut Map<String, Value>> {
    doc.as_object_mut().ok_or_else(|| ComposeError::InvalidSeed {
        name: "document",
        reason: "top level is not an object".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_uses_four_space_indent() {
        let doc = ConfigDocument::json(
            ArtifactPath::Babel,
            json!({ "presets": ["@babel/preset-env"] }),
        );
        assert_eq!(
            doc.render().unwrap(),
            "{\n    \"presets\": [\n        \"@babel/preset-env\"\n    ]\n}"
        );
    }

    #[test]
    fn test_render_preserves_key_order() {
        let doc = ConfigDocument::json(
            ArtifactPath::Postcss,
            json!({ "zeta": 1, "alpha": 2 }),
        );
        let rendered = doc.render().unwrap();
        assert!(rendered.find("zeta").unwrap() < rendered.find("alpha").unwrap());
    }

    #[test]
    fn test_render_text_is_verbatim() {
        let doc = ConfigDocument::text(ArtifactPath::Gitignore, "node_modules\n.cache\ndist");
        assert_eq!(doc.render().unwrap(), "node_modules\n.cache\ndist");
    }

    #[test]
    fn test_document_set_replaces_same_path() {
        let mut set = DocumentSet::new();
        set.insert(ConfigDocument::text(ArtifactPath::Browserslist, "> 5%"));
        set.insert(ConfigDocument::text(ArtifactPath::Gitignore, "dist"));
        set.insert(ConfigDocument::text(ArtifactPath::Browserslist, "IE 11"));

        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(first.path, ArtifactPath::Browserslist);
        assert_eq!(first.body, DocumentBody::Text("IE 11".to_string()));
    }

    #[test]
    fn test_push_unique() {
        let mut values = vec![json!("javascript")];
        push_unique(&mut values, json!("javascript"));
        push_unique(&mut values, json!({ "language": "vue" }));
        push_unique(&mut values, json!({ "language": "vue" }));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_array_field_rejects_wrong_type() {
        let mut doc = json!({ "extends": "standard" });
        assert!(array_field(&mut doc, "extends").is_err());
        let mut doc = json!({});
        array_field(&mut doc, "plugins").unwrap().push(json!("vue"));
        assert_eq!(doc, json!({ "plugins": ["vue"] }));
    }
}
