//! Cross-option rules
//!
//! These run after every per-question rule and read two answers at once.
//! Both mutations are idempotent: applying them again to their own output
//! changes nothing.

use super::deps::Bucket;
use super::document::{array_field, object, object_field, push_unique};
use crate::error::Result;
use crate::options::{AnswerSet, Choice, Framework, StyleLint};
use serde_json::{json, Value};

/// Extra lint setup when a framework is combined with JS linting.
///
/// Returns the dependencies the mutation needs.
pub fn framework_lint(answers: &AnswerSet, lint: &mut Value) -> Result<Vec<(Bucket, &'static str)>> {
    if !answers.lint.is_enabled() {
        return Ok(Vec::new());
    }

    match answers.framework {
        Framework::None => Ok(Vec::new()),
        Framework::Vue => {
            push_unique(array_field(lint, "extends")?, json!("plugin:vue/recommended"));
            push_unique(array_field(lint, "plugins")?, json!("vue"));

            let rules = object_field(lint, "rules")?;
            rules.insert("vue/html-self-closing".into(), json!("off"));
            rules.insert(
                "vue/max-attributes-per-line".into(),
                json!(["error", { "singleline": 3, "multiline": { "max": 1, "allowFirstLine": true } }]),
            );

            Ok(vec![(Bucket::Development, "eslint-plugin-vue")])
        }
    }
}

/// Editor settings derived from the lint answers
pub fn editor_settings(answers: &AnswerSet, settings: &mut Value) -> Result<()> {
    if answers.style_lint != StyleLint::None {
        let map = object(settings)?;
        for key in ["css.validate", "less.validate", "scss.validate"] {
            map.insert(key.into(), Value::Bool(false));
        }
    }

    if answers.lint.is_enabled() {
        let validate = array_field(settings, "eslint.validate")?;
        push_unique(validate, json!("javascript"));

        if answers.framework == Framework::Vue {
            push_unique(validate, json!({ "language": "vue", "autoFix": true }));
            object_field(settings, "emmet.includeLanguages")?.insert("vue".into(), json!("html"));
        }
    }

    Ok(())
}
