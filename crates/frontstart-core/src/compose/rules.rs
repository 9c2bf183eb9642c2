//! Per-question composition rules
//!
//! Each rule maps one typed answer to a `Contribution`. A disabled answer
//! (level 0) contributes nothing, except for the bundler whose level 0
//! still selects a dev server.

use super::deps::Bucket;
use super::document::{array_field, push_unique, ArtifactPath, ConfigDocument};
use crate::error::Result;
use crate::options::{
    Bundler, Compatibility, Framework, LintStyle, PostCss, StyleLint, Transpilation,
    VersionControl,
};
use serde_json::{json, Value};

/// What a single rule adds to the composition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contribution {
    pub documents: Vec<ConfigDocument>,
    pub scripts: Vec<(&'static str, &'static str)>,
    pub dependencies: Vec<(Bucket, &'static str)>,
    pub init_repository: bool,
}

impl Contribution {
    fn document(mut self, document: ConfigDocument) -> Self {
        self.documents.push(document);
        self
    }

    fn scripts(mut self, scripts: &[(&'static str, &'static str)]) -> Self {
        self.scripts.extend_from_slice(scripts);
        self
    }

    fn with(mut self, bucket: Bucket, names: &[&'static str]) -> Self {
        self.dependencies
            .extend(names.iter().map(|name| (bucket, *name)));
        self
    }

    fn dev(self, names: &[&'static str]) -> Self {
        self.with(Bucket::Development, names)
    }
}

/// Packages every generated project gets
pub fn baseline() -> Contribution {
    Contribution::default().dev(&["npm-run-all", "cross-env"])
}

pub fn transpilation(choice: Transpilation) -> Contribution {
    match choice {
        Transpilation::None => Contribution::default(),
        Transpilation::PresetEnv => Contribution::default()
            .document(ConfigDocument::json(
                ArtifactPath::Babel,
                json!({ "presets": ["@babel/preset-env"] }),
            ))
            .dev(&["@babel/cli", "@babel/core", "@babel/preset-env"]),
    }
}

/// Browserslist query for a compatibility level
pub fn browserslist(choice: Compatibility) -> Option<&'static str> {
    match choice {
        Compatibility::None => None,
        Compatibility::Basic => Some("> 5%"),
        Compatibility::Medium => Some("last 1 version\n> 2%\nIE 11"),
        Compatibility::Strong => Some("last 2 version\n> 1%\nIE 11"),
        Compatibility::Heavy => Some("last 5 version\n> 1%\nIE 8"),
    }
}

pub fn compatibility(choice: Compatibility) -> Contribution {
    match browserslist(choice) {
        Some(query) => Contribution::default()
            .document(ConfigDocument::text(ArtifactPath::Browserslist, query)),
        None => Contribution::default(),
    }
}

/// Shared config name of an ESLint style guide
pub fn style_guide(choice: LintStyle) -> Option<&'static str> {
    match choice {
        LintStyle::None => None,
        LintStyle::Google => Some("google"),
        LintStyle::Standard => Some("standard"),
        LintStyle::Airbnb => Some("airbnb"),
    }
}

/// Augment the lint seed with the recommended ruleset and a style guide
pub fn lint(choice: LintStyle, seed: &Value) -> Result<Contribution> {
    let (guide, config_package) = match choice {
        LintStyle::None => return Ok(Contribution::default()),
        LintStyle::Google => ("google", "eslint-config-google"),
        LintStyle::Standard => ("standard", "eslint-config-standard"),
        LintStyle::Airbnb => ("airbnb", "eslint-config-airbnb"),
    };

    let mut doc = seed.clone();
    let extends = array_field(&mut doc, "extends")?;
    push_unique(extends, json!("eslint:recommended"));
    push_unique(extends, json!(guide));

    Ok(Contribution::default()
        .document(ConfigDocument::json(ArtifactPath::Eslint, doc))
        .dev(&[
            "eslint",
            "eslint-plugin-import",
            "eslint-plugin-node",
            "eslint-plugin-promise",
            "eslint-plugin-standard",
        ])
        .dev(&[config_package]))
}

pub fn version_control(choice: VersionControl) -> Contribution {
    match choice {
        VersionControl::None => Contribution::default(),
        VersionControl::Git => Contribution {
            init_repository: true,
            ..Contribution::default()
        }
        .document(ConfigDocument::text(
            ArtifactPath::Gitignore,
            "node_modules\n.cache\ndist",
        )),
    }
}

fn preset_env() -> Value {
    json!({
        "stage": 3,
        "features": {
            "nesting-rules": true,
            "case-insensitive-attributes": true,
            "hexadecimal-alpha-notation": true,
            "place-properties": true
        }
    })
}

pub fn post_processing(choice: PostCss) -> Contribution {
    let (plugins, packages): (Value, &[&'static str]) = match choice {
        PostCss::None => return Contribution::default(),
        PostCss::Autoprefixer => (json!({ "autoprefixer": true }), &["autoprefixer"]),
        PostCss::PresetEnv => (
            json!({
                "postcss-preset-env": preset_env(),
                "autoprefixer": true
            }),
            &["autoprefixer", "postcss-preset-env"],
        ),
        PostCss::Full => (
            json!({
                "postcss-mixins": true,
                "postcss-preset-env": preset_env(),
                "postcss-font-magician": true,
                "autoprefixer": true,
                "postcss-clean": true
            }),
            &[
                "autoprefixer",
                "postcss-preset-env",
                "postcss-mixins",
                "postcss-font-magician",
                "postcss-clean",
            ],
        ),
    };

    Contribution::default()
        .document(ConfigDocument::json(
            ArtifactPath::Postcss,
            json!({ "plugins": plugins }),
        ))
        .dev(packages)
}

/// Shared config package for a stylelint level
pub fn stylelint_config(choice: StyleLint) -> Option<&'static str> {
    match choice {
        StyleLint::None => None,
        StyleLint::Standard => Some("stylelint-config-standard"),
        StyleLint::Recommended => Some("stylelint-config-recommended"),
        StyleLint::Prettier => Some("stylelint-config-prettier"),
    }
}

pub fn style_lint(choice: StyleLint) -> Contribution {
    let Some(package) = stylelint_config(choice) else {
        return Contribution::default();
    };

    let doc = json!({
        "extends": [package],
        "rules": {
            "selector-nested-pattern": "^&",
            "indentation": 2,
            "no-descending-specificity": null,
            "no-eol-whitespace": null,
            "declaration-empty-line-before": null
        }
    });

    Contribution::default()
        .document(ConfigDocument::json(ArtifactPath::Stylelint, doc))
        .dev(&[package])
}

const PARCEL_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "parcel serve src/index.html --open"),
    ("watch", "parcel watch src/index.html"),
    (
        "build",
        "rm -rf build/* && parcel build src/index.html -d build --global global --public-url /",
    ),
    ("test", "npx eslint src/*"),
    ("clean:cache", "rm -rf .cache dist build"),
    (
        "clean:all",
        "rm -rf node_modules package-lock.json .cache dist build",
    ),
    ("deploy", "git subtree push --prefix build origin gh-pages"),
];

const DEV_SERVER_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "live-server src/index.html"),
    ("test", "npx eslint src/*"),
];

pub fn bundler(choice: Bundler) -> Contribution {
    match choice {
        Bundler::None => Contribution::default()
            .with(Bucket::Global, &["live-server"])
            .scripts(DEV_SERVER_SCRIPTS),
        Bundler::Parcel => Contribution::default()
            .with(Bucket::Global, &["parcel-bundler"])
            .scripts(PARCEL_SCRIPTS),
        Bundler::ParcelVisualiser => bundler(Bundler::Parcel)
            .dev(&["parcel-plugin-bundle-visualiser"]),
    }
}

pub fn framework(choice: Framework) -> Contribution {
    match choice {
        Framework::None => Contribution::default(),
        Framework::Vue => Contribution::default()
            .dev(&[
                "@vue/component-compiler-utils",
                "vue-hot-reload-api",
                "vue-template-compiler",
            ])
            .with(Bucket::Runtime, &["vue"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::document::DocumentBody;

    fn dev_names(contribution: &Contribution) -> Vec<&'static str> {
        contribution
            .dependencies
            .iter()
            .filter(|(bucket, _)| *bucket == Bucket::Development)
            .map(|(_, name)| *name)
            .collect()
    }

    fn seed() -> Value {
        json!({ "extends": [], "rules": {} })
    }

    #[test]
    fn test_disabled_rules_contribute_nothing() {
        assert_eq!(transpilation(Transpilation::None), Contribution::default());
        assert_eq!(compatibility(Compatibility::None), Contribution::default());
        assert_eq!(
            lint(LintStyle::None, &seed()).unwrap(),
            Contribution::default()
        );
        assert_eq!(version_control(VersionControl::None), Contribution::default());
        assert_eq!(post_processing(PostCss::None), Contribution::default());
        assert_eq!(style_lint(StyleLint::None), Contribution::default());
        assert_eq!(framework(Framework::None), Contribution::default());
    }

    #[test]
    fn test_compatibility_payloads() {
        let basic = compatibility(Compatibility::Basic);
        assert_eq!(
            basic.documents[0].body,
            DocumentBody::Text("> 5%".to_string())
        );

        let strong = compatibility(Compatibility::Strong);
        assert_eq!(
            strong.documents[0].render().unwrap().lines().collect::<Vec<_>>(),
            vec!["last 2 version", "> 1%", "IE 11"]
        );
        assert_eq!(browserslist(Compatibility::Heavy), Some("last 5 version\n> 1%\nIE 8"));
    }

    #[test]
    fn test_lint_appends_recommended_then_guide() {
        let contribution = lint(LintStyle::Airbnb, &seed()).unwrap();
        let doc = &contribution.documents[0];
        assert_eq!(doc.path, ArtifactPath::Eslint);
        match &doc.body {
            DocumentBody::Json(value) => {
                assert_eq!(value["extends"], json!(["eslint:recommended", "airbnb"]));
            }
            other => panic!("unexpected body: {other:?}"),
        }
        let dev = dev_names(&contribution);
        assert_eq!(dev.first(), Some(&"eslint"));
        assert_eq!(dev.last(), Some(&"eslint-config-airbnb"));
    }

    #[test]
    fn test_lint_leaves_seed_untouched() {
        let base = seed();
        lint(LintStyle::Google, &base).unwrap();
        assert_eq!(base, seed());
    }

    #[test]
    fn test_git_flags_repository_init() {
        let contribution = version_control(VersionControl::Git);
        assert!(contribution.init_repository);
        assert_eq!(contribution.documents[0].path, ArtifactPath::Gitignore);
    }

    #[test]
    fn test_postcss_plugin_sets_grow() {
        let basic = post_processing(PostCss::Autoprefixer);
        assert_eq!(dev_names(&basic), vec!["autoprefixer"]);

        let full = post_processing(PostCss::Full);
        assert_eq!(
            dev_names(&full),
            vec![
                "autoprefixer",
                "postcss-preset-env",
                "postcss-mixins",
                "postcss-font-magician",
                "postcss-clean"
            ]
        );
        let rendered = full.documents[0].render().unwrap();
        let mixins = rendered.find("postcss-mixins").unwrap();
        let clean = rendered.find("postcss-clean").unwrap();
        assert!(mixins < clean);
        assert!(rendered.contains("\"stage\": 3"));
    }

    #[test]
    fn test_stylelint_extends_package() {
        let contribution = style_lint(StyleLint::Recommended);
        match &contribution.documents[0].body {
            DocumentBody::Json(value) => {
                assert_eq!(value["extends"], json!(["stylelint-config-recommended"]));
                assert_eq!(value["rules"]["indentation"], json!(2));
                assert!(value["rules"]["no-eol-whitespace"].is_null());
            }
            other => panic!("unexpected body: {other:?}"),
        }
        assert_eq!(dev_names(&contribution), vec!["stylelint-config-recommended"]);
    }

    #[test]
    fn test_bundler_none_uses_dev_server() {
        let contribution = bundler(Bundler::None);
        let scripts: Vec<_> = contribution.scripts.iter().map(|(n, _)| *n).collect();
        assert_eq!(scripts, vec!["dev", "test"]);
        assert_eq!(
            contribution.dependencies,
            vec![(Bucket::Global, "live-server")]
        );
    }

    #[test]
    fn test_bundler_visualiser_extends_parcel() {
        let contribution = bundler(Bundler::ParcelVisualiser);
        assert_eq!(contribution.scripts.len(), PARCEL_SCRIPTS.len());
        assert!(contribution
            .dependencies
            .contains(&(Bucket::Global, "parcel-bundler")));
        assert_eq!(
            dev_names(&contribution),
            vec!["parcel-plugin-bundle-visualiser"]
        );
        assert!(dev_names(&bundler(Bundler::Parcel)).is_empty());
    }

    #[test]
    fn test_vue_adds_runtime_dependency() {
        let contribution = framework(Framework::Vue);
        assert!(contribution.dependencies.contains(&(Bucket::Runtime, "vue")));
        assert_eq!(dev_names(&contribution).len(), 3);
    }
}
