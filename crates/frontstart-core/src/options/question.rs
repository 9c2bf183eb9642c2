//! The fixed question catalogue and its option menus

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configurable concern of the generated project, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Question {
    #[serde(rename = "babel")]
    Transpilation,
    #[serde(rename = "compatibility")]
    Compatibility,
    #[serde(rename = "eslint")]
    Lint,
    #[serde(rename = "git")]
    VersionControl,
    #[serde(rename = "postcss")]
    PostProcessing,
    #[serde(rename = "stylelint")]
    StyleLint,
    #[serde(rename = "bundler")]
    Bundler,
    #[serde(rename = "framework")]
    Framework,
    #[serde(rename = "install")]
    AutoInstall,
}

impl Question {
    /// Every question, in the order rules are evaluated
    pub const ALL: [Question; 9] = [
        Question::Transpilation,
        Question::Compatibility,
        Question::Lint,
        Question::VersionControl,
        Question::PostProcessing,
        Question::StyleLint,
        Question::Bundler,
        Question::Framework,
        Question::AutoInstall,
    ];

    /// Stable key used by answer files and `--set` flags
    pub fn key(&self) -> &'static str {
        match self {
            Question::Transpilation => "babel",
            Question::Compatibility => "compatibility",
            Question::Lint => "eslint",
            Question::VersionControl => "git",
            Question::PostProcessing => "postcss",
            Question::StyleLint => "stylelint",
            Question::Bundler => "bundler",
            Question::Framework => "framework",
            Question::AutoInstall => "install",
        }
    }

    /// Look up a question by key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Question> {
        Question::ALL
            .into_iter()
            .find(|q| q.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Transpilation => "Do you want to install Babel?",
            Question::Compatibility => "Which browser compatibility should the project target?",
            Question::Lint => "Do you want to check JavaScript code quality?",
            Question::VersionControl => "Do you want to use Git in your project?",
            Question::PostProcessing => "Do you want to use PostCSS in your project?",
            Question::StyleLint => "Do you want to check CSS code quality?",
            Question::Bundler => "Which bundler do you want to use?",
            Question::Framework => "Are you going to use a JavaScript framework?",
            Question::AutoInstall => "Do you want to install the project packages automatically?",
        }
    }

    /// Menu labels; a label's position is the option level
    pub fn menu(&self) -> &'static [&'static str] {
        match self {
            Question::Transpilation => &["No", "Babel + preset-env (recommended)"],
            Question::Compatibility => &[
                "No",
                "Basic (>5%)",
                "Medium (>2% + last 1 + IE11)",
                "Strong (>1% + last 2 + IE11)",
                "Heavy (>1% + last 5 + IE8)",
            ],
            Question::Lint => &[
                "No",
                "Yes, with eslint-config-google",
                "Yes, with eslint-config-standard",
                "Yes, with eslint-config-airbnb",
            ],
            Question::VersionControl => &["No", "Yes, initialize it"],
            Question::PostProcessing => &[
                "No",
                "Yes (Autoprefixer)",
                "Yes (Autoprefixer + Preset-env)",
                "Yes (Autoprefixer + Preset-env + Mixins + Font Magician + CleanCSS)",
            ],
            Question::StyleLint => &[
                "No",
                "Yes, stylelint-config-standard",
                "Yes, stylelint-config-recommended",
                "Yes, stylelint-config-prettier",
            ],
            Question::Bundler => &["None", "Parcel", "Parcel (with Bundle-Visualiser)"],
            Question::Framework => &["No", "Yes, Vue.js"],
            Question::AutoInstall => &["No", "Yes"],
        }
    }

    /// Level pre-selected in the prompt and used by `--yes`
    pub fn default_level(&self) -> usize {
        match self {
            Question::Transpilation => 1,
            Question::Compatibility => 2,
            Question::Lint => 2,
            Question::VersionControl => 1,
            Question::PostProcessing => 3,
            Question::StyleLint => 1,
            Question::Bundler => 1,
            Question::Framework => 0,
            Question::AutoInstall => 0,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_menu() {
        for question in Question::ALL {
            assert!(
                question.default_level() < question.menu().len(),
                "default for {} is out of range",
                question
            );
        }
    }

    #[test]
    fn test_level_zero_is_disabled_label() {
        for question in Question::ALL {
            let first = question.menu()[0];
            assert!(first == "No" || first == "None", "{} starts with {}", question, first);
        }
    }

    #[test]
    fn test_from_key_round_trips() {
        for question in Question::ALL {
            assert_eq!(Question::from_key(question.key()), Some(question));
        }
        assert_eq!(Question::from_key("ESLint"), Some(Question::Lint));
        assert_eq!(Question::from_key("webpack"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let yaml = serde_yaml::to_string(&Question::PostProcessing).unwrap();
        assert_eq!(yaml.trim(), "postcss");
    }
}
