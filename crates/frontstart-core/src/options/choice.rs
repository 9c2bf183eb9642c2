//! Typed options, one enum per question
//!
//! Variant order mirrors the question's menu, so the discriminant of each
//! variant is its level. Level 0 is always the disabled option.

use super::question::Question;
use crate::error::{ComposeError, Result};
use serde::Serialize;

/// A typed answer to one question
pub trait Choice: Copy + Eq + std::fmt::Debug + 'static {
    /// The question this enum answers
    const QUESTION: Question;

    /// All variants in menu order
    const VARIANTS: &'static [Self];

    /// Menu position of this option
    fn level(self) -> usize;

    /// Resolve a menu position, rejecting anything outside the menu
    fn from_level(level: usize) -> Result<Self> {
        Self::VARIANTS
            .get(level)
            .copied()
            .ok_or(ComposeError::InvalidLevel {
                question: Self::QUESTION,
                level,
                options: Self::VARIANTS.len(),
            })
    }

    fn is_enabled(self) -> bool {
        self.level() > 0
    }

    fn label(self) -> &'static str {
        Self::QUESTION.menu()[self.level()]
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident for $question:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Choice for $name {
            const QUESTION: Question = Question::$question;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn level(self) -> usize {
                self as usize
            }
        }
    };
}

choice! {
    /// JavaScript transpilation
    Transpilation for Transpilation { None, PresetEnv }
}

choice! {
    /// Browser compatibility target, from narrowest to broadest
    Compatibility for Compatibility { None, Basic, Medium, Strong, Heavy }
}

choice! {
    /// ESLint style guide
    LintStyle for Lint { None, Google, Standard, Airbnb }
}

choice! {
    VersionControl for VersionControl { None, Git }
}

choice! {
    /// PostCSS plugin set, each level a superset of the previous
    PostCss for PostProcessing {
        None,
        Autoprefixer,
        PresetEnv,
        /// Mixins, font magician and clean-css on top of preset-env
        Full,
    }
}

choice! {
    /// Shared stylelint config package
    StyleLint for StyleLint { None, Standard, Recommended, Prettier }
}

choice! {
    Bundler for Bundler { None, Parcel, ParcelVisualiser }
}

choice! {
    Framework for Framework { None, Vue }
}

choice! {
    /// Whether the package manager really installs or only writes the lockfile
    AutoInstall for AutoInstall {
        /// `--package-lock-only`: lockfile is resolved, nothing is installed
        LockfileOnly,
        Install,
    }
}
