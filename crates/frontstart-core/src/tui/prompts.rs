//! Charm-style CLI prompts using cliclack

use crate::apply::{self, PackageManager, MANIFEST_FILE};
use crate::compose::{compose, Composition};
use crate::config::{self, AnswerArgs};
use crate::options::{AnswerSet, Question, RawAnswers};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to set up
    pub directory: Option<PathBuf>,

    /// Answers file, `--set` flags and seed directory
    pub answers: AnswerArgs,

    /// Auto-confirm all prompts and take defaults for unanswered questions
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("frontstart")?;

    // Step 1: Select directory
    let project_dir = select_directory(&args)?;

    // Step 2: Load seeds before asking anything, a bad seed dir is fatal
    let seeds = args.answers.seeds()?;

    // Step 3: Collect answers
    let raw = args.answers.raw_answers()?;
    let answers = collect_answers(raw, args.yes)?;

    // Step 4: Compose
    let spinner = cliclack::spinner();
    spinner.start("Organizing files...");
    let composition = match compose(&answers, &seeds) {
        Ok(c) => c,
        Err(e) => {
            spinner.stop("Composition failed");
            return Err(e.into());
        }
    };
    spinner.stop(format!(
        "Composed {} configuration files",
        composition.documents.len()
    ));

    // Step 5: Check tools
    let npm = PackageManager::new(config::npm_program());
    let tools = apply::check_tools(npm.program(), composition.init_repository)?;

    // Step 6: Apply
    apply_composition(&npm, &project_dir, &composition, tools.git_available()).await?;

    // Step 7: Install packages
    install_packages(&npm, &project_dir, &composition).await?;

    // Step 8: Show global packages and next steps
    print_next_steps(&npm, &project_dir, &composition)?;

    Ok(())
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir
        } else {
            let p = PathBuf::from(&input);
            if p.is_absolute() {
                p
            } else {
                current_dir.join(p)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Existing files may be overwritten, so confirm first
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "Directory has {} existing items; configuration files will be overwritten",
                    count
                ))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

/// Ask every question not already answered by a file or flag
fn collect_answers(mut raw: RawAnswers, yes: bool) -> Result<AnswerSet> {
    // Supplied answers fail before the first prompt
    raw.validate()?;

    for question in Question::ALL {
        if let Some(level) = raw.get(question) {
            if let Some(label) = question.menu().get(level) {
                cliclack::log::info(format!("{}: {}", question.prompt(), label))?;
            }
            continue;
        }

        let level = if yes {
            question.default_level()
        } else {
            let mut select = cliclack::select(question.prompt());
            for (idx, label) in question.menu().iter().enumerate() {
                select = select.item(idx, *label, "");
            }
            select.initial_value(question.default_level()).interact()?
        };
        raw.insert(question, level);
    }

    Ok(AnswerSet::resolve(&raw)?)
}

async fn apply_composition(
    npm: &PackageManager,
    project_dir: &Path,
    composition: &Composition,
    git_available: bool,
) -> Result<()> {
    if !project_dir.join(MANIFEST_FILE).exists() {
        cliclack::log::step(format!("Creating {}", MANIFEST_FILE))?;
    }
    if composition.init_repository && !git_available {
        cliclack::log::warning("git is not installed, skipping repository init")?;
    }

    let written = apply::apply_project(npm, project_dir, composition, git_available).await?;
    cliclack::log::success(format!(
        "Wrote {} files in {}",
        written.len(),
        project_dir.display()
    ))?;

    Ok(())
}

async fn install_packages(
    npm: &PackageManager,
    project_dir: &Path,
    composition: &Composition,
) -> Result<()> {
    let lockfile_only = composition.lockfile_only();
    if lockfile_only {
        cliclack::log::info("Packages will be added to the lockfile only (no install)")?;
    }

    let development = composition.dependencies.development.names();
    cliclack::log::step("Configuring dependencies...")?;
    npm.install(project_dir, development, true, lockfile_only)
        .await?;
    cliclack::log::success(format!("{} development packages", development.len()))?;

    let runtime = composition.dependencies.runtime.names();
    if !runtime.is_empty() {
        cliclack::log::step("Configuring production packages...")?;
        npm.install(project_dir, runtime, false, lockfile_only)
            .await?;
        cliclack::log::success(format!("{} production packages", runtime.len()))?;
    }

    Ok(())
}

fn print_next_steps(
    npm: &PackageManager,
    project_dir: &Path,
    composition: &Composition,
) -> Result<()> {
    if let Some(hint) = npm.global_install_hint(composition.dependencies.global.names()) {
        println!();
        println!(
            "{}",
            "Remember to install the following global packages (you may need permissions):".red()
        );
        println!("{}{}", " # ".green(), hint);
    }

    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();
    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    if composition.lockfile_only() {
        steps.push(format!("{} install", npm.program()));
    }
    steps.push(format!("{} run dev", npm.program()));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
