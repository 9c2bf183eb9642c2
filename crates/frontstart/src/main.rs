//! frontstart - Front-end project scaffolding

use anyhow::Result;
use clap::{Parser, Subcommand};
use frontstart_core::config::AnswerArgs;
use frontstart_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frontstart")]
#[command(about = "CLI for scaffolding front-end projects")]
#[command(version)]
pub struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up a front-end project in a directory
    Create(CliCreateArgs),
    /// Print the files, scripts and packages a run would produce, as JSON
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project directory
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Auto-confirm all prompts and accept defaults (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            answers: args.answers,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,
}

/// Initialize tracing on stderr so prompts and JSON output stay clean
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "frontstart=debug,frontstart_core=debug"
    } else {
        "frontstart=warn,frontstart_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Plan(plan_args)) => {
            let report = frontstart_core::plan(&plan_args.answers)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Some(Command::Create(create_args)) => {
            let result = frontstart_core::run(create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = frontstart_core::run(CreateArgs::default()).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_with_answers() {
        let args = Args::parse_from([
            "frontstart",
            "create",
            "-d",
            "site",
            "--set",
            "eslint=1",
            "--set",
            "framework=1",
            "-y",
        ]);
        match args.command {
            Some(Command::Create(create)) => {
                assert_eq!(create.directory, Some(PathBuf::from("site")));
                assert_eq!(create.answers.assignments, vec!["eslint=1", "framework=1"]);
                assert!(create.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plan_with_seed_dir() {
        let args = Args::parse_from(["frontstart", "-v", "plan", "--seed-dir", "seeds"]);
        assert!(args.verbose);
        match args.command {
            Some(Command::Plan(plan)) => {
                assert_eq!(plan.answers.seed_dir, Some(PathBuf::from("seeds")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::parse_from(["frontstart"]);
        assert!(args.command.is_none());
    }
}
