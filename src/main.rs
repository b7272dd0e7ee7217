use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_setup::catalog::GithubCatalog;
use git_setup::git::SystemGit;
use git_setup::prompt::TerminalPrompter;
use git_setup::setup::{self, SetupContext};
use git_setup::{docs, exit_codes, preflight, report, Config, SetupError};

#[derive(Parser)]
#[command(
    name = "git-setup",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Quick repository setup: remote, main branch, .gitignore, license, README",
    long_about = None,
    disable_help_flag = true
)]
struct Cli {
    /// Express setup: remote and branch only (default)
    #[arg(short, long, conflicts_with = "manual")]
    express: bool,

    /// Manual setup: also .gitignore, LICENSE, README.md and an initial commit
    #[arg(short, long)]
    manual: bool,

    /// Show documentation
    #[arg(short, long)]
    documentation: bool,

    /// Show documentation
    #[arg(short, long)]
    help: bool,

    /// Run in this directory instead of the current one
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    if cli.help || cli.documentation {
        docs::print_usage();
        return;
    }

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report::error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<SetupError>()
                .map_or(exit_codes::FAILURE, SetupError::exit_code);
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    preflight::ensure_git_available()?;

    let config = Config::load(cli.dir)?;
    let git = SystemGit::new(&config.workdir);
    let catalog = GithubCatalog::new(&config)?;
    let ctx = SetupContext::new(&config.workdir, &git, &catalog);

    let mut prompter = TerminalPrompter::new();
    if !prompter.is_interactive() {
        return Err(SetupError::Prompt("git-setup needs an interactive terminal".to_string()).into());
    }

    let (outcome, banner) = if cli.manual {
        (setup::run_manual(&ctx, &mut prompter)?, "Git repository setup completed!")
    } else {
        (setup::run_express(&ctx, &mut prompter)?, "Express setup completed!")
    };

    report::outcome(&outcome, banner);
    Ok(if outcome.is_aborted() {
        exit_codes::FAILURE
    } else {
        exit_codes::SUCCESS
    })
}
