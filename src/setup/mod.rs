//! Setup workflows
//!
//! Two fixed workflows share one orchestrator:
//! - **Express**: remote name, remote URL, branch; then init-if-needed,
//!   remote add, branch create.
//! - **Manual**: express, plus `.gitignore`, `LICENSE`, `README.md` and an
//!   optional initial commit.
//!
//! # Failure policy
//!
//! Bootstrap steps (init, remote add, branch create) are fatal: the first
//! failure stops the run with [`SetupOutcome::Aborted`] and nothing already
//! applied is undone. Everything after bootstrap (catalog lookups, artifact
//! writes, the commit) is best-effort: failures are reported as warnings and
//! the run still ends in [`RunState::Done`](crate::session::RunState::Done).
//!
//! # Example
//!
//! ```no_run
//! use git_setup::catalog::GithubCatalog;
//! use git_setup::git::SystemGit;
//! use git_setup::prompt::TerminalPrompter;
//! use git_setup::setup::{self, SetupContext};
//! use git_setup::Config;
//!
//! let config = Config::load(None)?;
//! let git = SystemGit::new(&config.workdir);
//! let catalog = GithubCatalog::new(&config)?;
//! let ctx = SetupContext::new(&config.workdir, &git, &catalog);
//!
//! let outcome = setup::run_manual(&ctx, &mut TerminalPrompter::new())?;
//! assert!(!outcome.is_aborted());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod collect;
mod run;

use std::path::Path;

use crate::catalog::{Catalog, LazyList};
use crate::error::SetupError;
use crate::git::Git;
use crate::prompt::Prompter;
use crate::session::{RunState, SetupOutcome};

use self::run::Run;

pub use self::collect::{
    DEFAULT_BRANCH, DEFAULT_DESCRIPTION, DEFAULT_LICENSE, DEFAULT_REMOTE,
};

/// Collaborators for one run
pub struct SetupContext<'a> {
    pub workdir: &'a Path,
    pub git: &'a dyn Git,
    pub catalog: &'a dyn Catalog,
}

impl<'a> SetupContext<'a> {
    pub fn new(workdir: &'a Path, git: &'a dyn Git, catalog: &'a dyn Catalog) -> Self {
        Self {
            workdir,
            git,
            catalog,
        }
    }
}

/// Express setup: three questions, three git steps.
///
/// # Errors
///
/// Returns an error if the prompt layer fails or an answer is empty where it
/// must not be. Bootstrap failures are not errors here; they come back as
/// [`SetupOutcome::Aborted`].
pub fn run_express(
    ctx: &SetupContext<'_>,
    prompter: &mut dyn Prompter,
) -> Result<SetupOutcome, SetupError> {
    let mut run = Run::new(ctx);

    run.enter(RunState::CollectingAnswers);
    let session = collect::express_answers(prompter)?;

    if let Err(error) = run.bootstrap(&session) {
        return Ok(run.abort(session, error));
    }
    Ok(run.finish(session))
}

/// Manual setup: express, then artifacts and an optional initial commit.
///
/// # Errors
///
/// Same as [`run_express`].
pub fn run_manual(
    ctx: &SetupContext<'_>,
    prompter: &mut dyn Prompter,
) -> Result<SetupOutcome, SetupError> {
    let mut run = Run::new(ctx);
    let mut templates = LazyList::new();
    let mut licenses = LazyList::new();

    run.enter(RunState::CollectingAnswers);
    let session = collect::manual_answers(ctx, prompter, &templates, &licenses)?;
    run.record_catalog_failures(&mut templates, &mut licenses);

    if let Err(error) = run.bootstrap(&session) {
        return Ok(run.abort(session, error));
    }

    run.generate_artifacts(&session);
    run.commit(&session);
    Ok(run.finish(session))
}
