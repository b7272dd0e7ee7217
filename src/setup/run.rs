//! Executes the side-effecting steps of a run and tracks its state.

use crate::artifacts::{gitignore, license, readme};
use crate::catalog::{LazyList, License};
use crate::error::{ArtifactError, CatalogError, SetupError};
use crate::git::INITIAL_COMMIT_MESSAGE;
use crate::report;
use crate::session::{FailureKind, RunState, SetupOutcome, SetupSession, Step, Warning};

use super::SetupContext;

pub(super) struct Run<'c, 'a> {
    ctx: &'c SetupContext<'a>,
    state: RunState,
    warnings: Vec<Warning>,
}

impl<'c, 'a> Run<'c, 'a> {
    pub(super) fn new(ctx: &'c SetupContext<'a>) -> Self {
        Self {
            ctx,
            state: RunState::Idle,
            warnings: Vec::new(),
        }
    }

    pub(super) fn enter(&mut self, next: RunState) {
        debug_assert!(!self.state.is_terminal(), "run already {}", self.state);
        debug_assert!(
            self.state.can_advance_to(next),
            "invalid transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }

    /// Init if needed, add the remote, create the branch. Stops at the first failure.
    pub(super) fn bootstrap(&mut self, session: &SetupSession) -> Result<(), SetupError> {
        self.enter(RunState::Bootstrapping);
        session.validate_bootstrap()?;
        let git = self.ctx.git;

        if !git.has_repository() {
            report::step("Initializing git repository...");
            git.init().map_err(|e| SetupError::bootstrap(Step::Init, e))?;
        }

        report::step("Adding remote repository...");
        git.add_remote(&session.remote_name, &session.remote_url)
            .map_err(|e| SetupError::bootstrap(Step::AddRemote, e))?;

        report::step(&format!("Setting up {} branch...", session.branch_name));
        git.switch_create(&session.branch_name)
            .map_err(|e| SetupError::bootstrap(Step::SwitchBranch, e))?;

        Ok(())
    }

    /// `.gitignore`, `LICENSE`, `README.md`. Each failure is a warning; none stops the others.
    pub(super) fn generate_artifacts(&mut self, session: &SetupSession) {
        self.enter(RunState::GeneratingArtifacts);
        let (catalog, workdir) = (self.ctx.catalog, self.ctx.workdir);

        if session.add_gitignore {
            if let Some(template) = &session.gitignore_template {
                match gitignore::create_gitignore(catalog, workdir, template) {
                    Ok(_) => report::success("Created .gitignore file"),
                    Err(e) => self.artifact_warning(Step::Gitignore, e),
                }
            }
        }

        let license_key = session.license_key();
        match license::create_license(catalog, workdir, license_key) {
            Ok(Some(_)) => report::success("Created LICENSE file"),
            Ok(None) => {}
            Err(e) => self.artifact_warning(Step::License, e),
        }

        if let Some((name, description)) = session.readme_fields() {
            match readme::create_readme(workdir, name, description, license_key) {
                Ok(_) => report::success("Created README.md file"),
                Err(e) => self.artifact_warning(Step::Readme, e),
            }
        }
    }

    /// `git add .` and `git commit`, when asked for. Failure is a warning.
    pub(super) fn commit(&mut self, session: &SetupSession) {
        if !session.initial_commit {
            return;
        }
        self.enter(RunState::Committing);
        report::step("Creating initial commit...");

        let git = self.ctx.git;
        match git.add_all().and_then(|()| git.commit(INITIAL_COMMIT_MESSAGE)) {
            Ok(()) => report::success("Created initial commit"),
            Err(e) => self.warn(Step::Commit, FailureKind::Git, format!("{e:#}")),
        }
    }

    /// Turn failed catalog loads into warnings (each list is loaded at most once).
    pub(super) fn record_catalog_failures(
        &mut self,
        templates: &mut LazyList<String>,
        licenses: &mut LazyList<License>,
    ) {
        if let Some(e) = templates.take_error() {
            self.catalog_warning(Step::TemplateCatalog, e);
        }
        if let Some(e) = licenses.take_error() {
            self.catalog_warning(Step::LicenseCatalog, e);
        }
    }

    pub(super) fn finish(mut self, session: SetupSession) -> SetupOutcome {
        self.enter(RunState::Done);
        SetupOutcome::CompletedWithWarnings {
            session,
            warnings: self.warnings,
        }
    }

    pub(super) fn abort(mut self, session: SetupSession, error: SetupError) -> SetupOutcome {
        self.enter(RunState::Aborted);
        SetupOutcome::Aborted { session, error }
    }

    fn artifact_warning(&mut self, step: Step, error: ArtifactError) {
        self.warn(step, error.kind(), error.to_string());
    }

    fn catalog_warning(&mut self, step: Step, error: CatalogError) {
        self.warn(step, FailureKind::Network, error.to_string());
    }

    fn warn(&mut self, step: Step, kind: FailureKind, message: String) {
        debug_assert!(!step.is_bootstrap(), "{step} failures abort the run");
        let warning = Warning {
            step,
            kind,
            message,
        };
        report::warning(&warning);
        self.warnings.push(warning);
    }
}
