//! Setup session: the answers collected during one run, and what became of them.

use std::fmt;

use crate::artifacts::license::NO_LICENSE;
use crate::error::SetupError;

/// Answers collected for one run. Populated as prompts resolve, consumed once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupSession {
    pub remote_name: String,
    pub remote_url: String,
    pub branch_name: String,
    pub add_gitignore: bool,
    /// `None` when no template was picked (or the catalog was unavailable).
    pub gitignore_template: Option<String>,
    /// License key from the catalog, or the `"None"` sentinel.
    pub license: Option<String>,
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub initial_commit: bool,
}

impl SetupSession {
    /// Remote URL and branch name must be non-empty before any git command uses them.
    pub fn validate_bootstrap(&self) -> Result<(), SetupError> {
        if self.remote_name.trim().is_empty() {
            return Err(SetupError::InvalidAnswer("Remote name is required".to_string()));
        }
        if self.remote_url.trim().is_empty() {
            return Err(SetupError::InvalidAnswer("Remote URL is required".to_string()));
        }
        if self.branch_name.trim().is_empty() {
            return Err(SetupError::InvalidAnswer("Branch name is required".to_string()));
        }
        Ok(())
    }

    /// License key, with the sentinel standing in for "not chosen".
    pub fn license_key(&self) -> &str {
        self.license.as_deref().unwrap_or(NO_LICENSE)
    }

    /// Project name and description, when both are non-empty.
    pub fn readme_fields(&self) -> Option<(&str, &str)> {
        let name = self.project_name.as_deref().filter(|s| !s.trim().is_empty())?;
        let description = self.description.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((name, description))
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    CollectingAnswers,
    Bootstrapping,
    GeneratingArtifacts,
    Committing,
    Done,
    Aborted,
}

impl RunState {
    /// Whether a run may move from `self` to `next`.
    pub fn can_advance_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, CollectingAnswers)
                | (CollectingAnswers, Bootstrapping)
                | (Bootstrapping, GeneratingArtifacts)
                | (Bootstrapping, Done)
                | (Bootstrapping, Aborted)
                | (GeneratingArtifacts, Committing)
                | (GeneratingArtifacts, Done)
                | (Committing, Done)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::CollectingAnswers => "collecting answers",
            RunState::Bootstrapping => "bootstrapping",
            RunState::GeneratingArtifacts => "generating artifacts",
            RunState::Committing => "committing",
            RunState::Done => "done",
            RunState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// A side-effecting step of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Init,
    AddRemote,
    SwitchBranch,
    TemplateCatalog,
    LicenseCatalog,
    Gitignore,
    License,
    Readme,
    Commit,
}

impl Step {
    /// Bootstrap steps abort the run on failure.
    pub fn is_bootstrap(self) -> bool {
        matches!(self, Step::Init | Step::AddRemote | Step::SwitchBranch)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Init => "git init",
            Step::AddRemote => "git remote add",
            Step::SwitchBranch => "git switch -c",
            Step::TemplateCatalog => "fetching .gitignore templates",
            Step::LicenseCatalog => "fetching licenses",
            Step::Gitignore => "creating .gitignore",
            Step::License => "creating LICENSE",
            Step::Readme => "creating README.md",
            Step::Commit => "initial commit",
        };
        f.write_str(name)
    }
}

/// What kind of thing went wrong in a non-fatal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Filesystem,
    Git,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Network => "network",
            FailureKind::Filesystem => "filesystem",
            FailureKind::Git => "git",
        };
        f.write_str(name)
    }
}

/// A recorded non-fatal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub step: Step,
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} error): {}", self.step, self.kind, self.message)
    }
}

/// Result of a setup run.
#[derive(Debug)]
pub enum SetupOutcome {
    /// Every bootstrap step succeeded. Artifact or commit failures, if any, are listed.
    CompletedWithWarnings {
        session: SetupSession,
        warnings: Vec<Warning>,
    },
    /// A bootstrap step failed. Nothing after it ran; nothing before it was rolled back.
    Aborted {
        session: SetupSession,
        error: SetupError,
    },
}

impl SetupOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, SetupOutcome::Aborted { .. })
    }

    pub fn final_state(&self) -> RunState {
        match self {
            SetupOutcome::CompletedWithWarnings { .. } => RunState::Done,
            SetupOutcome::Aborted { .. } => RunState::Aborted,
        }
    }

    pub fn session(&self) -> &SetupSession {
        match self {
            SetupOutcome::CompletedWithWarnings { session, .. } => session,
            SetupOutcome::Aborted { session, .. } => session,
        }
    }

    pub fn warnings(&self) -> &[Warning] {
        match self {
            SetupOutcome::CompletedWithWarnings { warnings, .. } => warnings,
            SetupOutcome::Aborted { .. } => &[],
        }
    }
}
