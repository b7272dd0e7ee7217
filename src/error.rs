//! Error types for git-setup.
//!
//! Two tiers:
//! - [`SetupError`] is fatal. The run stops and the process exits non-zero.
//! - [`ArtifactError`] is recoverable. It becomes a [`Warning`](crate::session::Warning)
//!   and the run moves on to the next step.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;
use crate::session::{FailureKind, Step};

/// Fatal failure of a setup run.
#[derive(Error, Debug)]
pub enum SetupError {
    /// `git` could not be found on PATH.
    #[error("git is not installed or not on PATH (git-setup requires Git installed on your system)")]
    GitUnavailable,

    /// The prompt layer failed (closed terminal, interrupted input, ...).
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A collected answer breaks a session invariant.
    #[error("{0}")]
    InvalidAnswer(String),

    /// One of the three bootstrap steps failed.
    #[error("{step} failed: {message}")]
    Bootstrap { step: Step, message: String },
}

impl SetupError {
    /// Exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    pub(crate) fn prompt(err: anyhow::Error) -> Self {
        SetupError::Prompt(format!("{err:#}"))
    }

    pub(crate) fn bootstrap(step: Step, err: anyhow::Error) -> Self {
        debug_assert!(step.is_bootstrap(), "{step} is not a bootstrap step");
        SetupError::Bootstrap {
            step,
            message: format!("{err:#}"),
        }
    }
}

/// Failure talking to the template/license catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Recoverable failure producing one artifact file.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("could not fetch content: {0}")]
    Network(#[from] CatalogError),

    #[error("could not write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    /// Nature of the failure, used when reporting the warning.
    pub fn kind(&self) -> FailureKind {
        match self {
            ArtifactError::Network(_) => FailureKind::Network,
            ArtifactError::Filesystem { .. } => FailureKind::Filesystem,
        }
    }
}
