//! Preflight checks - ensure the system can run a setup.

use std::path::PathBuf;

use crate::error::SetupError;

/// Locate the `git` binary, failing before any prompt is shown.
pub fn ensure_git_available() -> Result<PathBuf, SetupError> {
    which::which("git").map_err(|_| SetupError::GitUnavailable)
}
