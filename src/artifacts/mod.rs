//! Files produced by manual setup: `.gitignore`, `LICENSE`, `README.md`.
//!
//! Each generator is independent of the others. Failures come back as
//! [`ArtifactError`] so the caller can warn and carry on.

pub mod gitignore;
pub mod license;
pub mod readme;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ArtifactError;

pub const GITIGNORE_FILE: &str = ".gitignore";
pub const LICENSE_FILE: &str = "LICENSE";
pub const README_FILE: &str = "README.md";

/// Write `content` to `dir/name`, replacing any existing file.
pub fn write_artifact(dir: &Path, name: &str, content: &str) -> Result<PathBuf, ArtifactError> {
    let path = dir.join(name);
    fs::write(&path, content).map_err(|source| ArtifactError::Filesystem {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
