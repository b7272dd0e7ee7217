//! `.gitignore` from a catalog template

use std::path::{Path, PathBuf};

use super::{write_artifact, GITIGNORE_FILE};
use crate::catalog::Catalog;
use crate::error::ArtifactError;

/// Fetch `template` and write it verbatim to `dir/.gitignore`.
pub fn create_gitignore(
    catalog: &dyn Catalog,
    dir: &Path,
    template: &str,
) -> Result<PathBuf, ArtifactError> {
    let content = catalog.gitignore_template(template)?;
    write_artifact(dir, GITIGNORE_FILE, &content)
}
