//! `LICENSE` from the license catalog

use std::path::{Path, PathBuf};

use super::{write_artifact, LICENSE_FILE};
use crate::catalog::Catalog;
use crate::error::ArtifactError;

/// License key meaning "do not write a LICENSE file"
pub const NO_LICENSE: &str = "None";

pub fn is_no_license(key: &str) -> bool {
    key == NO_LICENSE
}

/// Fetch the text of license `key` and write it to `dir/LICENSE`.
///
/// Returns `Ok(None)` without touching the catalog or the filesystem when
/// `key` is [`NO_LICENSE`].
pub fn create_license(
    catalog: &dyn Catalog,
    dir: &Path,
    key: &str,
) -> Result<Option<PathBuf>, ArtifactError> {
    if is_no_license(key) {
        return Ok(None);
    }

    let body = catalog.license_text(key)?;
    write_artifact(dir, LICENSE_FILE, &body).map(Some)
}
