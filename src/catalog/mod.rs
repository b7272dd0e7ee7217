//! Remote catalog of `.gitignore` templates and licenses
//!
//! [`Catalog`] is the seam between the setup workflow and the network.
//! [`GithubCatalog`] talks to the GitHub endpoints; tests substitute an
//! in-memory catalog.

mod github;
mod lazy;

pub use github::GithubCatalog;
pub use lazy::LazyList;

use serde::Deserialize;

use crate::artifacts::license::NO_LICENSE;
use crate::error::CatalogError;

/// One entry of the license list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl License {
    /// The "no license" entry offered ahead of the catalog's licenses
    pub fn none() -> Self {
        Self {
            key: NO_LICENSE.to_string(),
            name: "None (no LICENSE file)".to_string(),
            spdx_id: None,
            url: None,
        }
    }
}

/// Read-only access to templates and licenses
pub trait Catalog {
    /// Names of all available `.gitignore` templates
    fn gitignore_templates(&self) -> Result<Vec<String>, CatalogError>;

    /// Raw text of one `.gitignore` template
    fn gitignore_template(&self, name: &str) -> Result<String, CatalogError>;

    /// All licenses, in catalog order
    fn licenses(&self) -> Result<Vec<License>, CatalogError>;

    /// Full text of one license
    fn license_text(&self, key: &str) -> Result<String, CatalogError>;
}

/// License candidates for the selection prompt: the sentinel first, then the catalog
pub fn license_candidates(catalog: &dyn Catalog) -> Result<Vec<License>, CatalogError> {
    let mut candidates = vec![License::none()];
    candidates.extend(
        catalog
            .licenses()?
            .into_iter()
            .filter(|license| !license.key.eq_ignore_ascii_case(NO_LICENSE)),
    );
    Ok(candidates)
}
