use anyhow::Context;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{Catalog, License};
use crate::config::Config;
use crate::error::CatalogError;

const API_ACCEPT: &str = "application/vnd.github+json";

/// Catalog backed by the GitHub REST API and raw.githubusercontent.com
pub struct GithubCatalog {
    client: HttpClient,
    api_base_url: String,
    raw_base_url: String,
}

#[derive(Deserialize)]
struct LicenseDetail {
    body: String,
}

impl GithubCatalog {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = HttpClient::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured client (proxy settings, TLS roots, ...)
    pub fn with_client(client: HttpClient, config: &Config) -> Self {
        Self {
            client,
            api_base_url: config.api_base_url.clone(),
            raw_base_url: config.raw_base_url.clone(),
        }
    }

    pub fn templates_url(&self) -> String {
        format!("{}/gitignore/templates", self.api_base_url)
    }

    pub fn template_url(&self, name: &str) -> String {
        format!("{}/github/gitignore/main/{}.gitignore", self.raw_base_url, name)
    }

    pub fn licenses_url(&self) -> String {
        format!("{}/licenses", self.api_base_url)
    }

    pub fn license_url(&self, key: &str) -> String {
        format!("{}/licenses/{}", self.api_base_url, key)
    }

    fn get_text(&self, url: &str, accept: Option<&str>) -> Result<String, CatalogError> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept);
        }

        let response = request.send().map_err(|source| CatalogError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().map_err(|source| CatalogError::Transport {
            url: url.to_string(),
            source,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let body = self.get_text(url, Some(API_ACCEPT))?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Catalog for GithubCatalog {
    fn gitignore_templates(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&self.templates_url())
    }

    fn gitignore_template(&self, name: &str) -> Result<String, CatalogError> {
        self.get_text(&self.template_url(name), None)
    }

    fn licenses(&self) -> Result<Vec<License>, CatalogError> {
        self.get_json(&self.licenses_url())
    }

    fn license_text(&self, key: &str) -> Result<String, CatalogError> {
        let detail: LicenseDetail = self.get_json(&self.license_url(key))?;
        Ok(detail.body)
    }
}
