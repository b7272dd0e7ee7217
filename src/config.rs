use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default GitHub REST API base
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default host serving raw `.gitignore` templates
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one git-setup run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the repository is set up in
    pub workdir: PathBuf,
    /// Base URL for the license and template catalog API
    pub api_base_url: String,
    /// Base URL for raw template files
    pub raw_base_url: String,
    /// User-Agent header sent with every request (GitHub rejects requests without one)
    pub user_agent: String,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration for `workdir` (current directory when `None`).
    ///
    /// Endpoints and timeout can be overridden with `GIT_SETUP_API_URL`,
    /// `GIT_SETUP_RAW_URL` and `GIT_SETUP_HTTP_TIMEOUT_SECS`.
    pub fn load(workdir: Option<PathBuf>) -> Result<Self> {
        let workdir = match workdir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let workdir = workdir
            .canonicalize()
            .with_context(|| format!("Working directory not found: {}", workdir.display()))?;

        let timeout = match std::env::var("GIT_SETUP_HTTP_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            workdir,
            api_base_url: env_url("GIT_SETUP_API_URL", DEFAULT_API_URL),
            raw_base_url: env_url("GIT_SETUP_RAW_URL", DEFAULT_RAW_URL),
            user_agent: format!("git-setup/{}", env!("CARGO_PKG_VERSION")),
            timeout,
        })
    }

    /// Configuration pointing at explicit endpoints (no environment lookups)
    pub fn with_endpoints(workdir: &Path, api_base_url: &str, raw_base_url: &str) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            api_base_url: normalize_url(api_base_url),
            raw_base_url: normalize_url(raw_base_url),
            user_agent: format!("git-setup/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Default project name: the working directory's base name
    pub fn default_project_name(&self) -> String {
        default_project_name(&self.workdir)
    }
}

/// Base name of `dir`, or "project" when it has none (e.g. `/`)
pub fn default_project_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string()
}

fn env_url(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => normalize_url(&value),
        _ => default.to_string(),
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid GIT_SETUP_HTTP_TIMEOUT_SECS: {raw:?}"))?;
    if secs == 0 {
        anyhow::bail!("GIT_SETUP_HTTP_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
