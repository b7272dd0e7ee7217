//! Git access for the setup workflow
//!
//! Handles:
//! - Repository detection (existence of `.git`)
//! - Repository init, remote add, branch create
//! - Staging and the initial commit

mod operations;

pub use operations::{add_all, add_remote, commit, has_git_dir, init, switch_create};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Commit message used for the optional initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// The git operations the setup workflow issues, in the order it may issue them
pub trait Git {
    /// Whether the working directory already has a repository
    fn has_repository(&self) -> bool;

    /// `git init`
    fn init(&self) -> Result<()>;

    /// `git remote add <name> <url>`
    fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    /// `git switch -c <branch>`
    fn switch_create(&self, branch: &str) -> Result<()>;

    /// `git add .`
    fn add_all(&self) -> Result<()>;

    /// `git commit -m <message>`
    fn commit(&self, message: &str) -> Result<()>;
}

/// Runs the real `git` binary in a fixed directory
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }
}

impl Git for SystemGit {
    fn has_repository(&self) -> bool {
        has_git_dir(&self.workdir)
    }

    fn init(&self) -> Result<()> {
        init(&self.workdir)
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        add_remote(&self.workdir, name, url)
    }

    fn switch_create(&self, branch: &str) -> Result<()> {
        switch_create(&self.workdir, branch)
    }

    fn add_all(&self) -> Result<()> {
        add_all(&self.workdir)
    }

    fn commit(&self, message: &str) -> Result<()> {
        commit(&self.workdir, message)
    }
}
