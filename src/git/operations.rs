//! Low-level git operations
//!
//! Every call runs `git` with an explicit argument list in the given directory.
//! Nothing goes through a shell, so remote URLs and branch names are passed verbatim.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Check if `dir` already has a `.git` directory (or file, for worktrees)
pub fn has_git_dir(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Initialize a repository
pub fn init(dir: &Path) -> Result<()> {
    let output = git(dir, &["init"]).context("Failed to run git init")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to initialize repository: {}",
            stderr_of(&output)
        );
    }

    Ok(())
}

/// Add a git remote
pub fn add_remote(dir: &Path, name: &str, url: &str) -> Result<()> {
    let output = git(dir, &["remote", "add", name, url]).context("Failed to add remote")?;

    if !output.status.success() {
        anyhow::bail!("Failed to add remote: {}", stderr_of(&output));
    }

    Ok(())
}

/// Create a branch and switch to it
pub fn switch_create(dir: &Path, branch: &str) -> Result<()> {
    let output = git(dir, &["switch", "-c", branch]).context("Failed to create branch")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to create branch {}: {}",
            branch,
            stderr_of(&output)
        );
    }

    Ok(())
}

/// Stage all changes
pub fn add_all(dir: &Path) -> Result<()> {
    let output = git(dir, &["add", "."]).context("Failed to stage changes")?;

    if !output.status.success() {
        anyhow::bail!("Failed to stage changes: {}", stderr_of(&output));
    }

    Ok(())
}

/// Create a commit
pub fn commit(dir: &Path, message: &str) -> Result<()> {
    let output = git(dir, &["commit", "-m", message]).context("Failed to create commit")?;

    if !output.status.success() {
        anyhow::bail!("Failed to create commit: {}", stderr_of(&output));
    }

    Ok(())
}

fn git(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new("git").args(args).current_dir(dir).output()
}

fn stderr_of(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    }
}
