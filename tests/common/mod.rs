//! Test doubles for the setup workflow: a git that records commands and an
//! in-memory catalog that counts requests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use git_setup::catalog::{Catalog, License};
use git_setup::error::CatalogError;
use git_setup::git::Git;
use git_setup::prompt::{Choice, ChoiceSource, Prompter, Reply, ScriptedPrompter};

/// Records every git command as the command line a user would type.
#[derive(Default)]
pub struct RecordingGit {
    pub commands: RefCell<Vec<String>>,
    pub has_repo: Cell<bool>,
    fail_on: Option<String>,
}

impl RecordingGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository() -> Self {
        let git = Self::default();
        git.has_repo.set(true);
        git
    }

    /// Fail the first command starting with `prefix`
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            fail_on: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    fn record(&self, command: String) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());
        match &self.fail_on {
            Some(prefix) if command.starts_with(prefix.as_str()) => {
                anyhow::bail!("simulated failure: {command}")
            }
            _ => Ok(()),
        }
    }
}

impl Git for RecordingGit {
    fn has_repository(&self) -> bool {
        self.has_repo.get()
    }

    fn init(&self) -> Result<()> {
        self.record("git init".to_string())?;
        self.has_repo.set(true);
        Ok(())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.record(format!("git remote add {name} {url}"))
    }

    fn switch_create(&self, branch: &str) -> Result<()> {
        self.record(format!("git switch -c {branch}"))
    }

    fn add_all(&self) -> Result<()> {
        self.record("git add .".to_string())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("git commit -m \"{message}\""))
    }
}

/// Catalog served from memory. Unknown templates/licenses answer HTTP 404.
pub struct MemoryCatalog {
    pub templates: Vec<String>,
    pub template_texts: HashMap<String, String>,
    pub licenses: Vec<License>,
    pub license_texts: HashMap<String, String>,
    pub lists_unavailable: bool,
    pub template_list_calls: Cell<usize>,
    pub license_list_calls: Cell<usize>,
    pub template_fetches: RefCell<Vec<String>>,
    pub license_fetches: RefCell<Vec<String>>,
}

pub const RUST_GITIGNORE: &str = "/target\n**/*.rs.bk\n";
pub const MIT_TEXT: &str = "MIT License\n\nCopyright (c) [year] [fullname]\n";

pub fn license(key: &str, name: &str) -> License {
    License {
        key: key.to_string(),
        name: name.to_string(),
        spdx_id: None,
        url: None,
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        let mut template_texts = HashMap::new();
        template_texts.insert("Rust".to_string(), RUST_GITIGNORE.to_string());
        template_texts.insert("Node".to_string(), "node_modules/\n".to_string());

        let mut license_texts = HashMap::new();
        license_texts.insert("mit".to_string(), MIT_TEXT.to_string());
        license_texts.insert("apache-2.0".to_string(), "Apache License\n".to_string());

        Self {
            templates: ["Actionscript", "Node", "Rust", "Terraform"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template_texts,
            licenses: vec![
                license("agpl-3.0", "GNU Affero General Public License v3.0"),
                license("apache-2.0", "Apache License 2.0"),
                license("gpl-3.0", "GNU General Public License v3.0"),
                license("mit", "MIT License"),
            ],
            license_texts,
            lists_unavailable: false,
            template_list_calls: Cell::new(0),
            license_list_calls: Cell::new(0),
            template_fetches: RefCell::new(Vec::new()),
            license_fetches: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            lists_unavailable: true,
            ..Self::new()
        }
    }

    fn not_found(url: String) -> CatalogError {
        CatalogError::Status { url, status: 404 }
    }
}

impl Catalog for MemoryCatalog {
    fn gitignore_templates(&self) -> Result<Vec<String>, CatalogError> {
        self.template_list_calls.set(self.template_list_calls.get() + 1);
        if self.lists_unavailable {
            return Err(CatalogError::Status {
                url: "memory://gitignore/templates".to_string(),
                status: 503,
            });
        }
        Ok(self.templates.clone())
    }

    fn gitignore_template(&self, name: &str) -> Result<String, CatalogError> {
        self.template_fetches.borrow_mut().push(name.to_string());
        self.template_texts
            .get(name)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("memory://gitignore/{name}")))
    }

    fn licenses(&self) -> Result<Vec<License>, CatalogError> {
        self.license_list_calls.set(self.license_list_calls.get() + 1);
        if self.lists_unavailable {
            return Err(CatalogError::Status {
                url: "memory://licenses".to_string(),
                status: 503,
            });
        }
        Ok(self.licenses.clone())
    }

    fn license_text(&self, key: &str) -> Result<String, CatalogError> {
        self.license_fetches.borrow_mut().push(key.to_string());
        self.license_texts
            .get(key)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("memory://licenses/{key}")))
    }
}

/// Wraps [`ScriptedPrompter`] but types search queries one character at a
/// time, querying the source after every keystroke like the terminal does.
pub struct TypingPrompter {
    inner: ScriptedPrompter,
    pub keystrokes: usize,
}

impl TypingPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            inner: ScriptedPrompter::new(replies),
            keystrokes: 0,
        }
    }
}

impl Prompter for TypingPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        self.inner.input(message, default)
    }

    fn required_input(&mut self, message: &str, error: &str) -> Result<String> {
        self.inner.required_input(message, error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.inner.confirm(message, default)
    }

    fn search(
        &mut self,
        message: &str,
        default: Option<&str>,
        source: &ChoiceSource<'_>,
    ) -> Result<Option<Choice>> {
        source("");
        let mut typed = String::new();
        let mut type_key = |c: char| {
            typed.push(c);
            source(&typed);
        };
        // The scripted reply decides the final pick; the typing only exercises the source.
        for c in "rus".chars() {
            type_key(c);
            self.keystrokes += 1;
        }
        self.inner.search(message, default, source)
    }
}

/// Trimmed stdout of a git command run in `dir`; panics when git fails.
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git").args(args).current_dir(dir).output().unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
