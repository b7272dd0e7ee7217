//! Question sequences for the two workflows.

use crate::artifacts::license::NO_LICENSE;
use crate::catalog::{self, LazyList, License};
use crate::config::default_project_name;
use crate::error::SetupError;
use crate::prompt::{Choice, Prompter};
use crate::report;
use crate::search;
use crate::session::SetupSession;

use super::SetupContext;

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_LICENSE: &str = "MIT";
pub const DEFAULT_DESCRIPTION: &str = "A new awesome project";

const REMOTE_URL_REQUIRED: &str = "Remote URL is required";

/// Remote name, remote URL, branch name.
pub(super) fn express_answers(prompter: &mut dyn Prompter) -> Result<SetupSession, SetupError> {
    let remote_name = prompter
        .input("What is the remote name?", Some(DEFAULT_REMOTE))
        .map_err(SetupError::prompt)?;
    let remote_url = prompter
        .required_input("What is the remote repository URL?", REMOTE_URL_REQUIRED)
        .map_err(SetupError::prompt)?;
    let branch_name = prompter
        .input("What is your main branch name?", Some(DEFAULT_BRANCH))
        .map_err(SetupError::prompt)?;

    let session = SetupSession {
        remote_name,
        remote_url,
        branch_name,
        ..Default::default()
    };
    session.validate_bootstrap()?;
    Ok(session)
}

/// Express answers, then ignore file, license, README fields and commit.
///
/// Catalog lists are loaded through `templates` / `licenses` the first time
/// a search prompt asks for them.
pub(super) fn manual_answers(
    ctx: &SetupContext<'_>,
    prompter: &mut dyn Prompter,
    templates: &LazyList<String>,
    licenses: &LazyList<License>,
) -> Result<SetupSession, SetupError> {
    let mut session = express_answers(prompter)?;

    session.add_gitignore = prompter
        .confirm("Would you like to add a .gitignore file?", true)
        .map_err(SetupError::prompt)?;

    if session.add_gitignore {
        let source = |query: &str| -> Vec<Choice> {
            let all = templates.get_or_load(|| ctx.catalog.gitignore_templates());
            search::filter(all, query)
                .into_iter()
                .map(|name| Choice::new(name.as_str(), name.as_str()))
                .collect()
        };
        session.gitignore_template = prompter
            .search("Choose a .gitignore template (type to search):", None, &source)
            .map_err(SetupError::prompt)?
            .map(|choice| choice.value);

        if session.gitignore_template.is_none() {
            report::info("No .gitignore template selected, skipping .gitignore");
        }
    }

    let source = |query: &str| -> Vec<Choice> {
        let all = licenses.get_or_load(|| catalog::license_candidates(ctx.catalog));
        search::filter(all, query)
            .into_iter()
            .map(|license| Choice::new(license.name.as_str(), license.key.as_str()))
            .collect()
    };
    let license = prompter
        .search("Choose a license for your repository:", Some(DEFAULT_LICENSE), &source)
        .map_err(SetupError::prompt)?
        .map(|choice| choice.value)
        .unwrap_or_else(|| NO_LICENSE.to_string());
    session.license = Some(license);

    let default_name = default_project_name(ctx.workdir);
    session.project_name = Some(
        prompter
            .input("What is your project name?", Some(default_name.as_str()))
            .map_err(SetupError::prompt)?,
    );
    session.description = Some(
        prompter
            .input("Brief project description:", Some(DEFAULT_DESCRIPTION))
            .map_err(SetupError::prompt)?,
    );
    session.initial_commit = prompter
        .confirm("Create initial commit?", true)
        .map_err(SetupError::prompt)?;

    Ok(session)
}
