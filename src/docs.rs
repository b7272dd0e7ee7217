//! Usage text printed by `-d` / `-h`.

use colored::*;

/// Full usage text, colored for the terminal
pub fn usage() -> String {
    format!(
        "
{title} - Quick repository setup tool

{usage}
  git-setup -e    Express setup (basic configuration, the default)
  git-setup -m    Manual setup (full configuration)
  git-setup -d    Show this documentation
  git-setup -V    Show version

{options}
  -C, --dir <DIR>    Run in DIR instead of the current directory

{express}
  git-setup -e
  > What is the remote name? (origin)
  > What is the remote repository URL?
  > What is your main branch name? (main)

{manual}
  Everything in express setup, then:
  > Would you like to add a .gitignore file? (Y/n)
  > Choose a .gitignore template (type to search)
  > Choose a license for your repository (type to search)
  > What is your project name? (current directory name)
  > Brief project description: (A new awesome project)
  > Create initial commit? (Y/n)

{requirements}
  - Git installed on your system
  - Valid repository URL
  - Network access to api.github.com for templates and licenses (manual setup)
",
        title = "Git Setup CLI".bold(),
        usage = "Usage:".yellow(),
        options = "Options:".yellow(),
        express = "Express Setup Example:".yellow(),
        manual = "Manual Setup:".yellow(),
        requirements = "Requirements:".yellow(),
    )
}

pub fn print_usage() {
    println!("{}", usage());
}
