//! Prompt layer
//!
//! The setup workflow asks its questions through [`Prompter`]:
//! - [`TerminalPrompter`] renders them with `dialoguer` and a `console` key loop
//! - [`ScriptedPrompter`] answers from a fixed list (tests, non-interactive drivers)

mod scripted;
mod terminal;

pub use scripted::{Reply, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use anyhow::Result;

/// One selectable entry of a searchable prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// What the user sees
    pub label: String,
    /// What the session stores
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Produces the choices matching a query. Called again on every keystroke.
pub type ChoiceSource<'a> = dyn Fn(&str) -> Vec<Choice> + 'a;

/// Typed questions asked during setup
pub trait Prompter {
    /// Free text; an empty answer takes `default` when there is one
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Free text that must not be empty; `error` is shown until it isn't
    fn required_input(&mut self, message: &str, error: &str) -> Result<String>;

    /// Yes/no
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Pick one entry from `source`, filtering as the user types.
    ///
    /// `default` is the value highlighted before anything is typed. Returns
    /// `None` when the user dismisses the prompt or there is nothing to pick.
    fn search(
        &mut self,
        message: &str,
        default: Option<&str>,
        source: &ChoiceSource<'_>,
    ) -> Result<Option<Choice>>;
}

/// Index of the choice whose value equals `default` (case-insensitive), else 0
pub fn default_position(choices: &[Choice], default: Option<&str>) -> usize {
    default
        .and_then(|d| choices.iter().position(|c| c.value.eq_ignore_ascii_case(d)))
        .unwrap_or(0)
}
