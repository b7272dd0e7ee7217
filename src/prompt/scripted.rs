use anyhow::Result;
use std::collections::VecDeque;

use super::{default_position, Choice, ChoiceSource, Prompter};

/// A canned answer for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Type this text
    Text(String),
    /// Press enter on the default
    Default,
    /// Answer a confirm with yes
    Yes,
    /// Answer a confirm with no
    No,
    /// Type this query into a searchable prompt and take the first match
    Search(String),
    /// Dismiss a searchable prompt
    Dismiss,
}

impl Reply {
    pub fn text(s: &str) -> Self {
        Reply::Text(s.to_string())
    }

    pub fn search(query: &str) -> Self {
        Reply::Search(query.to_string())
    }
}

/// Answers prompts from a queue of [`Reply`] values, in order.
///
/// Running out of replies, or a reply that doesn't fit the prompt, is an
/// error, like a closed terminal would be for the interactive prompter.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Messages of every prompt shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, message: &str) -> Result<Reply> {
        self.asked.push(message.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted reply for prompt '{message}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        match self.next(message)? {
            Reply::Text(text) if text.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Reply::Text(text) => Ok(text),
            Reply::Default => Ok(default.unwrap_or_default().to_string()),
            other => anyhow::bail!("reply {other:?} does not fit text prompt '{message}'"),
        }
    }

    fn required_input(&mut self, message: &str, error: &str) -> Result<String> {
        match self.next(message)? {
            Reply::Text(text) => Ok(text),
            Reply::Default => anyhow::bail!("{error}"),
            other => anyhow::bail!("reply {other:?} does not fit text prompt '{message}'"),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.next(message)? {
            Reply::Yes => Ok(true),
            Reply::No => Ok(false),
            Reply::Default => Ok(default),
            other => anyhow::bail!("reply {other:?} does not fit confirm prompt '{message}'"),
        }
    }

    fn search(
        &mut self,
        message: &str,
        default: Option<&str>,
        source: &ChoiceSource<'_>,
    ) -> Result<Option<Choice>> {
        match self.next(message)? {
            Reply::Search(query) => Ok(source(&query).into_iter().next()),
            Reply::Default => {
                let choices = source("");
                let position = default_position(&choices, default);
                Ok(choices.into_iter().nth(position))
            }
            Reply::Dismiss => Ok(None),
            other => anyhow::bail!("reply {other:?} does not fit search prompt '{message}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(query: &str) -> Vec<Choice> {
        ["red", "green", "blue"]
            .iter()
            .filter(|c| c.contains(query))
            .map(|c| Choice::new(*c, *c))
            .collect()
    }

    #[test]
    fn test_text_and_default() {
        let mut prompter = ScriptedPrompter::new([Reply::text("upstream"), Reply::Default]);
        assert_eq!(prompter.input("Remote name?", Some("origin")).unwrap(), "upstream");
        assert_eq!(prompter.input("Branch?", Some("main")).unwrap(), "main");
        assert_eq!(prompter.asked(), ["Remote name?", "Branch?"]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_required_input_rejects_default() {
        let mut prompter = ScriptedPrompter::new([Reply::Default]);
        let err = prompter.required_input("URL?", "Remote URL is required").unwrap_err();
        assert_eq!(err.to_string(), "Remote URL is required");
    }

    #[test]
    fn test_confirm() {
        let mut prompter = ScriptedPrompter::new([Reply::No, Reply::Default]);
        assert!(!prompter.confirm("Add?", true).unwrap());
        assert!(prompter.confirm("Commit?", true).unwrap());
    }

    #[test]
    fn test_search_takes_first_match() {
        let mut prompter = ScriptedPrompter::new([Reply::search("e"), Reply::Default, Reply::Dismiss]);
        let first = prompter.search("Color?", None, &colors).unwrap();
        assert_eq!(first.unwrap().value, "red");

        let default = prompter.search("Color?", Some("BLUE"), &colors).unwrap();
        assert_eq!(default.unwrap().value, "blue");

        assert!(prompter.search("Color?", None, &colors).unwrap().is_none());
    }

    #[test]
    fn test_running_out_of_replies_is_an_error() {
        let mut prompter = ScriptedPrompter::new(Vec::new());
        assert!(prompter.confirm("Commit?", true).is_err());
    }

    #[test]
    fn test_mismatched_reply_is_an_error() {
        let mut prompter = ScriptedPrompter::new([Reply::Yes]);
        assert!(prompter.input("Name?", None).is_err());
    }
}
