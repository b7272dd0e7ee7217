//! Interactive prompts on the user's terminal.

use anyhow::{Context, Result};
use console::{style, Key, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::{default_position, Choice, ChoiceSource, Prompter};

/// Number of matches shown at once in a searchable prompt
const PAGE_SIZE: usize = 10;

/// Prompts rendered with dialoguer's colorful theme
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }

    /// Whether stdin/stderr are attached to a terminal
    pub fn is_interactive(&self) -> bool {
        self.term.features().is_attended()
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input
            .allow_empty(true)
            .interact_text_on(&self.term)
            .with_context(|| format!("Input error: {message}"))?;
        Ok(answer.trim().to_string())
    }

    fn required_input(&mut self, message: &str, error: &str) -> Result<String> {
        let error = error.to_string();
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(move |value: &String| -> std::result::Result<(), String> {
                if value.trim().is_empty() {
                    Err(error.clone())
                } else {
                    Ok(())
                }
            })
            .interact_text_on(&self.term)
            .with_context(|| format!("Input error: {message}"))?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_on(&self.term)
            .with_context(|| format!("Confirm error: {message}"))
    }

    fn search(
        &mut self,
        message: &str,
        default: Option<&str>,
        source: &ChoiceSource<'_>,
    ) -> Result<Option<Choice>> {
        self.term.hide_cursor().ok();
        let result = search_loop(&self.term, message, default, source);
        self.term.show_cursor().ok();

        let picked = result.with_context(|| format!("Selection error: {message}"))?;
        let summary = match &picked {
            Some(choice) => style(choice.label.as_str()).green().to_string(),
            None => style("skipped").dim().to_string(),
        };
        self.term
            .write_line(&format!("{} {} {}", style("✔").green(), style(message).bold(), summary))?;
        Ok(picked)
    }
}

/// Key loop for the searchable prompt. Re-queries `source` on every edit.
fn search_loop(
    term: &Term,
    message: &str,
    default: Option<&str>,
    source: &ChoiceSource<'_>,
) -> Result<Option<Choice>> {
    let mut query = String::new();
    let mut matches = source(&query);
    let mut cursor = default_position(&matches, default);
    let mut drawn = 0;

    loop {
        if drawn > 0 {
            term.clear_last_lines(drawn)?;
        }
        drawn = render(term, message, &query, &matches, cursor)?;

        match term.read_key()? {
            Key::Enter => {
                if let Some(choice) = matches.get(cursor) {
                    term.clear_last_lines(drawn)?;
                    return Ok(Some(choice.clone()));
                }
                if query.is_empty() {
                    // Nothing to pick at all (catalog unavailable)
                    term.clear_last_lines(drawn)?;
                    return Ok(None);
                }
            }
            Key::Escape => {
                term.clear_last_lines(drawn)?;
                return Ok(None);
            }
            Key::ArrowUp => cursor = cursor.saturating_sub(1),
            Key::ArrowDown => {
                if cursor + 1 < matches.len() {
                    cursor += 1;
                }
            }
            Key::Backspace => {
                if query.pop().is_some() {
                    matches = source(&query);
                    cursor = 0;
                }
            }
            Key::Char(c) if !c.is_control() => {
                query.push(c);
                matches = source(&query);
                cursor = 0;
            }
            _ => {}
        }
    }
}

/// Draw the prompt line and one page of matches; returns the number of lines drawn.
fn render(term: &Term, message: &str, query: &str, matches: &[Choice], cursor: usize) -> Result<usize> {
    term.write_line(&format!(
        "{} {} {}",
        style("?").yellow(),
        style(message).bold(),
        style(query).cyan()
    ))?;

    if matches.is_empty() {
        term.write_line(&format!("  {}", style("No matches").dim()))?;
        return Ok(2);
    }

    let start = cursor.saturating_sub(PAGE_SIZE - 1);
    let end = (start + PAGE_SIZE).min(matches.len());
    for (index, choice) in matches.iter().enumerate().take(end).skip(start) {
        if index == cursor {
            term.write_line(&format!("{} {}", style("❯").cyan(), style(&choice.label).cyan()))?;
        } else {
            term.write_line(&format!("  {}", choice.label))?;
        }
    }
    term.write_line(&format!(
        "  {}",
        style("(type to search, ↑/↓ to move, enter to select, esc to skip)").dim()
    ))?;

    Ok(end - start + 2)
}
