//! Interaction surface used by the wizard session.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

/// What the session needs from a terminal. The binary uses
/// [`DialoguerPrompter`]; tests script the answers.
pub trait Prompter {
    /// Pick one item. `None` means the user cancelled (Esc / q).
    fn choose(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>>;

    /// Pick any number of items; `selected` gives the initial ticks.
    fn choose_many(
        &mut self,
        prompt: &str,
        items: &[String],
        selected: &[bool],
    ) -> Result<Vec<usize>>;

    /// Free text, pre-filled with `initial`. May be empty.
    fn text(
        &mut self,
        prompt: &str,
        initial: &str,
    ) -> Result<String>;

    /// Prints a block of output.
    fn show(
        &mut self,
        text: &str,
    );
}

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn choose(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact_opt()?;
        Ok(choice)
    }

    fn choose_many(
        &mut self,
        prompt: &str,
        items: &[String],
        selected: &[bool],
    ) -> Result<Vec<usize>> {
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(selected)
            .interact()?;
        Ok(picked)
    }

    fn text(
        &mut self,
        prompt: &str,
        initial: &str,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if !initial.is_empty() {
            input = input.with_initial_text(initial);
        }
        Ok(input.interact_text()?)
    }

    fn show(
        &mut self,
        text: &str,
    ) {
        println!("{text}");
    }
}
