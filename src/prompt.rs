//! User input and interaction handling.

use crate::error::{Error, Result};
use crate::name::ProjectName;
use dialoguer::Input;

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for a line of text, returning `default` when the user enters nothing.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Resolves the project name from the command line or, failing that, the user.
///
/// A name given on the command line must survive sanitisation. Interactive
/// input that is empty or sanitises to nothing falls back to `default`, as
/// does a missing name when prompting is disabled.
pub fn resolve_project_name(
    prompt: &dyn Prompter,
    given: Option<&str>,
    default: &str,
    interactive: bool,
) -> Result<ProjectName> {
    match given {
        Some(name) => ProjectName::parse(name),
        None if interactive => {
            let entered = prompt.input("Project name", default)?;
            let name = ProjectName::parse_or(&entered, default)?;
            if name.as_str() != entered.trim() {
                println!("Using name: {name}");
            }
            Ok(name)
        }
        None => ProjectName::parse(default),
    }
}
