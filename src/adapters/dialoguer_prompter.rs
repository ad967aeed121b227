use dialoguer::{Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, title: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to show menu: {}", err)))
    }

    fn input(&self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Prompt(format!("Failed to read input: {}", err)))
    }

    fn acknowledge(&self, message: &str) -> Result<(), AppError> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map(|_| ())
            .map_err(|err| AppError::Prompt(format!("Failed to read input: {}", err)))
    }
}
