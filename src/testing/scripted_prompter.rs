use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Prompter;

/// [`Prompter`] that replays a script of menu choices and text answers.
///
/// Menu choices are matched by substring against the offered labels, so tests
/// read like the operator's keystrokes.
#[derive(Default)]
pub struct ScriptedPrompter {
    choices: Mutex<VecDeque<Option<String>>>,
    answers: Mutex<VecDeque<String>>,
    pub menus: Mutex<Vec<(String, Vec<String>)>>,
    pub acknowledgments: Mutex<usize>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(self, label: &str) -> Self {
        self.choices.lock().unwrap().push_back(Some(label.to_string()));
        self
    }

    /// Dismiss the next menu (Esc).
    pub fn dismiss(self) -> Self {
        self.choices.lock().unwrap().push_back(None);
        self
    }

    pub fn answer(self, text: &str) -> Self {
        self.answers.lock().unwrap().push_back(text.to_string());
        self
    }

    pub fn acknowledgment_count(&self) -> usize {
        *self.acknowledgments.lock().unwrap()
    }

    pub fn last_menu(&self) -> (String, Vec<String>) {
        self.menus.lock().unwrap().last().cloned().expect("no menu shown")
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, title: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        self.menus.lock().unwrap().push((title.to_string(), items.to_vec()));
        let choice = self
            .choices
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted choice for menu '{}': {:?}", title, items));
        let Some(label) = choice else {
            return Ok(None);
        };
        let index = items
            .iter()
            .position(|item| item.contains(&label))
            .unwrap_or_else(|| panic!("'{}' not offered in menu '{}': {:?}", label, title, items));
        Ok(Some(index))
    }

    fn input(&self, prompt: &str) -> Result<String, AppError> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }

    fn acknowledge(&self, _message: &str) -> Result<(), AppError> {
        *self.acknowledgments.lock().unwrap() += 1;
        Ok(())
    }
}
