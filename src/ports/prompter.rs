use crate::domain::AppError;

/// Operator interaction: menus, free-text answers, acknowledgments.
pub trait Prompter {
    /// Show `items` under `title` and return the chosen index, or `None` when
    /// the operator dismissed the menu.
    fn select(&self, title: &str, items: &[String]) -> Result<Option<usize>, AppError>;

    /// Ask for a free-text answer. An empty answer is valid.
    fn input(&self, prompt: &str) -> Result<String, AppError>;

    /// Block until the operator confirms they have read `message`.
    fn acknowledge(&self, message: &str) -> Result<(), AppError>;
}
