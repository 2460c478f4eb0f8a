use once_cell::sync::Lazy;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::CliError;

static THEME: Lazy<ColorfulTheme> = Lazy::new(ColorfulTheme::default);

/// Prompt the user for free-form text input.
pub fn prompt_text(prompt: &str) -> Result<String, CliError> {
    let value = Input::<String>::with_theme(&*THEME)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompt for a numeric pin.
pub fn prompt_pin(prompt: &str) -> Result<u32, CliError> {
    let value = Input::<u32>::with_theme(&*THEME)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a monetary amount.
pub fn prompt_amount(prompt: &str) -> Result<f64, CliError> {
    let value = Input::<f64>::with_theme(&*THEME)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CliError> {
    let value = Confirm::with_theme(&*THEME)
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(value)
}

/// Pick one entry from a list; returns the selected index.
pub fn select(prompt: &str, items: &[&str]) -> Result<usize, CliError> {
    let index = Select::with_theme(&*THEME)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(index)
}
