//! Interactive single-choice prompt

use crate::error::{PodctlError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use owo_colors::OwoColorize;

/// Maximum visible rows in a selection list
pub const MAX_HEIGHT: usize = 15;

/// Single-choice selection widget used by the wizard
pub trait SelectPrompt {
    /// Present an ordered option list, return the chosen entry
    fn select(&self, title: &str, options: &[String]) -> Result<String>;
}

/// Terminal prompt backed by dialoguer
#[derive(Default)]
pub struct TermPrompt;

impl SelectPrompt for TermPrompt {
    fn select(&self, title: &str, options: &[String]) -> Result<String> {
        let chosen = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .items(options)
            .default(0)
            .max_length(MAX_HEIGHT)
            .report(false)
            .interact_opt()
            .map_err(|e| PodctlError::Prompt(e.to_string()))?;

        // Esc or 'q' leaves the prompt without a choice
        match chosen {
            Some(index) => Ok(options[index].clone()),
            None => Err(PodctlError::Cancelled),
        }
    }
}

/// Print the confirmation line for a completed selection
pub fn confirm(value: &str) {
    println!(" {} {}", "\u{f00c}".green(), value.cyan());
}
