use anyhow::{Context, Result};
use dialoguer::{Confirm, Editor, Input, Select};
use std::fmt::Display;

use crate::{email::Draft, ui::THEME};

pub fn text(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::with_theme(&*THEME)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("cannot prompt {prompt}"))
}

/// Edit the given text with the editor from `$EDITOR`.
///
/// The initial text is kept when the editor exits without saving.
pub fn body(initial: &str) -> Result<String> {
    let body = Editor::new()
        .edit(initial)
        .context("cannot edit body with editor")?;
    Ok(body.unwrap_or_else(|| initial.to_owned()))
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&*THEME)
        .with_prompt(prompt)
        .default(true)
        .interact()
        .with_context(|| format!("cannot prompt {prompt}"))
}

/// Let the user pick one of the given items. Returns `None` when the
/// prompt is dismissed.
pub fn select<T: Display>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    Select::with_theme(&*THEME)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .with_context(|| format!("cannot prompt {prompt}"))
}

/// Fill every field of the given draft, starting from its current
/// values.
pub fn draft(draft: Draft) -> Result<Draft> {
    Ok(Draft {
        recipients: text("To", &draft.recipients)?,
        subject: text("Subject", &draft.subject)?,
        body: body(&draft.body)?,
    })
}
