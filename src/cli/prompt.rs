//! Confirmation prompts

use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use inquire::{Confirm, InquireError};

/// True when stdin is a terminal a prompt can be shown on
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Asks a yes/no question, defaulting to no.
///
/// Returns `Ok(false)` without prompting when stdin is not a terminal, and
/// when the user cancels the prompt.
pub fn confirm(message: &str) -> Result<bool> {
    if !is_interactive() {
        return Ok(false);
    }

    match Confirm::new(message).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(anyhow!("confirmation prompt failed: {}", e)),
    }
}
