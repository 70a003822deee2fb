// SPDX-License-Identifier: MIT

//! Prompt composition for Codex's single free-text prompt parameter.
//!
//! Codex has no structured system/user distinction, so the agent's persona
//! instructions and the task are joined textually with a stable separator
//! the model can key on. An optional task identifier is prepended so the
//! agent can correlate its work with an external tracker entry.

/// Separator between the system prompt and the user task.
pub const PROMPT_SEPARATOR: &str = "\n\n---\n\n";

/// Build the combined prompt sent to Codex.
///
/// Layout: `<system>\n\n---\n\n<user>`, with `TASK_ID: <id>\n\n` prepended
/// when a task identifier is supplied. The text is passed through verbatim —
/// no escaping, no truncation; empty inputs are legal and forwarded as-is.
pub fn compose_prompt(system_prompt: &str, user_prompt: &str, task_id: Option<&str>) -> String {
    let combined = format!("{system_prompt}{PROMPT_SEPARATOR}{user_prompt}");

    match task_id {
        Some(id) => format!("TASK_ID: {id}\n\n{combined}"),
        None => combined,
    }
}
