//! Recent-topic signal built from conversation history.

use crate::models::Turn;

/// Number of trailing turns that contribute to the context string.
pub const CONTEXT_WINDOW: usize = 4;

/// Concatenates the lower-cased text of the last [`CONTEXT_WINDOW`] turns,
/// oldest first, separated by single spaces.
///
/// The result is only ever used for substring checks.
pub fn extract_context(history: &[Turn]) -> String {
    let start = history.len().saturating_sub(CONTEXT_WINDOW);
    history[start..]
        .iter()
        .map(|turn| turn.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
