//! Helper functions for the Agent module

use crate::types::Message;

/// Extract the text content from a message
///
/// Joins every text block; returns None if the message carries no text.
pub fn extract_text_response(message: &Message) -> Option<String> {
    let text = message.text();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
