//! Message extraction from markup events

use crate::scanner::{MarkupEvent, Scanner};
use crate::types::{Message, Role};

/// End tags that close an open message.
///
/// The transcript-export format wraps each message in one of these, so any
/// matching end tag finalizes the current message, including end tags of
/// containers nested inside the role element. Known limitation, kept for
/// compatibility with the expected input format.
const CONTAINER_TAGS: [&str; 3] = ["div", "p", "span"];

/// Transient scan state carried across events
#[derive(Default)]
struct ScanState {
    role: Option<Role>,
    buffer: Vec<String>,
}

impl ScanState {
    /// Flush the open message if it has any non-whitespace text, then reset
    fn close_message(&mut self, messages: &mut Vec<Message>) {
        if let Some(role) = self.role {
            let text = self.buffer.concat().trim().to_string();
            if !text.is_empty() {
                messages.push(Message { role, text });
            }
        }
        self.buffer.clear();
        self.role = None;
    }
}

/// Extract role-tagged messages from conversation markup
///
/// A single left-to-right pass over the document's structural events. An
/// element whose class attribute signals a speaker opens a message; text is
/// buffered verbatim until a container end tag (or end of input) closes it.
/// Text outside any open message is discarded. Never fails on malformed
/// markup, it just yields fewer messages.
pub fn extract(markup: &str) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut state = ScanState::default();

    for event in Scanner::new(markup) {
        match event {
            MarkupEvent::Open { attrs, .. } => {
                let classes = attrs
                    .iter()
                    .find(|(name, _)| name == "class")
                    .map(|(_, value)| value.as_str())
                    .unwrap_or("");
                if let Some(role) = Role::from_class(classes) {
                    state.close_message(&mut messages);
                    state.role = Some(role);
                }
            }
            MarkupEvent::Text(text) => {
                if state.role.is_some() {
                    state.buffer.push(text);
                }
            }
            MarkupEvent::Close { name } => {
                if state.role.is_some() && CONTAINER_TAGS.contains(&name.as_str()) {
                    state.close_message(&mut messages);
                }
            }
        }
    }

    // Flush a message left open at end of input
    state.close_message(&mut messages);
    messages
}
