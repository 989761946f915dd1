//! Rendering an extracted transcript to an output document

use crate::types::Message;

/// Selectable document renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Role-labelled Markdown message log
    #[default]
    Markdown,
    /// One JSON object per message, one per line
    Json,
    /// Message text only, no role labels
    Minimal,
}

/// Render messages in the requested format
pub fn render(messages: &[Message], format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown(messages),
        OutputFormat::Json => render_json(messages),
        OutputFormat::Minimal => render_minimal(messages),
    }
}

/// Render the Markdown log: role label, colon, the text, a blank line
pub fn render_markdown(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&format!("{}:\n{}\n\n", message.role, message.text));
    }
    out
}

/// Render messages as JSON lines
pub fn render_json(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        if let Ok(line) = serde_json::to_string(message) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Render message text only, blank-line separated
pub fn render_minimal(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&message.text);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn sample() -> Vec<Message> {
        vec![
            Message {
                role: Role::Prompter,
                text: "Hi there".to_string(),
            },
            Message {
                role: Role::Chat,
                text: "Hello! How can I help?".to_string(),
            },
        ]
    }

    #[test]
    fn test_markdown_literal_format() {
        assert_eq!(
            render_markdown(&sample()),
            "PROMPTER:\nHi there\n\nCHAT:\nHello! How can I help?\n\n"
        );
    }

    #[test]
    fn test_markdown_passes_embedded_newlines_through() {
        let messages = vec![Message {
            role: Role::Chat,
            text: "line one\nline two".to_string(),
        }];
        assert_eq!(render_markdown(&messages), "CHAT:\nline one\nline two\n\n");
    }

    #[test]
    fn test_json_lines() {
        assert_eq!(
            render_json(&sample()),
            "{\"role\":\"PROMPTER\",\"text\":\"Hi there\"}\n{\"role\":\"CHAT\",\"text\":\"Hello! How can I help?\"}\n"
        );
    }

    #[test]
    fn test_minimal_drops_role_labels() {
        assert_eq!(
            render_minimal(&sample()),
            "Hi there\n\nHello! How can I help?\n\n"
        );
    }

    #[test]
    fn test_empty_transcript_renders_empty() {
        assert_eq!(render(&[], OutputFormat::Markdown), "");
    }
}
