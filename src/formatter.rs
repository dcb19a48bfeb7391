use crate::models::{Conversation, Message, MessageContent};

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Renders a conversation as a single Markdown document.
#[derive(Debug, Clone, Default)]
pub struct ConversationFormatter {
    exclude_system_messages: bool,
}

impl ConversationFormatter {
    pub fn new(exclude_system_messages: bool) -> Self {
        Self { exclude_system_messages }
    }

    pub fn format(&self, conversation: &Conversation) -> String {
        conversation
            .messages
            .iter()
            .filter(|m| !(self.exclude_system_messages && m.role == "system"))
            .map(format_message)
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }
}

fn format_message(message: &Message) -> String {
    let role = message.role.to_uppercase();
    match &message.content {
        MessageContent::PlainText(text) => format!("## {}\n\n{}", role, text),
        MessageContent::StructuredData(data) => {
            // Map<String, Value> always serializes
            let pretty = serde_json::to_string_pretty(data).unwrap_or_default();
            format!("## {}\n\n```json\n{}\n```", role, pretty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn conversation(messages: Value) -> Conversation {
        serde_json::from_value(json!({
            "conversation": {"title": "Test"},
            "messages": messages,
        }))
        .unwrap()
    }

    #[test]
    fn test_plain_messages() {
        let conv = conversation(json!([
            {"role": "user", "message": "Hi"},
            {"role": "assistant", "message": "Hello"}
        ]));

        let content = ConversationFormatter::new(false).format(&conv);
        assert_eq!(content, "## USER\n\nHi\n\n---\n\n## ASSISTANT\n\nHello");
    }

    #[test]
    fn test_exclude_system_messages_keeps_order() {
        let conv = conversation(json!([
            {"role": "system", "message": "Be brief"},
            {"role": "user", "message": "one"},
            {"role": "system", "message": "again"},
            {"role": "assistant", "message": "two"},
            {"role": "user", "message": "three"}
        ]));

        let content = ConversationFormatter::new(true).format(&conv);
        assert!(!content.contains("SYSTEM"));
        assert_eq!(
            content,
            "## USER\n\none\n\n---\n\n## ASSISTANT\n\ntwo\n\n---\n\n## USER\n\nthree"
        );
    }

    #[test]
    fn test_system_messages_kept_by_default() {
        let conv = conversation(json!([{"role": "system", "message": "Be brief"}]));
        let content = ConversationFormatter::default().format(&conv);
        assert_eq!(content, "## SYSTEM\n\nBe brief");
    }

    #[test]
    fn test_structured_content_is_json_block() {
        let data = json!({"name": "add", "arguments": {"a": 365, "b": [96, null]}, "ok": true});
        let conv = conversation(json!([{"role": "function", "message": data}]));

        let content = ConversationFormatter::new(false).format(&conv);
        let body = content
            .strip_prefix("## FUNCTION\n\n```json\n")
            .and_then(|s| s.strip_suffix("\n```"))
            .expect("json fence");

        assert!(body.contains("\n  \"name\": \"add\""));
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_empty_after_filtering() {
        let conv = conversation(json!([{"role": "system", "message": "only system"}]));
        assert_eq!(ConversationFormatter::new(true).format(&conv), "");
        assert_eq!(ConversationFormatter::new(false).format(&conversation(json!([]))), "");
    }
}
