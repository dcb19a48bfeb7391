use crate::models::Conversation;
use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;

/// Hands over the conversation currently active in the host.
///
/// `Ok(None)` means there is no current conversation. An `Err` is a host
/// failure whose text is shown to the user as-is.
pub trait ConversationSource {
    fn current_conversation(&self) -> anyhow::Result<Option<Conversation>>;
}

/// Reads a conversation JSON document from a file, or from stdin for `-`.
#[derive(Debug, Clone)]
pub struct FileConversationSource {
    path: PathBuf,
}

impl FileConversationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if self.path.as_os_str() == "-" {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read conversation from stdin")?;
            Ok(input)
        } else {
            std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read conversation from {}", self.path.display()))
        }
    }
}

impl ConversationSource for FileConversationSource {
    fn current_conversation(&self) -> anyhow::Result<Option<Conversation>> {
        let input = self.read_input()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        let conversation = serde_json::from_str(&input).context("Invalid conversation JSON")?;
        Ok(Some(conversation))
    }
}
