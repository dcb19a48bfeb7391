use crate::args::ParsedArgs;
use crate::error::ExportError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// Conversation payload as handed over by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation: ConversationInfo,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationInfo {
    pub title: String,
}

impl Conversation {
    pub fn title(&self) -> &str {
        &self.conversation.title
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    #[serde(rename = "message", alias = "content")]
    pub content: MessageContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    PlainText(String),
    StructuredData(Map<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Secret,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Secret => write!(f, "secret"),
        }
    }
}

impl FromStr for Visibility {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "secret" => Ok(Visibility::Secret),
            _ => Err(ExportError::InvalidVisibility(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub visibility: Visibility,
    pub file_extension: String,
    pub description: String,
}

impl ExportRequest {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.description, self.file_extension)
    }
}

impl TryFrom<ParsedArgs> for ExportRequest {
    type Error = ExportError;

    fn try_from(args: ParsedArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            visibility: args.visibility.parse()?,
            file_extension: args.file_extension,
            description: args.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistResult {
    pub html_url: String,
    pub id: String,
}

/// What a command hands back to its caller: success flag, primary value and a
/// message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub value: Option<String>,
    pub message: String,
}

impl CommandResult {
    pub fn ok(value: String, message: String) -> Self {
        Self { success: true, value: Some(value), message }
    }

    pub fn failed(message: String) -> Self {
        Self { success: false, value: None, message }
    }
}

// GitHub gist API structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGistRequest {
    pub description: String,
    pub public: bool,
    pub files: IndexMap<String, GistFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGistResponse {
    pub html_url: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubErrorResponse {
    pub message: Option<String>,
}
