use crate::args::{parse_args, ParsedArgs};
use crate::config::GistConfig;
use crate::error::ExportError;
use crate::formatter::ConversationFormatter;
use crate::gist_client::GistClient;
use crate::models::{CommandResult, ExportRequest};
use crate::source::ConversationSource;
use tracing::{debug, info, warn};

/// Posts the current conversation to a GitHub Gist.
pub struct GistExporter<S> {
    config: GistConfig,
    formatter: ConversationFormatter,
    client: GistClient,
    source: S,
}

impl<S: ConversationSource> GistExporter<S> {
    pub fn new(config: GistConfig, client: GistClient, source: S) -> Self {
        info!("Setting up gist exporter, posting to: {}", client.api_base());
        if !client.has_token() {
            warn!("No GitHub access token available, gist creation will be rejected");
        }
        Self {
            formatter: ConversationFormatter::new(config.exclude_system_messages),
            config,
            client,
            source,
        }
    }

    /// Runs the gist command. `args` is `[visibility [extension [title...]]]`.
    ///
    /// Never fails past this boundary: errors come back as an unsuccessful
    /// result carrying the error text.
    pub async fn command_gist(&self, args: &str) -> CommandResult {
        match self.export(args).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Gist export failed: {}", e);
                CommandResult::failed(e.to_string())
            }
        }
    }

    async fn export(&self, args: &str) -> Result<CommandResult, ExportError> {
        let conversation = self
            .source
            .current_conversation()
            .map_err(|e| ExportError::NoConversation(format!("{:#}", e)))?
            .ok_or_else(ExportError::no_current_conversation)?;

        let defaults = ParsedArgs {
            visibility: self.config.visibility.to_string(),
            file_extension: self.config.file_extension.clone(),
            description: conversation.title().to_string(),
        };
        let request = ExportRequest::try_from(parse_args(args, defaults))?;
        let file_name = request.file_name();
        debug!("Exporting {} messages as {} ({})", conversation.messages.len(), file_name, request.visibility);

        let content = self.formatter.format(&conversation);
        let gist = self
            .client
            .create_gist(&content, &request.description, &file_name, request.visibility.is_public())
            .await?;

        let mut message_parts = vec![format!("Gist URL: {}", gist.html_url)];
        if self.config.include_raw_link {
            message_parts.push(format!("Raw URL: {}", self.client.build_raw_url(&gist.id, &file_name)));
        }

        Ok(CommandResult::ok(gist.html_url, message_parts.join("\n")))
    }
}
