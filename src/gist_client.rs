use crate::error::ExportError;
use crate::models::{CreateGistRequest, CreateGistResponse, GistFile, GistResult, GitHubErrorResponse};
use indexmap::IndexMap;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GIST_RAW_BASE: &str = "https://gist.githubusercontent.com/raw";

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("gist-export/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct GistClient {
    http_client: Arc<reqwest::Client>,
    token: Option<String>,
    api_base: String,
}

impl GistClient {
    pub fn with_api_base(
        http_client: Arc<reqwest::Client>,
        token: Option<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self { http_client, token, api_base: api_base.into() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn build_target_url(&self) -> String {
        let path = "gists";
        if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }

    /// Creates a gist holding a single file and returns its page URL and id.
    pub async fn create_gist(
        &self,
        content: &str,
        description: &str,
        file_name: &str,
        is_public: bool,
    ) -> Result<GistResult, ExportError> {
        let mut files = IndexMap::new();
        files.insert(file_name.to_string(), GistFile { content: content.to_string() });
        let body = CreateGistRequest {
            description: description.to_string(),
            public: is_public,
            files,
        };

        let target_url = self.build_target_url();
        let mut target_request = self
            .http_client
            .post(&target_url)
            .header("Accept", ACCEPT_GITHUB_V3)
            .header("User-Agent", USER_AGENT);

        // Without a token the API answers 401, which surfaces as an API error
        if let Some(token) = &self.token {
            target_request = target_request.header("Authorization", format!("token {}", token));
        }

        info!("Creating gist at: {}", target_url);
        debug!("gist file: {}, public: {}, {} bytes", file_name, is_public, content.len());
        let response = target_request.json(&body).send().await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let created: CreateGistResponse = response.json().await?;
            info!("Gist created: {}", created.html_url);
            return Ok(GistResult { html_url: created.html_url, id: created.id });
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GitHubErrorResponse>(&text)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        warn!("Gist creation failed with status {}: {}", status, message);
        Err(ExportError::Api { status: status.as_u16(), message })
    }

    /// Direct link to the unrendered file content.
    pub fn build_raw_url(&self, gist_id: &str, file_name: &str) -> String {
        format!("{}/{}/{}", GIST_RAW_BASE, gist_id, urlencoding::encode(file_name))
    }
}
