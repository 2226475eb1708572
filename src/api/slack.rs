/// Slack Web API client for attendance threads
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::types::{Envelope, RepliesResponse, SearchResponse};
use super::{MessagingApi, SearchRequest};
use crate::config::DEFAULT_API_BASE_URL;
use crate::errors::{AppError, AppResult};
use crate::models::{SearchMatch, ThreadMessage};

const SEARCH_ENDPOINT: &str = "search.messages";
const REPLIES_ENDPOINT: &str = "conversations.replies";
const REPLIES_LIMIT: &str = "100";

/// Which failure a transport problem maps to.
#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Search,
    Replies,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Search => SEARCH_ENDPOINT,
            Endpoint::Replies => REPLIES_ENDPOINT,
        }
    }

    fn error(self, msg: String) -> AppError {
        match self {
            Endpoint::Search => AppError::Search(msg),
            Endpoint::Replies => AppError::ThreadFetch(msg),
        }
    }
}

pub struct SlackClient {
    http: Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    /// Create a client against the public Slack API
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Point the client at another base URL (proxy or mock server)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        debug!(endpoint = endpoint.path(), ?params, "Slack API request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await
            .map_err(|e| endpoint.error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(endpoint.error(format!("HTTP {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| endpoint.error(format!("failed to read body: {e}")))?;

        let envelope: Envelope = serde_json::from_str(&body)
            .map_err(|e| endpoint.error(format!("malformed response: {e}")))?;
        if !envelope.ok {
            let reason = envelope.error.unwrap_or_else(|| "unknown error".to_string());
            warn!(endpoint = endpoint.path(), %reason, "Slack API returned ok=false");
            return Err(endpoint.error(format!("Slack API error: {reason}")));
        }

        serde_json::from_str(&body)
            .map_err(|e| endpoint.error(format!("unexpected response shape: {e}")))
    }
}

#[async_trait]
impl MessagingApi for SlackClient {
    async fn search_messages(&self, request: &SearchRequest) -> AppResult<Vec<SearchMatch>> {
        let params = [
            ("query", request.query.clone()),
            ("sort", request.sort_key.clone()),
            ("sort_dir", request.sort_direction.clone()),
            ("count", request.result_limit.to_string()),
        ];
        let response: SearchResponse = self.get(Endpoint::Search, &params).await?;

        let matches = response
            .messages
            .matches
            .into_iter()
            .map(|m| m.validate().map_err(AppError::Search))
            .collect::<AppResult<Vec<_>>>()?;

        info!(count = matches.len(), "Slack search complete");
        Ok(matches)
    }

    async fn fetch_thread_messages(
        &self,
        channel_id: &str,
        thread_root_id: &str,
    ) -> AppResult<Vec<ThreadMessage>> {
        let params = [
            ("channel", channel_id.to_string()),
            ("ts", thread_root_id.to_string()),
            ("limit", REPLIES_LIMIT.to_string()),
            ("inclusive", "true".to_string()),
        ];
        let response: RepliesResponse = self.get(Endpoint::Replies, &params).await?;

        if response.messages.is_empty() {
            return Err(AppError::ThreadFetch(format!(
                "thread {thread_root_id} has no messages"
            )));
        }

        response
            .messages
            .into_iter()
            .map(|m| m.validate().map_err(AppError::ThreadFetch))
            .collect()
    }
}
