//! Messaging transport: the search / thread capability the ledger is rebuilt from.

pub mod slack;
mod types;

pub use slack::SlackClient;

use crate::errors::AppResult;
use crate::models::{SearchMatch, ThreadMessage};
use async_trait::async_trait;

/// Parameters of a single, unpaginated search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub sort_key: String,
    pub sort_direction: String,
    pub result_limit: u32,
}

impl SearchRequest {
    /// Oldest first, capped at `result_limit` matches.
    pub fn by_timestamp_asc(query: impl Into<String>, result_limit: u32) -> Self {
        Self {
            query: query.into(),
            sort_key: "timestamp".to_string(),
            sort_direction: "asc".to_string(),
            result_limit,
        }
    }
}

#[async_trait]
pub trait MessagingApi: Send + Sync {
    /// One page of matches; failures are `AppError::Search`.
    async fn search_messages(&self, request: &SearchRequest) -> AppResult<Vec<SearchMatch>>;

    /// Root message and all replies, in server order; failures are `AppError::ThreadFetch`.
    async fn fetch_thread_messages(
        &self,
        channel_id: &str,
        thread_root_id: &str,
    ) -> AppResult<Vec<ThreadMessage>>;
}
