//! Wire shapes of the Slack Web API responses and their validation.

use crate::models::message::parse_slack_ts;
use crate::models::{SearchMatch, ThreadMessage};
use serde::Deserialize;

/// Fields common to every Slack Web API response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub messages: SearchMessages,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchMessages {
    pub matches: Vec<WireMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMatch {
    pub ts: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepliesResponse {
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMessage {
    pub ts: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl WireMatch {
    pub fn validate(self) -> Result<SearchMatch, String> {
        let instant =
            parse_slack_ts(&self.ts).ok_or_else(|| format!("invalid message ts '{}'", self.ts))?;

        let thread_root_id = self
            .thread_ts
            .filter(|t| parse_slack_ts(t).is_some())
            .or_else(|| self.permalink.as_deref().and_then(thread_ts_from_permalink));

        Ok(SearchMatch {
            message_id: self.ts,
            thread_root_id,
            sender_id: self.user,
            instant,
            text: self.text.unwrap_or_default(),
        })
    }
}

impl WireMessage {
    pub fn validate(self) -> Result<ThreadMessage, String> {
        let instant =
            parse_slack_ts(&self.ts).ok_or_else(|| format!("invalid message ts '{}'", self.ts))?;
        Ok(ThreadMessage {
            sender_id: self.user,
            instant,
            text: self.text.unwrap_or_default(),
        })
    }
}

/// Reply permalinks carry the root as `?thread_ts=...`.
pub(crate) fn thread_ts_from_permalink(permalink: &str) -> Option<String> {
    let (_, query) = permalink.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "thread_ts")
        .map(|(_, v)| v.to_string())
        .filter(|v| parse_slack_ts(v).is_some())
}
