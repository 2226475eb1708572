use chrono::{DateTime, Utc};

/// A message returned by the search endpoint, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// The message's own `ts`.
    pub message_id: String,
    /// Root of the reply chain when the match is itself a reply.
    pub thread_root_id: Option<String>,
    pub sender_id: Option<String>,
    pub instant: DateTime<Utc>,
    pub text: String,
}

impl SearchMatch {
    /// Identifier of the thread this match belongs to.
    pub fn thread_root(&self) -> &str {
        self.thread_root_id.as_deref().unwrap_or(&self.message_id)
    }
}

/// One message of a conversation thread (root or reply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadMessage {
    pub sender_id: Option<String>,
    pub instant: DateTime<Utc>,
    pub text: String,
}

/// Parse a Slack `ts` ("1709251200.123456") into a UTC instant.
///
/// Seconds and the fractional part are parsed as integers, so no precision is
/// lost to floating point.
pub fn parse_slack_ts(ts: &str) -> Option<DateTime<Utc>> {
    let (secs, frac) = match ts.trim().split_once('.') {
        Some((s, f)) => (s, f),
        None => (ts.trim(), ""),
    };
    if secs.is_empty() || !secs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let secs: i64 = secs.parse().ok()?;
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().ok()?
    };
    DateTime::from_timestamp(secs, nanos)
}
