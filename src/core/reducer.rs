use crate::core::time_math::{DEFAULT_BREAK, to_local_fixed_offset};
use crate::errors::{AppError, AppResult};
use crate::models::ThreadMessage;
use chrono::{DateTime, FixedOffset};

/// Attendance facts extracted from one thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub clock_in: DateTime<FixedOffset>,
    pub clock_out: DateTime<FixedOffset>,
    pub break_duration: String,
    pub has_break_notice: bool,
    /// Sender of the earliest message.
    pub user_id: Option<String>,
}

/// Reduce a thread to its first and last message.
///
/// Messages may arrive in any order. A single message gives
/// `clock_in == clock_out`.
pub fn reduce_thread(messages: &[ThreadMessage], break_keywords: &[String]) -> AppResult<ThreadSummary> {
    if messages.is_empty() {
        return Err(AppError::EmptyThread);
    }

    // -----------------------------
    // Sort messages chronologically
    // -----------------------------
    let mut sorted: Vec<&ThreadMessage> = messages.iter().collect();
    sorted.sort_by_key(|m| m.instant);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Err(AppError::EmptyThread);
    };

    let has_break_notice = sorted
        .iter()
        .any(|m| mentions_break(&m.text, break_keywords));

    Ok(ThreadSummary {
        clock_in: to_local_fixed_offset(first.instant),
        clock_out: to_local_fixed_offset(last.instant),
        break_duration: DEFAULT_BREAK.to_string(),
        has_break_notice,
        user_id: first.sender_id.clone(),
    })
}

/// Case-insensitive substring match against any keyword.
pub fn mentions_break(text: &str, keywords: &[String]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .any(|k| haystack.contains(&k.trim().to_lowercase()))
}
