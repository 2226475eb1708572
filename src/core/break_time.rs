use crate::core::time_math::DEFAULT_BREAK;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// How long a validation notice stays visible before the UI clears it.
pub const NOTICE_CLEAR_DELAY: Duration = Duration::from_secs(3);

static BREAK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("valid break-time pattern"));

/// `H:MM` or `HH:MM`.
pub fn is_well_formed(text: &str) -> bool {
    BREAK_TIME_RE.is_match(text)
}

/// Returns the text when well-formed, the default break otherwise.
pub fn normalize(text: &str) -> String {
    if is_well_formed(text) {
        text.to_string()
    } else {
        DEFAULT_BREAK.to_string()
    }
}

/// Emitted when a committed break value was rejected and reset.
///
/// The UI shows `message` now and calls back after `clear_after`
/// to remove it (see `LedgerSession::dismiss_notice`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationNotice {
    pub day_index: usize,
    pub rejected: String,
    pub message: String,
    pub clear_after: Duration,
}

impl ValidationNotice {
    pub fn reset_to_default(day_index: usize, rejected: &str) -> Self {
        Self {
            day_index,
            rejected: rejected.to_string(),
            message: format!("Invalid format. Break time reset to {DEFAULT_BREAK}."),
            clear_after: NOTICE_CLEAR_DELAY,
        }
    }
}
