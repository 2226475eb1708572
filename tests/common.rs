#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use worklog::models::{SearchMatch, ThreadMessage};

/// worklog binary isolated from the user's config: HOME points to a scratch dir,
/// Slack settings are cleared and mock mode is on.
pub fn wl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("worklog");
    cmd.env("HOME", home)
        .env("WORKLOG_USE_MOCK", "true")
        .env_remove("SLACK_TOKEN")
        .env_remove("SLACK_CHANNEL_ID")
        .env_remove("SLACK_CHANNEL_NAME")
        .env_remove("WORKLOG_DB")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// UTC instant for a JST wall-clock time.
pub fn jst(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    let local = chrono::FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap();
    local.with_timezone(&Utc)
}

/// Slack-style ts for an instant, with a fixed micro suffix.
pub fn ts(instant: DateTime<Utc>) -> String {
    format!("{}.000100", instant.timestamp())
}

pub fn msg(instant: DateTime<Utc>, text: &str) -> ThreadMessage {
    ThreadMessage {
        sender_id: Some("U123".to_string()),
        instant,
        text: text.to_string(),
    }
}

/// A search hit on a root message.
pub fn root_match(instant: DateTime<Utc>) -> SearchMatch {
    SearchMatch {
        message_id: ts(instant),
        thread_root_id: None,
        sender_id: Some("U123".to_string()),
        instant,
        text: "開始します".to_string(),
    }
}

/// A search hit on a reply inside the thread rooted at `root`.
pub fn reply_match(root: DateTime<Utc>, instant: DateTime<Utc>) -> SearchMatch {
    SearchMatch {
        message_id: ts(instant),
        thread_root_id: Some(ts(root)),
        sender_id: Some("U123".to_string()),
        instant,
        text: "開始します（再）".to_string(),
    }
}
