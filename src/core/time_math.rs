//! Instant conversion and working-duration arithmetic.
//!
//! Every conversion from a UTC instant to local civil time goes through
//! [`to_local_fixed_offset`]; nothing else in the crate applies an offset.

use crate::core::break_time::is_well_formed;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, SecondsFormat, TimeZone, Utc};

/// Sentinel for "no data", used for missing timestamps and durations.
pub const NO_DATA: &str = "---";
/// Break duration assumed for every attended day.
pub const DEFAULT_BREAK: &str = "1:00";
/// Result for durations that cannot be computed from the given values.
pub const ZERO_DURATION: &str = "0:00";

const LOCAL_OFFSET_SECS: i32 = 9 * 3600;

/// The fixed +09:00 offset, no daylight saving.
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Convert a UTC instant into the local fixed-offset representation.
pub fn to_local_fixed_offset(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&local_offset())
}

/// Local wall-clock time on a given civil date.
pub fn local_at(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<FixedOffset>> {
    let naive = date.and_hms_opt(hour, minute, 0)?;
    local_offset().from_local_datetime(&naive).single()
}

/// ISO 8601 with milliseconds and an explicit `+09:00` suffix.
pub fn render_local(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub fn render_optional(ts: Option<DateTime<FixedOffset>>) -> String {
    ts.map(|t| render_local(&t))
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Parse a rendered local timestamp back; the sentinel and garbage yield `None`.
pub fn parse_local(text: &str) -> Option<DateTime<FixedOffset>> {
    if text.trim() == NO_DATA {
        return None;
    }
    DateTime::parse_from_rfc3339(text.trim()).ok()
}

/// Split an `H:MM` text on ':' and return the total minutes.
///
/// No range checks are made on either part; callers validate the format first.
pub fn parse_duration_text(text: &str) -> Option<i64> {
    let (h, m) = text.split_once(':')?;
    let hours: i64 = h.trim().parse().ok()?;
    let minutes: i64 = m.trim().parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Render minutes as `H:MM` (unpadded hours, two-digit minutes).
pub fn format_minutes(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}:{:02}", m / 60, m % 60)
}

/// Elapsed time between clock-in and clock-out minus the break, as `H:MM`.
///
/// - missing clock-in or clock-out → [`NO_DATA`]
/// - break text other than `H:MM` / `HH:MM` → [`ZERO_DURATION`]
/// - elapsed time is truncated to whole minutes, then clamped at zero
pub fn compute_working_duration(
    clock_in: Option<DateTime<FixedOffset>>,
    clock_out: Option<DateTime<FixedOffset>>,
    break_duration: &str,
) -> String {
    let (Some(start), Some(end)) = (clock_in, clock_out) else {
        return NO_DATA.to_string();
    };
    if !is_well_formed(break_duration) {
        return ZERO_DURATION.to_string();
    }
    let Some(break_minutes) = parse_duration_text(break_duration) else {
        return ZERO_DURATION.to_string();
    };

    let elapsed = (end - start).num_seconds().div_euclid(60);
    let total = elapsed - break_minutes;
    if total <= 0 {
        return ZERO_DURATION.to_string();
    }
    format_minutes(total)
}

/// Text-level variant: timestamps given as rendered local strings or [`NO_DATA`].
pub fn compute_working_duration_text(clock_in: &str, clock_out: &str, break_duration: &str) -> String {
    compute_working_duration(parse_local(clock_in), parse_local(clock_out), break_duration)
}
