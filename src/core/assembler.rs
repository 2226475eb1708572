//! End-to-end reconstruction of a monthly ledger from attendance threads.
//!
//! One fetch runs `Idle → Searching → FetchingThreads → Merging → Done`,
//! or ends in `Failed` when configuration or the search call fails.
//! Thread fetches are sequential, each followed by a fixed pause.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::api::{MessagingApi, SearchRequest};
use crate::config::Config;
use crate::core::calendar::{SearchRange, compute_search_range, expand_month};
use crate::core::reducer::{ThreadSummary, reduce_thread};
use crate::core::time_math::to_local_fixed_offset;
use crate::errors::{AppError, AppResult};
use crate::models::message::parse_slack_ts;
use crate::models::{AttendanceDay, AttendanceLedger, SearchMatch, YearMonth};

/// Where a fetch currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Searching,
    FetchingThreads { fetched: usize, total: usize },
    Merging,
    Done(AttendanceLedger),
    Failed(String),
}

impl FetchState {
    pub fn name(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Searching => "searching",
            FetchState::FetchingThreads { .. } => "fetching_threads",
            FetchState::Merging => "merging",
            FetchState::Done(_) => "done",
            FetchState::Failed(_) => "failed",
        }
    }
}

/// Everything the assembler needs, taken once from [`Config`].
#[derive(Debug, Clone)]
pub struct AssemblerSettings {
    pub channel_id: String,
    pub channel_name: Option<String>,
    pub search_keyword: String,
    pub break_keywords: Vec<String>,
    pub result_limit: u32,
    pub request_delay: Duration,
}

impl AssemblerSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let creds = cfg.slack_credentials()?;
        Ok(Self {
            channel_id: creds.channel_id,
            channel_name: cfg.slack_channel_name.clone(),
            search_keyword: cfg.search_keyword.clone(),
            break_keywords: cfg.break_keywords.clone(),
            result_limit: cfg.search_result_limit,
            request_delay: cfg.request_delay(),
        })
    }
}

/// `"<keyword>" after:<date> before:<date> in:<channel>`
pub fn build_search_query(settings: &AssemblerSettings, range: &SearchRange) -> String {
    let channel = match settings.channel_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("#{}", name.trim_start_matches('#')),
        _ => format!("<#{}>", settings.channel_id),
    };
    format!(
        "\"{}\" after:{} before:{} in:{}",
        settings.search_keyword,
        range.after_str(),
        range.before_str(),
        channel
    )
}

/// Thread roots in first-seen order, each once.
pub fn unique_thread_roots(matches: &[SearchMatch]) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .iter()
        .map(SearchMatch::thread_root)
        .filter(|root| seen.insert(root.to_string()))
        .map(str::to_string)
        .collect()
}

pub struct LedgerAssembler<'a, A: MessagingApi + ?Sized> {
    api: &'a A,
    settings: AssemblerSettings,
    state: FetchState,
}

impl<'a, A: MessagingApi + ?Sized> LedgerAssembler<'a, A> {
    pub fn new(api: &'a A, settings: AssemblerSettings) -> Self {
        Self {
            api,
            settings,
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    fn transition(&mut self, next: FetchState) {
        debug!(from = self.state.name(), to = next.name(), "fetch state change");
        self.state = next;
    }

    fn fail(&mut self, err: AppError) -> AppError {
        warn!(error = %err, "ledger fetch failed");
        self.transition(FetchState::Failed(err.user_message()));
        err
    }

    /// Rebuild the ledger for `ym`.
    pub async fn fetch_ledger(&mut self, ym: YearMonth) -> AppResult<AttendanceLedger> {
        // -----------------------------
        // Searching
        // -----------------------------
        self.transition(FetchState::Searching);
        let range = compute_search_range(ym);
        let query = build_search_query(&self.settings, &range);
        info!(month = %ym, %query, "searching attendance messages");

        let request = SearchRequest::by_timestamp_asc(query, self.settings.result_limit);
        let matches = match self.api.search_messages(&request).await {
            Ok(m) => m,
            Err(e) if e.is_fatal_for_fetch() => return Err(self.fail(e)),
            Err(other) => return Err(self.fail(AppError::Search(other.to_string()))),
        };

        // -----------------------------
        // FetchingThreads
        // -----------------------------
        let roots = unique_thread_roots(&matches);
        info!(
            matches = matches.len(),
            threads = roots.len(),
            "resolved thread roots"
        );
        self.transition(FetchState::FetchingThreads {
            fetched: 0,
            total: roots.len(),
        });

        let mut resolved: Vec<(NaiveDate, ThreadSummary)> = Vec::with_capacity(roots.len());
        for (i, root) in roots.iter().enumerate() {
            match self.fetch_one(root).await {
                Ok(entry) => resolved.push(entry),
                Err(e) => warn!(thread = %root, error = %e, "skipping thread"),
            }
            self.transition(FetchState::FetchingThreads {
                fetched: i + 1,
                total: roots.len(),
            });

            if !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
        }

        // -----------------------------
        // Merging
        // -----------------------------
        self.transition(FetchState::Merging);
        let ledger = merge_into_ledger(ym, resolved)?;
        info!(
            month = %ym,
            attended = ledger.attended_days(),
            "ledger assembled"
        );

        self.transition(FetchState::Done(ledger.clone()));
        Ok(ledger)
    }

    /// Fetch and reduce one thread, keyed by the local date of its root.
    async fn fetch_one(&self, root: &str) -> AppResult<(NaiveDate, ThreadSummary)> {
        let root_instant = parse_slack_ts(root)
            .ok_or_else(|| AppError::ThreadFetch(format!("invalid thread root '{root}'")))?;
        let date = to_local_fixed_offset(root_instant).date_naive();

        debug!(thread = %root, %date, "fetching thread");
        let messages = self
            .api
            .fetch_thread_messages(&self.settings.channel_id, root)
            .await?;
        let summary = reduce_thread(&messages, &self.settings.break_keywords)?;

        Ok((date, summary))
    }
}

/// Key thread results by date and fill every other day with a placeholder.
///
/// Threads sharing a date collapse into one day: earliest clock-in,
/// latest clock-out. Dates outside `ym` are dropped.
pub fn merge_into_ledger(
    ym: YearMonth,
    resolved: Vec<(NaiveDate, ThreadSummary)>,
) -> AppResult<AttendanceLedger> {
    let mut by_date: BTreeMap<NaiveDate, AttendanceDay> = BTreeMap::new();

    for (date, summary) in resolved {
        by_date
            .entry(date)
            .and_modify(|day| {
                day.clock_in = day.clock_in.min(Some(summary.clock_in));
                day.clock_out = day.clock_out.max(Some(summary.clock_out));
                day.has_break_notice |= summary.has_break_notice;
            })
            .or_insert_with(|| AttendanceDay {
                break_duration: summary.break_duration.clone(),
                ..AttendanceDay::attended(
                    date,
                    summary.clock_in,
                    summary.clock_out,
                    summary.has_break_notice,
                    summary.user_id.clone(),
                )
            });
    }

    let days: Vec<AttendanceDay> = expand_month(ym)
        .into_iter()
        .map(|date| {
            by_date
                .remove(&date)
                .unwrap_or_else(|| AttendanceDay::placeholder(date))
        })
        .filter(|day| ym.contains(day.date))
        .collect();

    AttendanceLedger::new(ym, days)
}
