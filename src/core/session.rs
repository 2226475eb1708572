//! In-memory ledger snapshot as seen by the UI.
//!
//! Holds the current ledger, the break-time text being typed per day and the
//! validation notices still on screen. Fetch results are applied through a
//! generation-tagged ticket so an older, slower fetch cannot overwrite a newer one.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::core::break_time::{ValidationNotice, is_well_formed, normalize};
use crate::errors::AppResult;
use crate::models::{AttendanceLedger, YearMonth};

/// Handed out when a fetch starts; needed to apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    year_month: YearMonth,
}

#[derive(Debug, Default)]
pub struct LedgerSession {
    ledger: Option<AttendanceLedger>,
    selected_month: Option<YearMonth>,
    generation: u64,
    drafts: HashMap<usize, String>,
    notices: BTreeMap<usize, ValidationNotice>,
}

impl LedgerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already available ledger (e.g. the local cache).
    pub fn with_ledger(ledger: AttendanceLedger) -> Self {
        Self {
            selected_month: Some(ledger.year_month),
            ledger: Some(ledger),
            ..Self::default()
        }
    }

    pub fn ledger(&self) -> Option<&AttendanceLedger> {
        self.ledger.as_ref()
    }

    pub fn into_ledger(self) -> Option<AttendanceLedger> {
        self.ledger
    }

    pub fn selected_month(&self) -> Option<YearMonth> {
        self.selected_month
    }

    /// Select a month and invalidate every fetch started before.
    pub fn begin_fetch(&mut self, ym: YearMonth) -> FetchTicket {
        self.generation += 1;
        self.selected_month = Some(ym);
        FetchTicket {
            generation: self.generation,
            year_month: ym,
        }
    }

    /// Apply a finished fetch. Returns `false` when the result is stale.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, ledger: AttendanceLedger) -> bool {
        let current = ticket.generation == self.generation
            && self.selected_month == Some(ticket.year_month)
            && ledger.year_month == ticket.year_month;
        if !current {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        self.ledger = Some(ledger);
        self.drafts.clear();
        self.notices.clear();
        true
    }

    /// Text to show in the break field of a day.
    pub fn break_text(&self, day_index: usize) -> Option<&str> {
        if let Some(draft) = self.drafts.get(&day_index) {
            return Some(draft.as_str());
        }
        self.ledger
            .as_ref()
            .and_then(|l| l.days.get(day_index))
            .map(|d| d.break_duration.as_str())
    }

    /// Keystroke: keep the text as typed, apply it only when well-formed.
    pub fn on_break_time_edit(&mut self, day_index: usize, text: &str) -> AppResult<()> {
        let Some(ledger) = self.ledger.as_mut() else {
            return Ok(());
        };
        let day = ledger.day_mut(day_index)?;

        if is_well_formed(text) {
            day.break_duration = text.to_string();
        }
        self.drafts.insert(day_index, text.to_string());
        Ok(())
    }

    /// Blur: a malformed draft, or a malformed stored value when nothing was
    /// typed, falls back to the default break.
    pub fn on_break_time_commit(&mut self, day_index: usize) -> AppResult<Option<ValidationNotice>> {
        let Some(ledger) = self.ledger.as_mut() else {
            return Ok(None);
        };
        let day = ledger.day_mut(day_index)?;

        let committed = self
            .drafts
            .remove(&day_index)
            .unwrap_or_else(|| day.break_duration.clone());
        if is_well_formed(&committed) {
            return Ok(None);
        }

        day.break_duration = normalize(&committed);
        let notice = ValidationNotice::reset_to_default(day_index, &committed);
        self.notices.insert(day_index, notice.clone());
        Ok(Some(notice))
    }

    /// Second half of the notice contract, called after `clear_after`.
    pub fn dismiss_notice(&mut self, day_index: usize) -> bool {
        self.notices.remove(&day_index).is_some()
    }

    pub fn notices(&self) -> impl Iterator<Item = &ValidationNotice> {
        self.notices.values()
    }
}
