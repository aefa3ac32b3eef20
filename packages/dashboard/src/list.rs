//! # List-and-summary controller state
//!
//! [`StudentList`] holds everything the student list screen knows, independent of
//! any UI framework. A view drives it in two-step transitions around each remote
//! call:
//!
//! | Step | Call | Then |
//! |------|------|------|
//! | page load | [`begin_load`](StudentList::begin_load) | `list_students`, then [`finish_load`](StudentList::finish_load) with the ticket |
//! | summary on expand | [`toggle_summary`](StudentList::toggle_summary) returns `true` | `get_summary`, then [`finish_summary`](StudentList::finish_summary) |
//! | summary without expanding | [`begin_summary`](StudentList::begin_summary) returns `true` | same as above |
//!
//! ## Page state
//!
//! `Idle -> Loading -> Loaded | LoadError`, re-entering `Loading` on every
//! `begin_load`. Each `begin_load` hands out a [`LoadTicket`] stamped with a
//! monotonically increasing generation; `finish_load` applies a response only if
//! its ticket is the latest one, so a slow response for an old page cannot
//! overwrite a newer page.
//!
//! ## Summary slots
//!
//! One [`SummarySlot`] per student id combines the expanded/collapsed panel with
//! the fetch state. A slot can only leave `Unfetched` once: ready summaries and
//! failures are both kept for the lifetime of the controller, and slots survive
//! page changes.

use std::collections::HashMap;

use api::{ApiError, Student, StudentId, StudentPage, SummaryResponse};

use crate::pagination::Pagination;
use crate::query::PageQuery;
use crate::summary::format_summary;

/// Shown in place of a summary whose generation failed.
pub const SUMMARY_FALLBACK: &str = "Failed to generate summary.";

/// Shown when a page of students could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load students. Please try again later.";

/// A formatted summary and where the service says it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub text: String,
    pub source: Option<String>,
}

impl From<SummaryResponse> for Summary {
    fn from(response: SummaryResponse) -> Self {
        Self {
            text: format_summary(&response.summary),
            source: response.source,
        }
    }
}

/// Panel and fetch state of one student's summary.
///
/// There is no expanded-but-unfetched state: expanding an unfetched slot starts
/// the fetch in the same transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SummarySlot {
    #[default]
    CollapsedUnfetched,
    CollapsedFetching,
    CollapsedReady(Summary),
    CollapsedFailed,
    ExpandedFetching,
    ExpandedReady(Summary),
    ExpandedFailed,
}

impl SummarySlot {
    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            Self::ExpandedFetching | Self::ExpandedReady(_) | Self::ExpandedFailed
        )
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::CollapsedFetching | Self::ExpandedFetching)
    }

    pub fn is_unfetched(&self) -> bool {
        matches!(self, Self::CollapsedUnfetched)
    }

    /// The cached text: the formatted summary, or the fallback after a failure.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::CollapsedReady(s) | Self::ExpandedReady(s) => Some(&s.text),
            Self::CollapsedFailed | Self::ExpandedFailed => Some(SUMMARY_FALLBACK),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            Self::CollapsedReady(s) | Self::ExpandedReady(s) => s.source.as_deref(),
            _ => None,
        }
    }

    /// Flip the panel. Returns the new slot and whether a fetch must start.
    fn toggled(self) -> (Self, bool) {
        match self {
            Self::CollapsedUnfetched => (Self::ExpandedFetching, true),
            Self::CollapsedFetching => (Self::ExpandedFetching, false),
            Self::CollapsedReady(s) => (Self::ExpandedReady(s), false),
            Self::CollapsedFailed => (Self::ExpandedFailed, false),
            Self::ExpandedFetching => (Self::CollapsedFetching, false),
            Self::ExpandedReady(s) => (Self::CollapsedReady(s), false),
            Self::ExpandedFailed => (Self::CollapsedFailed, false),
        }
    }

    /// Apply a fetch outcome, keeping the panel as it is.
    fn resolved(self, outcome: Option<Summary>) -> Self {
        let expanded = self.is_expanded();
        match (outcome, expanded) {
            (Some(s), true) => Self::ExpandedReady(s),
            (Some(s), false) => Self::CollapsedReady(s),
            (None, true) => Self::ExpandedFailed,
            (None, false) => Self::CollapsedFailed,
        }
    }
}

/// Load state of the current page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Loaded(StudentPage),
    LoadError(String),
}

/// Proof that a page load was started; hand it back to `finish_load`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
    pub query: PageQuery,
}

/// What the list area should show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Records(&'a [Student]),
}

/// State of the student list screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentList {
    query: PageQuery,
    page: PageState,
    generation: u64,
    total_pages: u32,
    summaries: HashMap<StudentId, SummarySlot>,
}

static UNFETCHED: SummarySlot = SummarySlot::CollapsedUnfetched;

impl StudentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The position most recently requested.
    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    /// Records of the loaded page; empty unless the state is `Loaded`.
    pub fn students(&self) -> &[Student] {
        match &self.page {
            PageState::Loaded(page) => &page.students,
            _ => &[],
        }
    }

    /// Total record count of the last loaded page.
    pub fn total(&self) -> Option<u64> {
        match &self.page {
            PageState::Loaded(page) => Some(page.total),
            _ => None,
        }
    }

    /// Enter `Loading` for `query` and invalidate any load still in flight.
    pub fn begin_load(&mut self, query: PageQuery) -> LoadTicket {
        self.generation += 1;
        self.query = query;
        self.page = PageState::Loading;
        LoadTicket {
            generation: self.generation,
            query,
        }
    }

    /// Apply the outcome of a load. Returns `false` if a newer load superseded it.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<StudentPage, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale response for page {} (generation {} < {})",
                ticket.query.page,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    "Loaded page {} with {} of {} students",
                    ticket.query.page,
                    page.students.len(),
                    page.total
                );
                self.total_pages = page.total_pages;
                self.page = PageState::Loaded(page);
            }
            Err(e) => {
                tracing::error!("Error fetching students: {}", e);
                self.total_pages = 0;
                self.page = PageState::LoadError(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.page {
            PageState::Idle | PageState::Loading => ListView::Loading,
            PageState::LoadError(message) => ListView::Error(message),
            PageState::Loaded(page) if page.is_empty() => ListView::Empty,
            PageState::Loaded(page) => ListView::Records(&page.students),
        }
    }

    /// Controls for the requested page against the last known page count.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.query.page, self.total_pages)
    }

    /// The position to navigate to for `new_page`, keeping the page size.
    pub fn change_page(&self, new_page: u32) -> PageQuery {
        self.query.with_page(new_page)
    }

    pub fn slot(&self, id: StudentId) -> &SummarySlot {
        self.summaries.get(&id).unwrap_or(&UNFETCHED)
    }

    /// Flip the summary panel of `id`. Returns `true` if a fetch must start.
    pub fn toggle_summary(&mut self, id: StudentId) -> bool {
        let slot = self.summaries.remove(&id).unwrap_or_default();
        let (slot, fetch) = slot.toggled();
        self.summaries.insert(id, slot);
        fetch
    }

    /// Start fetching the summary of `id` without touching the panel.
    ///
    /// Returns `false` if the summary is already cached or in flight.
    pub fn begin_summary(&mut self, id: StudentId) -> bool {
        let slot = self.summaries.entry(id).or_default();
        if !slot.is_unfetched() {
            return false;
        }
        *slot = SummarySlot::CollapsedFetching;
        true
    }

    /// Store the outcome of a summary fetch for `id`. Failures cache the fallback.
    pub fn finish_summary(&mut self, id: StudentId, result: Result<SummaryResponse, ApiError>) {
        let Some(slot) = self.summaries.remove(&id) else {
            tracing::warn!("Summary for {} arrived without a pending fetch", id);
            return;
        };
        if !slot.is_fetching() {
            tracing::warn!("Summary for {} arrived for a settled slot", id);
            self.summaries.insert(id, slot);
            return;
        }

        let outcome = match result {
            Ok(response) => Some(Summary::from(response)),
            Err(e) => {
                tracing::error!("Error fetching summary for {}: {}", id, e);
                None
            }
        };
        self.summaries.insert(id, slot.resolved(outcome));
    }
}
