//! Retrieval methods for public subreddit listings.
//!
//! Each submodule implements one way of getting post data out of Reddit,
//! ordered here from most to least recommended:
//!
//! | Method | Module | Auth | Notes |
//! |--------|--------|------|-------|
//! | Official API | [`oauth`] | OAuth2 script app | Sanctioned; needs registered credentials |
//! | JSON endpoint | [`listing`] | none | Public `.json` listing, rate limited per IP |
//! | Pushshift | [`pushshift`] | none | Third-party archive, availability varies |
//! | HTML scraping | [`scrape`] | none | Brittle and ToS-hostile; opt-in only |
//!
//! # Common Patterns
//!
//! Every method implements [`Fetch`]: one page of results per run, no retry,
//! no pagination. Failures are reported through `tracing` at the method
//! boundary and collapse to `None`, so one broken method never stops the
//! comparison.

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use serde::Deserialize;
use std::time::Duration as StdDuration;

pub mod listing;
pub mod oauth;
pub mod pushshift;
pub mod scrape;

/// Per-request timeout applied by the unauthenticated methods.
pub const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// A single retrieval method.
///
/// `fetch` returns `None` when the method failed outright (the failure has
/// already been reported) and `Some(vec![])` when the method worked but the
/// listing was empty. Callers treat both as nothing to show; the distinction
/// keeps error reporting at the method boundary.
pub trait Fetch {
    /// The record shape this method produces.
    type Record;

    /// Heading used for this method's section of the transcript.
    fn label(&self) -> &'static str;

    /// Run the method to completion, yielding one page of records.
    async fn fetch(&self) -> Option<Vec<Self::Record>>;
}

/// Time window for "top" listings, as accepted by Reddit's `t` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    /// The window's value for the `t` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }

    /// Epoch seconds marking the start of the window, or `None` for
    /// [`TimeWindow::All`].
    ///
    /// Month and year use fixed 30 and 365 day spans, close enough to how
    /// Reddit buckets its own listings to serve as a search cutoff.
    pub fn after_epoch(&self, now: DateTime<Utc>) -> Option<i64> {
        let span = match self {
            TimeWindow::Hour => Duration::hours(1),
            TimeWindow::Day => Duration::days(1),
            TimeWindow::Week => Duration::weeks(1),
            TimeWindow::Month => Duration::days(30),
            TimeWindow::Year => Duration::days(365),
            TimeWindow::All => return None,
        };
        Some((now - span).timestamp())
    }
}

/// Listing envelope shared by the official API and the `.json` endpoint.
///
/// Both serve `{"data": {"children": [{"data": {...}}, ...]}}`; only the
/// inner record shape differs.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing<R> {
    pub(crate) data: ListingData<R>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData<R> {
    // Path form: the derive must not demand `R: Default` for the field default.
    #[serde(default = "Vec::new")]
    pub(crate) children: Vec<ListingChild<R>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingChild<R> {
    pub(crate) data: R,
}
