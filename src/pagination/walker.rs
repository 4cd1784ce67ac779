//! Page-number pagination on top of cursor pagination
//!
//! The upstream APIs only support walking forward with a cursor, while
//! callers ask for numbered pages. Reaching page N therefore means fetching
//! pages 1..N-1 purely to learn each next cursor ("warm-up" calls), then
//! fetching page N itself.
//!
//! Page N always costs N upstream calls, and with a warm-up delay at least
//! `delay * (N - 1)` of wall-clock time. Nothing is remembered between
//! walks, so concurrent or repeated requests each pay the full cost. A
//! cross-request cursor cache keyed by `(per_page, page)` would remove this.

use super::types::{Cursor, Page, PageRequest, PaginationState, WalkOutcome};
use crate::error::Result;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Walks cursor pagination up to a numbered page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWalker {
    /// Pause after every warm-up call that yielded a cursor
    warmup_delay: Option<Duration>,
}

impl PageWalker {
    /// Create a walker without any pause between calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker that pauses between consecutive upstream calls
    pub fn with_delay(delay: Option<Duration>) -> Self {
        Self {
            warmup_delay: delay.filter(|d| !d.is_zero()),
        }
    }

    /// Configured pause between calls
    pub fn warmup_delay(&self) -> Option<Duration> {
        self.warmup_delay
    }

    /// Fetch the requested page, see [`walk_to_page`]
    pub async fn walk<T, F, Fut>(&self, request: PageRequest, fetch: F) -> Result<WalkOutcome<T>>
    where
        F: FnMut(Option<Cursor>) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        walk_to_page(request, self.warmup_delay, fetch).await
    }
}

/// Fetch page `request.page()` by following cursors from the first page.
///
/// `fetch` is called once per upstream page with the cursor to send (`None`
/// for the first page). Calls are strictly sequential. If a warm-up page has
/// no next cursor the walk stops at once with [`WalkOutcome::Exhausted`].
/// Any fetch error aborts the walk and is returned unchanged.
pub async fn walk_to_page<T, F, Fut>(
    request: PageRequest,
    warmup_delay: Option<Duration>,
    mut fetch: F,
) -> Result<WalkOutcome<T>>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut state = PaginationState::new();

    for _ in 0..request.warmup_calls() {
        debug!(
            call = state.page + 1,
            target_page = request.page(),
            cursor = ?state.cursor,
            "Fetching warm-up page"
        );
        let page = fetch(state.take_cursor()).await?;
        state.advance(page);

        if state.done {
            info!(
                target_page = request.page(),
                last_page = state.page,
                "No more pages available"
            );
            return Ok(WalkOutcome::Exhausted {
                last_page: state.page,
            });
        }

        if let Some(delay) = warmup_delay {
            debug!(?delay, "Waiting before next upstream call");
            tokio::time::sleep(delay).await;
        }
    }

    debug!(
        target_page = request.page(),
        cursor = ?state.cursor,
        skipped_records = state.total_fetched,
        "Fetching target page"
    );
    let page = fetch(state.take_cursor()).await?;
    Ok(WalkOutcome::Page(page))
}
