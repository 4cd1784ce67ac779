//! Pagination module
//!
//! Translates page-number requests into cursor-based upstream calls.
//!
//! # Overview
//!
//! The upstream APIs hand out an opaque `next_cursor` with every page. The
//! walker follows those cursors from the first page until it reaches the
//! requested page number, or reports that pagination ran out first.
//! The walk is transport-independent: it takes a fetch function, so the
//! same code drives the real client and test stubs.

mod types;
mod walker;

pub use types::{Cursor, Page, PageMeta, PageRequest, PaginationState, WalkOutcome};
pub use walker::{walk_to_page, PageWalker};
