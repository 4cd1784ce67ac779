//! Pagination types
//!
//! Defines the cursor, page and request types shared by the upstream client
//! and the page walker.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Cursor
// ============================================================================

/// Opaque pagination token issued by the upstream API.
///
/// The upstream encodes it as either a JSON string or a JSON number. The raw
/// value is kept so it serializes back exactly as received; it is never
/// inspected, only sent back as the `cursor` query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor(JsonValue);

impl Cursor {
    /// Accept a cursor value as the upstream sent it.
    ///
    /// Returns `None` for null, empty strings, and non-scalar values.
    pub fn from_upstream(value: JsonValue) -> Option<Self> {
        match &value {
            JsonValue::String(s) if s.is_empty() => None,
            JsonValue::String(_) | JsonValue::Number(_) => Some(Self(value)),
            _ => None,
        }
    }

    /// Value for the `cursor` query parameter
    pub fn to_query_value(&self) -> String {
        match &self.0 {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Cursor::from_upstream(value)
            .ok_or_else(|| D::Error::custom("cursor must be a non-empty string or a number"))
    }
}

/// `next_cursor` treats null, `""` and a missing field alike: no more pages
fn deserialize_next_cursor<'de, D>(deserializer: D) -> std::result::Result<Option<Cursor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.is_empty() => Ok(None),
        Some(value @ (JsonValue::String(_) | JsonValue::Number(_))) => {
            Ok(Cursor::from_upstream(value))
        }
        Some(other) => Err(D::Error::custom(format!(
            "next_cursor must be a string, a number or null, got {other}"
        ))),
    }
}

// ============================================================================
// Page
// ============================================================================

/// Pagination metadata from the upstream `meta` object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Cursor for the following page; `None` on the last page
    #[serde(default, deserialize_with = "deserialize_next_cursor")]
    pub next_cursor: Option<Cursor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Any other upstream meta fields, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One upstream page: the records plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,

    /// Missing or null `meta` is read as "no further pages"
    #[serde(default, deserialize_with = "deserialize_meta")]
    pub meta: PageMeta,
}

fn deserialize_meta<'de, D>(deserializer: D) -> std::result::Result<PageMeta, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PageMeta>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Page<T> {
    /// Cursor for the following page, if there is one
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.meta.next_cursor.as_ref()
    }

    /// Check if this is the last page
    pub fn is_last(&self) -> bool {
        self.meta.next_cursor.is_none()
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the page has no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// A validated page-number request: both values are at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Validate raw query values.
    ///
    /// Values below 1, or too large to send upstream, are a client error.
    pub fn new(page: i64, per_page: i64) -> Result<Self> {
        if page < 1 || per_page < 1 {
            return Err(Error::validation("page and per_page must be greater than 0"));
        }
        let page = u32::try_from(page)
            .map_err(|_| Error::validation(format!("page must be at most {}", u32::MAX)))?;
        let per_page = u32::try_from(per_page)
            .map_err(|_| Error::validation(format!("per_page must be at most {}", u32::MAX)))?;
        Ok(Self { page, per_page })
    }

    /// Target page number (1-based)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Records per upstream page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of calls made only to obtain a cursor
    pub fn warmup_calls(&self) -> u32 {
        self.page - 1
    }
}

// ============================================================================
// Walk Outcome
// ============================================================================

/// Result of walking to a numbered page
#[derive(Debug, Clone, PartialEq)]
pub enum WalkOutcome<T> {
    /// The requested page
    Page(Page<T>),
    /// The upstream ran out of pages before the requested one.
    ///
    /// This is a normal terminal state, not a failure.
    Exhausted {
        /// Last page number the upstream actually has
        last_page: u32,
    },
}

impl<T> WalkOutcome<T> {
    /// Check if pagination ran out before the target page
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Get the page, if one was reached
    pub fn into_page(self) -> Option<Page<T>> {
        match self {
            Self::Page(page) => Some(page),
            Self::Exhausted { .. } => None,
        }
    }
}

// ============================================================================
// Pagination State
// ============================================================================

/// Tracks a walk while it is in progress
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub page: u32,
    /// Cursor for the next call
    pub cursor: Option<Cursor>,
    /// Records seen so far, including discarded warm-up pages
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page and remember its cursor.
    ///
    /// Marks the walk done when the page has no next cursor.
    pub fn advance<T>(&mut self, page: Page<T>) {
        self.page += 1;
        self.total_fetched += page.len() as u64;
        self.cursor = page.meta.next_cursor;
        if self.cursor.is_none() {
            self.mark_done();
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Take the cursor for the next call
    pub fn take_cursor(&mut self) -> Option<Cursor> {
        self.cursor.take()
    }
}
