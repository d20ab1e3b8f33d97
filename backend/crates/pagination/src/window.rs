//! Validated limit/offset windows.

use thiserror::Error;
use url::form_urlencoded;

/// Errors raised when constructing a [`PageRequest`] from typed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// A window must contain at least one item.
    #[error("page limit must be greater than zero")]
    ZeroLimit,
}

/// A limit/offset window over an ordered collection.
///
/// ## Invariants
/// - `limit` is at least one.
/// - `offset` may point past the end of the collection; such windows are
///   valid and simply select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: usize,
    offset: usize,
}

impl PageRequest {
    /// Build a window from typed values.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroLimit`] when `limit` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// let window = PageRequest::new(10, 20).expect("valid window");
    /// assert_eq!(window.limit(), 10);
    /// assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroLimit));
    /// ```
    pub const fn new(limit: usize, offset: usize) -> Result<Self, PageRequestError> {
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        Ok(Self { limit, offset })
    }

    /// Interpret raw `limit`/`offset` query values.
    ///
    /// Returns `None` when `limit` is absent or not a positive integer, which
    /// callers treat as "pagination not requested". A malformed or missing
    /// `offset` falls back to zero. The limit is capped at `max_limit`; a
    /// `max_limit` of zero disables the cap.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert!(PageRequest::from_query(None, Some("5"), 100).is_none());
    /// assert!(PageRequest::from_query(Some("zero"), None, 100).is_none());
    ///
    /// let window = PageRequest::from_query(Some("500"), Some("-3"), 100).expect("window");
    /// assert_eq!((window.limit(), window.offset()), (100, 0));
    /// ```
    #[must_use]
    pub fn from_query(limit: Option<&str>, offset: Option<&str>, max_limit: usize) -> Option<Self> {
        let requested = limit
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)?;
        let capped = if max_limit == 0 {
            requested
        } else {
            requested.min(max_limit)
        };
        let offset = offset
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Some(Self {
            limit: capped,
            offset,
        })
    }

    /// Interpret the `limit`/`offset` pairs of a raw query string.
    ///
    /// Repeated keys do not fail: the last occurrence wins. Everything else
    /// follows [`PageRequest::from_query`].
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let window = PageRequest::from_query_string("limit=2&limit=3&offset=1", 100)
    ///     .expect("window");
    /// assert_eq!((window.limit(), window.offset()), (3, 1));
    /// ```
    #[must_use]
    pub fn from_query_string(query: &str, max_limit: usize) -> Option<Self> {
        let mut limit = None;
        let mut offset = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "limit" => limit = Some(value),
                "offset" => offset = Some(value),
                _ => {}
            }
        }
        Self::from_query(limit.as_deref(), offset.as_deref(), max_limit)
    }

    /// Maximum number of items in the window.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Number of items skipped before the window starts.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of the following window, if any items remain after this one.
    #[must_use]
    pub const fn next_offset(&self, count: usize) -> Option<usize> {
        let end = self.offset.saturating_add(self.limit);
        if end >= count { None } else { Some(end) }
    }

    /// Offset of the preceding window.
    ///
    /// Returns `None` for the first window and `Some(0)` when stepping back
    /// would reach or cross the start of the collection.
    #[must_use]
    pub const fn previous_offset(&self) -> Option<usize> {
        if self.offset == 0 {
            None
        } else {
            Some(self.offset.saturating_sub(self.limit))
        }
    }
}
