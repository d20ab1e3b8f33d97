//! Page results and the response envelope rendered by list endpoints.

use serde::Serialize;
use url::Url;

use crate::PageRequest;

const LIMIT_PARAM: &str = "limit";
const OFFSET_PARAM: &str = "offset";

/// One window of items together with the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    count: usize,
}

impl<T> Page<T> {
    /// Bundle the selected items with the total collection size.
    #[must_use]
    pub const fn new(items: Vec<T>, count: usize) -> Self {
        Self { items, count }
    }

    /// Items inside the window.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of items in the unwindowed collection.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Convert the items while keeping the count.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
        }
    }

    /// Split into items and count.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, usize) {
        (self.items, self.count)
    }
}

/// Absolute links to the neighbouring windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// Link to the following window, if any items remain.
    pub next: Option<Url>,
    /// Link to the preceding window, if this is not the first one.
    pub previous: Option<Url>,
}

impl PageLinks {
    /// Derive neighbour links from the URL that produced the current window.
    ///
    /// Query parameters other than `limit` and `offset` are preserved. The
    /// previous link omits `offset` entirely when it would point at the start
    /// of the collection.
    #[must_use]
    pub fn for_window(base: &Url, request: PageRequest, count: usize) -> Self {
        let next = request
            .next_offset(count)
            .map(|offset| with_window(base, request.limit(), Some(offset)));
        let previous = request.previous_offset().map(|offset| {
            let offset = (offset > 0).then_some(offset);
            with_window(base, request.limit(), offset)
        });
        Self { next, previous }
    }
}

fn with_window(base: &Url, limit: usize, offset: Option<usize>) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != LIMIT_PARAM && key != OFFSET_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(retained);
        pairs.append_pair(LIMIT_PARAM, &limit.to_string());
        if let Some(offset) = offset {
            pairs.append_pair(OFFSET_PARAM, &offset.to_string());
        }
    }
    url
}

/// Serialised list envelope: `{count, next, previous, results}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    /// Total number of items in the collection.
    pub count: usize,
    /// Absolute URL of the following window.
    pub next: Option<String>,
    /// Absolute URL of the preceding window.
    pub previous: Option<String>,
    /// Items in the current window.
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Render a page for the window described by `request`, using `base` (the
    /// URL of the current request) to build navigation links.
    #[must_use]
    pub fn from_page(page: Page<T>, request: PageRequest, base: &Url) -> Self {
        let (results, count) = page.into_parts();
        let PageLinks { next, previous } = PageLinks::for_window(base, request, count);
        Self {
            count,
            next: next.map(String::from),
            previous: previous.map(String::from),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Link construction and envelope shape.
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn base() -> Url {
        Url::parse("http://testserver/api/v1/posts?limit=2&offset=2&search=x").expect("url")
    }

    #[rstest]
    fn middle_window_links_both_ways(base: Url) {
        let request = PageRequest::new(2, 2).expect("window");
        let links = PageLinks::for_window(&base, request, 10);

        assert_eq!(
            links.next.map(String::from).as_deref(),
            Some("http://testserver/api/v1/posts?search=x&limit=2&offset=4")
        );
        assert_eq!(
            links.previous.map(String::from).as_deref(),
            Some("http://testserver/api/v1/posts?search=x&limit=2")
        );
    }

    #[rstest]
    fn first_window_has_no_previous(base: Url) {
        let request = PageRequest::new(2, 0).expect("window");
        let links = PageLinks::for_window(&base, request, 10);
        assert!(links.previous.is_none());
        assert!(links.next.is_some());
    }

    #[rstest]
    fn past_the_end_window_links_back_only(base: Url) {
        let request = PageRequest::new(2, 5).expect("window");
        let links = PageLinks::for_window(&base, request, 3);
        assert!(links.next.is_none());
        assert_eq!(
            links.previous.map(String::from).as_deref(),
            Some("http://testserver/api/v1/posts?search=x&limit=2&offset=3")
        );
    }

    #[rstest]
    fn envelope_serialises_drf_shape(base: Url) {
        let request = PageRequest::new(2, 5).expect("window");
        let envelope = Paginated::from_page(Page::new(Vec::<u32>::new(), 3), request, &base);
        let value = serde_json::to_value(&envelope).expect("serialise");

        assert_eq!(value["count"], json!(3));
        assert_eq!(value["next"], json!(null));
        assert_eq!(value["results"], json!([]));
    }

    #[rstest]
    fn page_map_preserves_count() {
        let page = Page::new(vec![1, 2], 7).map(|n| n * 10);
        assert_eq!(page.items(), &[10, 20]);
        assert_eq!(page.count(), 7);
    }
}
