//! Limit/offset pagination primitives for list endpoints.
//!
//! The crate is framework agnostic: inbound adapters parse raw query values
//! into a [`PageRequest`], repositories return a [`Page`] holding the window
//! and the total count, and adapters render a [`Paginated`] envelope whose
//! `next`/`previous` links are derived from the request URL.
//!
//! # Examples
//! ```
//! use pagination::{Page, PageRequest, Paginated};
//! use url::Url;
//!
//! let request = PageRequest::from_query(Some("2"), Some("2"), 100).expect("valid limit");
//! let page = Page::new(vec!["c", "d"], 5);
//! let base = Url::parse("https://blog.example/api/v1/posts?limit=2&offset=2").expect("url");
//! let envelope = Paginated::from_page(page, request, &base);
//!
//! assert_eq!(envelope.count, 5);
//! assert_eq!(
//!     envelope.next.as_deref(),
//!     Some("https://blog.example/api/v1/posts?limit=2&offset=4")
//! );
//! ```

mod envelope;
mod window;

pub use envelope::{Page, PageLinks, Paginated};
pub use window::{PageRequest, PageRequestError};
