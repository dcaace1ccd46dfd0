//! Lazy, restartable sequences over paginated list endpoints.
//!
//! A [`Paginated`] sequence fetches pages on demand: nothing is requested
//! until the consumer asks for an item beyond the buffered prefix, and then
//! exactly one GET is issued per page boundary crossed. Items already fetched
//! stay buffered, so a fresh [`Paginated::iter`] re-yields them without
//! network traffic before resuming where the last fetch stopped.
//!
//! Two page layouts exist:
//! - [`PaginatedList`]: items under a named body field, cursor in `nextPageKey`
//!   and total in `totalCount` (API v2).
//! - [`HeaderPaginatedList`]: items are the top-level array, cursor and total
//!   come from the `Next-Page-Key` and `Total-Count` headers (API v1).
//!
//! # Invariants
//! - After the first page, the request parameters are replaced by the single
//!   `nextPageKey` parameter. Caller filters are not resent.
//! - A page is committed atomically: every item maps successfully or the
//!   sequence state is left untouched.
//! - A failed fetch surfaces the transport error unchanged; the next attempt
//!   requests the same page.
//! - Iteration borrows the sequence mutably, so it cannot be iterated from
//!   two places at once.

mod body;
mod header;

use std::fmt;

use futures::Stream;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

pub use body::BodyPages;
pub use header::HeaderPages;

use dynatrace_config::constants::NEXT_PAGE_KEY_PARAM;

use crate::error::Result;
use crate::http::{ApiResponse, HttpClient, Method, QueryParams};
use crate::object::{DynatraceObject, ObjectContext, construct_all};

/// Sequence whose pages carry items under a body field.
pub type PaginatedList<T> = Paginated<T, BodyPages>;

/// Sequence whose pages are bare arrays with the cursor in headers.
pub type HeaderPaginatedList<T> = Paginated<T, HeaderPages>;

/// One decoded page, before item mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub items: Vec<Value>,
    pub next_page_key: Option<String>,
    pub total_count: Option<usize>,
}

/// Where a page layout keeps its items, cursor and total.
pub trait PageStrategy {
    fn parse(&self, response: &ApiResponse) -> Result<PageData>;
}

/// Treat empty cursors as absent.
pub(crate) fn non_empty(key: Option<&str>) -> Option<String> {
    key.filter(|k| !k.is_empty()).map(str::to_string)
}

/// A lazily fetched, buffered sequence of `T`.
pub struct Paginated<T, S> {
    http: HttpClient,
    path: String,
    params: QueryParams,
    headers: Option<HeaderMap>,
    strategy: S,
    elements: Vec<T>,
    has_next_page: bool,
    total_count: Option<usize>,
    pages_fetched: usize,
}

impl<T, S: fmt::Debug> fmt::Debug for Paginated<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginated")
            .field("path", &self.path)
            .field("params", &self.params)
            .field("strategy", &self.strategy)
            .field("buffered", &self.elements.len())
            .field("has_next_page", &self.has_next_page)
            .field("total_count", &self.total_count)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

impl<T: DynatraceObject> PaginatedList<T> {
    /// A body-paginated sequence reading items from `list_item`.
    ///
    /// No request is made until the first item is requested.
    pub fn new(
        http: HttpClient,
        path: impl Into<String>,
        params: Option<QueryParams>,
        headers: Option<HeaderMap>,
        list_item: impl Into<String>,
    ) -> Self {
        Paginated::with_strategy(http, path, params, headers, BodyPages::new(list_item))
    }
}

impl<T: DynatraceObject> HeaderPaginatedList<T> {
    /// A header-paginated sequence. No request is made until the first item
    /// is requested.
    pub fn new(
        http: HttpClient,
        path: impl Into<String>,
        params: Option<QueryParams>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Paginated::with_strategy(http, path, params, headers, HeaderPages)
    }
}

impl<T: DynatraceObject, S: PageStrategy> Paginated<T, S> {
    pub fn with_strategy(
        http: HttpClient,
        path: impl Into<String>,
        params: Option<QueryParams>,
        headers: Option<HeaderMap>,
        strategy: S,
    ) -> Self {
        Self {
            http,
            path: path.into(),
            params: params.unwrap_or_default(),
            headers,
            strategy,
            elements: Vec::new(),
            has_next_page: true,
            total_count: None,
            pages_fetched: 0,
        }
    }

    /// Best-effort length: the last total reported by the server, else the
    /// number of items buffered so far.
    pub fn len(&self) -> usize {
        self.total_count.unwrap_or(self.elements.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last total reported by the server, if any page carried one.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    /// Items fetched so far, in arrival order.
    pub fn buffered(&self) -> &[T] {
        &self.elements
    }

    /// True once a page arrived without a continuation token.
    pub fn is_exhausted(&self) -> bool {
        !self.has_next_page
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters the next fetch will send.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Fetch and buffer the next page. Returns the number of items added,
    /// or `0` without a request once exhausted.
    ///
    /// # Errors
    ///
    /// Propagates the transport error, or a model's
    /// [`MissingField`](crate::ClientError::MissingField), leaving the
    /// sequence exactly as it was.
    pub async fn fetch_next_page(&mut self) -> Result<usize> {
        if !self.has_next_page {
            return Ok(0);
        }

        debug!(
            path = %self.path,
            page = self.pages_fetched + 1,
            buffered = self.elements.len(),
            "Fetching page"
        );
        let response = self
            .http
            .make_request(
                &self.path,
                &self.params,
                self.headers.as_ref(),
                Method::GET,
                None,
            )
            .await?;

        let page = self.strategy.parse(&response)?;
        let ctx = ObjectContext::new(self.http.clone()).with_headers(response.headers);
        let items: Vec<T> = construct_all(&page.items, &ctx)?;

        let added = items.len();
        self.elements.extend(items);
        if let Some(total) = page.total_count {
            self.total_count = Some(total);
        }
        match page.next_page_key {
            Some(key) => self.params = vec![(NEXT_PAGE_KEY_PARAM.to_string(), key)],
            None => self.has_next_page = false,
        }
        self.pages_fetched += 1;

        if let Some(metrics) = self.http.metrics() {
            metrics.record_page_fetched(&self.path, added);
        }
        debug!(
            path = %self.path,
            added,
            exhausted = !self.has_next_page,
            "Page committed"
        );
        Ok(added)
    }

    /// The item at `index`, fetching pages until it is buffered or the
    /// sequence is exhausted.
    pub async fn get(&mut self, index: usize) -> Result<Option<&T>> {
        while index >= self.elements.len() && self.has_next_page {
            self.fetch_next_page().await?;
        }
        Ok(self.elements.get(index))
    }

    /// Fetch every remaining page and return the full buffer.
    pub async fn fetch_all(&mut self) -> Result<&[T]> {
        while self.has_next_page {
            self.fetch_next_page().await?;
        }
        Ok(&self.elements)
    }

    /// Fetch every remaining page and take ownership of the items.
    pub async fn into_vec(mut self) -> Result<Vec<T>> {
        self.fetch_all().await?;
        Ok(self.elements)
    }

    /// Iterate from the first item. Buffered items are re-yielded without
    /// network traffic.
    pub fn iter(&mut self) -> PageIter<'_, T, S> {
        PageIter {
            list: self,
            position: 0,
        }
    }
}

impl<T, S> Paginated<T, S>
where
    T: DynatraceObject + Clone,
    S: PageStrategy,
{
    /// Consume the sequence as a stream. The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::unfold((Some(self), 0usize), |(list, position)| async move {
            let mut list = list?;
            match list.get(position).await.map(|item| item.cloned()) {
                Ok(Some(item)) => Some((Ok(item), (Some(list), position + 1))),
                Ok(None) => None,
                Err(e) => Some((Err(e), (None, position))),
            }
        })
    }
}

/// A pass over a [`Paginated`] sequence starting at its first item.
pub struct PageIter<'a, T, S> {
    list: &'a mut Paginated<T, S>,
    position: usize,
}

impl<T, S> PageIter<'_, T, S>
where
    T: DynatraceObject + Clone,
    S: PageStrategy,
{
    /// The next item, fetching a page when the buffer runs out.
    ///
    /// After an error the position is unchanged, so calling `next` again
    /// retries the same page.
    pub async fn next(&mut self) -> Option<Result<T>> {
        match self.list.get(self.position).await.map(|item| item.cloned()) {
            Ok(Some(item)) => {
                self.position += 1;
                Some(Ok(item))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }

    /// Number of items yielded by this pass.
    pub fn position(&self) -> usize {
        self.position
    }
}
