//! Async iterator for list pagination.

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::model::Record;
use crate::query::Page;
use crate::query::PageRequest;
use crate::ApiClient;

/// Async iterator that yields successive pages of a list query.
///
/// Walks `page = N, N+1, ...` until the endpoint reports the last page.
/// Used by export-style consumers that need every matching record
/// rather than one screenful.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.pages(Endpoint::vendors(), PageRequest::new(1, 100));
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for record in &page.items {
///         println!("{:?}", record.get_str("name"));
///     }
/// }
/// ```
pub struct ListPages<'a> {
    client: &'a ApiClient,
    endpoint: Endpoint,
    request: PageRequest,
    /// Whether we've exhausted all pages.
    done: bool,
}

impl<'a> ListPages<'a> {
    pub(crate) fn new(client: &'a ApiClient, endpoint: Endpoint, request: PageRequest) -> Self {
        Self {
            client,
            endpoint,
            request,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed. A failed fetch
    /// yields the error and ends iteration.
    pub async fn next(&mut self) -> Option<Result<Page<Record>, Error>> {
        if self.done {
            return None;
        }

        match self.client.list(&self.endpoint, &self.request).await {
            Ok(page) => {
                if page.is_empty() || page.info.is_last() {
                    self.done = true;
                } else {
                    self.request.page += 1;
                }
                Some(Ok(page))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
