//! Remote data source adapter.
//!
//! Glues `opsboard-api` to the controller and table: a
//! [`RemoteSource`] satisfies [`DataSource`] by fetching from one list
//! endpoint, and [`Record`] satisfies [`TableRow`] so fetched pages
//! drop straight into a [`Table`](crate::Table).

use async_trait::async_trait;

use opsboard_api::endpoint::Endpoint;
use opsboard_api::error::Error;
use opsboard_api::model::Record;
use opsboard_api::query::{Page, PageRequest};
use opsboard_api::ApiClient;

use crate::components::controller::DataSource;
use crate::components::table::TableRow;

/// A [`DataSource`] backed by one remote list endpoint.
///
/// # Example
///
/// ```ignore
/// let source = RemoteSource::new(client, Endpoint::vendors());
/// let controller = ListController::new(source);
/// controller.refresh();
/// ```
pub struct RemoteSource {
    client: ApiClient,
    endpoint: Endpoint,
}

impl RemoteSource {
    /// Create a source fetching from the given endpoint.
    pub fn new(client: ApiClient, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// Returns the endpoint this source fetches from.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    type Item = Record;

    async fn fetch(&self, request: &PageRequest) -> Result<Page<Record>, Error> {
        self.client.list(&self.endpoint, request).await
    }
}

impl TableRow for Record {
    fn id(&self) -> String {
        Record::id(self).unwrap_or_default()
    }

    fn cell(&self, column: &str) -> String {
        self.display(column)
    }
}
