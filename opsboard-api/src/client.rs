//! Main ApiClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::auth::TokenProvider;
use crate::endpoint::Endpoint;
use crate::envelope;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Record;
use crate::pages::ListPages;
use crate::query::Page;
use crate::query::PageRequest;
use crate::retry::RetryConfig;

/// The client for the back-office REST API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be
/// shared across threads safely. All configuration — base URL, token
/// provision, timeouts — is injected at construction; the client reads
/// no ambient state.
///
/// # Example
///
/// ```ignore
/// use opsboard_api::{ApiClient, auth::StaticTokenProvider};
///
/// let client = ApiClient::builder()
///     .base_url("https://ops.example.com/api/v1")
///     .token_provider(StaticTokenProvider::new("my-token"))
///     .build();
///
/// let page = client.list(&Endpoint::regions(), &PageRequest::new(1, 25)).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Option<Duration>,
    retry: RetryConfig,
}

impl ApiClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ApiClientBuilder<Missing, Missing> {
        ApiClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Fetches one page of records from a list endpoint.
    ///
    /// Builds `GET <base>/<path>?page=N&per_page=N&q[...]=...`, sends it
    /// with a bearer token, and normalizes whatever envelope the
    /// endpoint returns.
    pub async fn list(
        &self,
        endpoint: &Endpoint,
        request: &PageRequest,
    ) -> Result<Page<Record>, Error> {
        let url = self.list_url(endpoint, request)?;
        let response = self.send(Method::GET, url, None).await?;
        let body = json_body(response).await?;
        Ok(envelope::normalize_page(body, endpoint, request.per_page))
    }

    /// Returns an async iterator over every page of a list query.
    pub fn pages(&self, endpoint: Endpoint, request: PageRequest) -> ListPages<'_> {
        ListPages::new(self, endpoint, request)
    }

    /// Fetches a single record by id.
    pub async fn retrieve(&self, endpoint: &Endpoint, id: &str) -> Result<Record, Error> {
        let url = self.record_url(endpoint, id)?;
        let response = self.send(Method::GET, url, None).await?;
        let body = json_body(response).await?;
        envelope::single_record(body, endpoint)
            .ok_or_else(|| Error::Api(ApiError::parse("expected a record object")))
    }

    /// Creates a record, returning the server's representation of it.
    pub async fn create(&self, endpoint: &Endpoint, record: &Record) -> Result<Record, Error> {
        let url = self.endpoint_url(endpoint.path())?;
        let response = self.send(Method::POST, url, Some(record)).await?;
        let body = json_body(response).await?;
        envelope::single_record(body, endpoint)
            .ok_or_else(|| Error::Api(ApiError::parse("expected a record object")))
    }

    /// Updates a record by id, returning the server's representation.
    pub async fn update(
        &self,
        endpoint: &Endpoint,
        id: &str,
        record: &Record,
    ) -> Result<Record, Error> {
        let url = self.record_url(endpoint, id)?;
        let response = self.send(Method::PATCH, url, Some(record)).await?;
        let body = json_body(response).await?;
        envelope::single_record(body, endpoint)
            .ok_or_else(|| Error::Api(ApiError::parse("expected a record object")))
    }

    /// Deletes a record by id.
    pub async fn delete(&self, endpoint: &Endpoint, id: &str) -> Result<(), Error> {
        let url = self.record_url(endpoint, id)?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Request plumbing
    // -------------------------------------------------------------------------

    /// Sends a request with bearer auth, retrying transient failures
    /// with exponential backoff per the client's [`RetryConfig`].
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Record>,
    ) -> Result<reqwest::Response, Error> {
        let token = self
            .inner
            .token_provider
            .get_token(&self.inner.base_url)
            .await?;

        let mut attempt = 0u32;
        loop {
            let mut request = self
                .inner
                .http_client
                .request(method.clone(), url.clone())
                .bearer_auth(&token.access_token);
            if let Some(timeout) = self.inner.timeout {
                request = request.timeout(timeout);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status().as_u16();
                    let retryable = matches!(status, 429 | 500 | 502 | 503 | 504);
                    if retryable && attempt < self.inner.retry.max_retries {
                        tokio::time::sleep(self.inner.retry.delay_for(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    let message = response.text().await.unwrap_or_default();
                    return Err(Error::Api(ApiError::http(status, message)));
                }
                Err(err) => {
                    if attempt < self.inner.retry.max_retries {
                        tokio::time::sleep(self.inner.retry.delay_for(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    let api_err = if err.is_timeout()
                        && let Some(timeout) = self.inner.timeout
                    {
                        ApiError::Timeout(timeout)
                    } else {
                        ApiError::Network(err)
                    };
                    return Err(Error::Api(api_err));
                }
            }
        }
    }

    fn list_url(&self, endpoint: &Endpoint, request: &PageRequest) -> Result<Url, Error> {
        let mut url = self.endpoint_url(endpoint.path())?;
        url.query_pairs_mut()
            .extend_pairs(request.query_pairs(endpoint.search_param()));
        Ok(url)
    }

    fn record_url(&self, endpoint: &Endpoint, id: &str) -> Result<Url, Error> {
        self.endpoint_url(&format!("{}/{}", endpoint.path(), id))
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!(
            "{}/{}",
            self.inner.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|_| Error::Api(ApiError::InvalidUrl(raw)))
    }
}

/// Reads a response body and parses it as JSON.
///
/// A body that is not JSON at all is a parse error; shape mismatches
/// inside valid JSON are handled later by envelope normalization.
async fn json_body(response: reqwest::Response) -> Result<Value, Error> {
    let text = response
        .text()
        .await
        .map_err(|err| Error::Api(ApiError::Network(err)))?;
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(err) => Err(Error::Api(ApiError::parse_with_body(err.to_string(), text))),
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`ApiClient`].
///
/// Uses the typestate pattern so the required fields — `base_url` and
/// `token_provider` — must be set before `build` is available.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::builder()
///     .base_url("https://ops.example.com/api/v1")
///     .token_provider(provider)
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct ApiClientBuilder<UrlState, Provider> {
    base_url: UrlState,
    token_provider: Provider,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
    retry: RetryConfig,
}

impl ApiClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            token_provider: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for ApiClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ApiClientBuilder<Missing, P> {
    /// Sets the API base URL.
    pub fn base_url(self, url: impl Into<String>) -> ApiClientBuilder<Set<String>, P> {
        ApiClientBuilder {
            base_url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
            retry: self.retry,
        }
    }
}

impl<U> ApiClientBuilder<U, Missing> {
    /// Sets the token provider for authentication.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> ApiClientBuilder<U, Set<Arc<dyn TokenProvider>>> {
        ApiClientBuilder {
            base_url: self.base_url,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
            retry: self.retry,
        }
    }
}

impl<U, P> ApiClientBuilder<U, P> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the retry configuration for transient failures.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

impl ApiClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`ApiClient`].
    ///
    /// This method is only available once both `base_url` and
    /// `token_provider` have been set.
    pub fn build(self) -> ApiClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: self.base_url.0,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
                retry: self.retry,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::StaticTokenProvider;
    use crate::query::FilterSet;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::builder()
            .base_url("https://ops.example.com/api/v1/")
            .token_provider(StaticTokenProvider::new("token"))
            .build()
    }

    #[test]
    fn test_list_url_carries_page_and_filters() {
        let endpoint = Endpoint::regions();
        let request = PageRequest::new(2, 25)
            .search("north")
            .filters(FilterSet::new().eq("zone_id", 7));

        let url = client().list_url(&endpoint, &request).unwrap();
        assert_eq!(url.path(), "/api/v1/regions");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "25".to_string()),
                ("search".to_string(), "north".to_string()),
                ("q[zone_id_eq]".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_record_url_joins_id() {
        let url = client().record_url(&Endpoint::vendors(), "42").unwrap();
        assert_eq!(url.as_str(), "https://ops.example.com/api/v1/vendors/42");
    }

    #[test]
    fn test_search_param_is_endpoint_specific() {
        let request = PageRequest::new(1, 25).search("acme");
        let url = client().list_url(&Endpoint::vendors(), &request).unwrap();
        assert!(url.query().unwrap().contains("q%5Bname_cont%5D=acme"));
    }
}
