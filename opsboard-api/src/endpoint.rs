//! List endpoint descriptors.
//!
//! Every back-office screen lists one resource, and the endpoints do
//! not agree on their response envelope: some nest the collection under
//! a resource-named key (`{"regions": [...]}`), some under `data`, some
//! return a bare array. An [`Endpoint`] names the path and carries the
//! envelope quirks so normalization happens at this boundary instead of
//! inside the generic client.

/// Descriptor for one paginated list endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    path: String,
    collection_key: Option<String>,
    search_param: String,
}

impl Endpoint {
    /// Creates a descriptor for the given path, relative to the client
    /// base URL.
    ///
    /// Defaults: the collection is expected under `data` (or as a bare
    /// array), and the search term is sent as `search=`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            collection_key: None,
            search_param: "search".to_string(),
        }
    }

    /// Sets the endpoint-specific key the collection is nested under.
    pub fn with_collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = Some(key.into());
        self
    }

    /// Sets the query parameter name used for the search term.
    pub fn with_search_param(mut self, name: impl Into<String>) -> Self {
        self.search_param = name.into();
        self
    }

    /// Returns the path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the endpoint-specific collection key, if any.
    pub fn collection_key(&self) -> Option<&str> {
        self.collection_key.as_deref()
    }

    /// Returns the search parameter name.
    pub fn search_param(&self) -> &str {
        &self.search_param
    }

    // -------------------------------------------------------------------------
    // Known back-office resources
    // -------------------------------------------------------------------------

    /// The regions list. Collection arrives under `regions`.
    pub fn regions() -> Self {
        Self::new("regions").with_collection_key("regions")
    }

    /// The zones list. Collection arrives under `zones`.
    pub fn zones() -> Self {
        Self::new("zones").with_collection_key("zones")
    }

    /// The vendors list.
    pub fn vendors() -> Self {
        Self::new("vendors").with_search_param("q[name_cont]")
    }

    /// The staff list.
    pub fn staff() -> Self {
        Self::new("staff")
    }

    /// The bills list.
    pub fn bills() -> Self {
        Self::new("bills")
    }

    /// The offers list. Collection arrives under `offers`.
    pub fn offers() -> Self {
        Self::new("offers").with_collection_key("offers")
    }

    /// The work orders list.
    pub fn work_orders() -> Self {
        Self::new("work_orders").with_search_param("q[title_cont]")
    }

    /// The sites list. Collection arrives under `sites`.
    pub fn sites() -> Self {
        Self::new("sites").with_collection_key("sites")
    }

    /// The locked users list.
    pub fn locked_users() -> Self {
        Self::new("locked_users")
    }

    /// The checklist masters list.
    pub fn checklist_masters() -> Self {
        Self::new("checklist_masters")
    }
}
