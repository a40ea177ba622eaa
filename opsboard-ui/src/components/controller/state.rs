//! List controller state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use opsboard_api::error::Error;
use opsboard_api::query::{FilterSet, Page, PageInfo, PageRequest};

use crate::components::pagination::PaginationView;

/// Debounce interval for search input.
///
/// The screens this replaces used anything from 300 ms to 1000 ms with
/// no rationale; one value, in the middle, for every list.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Async source of record pages.
///
/// The seam between the controller and the network: production code
/// uses [`RemoteSource`](crate::source::RemoteSource); tests script
/// responses.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// The record type this source yields.
    type Item: Clone + Send + Sync + 'static;

    /// Fetches one page matching the request.
    async fn fetch(&self, request: &PageRequest) -> Result<Page<Self::Item>, Error>;
}

/// Internal state for the list controller.
struct ControllerInner<T> {
    /// The currently displayed page of items.
    items: Vec<T>,
    /// Pagination metadata from the last applied response.
    page_info: PageInfo,
    /// The page the user is on (1-based).
    page: u32,
    /// Page size.
    per_page: u32,
    /// Raw search box contents, updated on every keystroke.
    search_input: String,
    /// Committed (debounced) search term that drives fetching.
    search_term: String,
    /// Active filter predicates.
    filters: FilterSet,
    /// Whether a fetch is in flight.
    loading: bool,
    /// Message from the last failed fetch, cleared on success.
    error: Option<String>,
}

/// Fetch orchestrator for one paginated list screen.
///
/// Cheap to clone; clones share state. Spawns its fetches and debounce
/// timers on the ambient tokio runtime, so a runtime must be running.
///
/// Concurrency: every fetch is tagged with a generation from a shared
/// counter, and a completed fetch is applied only while its generation
/// is still the newest. State therefore reflects only the response to
/// the most recently issued request, no matter the completion order.
pub struct ListController<S: DataSource> {
    source: Arc<S>,
    inner: Arc<RwLock<ControllerInner<S::Item>>>,
    /// Generation of the most recently issued fetch.
    fetch_generation: Arc<AtomicU64>,
    /// Generation of the most recent search keystroke.
    debounce_generation: Arc<AtomicU64>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<S: DataSource> ListController<S> {
    /// Create a controller over the given source with the default page
    /// size.
    ///
    /// No fetch is issued until [`refresh`](Self::refresh) or a state
    /// change triggers one.
    pub fn new(source: S) -> Self {
        Self::with_per_page(source, DEFAULT_PER_PAGE)
    }

    /// Create a controller with an explicit page size.
    pub fn with_per_page(source: S, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        Self {
            source: Arc::new(source),
            inner: Arc::new(RwLock::new(ControllerInner {
                items: Vec::new(),
                page_info: PageInfo::new(1, per_page, 1, 0),
                page: 1,
                per_page,
                search_input: String::new(),
                search_term: String::new(),
                filters: FilterSet::new(),
                loading: false,
                error: None,
            })),
            fetch_generation: Arc::new(AtomicU64::new(0)),
            debounce_generation: Arc::new(AtomicU64::new(0)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Snapshots
    // -------------------------------------------------------------------------

    /// Get the currently displayed items.
    pub fn items(&self) -> Vec<S::Item> {
        self.inner
            .read()
            .map(|g| g.items.clone())
            .unwrap_or_default()
    }

    /// Get the pagination metadata of the last applied response.
    pub fn page_info(&self) -> PageInfo {
        self.inner
            .read()
            .map(|g| g.page_info.clone())
            .unwrap_or_default()
    }

    /// Get the current page number.
    pub fn current_page(&self) -> u32 {
        self.inner.read().map(|g| g.page).unwrap_or(1)
    }

    /// Get the page size.
    pub fn per_page(&self) -> u32 {
        self.inner.read().map(|g| g.per_page).unwrap_or(1)
    }

    /// Get the raw search box contents.
    pub fn search_input(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search_input.clone())
            .unwrap_or_default()
    }

    /// Get the committed (debounced) search term.
    pub fn search_term(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search_term.clone())
            .unwrap_or_default()
    }

    /// Get the active filters.
    pub fn filters(&self) -> FilterSet {
        self.inner
            .read()
            .map(|g| g.filters.clone())
            .unwrap_or_default()
    }

    /// Check whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Get the last fetch error, if the most recent fetch failed.
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.error.clone())
    }

    /// Build the pagination strip for the current position.
    pub fn pagination(&self) -> PaginationView {
        self.inner
            .read()
            .map(|g| PaginationView::new(g.page, g.page_info.total_pages, g.loading))
            .unwrap_or_else(|_| PaginationView::new(1, 1, false))
    }

    // -------------------------------------------------------------------------
    // Intent
    // -------------------------------------------------------------------------

    /// Issue a fetch for the current state (initial load, retry).
    pub fn refresh(&self) {
        if let Some(request) = self.snapshot_request() {
            self.spawn_fetch(request);
        }
    }

    /// Record a search keystroke.
    ///
    /// The raw input is stored immediately so the search box stays
    /// responsive; the fetch fires only after [`SEARCH_DEBOUNCE`] with
    /// no newer keystroke. A committed change resets to page 1.
    pub fn set_search_input(&self, term: impl Into<String>) {
        let term = term.into();
        if let Ok(mut guard) = self.inner.write() {
            guard.search_input = term.clone();
        }
        self.dirty.store(true, Ordering::SeqCst);

        let generation = self.debounce_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            if generation != this.debounce_generation.load(Ordering::SeqCst) {
                log::debug!("search debounce superseded: {term:?}");
                return;
            }
            this.commit_search(term);
        });
    }

    /// Replace the filter set (the dialog's Apply action).
    ///
    /// Resets to page 1 and fetches immediately — filters are applied
    /// explicitly, so there is nothing to debounce.
    pub fn set_filters(&self, filters: FilterSet) {
        let request = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.filters = filters;
            guard.page = 1;
            Self::request_of(&guard)
        };
        self.spawn_fetch(request);
    }

    /// Clear filters and search, reset to page 1, and fetch.
    pub fn reset_filters(&self) {
        // Invalidate any pending debounce so a stale keystroke can't
        // resurrect the cleared term.
        self.debounce_generation.fetch_add(1, Ordering::SeqCst);
        let request = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.filters.clear();
            guard.search_input.clear();
            guard.search_term.clear();
            guard.page = 1;
            Self::request_of(&guard)
        };
        self.spawn_fetch(request);
    }

    /// Navigate to a page.
    ///
    /// Out-of-range pages and the current page are no-ops (no fetch).
    /// The rendered controls additionally disable themselves while a
    /// fetch is in flight; a page change that does land mid-flight is
    /// resolved by the fetch generation, newest request winning.
    pub fn set_page(&self, page: u32) {
        let request = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if page < 1 || page == guard.page || page > guard.page_info.total_pages {
                return;
            }
            guard.page = page;
            Self::request_of(&guard)
        };
        self.spawn_fetch(request);
    }

    /// Navigate to the next page, if there is one.
    pub fn next_page(&self) {
        self.set_page(self.current_page().saturating_add(1));
    }

    /// Navigate to the previous page, if there is one.
    pub fn previous_page(&self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    /// Change the page size. Resets to page 1 and fetches.
    ///
    /// A zero size is a no-op.
    pub fn set_per_page(&self, per_page: u32) {
        if per_page == 0 {
            return;
        }
        let request = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.per_page = per_page;
            guard.page = 1;
            Self::request_of(&guard)
        };
        self.spawn_fetch(request);
    }

    // -------------------------------------------------------------------------
    // Fetch machinery
    // -------------------------------------------------------------------------

    /// Commit a debounced search term. No-op if the term matches what
    /// is already committed.
    fn commit_search(&self, term: String) {
        let request = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.search_term == term {
                return;
            }
            guard.search_term = term;
            guard.page = 1;
            Self::request_of(&guard)
        };
        self.spawn_fetch(request);
    }

    fn snapshot_request(&self) -> Option<PageRequest> {
        self.inner.read().ok().map(|g| Self::request_of(&g))
    }

    fn request_of(guard: &ControllerInner<S::Item>) -> PageRequest {
        PageRequest::new(guard.page, guard.per_page)
            .search(guard.search_term.clone())
            .filters(guard.filters.clone())
    }

    /// Issue a fetch for the given request under a fresh generation.
    fn spawn_fetch(&self, request: PageRequest) {
        let generation = self.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = true;
        }
        self.dirty.store(true, Ordering::SeqCst);

        let this = self.clone();
        tokio::spawn(async move {
            let result = this.source.fetch(&request).await;
            this.apply(generation, result);
        });
    }

    /// Apply a completed fetch, unless a newer fetch has been issued
    /// since.
    fn apply(&self, generation: u64, result: Result<Page<S::Item>, Error>) {
        if generation != self.fetch_generation.load(Ordering::SeqCst) {
            log::debug!("discarding stale response for fetch generation {generation}");
            return;
        }
        if let Ok(mut guard) = self.inner.write() {
            match result {
                Ok(page) => {
                    guard.items = page.items;
                    guard.page_info = page.info;
                    guard.error = None;
                }
                Err(err) => {
                    guard.error = Some(err.to_string());
                    guard.items.clear();
                }
            }
            guard.loading = false;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if controller state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<S: DataSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            inner: Arc::clone(&self.inner),
            fetch_generation: Arc::clone(&self.fetch_generation),
            debounce_generation: Arc::clone(&self.debounce_generation),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
