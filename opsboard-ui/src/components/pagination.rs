//! Windowed page-number strip.
//!
//! The screens all render the same pagination control: Previous/Next
//! plus a windowed set of page numbers with ellipses over the gaps.
//! The window keeps the first page, the last three pages, the pages
//! around the current one, and pages 2-3 while the user is near the
//! start.

use opsboard_api::query::PageInfo;

/// One marker in the pagination strip: a page link or an ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A numbered page link.
    Page(u32),
    /// A gap between non-adjacent page links.
    Ellipsis,
}

/// Computes the windowed marker sequence for a pagination strip.
///
/// For 7 or fewer pages every page is shown. Beyond that the strip
/// windows: page 1 (plus 2-3 near the start), the current page with one
/// neighbor on each side, and the final three pages, with ellipses over
/// the gaps.
///
/// The result is always an ascending, duplicate-free sequence from 1 to
/// `total_pages`, and an ellipsis never stands in for a gap of zero.
///
/// # Example
///
/// ```
/// use opsboard_ui::{page_markers, PageMarker};
///
/// let markers = page_markers(1, 10);
/// assert_eq!(markers[3], PageMarker::Ellipsis);
/// assert_eq!(markers.len(), 7);
/// ```
pub fn page_markers(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    if total <= 7 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut pages = vec![1];
    if current <= 4 {
        pages.extend([2, 3]);
    }
    if current > 3 && current < total - 2 {
        pages.extend([current - 1, current, current + 1]);
    }
    pages.extend([total - 2, total - 1, total]);
    pages.sort_unstable();
    pages.dedup();

    let mut markers = Vec::with_capacity(pages.len() + 2);
    let mut previous = None;
    for page in pages {
        if let Some(prev) = previous
            && page > prev + 1
        {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

/// View state for a full pagination control strip.
///
/// Previous is disabled on the first page and while a fetch is in
/// flight; Next likewise on the last page. Clicking a disabled control
/// is the renderer's no-op; the controller additionally ignores
/// out-of-range pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Windowed page markers, ascending.
    pub markers: Vec<PageMarker>,
    /// The page currently displayed.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether the Previous control is clickable.
    pub prev_enabled: bool,
    /// Whether the Next control is clickable.
    pub next_enabled: bool,
}

impl PaginationView {
    /// Builds the strip for the given position.
    pub fn new(current_page: u32, total_pages: u32, loading: bool) -> Self {
        let total = total_pages.max(1);
        let current = current_page.clamp(1, total);
        Self {
            markers: page_markers(current, total),
            current_page: current,
            total_pages: total,
            prev_enabled: current > 1 && !loading,
            next_enabled: current < total && !loading,
        }
    }

    /// Builds the strip from fetched pagination metadata.
    pub fn from_info(info: &PageInfo, loading: bool) -> Self {
        Self::new(info.current_page, info.total_pages, loading)
    }

    /// Returns `true` if the marker is the current page.
    pub fn is_current(&self, marker: &PageMarker) -> bool {
        matches!(marker, PageMarker::Page(n) if *n == self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_first_page_of_ten() {
        assert_eq!(
            page_markers(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_middle_page_of_ten() {
        assert_eq!(
            page_markers(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn test_last_page_of_ten() {
        assert_eq!(
            page_markers(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_seven_pages_shows_all() {
        for current in 1..=7 {
            assert_eq!(
                page_markers(current, 7),
                (1..=7).map(Page).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_three_pages_shows_all() {
        assert_eq!(page_markers(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_no_zero_gap_ellipsis_near_window_joins() {
        // Page 4's window (3,4,5) touches the head pages (1,2,3).
        assert_eq!(
            page_markers(4, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10)
            ]
        );
        // Page 7's window (6,7,8) touches the tail pages (8,9,10).
        assert_eq!(
            page_markers(7, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn test_degenerate_inputs_clamp() {
        assert_eq!(page_markers(5, 0), vec![Page(1)]);
        assert_eq!(page_markers(0, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_view_disables_edges_and_loading() {
        let view = PaginationView::new(1, 10, false);
        assert!(!view.prev_enabled);
        assert!(view.next_enabled);

        let view = PaginationView::new(10, 10, false);
        assert!(view.prev_enabled);
        assert!(!view.next_enabled);

        let view = PaginationView::new(5, 10, true);
        assert!(!view.prev_enabled);
        assert!(!view.next_enabled);
    }
}
