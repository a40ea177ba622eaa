//! Pagination strip properties across the whole input space.

use opsboard_api::query::PageInfo;
use opsboard_ui::{page_markers, PageMarker, PaginationView};

fn numbers(markers: &[PageMarker]) -> Vec<u32> {
    markers
        .iter()
        .filter_map(|m| match m {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        })
        .collect()
}

#[test]
fn markers_are_ascending_and_duplicate_free_everywhere() {
    for total in 1..=40 {
        for current in 1..=total {
            let markers = page_markers(current, total);
            let pages = numbers(&markers);

            assert!(
                pages.windows(2).all(|w| w[0] < w[1]),
                "not strictly ascending for current={current} total={total}: {markers:?}"
            );
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(
                pages.contains(&current),
                "current page missing for current={current} total={total}: {markers:?}"
            );
        }
    }
}

#[test]
fn ellipsis_always_stands_for_a_real_gap() {
    for total in 8..=40 {
        for current in 1..=total {
            let markers = page_markers(current, total);

            assert!(matches!(markers.first(), Some(PageMarker::Page(_))));
            assert!(matches!(markers.last(), Some(PageMarker::Page(_))));

            for window in markers.windows(3) {
                if let [PageMarker::Page(before), PageMarker::Ellipsis, PageMarker::Page(after)] =
                    window
                {
                    assert!(
                        *after > before + 1,
                        "ellipsis over zero gap for current={current} total={total}: {markers:?}"
                    );
                }
            }

            // No adjacent ellipses.
            assert!(
                !markers
                    .windows(2)
                    .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis),
                "double ellipsis for current={current} total={total}"
            );
        }
    }
}

#[test]
fn small_page_counts_show_every_page() {
    for total in 1..=7 {
        for current in 1..=total {
            let expected: Vec<PageMarker> = (1..=total).map(PageMarker::Page).collect();
            assert_eq!(page_markers(current, total), expected);
        }
    }
}

#[test]
fn representative_windows() {
    use PageMarker::{Ellipsis, Page};

    assert_eq!(
        page_markers(1, 10),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        page_markers(10, 10),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
    );
    assert_eq!(page_markers(2, 3), vec![Page(1), Page(2), Page(3)]);
}

#[test]
fn view_tracks_position_and_loading() {
    let info = PageInfo::new(1, 25, 10, 250);
    let view = PaginationView::from_info(&info, false);
    assert!(!view.prev_enabled);
    assert!(view.next_enabled);
    assert!(view.is_current(&PageMarker::Page(1)));
    assert!(!view.is_current(&PageMarker::Page(2)));
    assert!(!view.is_current(&PageMarker::Ellipsis));

    let loading = PaginationView::from_info(&info, true);
    assert!(!loading.prev_enabled);
    assert!(!loading.next_enabled);
}
