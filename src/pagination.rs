//! Page-link windows for pagination controls.

/// Pages kept visible at each end of the range.
const EDGE_PAGES: usize = 2;
/// Pages kept visible before the current one.
const PAGES_BEFORE: usize = 2;
/// Pages kept visible after the current one.
const PAGES_AFTER: usize = 4;

/// Builds the list of 1-based page numbers to render, with `None` standing
/// for a collapsed gap, e.g. `[1, 2, None, 8, 9, 10, 11, 12, 13, None, 19, 20]`.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let current_page = current_page.max(1);
    let mut links = Vec::new();

    let head_end = (1 + EDGE_PAGES).min(total_pages + 1);
    links.extend((1..head_end).map(Some));

    let window_start = head_end.max(current_page.saturating_sub(PAGES_BEFORE));
    let window_end = (current_page + PAGES_AFTER + 1).min(total_pages + 1);

    if window_start > head_end {
        links.push(None);
    }
    links.extend((window_start..window_end).map(Some));

    let tail_start = window_end.max(total_pages.saturating_sub(EDGE_PAGES) + 1);

    if tail_start > window_end {
        links.push(None);
    }
    links.extend((tail_start..=total_pages).map(Some));

    links
}
