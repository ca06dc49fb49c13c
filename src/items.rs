//! Abbreviated pager strip: a window of pages around the current one,
//! flanked by ellipsis markers where page numbers are skipped.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page inside the window.
const WINDOW_RADIUS: u32 = 2;
/// Span the window keeps when the radius collides with either end.
const WINDOW_SPAN: u32 = WINDOW_RADIUS * 2;

/// One entry in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    /// Page number for a numbered entry, `None` for an ellipsis.
    #[must_use]
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(number) => Some(number),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Compute the strip for a pager: the first page, a window around the
/// current page with ellipses where pages are skipped, and the last page.
///
/// All arithmetic saturates, so out-of-range positions degrade to a
/// shorter strip instead of panicking. `total_pages <= 1` collapses to
/// just the first page.
#[must_use]
pub fn page_items(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let mut items = vec![PageItem::Page(1)];

    let mut window_start = current_page.saturating_sub(WINDOW_RADIUS).max(2);
    let window_end = current_page
        .saturating_add(WINDOW_RADIUS)
        .min(total_pages.saturating_sub(1));

    // Keep the window the same width when the current page sits near an end.
    if window_end < window_start.saturating_add(WINDOW_SPAN) {
        window_start = window_end.saturating_sub(WINDOW_SPAN).max(2);
    }

    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in window_start..=window_end {
        items.push(PageItem::Page(page));
    }
    if window_end + 1 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    if total_pages > 1 {
        items.push(PageItem::Page(total_pages));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items.iter().filter_map(|item| item.page()).collect()
    }

    #[test]
    fn single_page_collapses_to_first_page() {
        assert_eq!(page_items(1, 1), vec![PageItem::Page(1)]);
        assert_eq!(page_items(1, 0), vec![PageItem::Page(1)]);
    }

    #[test]
    fn mid_run_flanks_window_with_ellipses() {
        assert_eq!(
            page_items(5, 10),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn left_edge_needs_no_leading_ellipsis() {
        let items = page_items(1, 10);
        assert_eq!(pages(&items), vec![1, 2, 3, 10]);
        assert!(!items[1].is_ellipsis());
        assert!(items[3].is_ellipsis());
    }

    #[test]
    fn right_edge_widens_window_backwards() {
        assert_eq!(pages(&page_items(10, 10)), vec![1, 5, 6, 7, 8, 9, 10]);
        let items = page_items(10, 10);
        assert!(items[1].is_ellipsis());
        assert!(!items.last().unwrap().is_ellipsis());
    }

    #[test]
    fn tiny_totals_list_every_page() {
        assert_eq!(pages(&page_items(1, 2)), vec![1, 2]);
        assert_eq!(pages(&page_items(2, 3)), vec![1, 2, 3]);
        assert_eq!(pages(&page_items(3, 6)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn strip_structure_holds_across_positions() {
        for total_pages in 1..=40 {
            for current_page in 1..=total_pages {
                let items = page_items(current_page, total_pages);
                assert_eq!(items[0], PageItem::Page(1));
                if total_pages > 1 {
                    assert_eq!(*items.last().unwrap(), PageItem::Page(total_pages));
                }
                let numbers = pages(&items);
                assert!(
                    numbers.windows(2).all(|pair| pair[0] < pair[1]),
                    "strip not strictly increasing for ({current_page}, {total_pages}): {numbers:?}"
                );
                assert!(
                    numbers.contains(&current_page),
                    "current page missing for ({current_page}, {total_pages}): {numbers:?}"
                );
            }
        }
    }

    #[test]
    fn out_of_range_position_degrades_quietly() {
        // Position beyond the last page: window clips to the tail.
        assert_eq!(pages(&page_items(50, 10)), vec![1, 5, 6, 7, 8, 9, 10]);
        // Position zero behaves like the left edge.
        assert_eq!(pages(&page_items(0, 10)), vec![1, 2, 10]);
    }
}
