//! Pure pagination math and page-window shaping helpers.

/// Numbered links shown on each side of the current page.
pub const WINDOW_RADIUS: usize = 4;

/// Distance from a boundary at which the window snaps to that boundary.
///
/// Must stay at twice [`WINDOW_RADIUS`]: the `1, 2, …` and `…, N-1, N`
/// shortcut blocks share this threshold with the window-snapping rules, and
/// the coupling is what keeps the shortcut pages disjoint from the window.
pub const EDGE_THRESHOLD: usize = 2 * WINDOW_RADIUS;

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Whether pagination state is out of range and should render nothing.
pub fn is_degenerate(current_page: usize, total_pages: usize) -> bool {
    total_pages == 0 || current_page == 0 || current_page > total_pages
}

/// Inclusive range of numbered pages shown around the current page.
///
/// The window spans [`WINDOW_RADIUS`] pages on each side of the current
/// page, clamped to `[1, total_pages]`, and snaps to the nearest boundary
/// when the current page is within [`EDGE_THRESHOLD`] of it. Expects
/// non-degenerate state.
pub fn page_window(current_page: usize, total_pages: usize) -> (usize, usize) {
    let mut start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let mut end = (current_page + WINDOW_RADIUS).min(total_pages);

    if current_page <= EDGE_THRESHOLD {
        start = 1;
    }

    if total_pages.saturating_sub(current_page) < EDGE_THRESHOLD {
        end = total_pages;
    }

    (start, end)
}

/// Whether the `1, 2, …` shortcut block precedes the window.
pub fn has_leading_block(current_page: usize) -> bool {
    current_page > EDGE_THRESHOLD
}

/// Whether the `…, N-1, N` shortcut block follows the window.
pub fn has_trailing_block(current_page: usize, total_pages: usize) -> bool {
    total_pages.saturating_sub(current_page) >= EDGE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn total_pages_survives_zero_per_page() {
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamp_page_bounds_both_ends() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(5, 10), 5);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn degenerate_states() {
        assert!(is_degenerate(1, 0));
        assert!(is_degenerate(0, 5));
        assert!(is_degenerate(6, 5));
        assert!(!is_degenerate(5, 5));
        assert!(!is_degenerate(1, 1));
    }

    #[test]
    fn window_snaps_to_start_near_the_beginning() {
        // current <= 8 forces start to 1 even when current - 4 > 1
        assert_eq!(page_window(5, 20), (1, 9));
        assert_eq!(page_window(8, 20), (1, 12));
    }

    #[test]
    fn window_snaps_to_end_near_the_finish() {
        // total - current < 8 forces end to total
        assert_eq!(page_window(15, 20), (11, 20));
        assert_eq!(page_window(13, 20), (9, 20));
    }

    #[test]
    fn window_floats_free_in_the_middle() {
        assert_eq!(page_window(50, 100), (46, 54));
    }

    #[test]
    fn window_degenerates_to_a_single_page() {
        assert_eq!(page_window(1, 1), (1, 1));
    }

    #[test]
    fn shortcut_blocks_never_overlap_the_window() {
        // Leading block shows pages 1 and 2; it only appears when the
        // window starts at current - 4 >= 5. Trailing block shows N-1 and
        // N; it only appears when the window ends at current + 4 <= N - 4.
        for total in 1..60 {
            for current in 1..=total {
                let (start, end) = page_window(current, total);
                if has_leading_block(current) {
                    assert!(start > 2, "current={current} total={total}");
                }
                if has_trailing_block(current, total) {
                    assert!(end < total - 1, "current={current} total={total}");
                }
            }
        }
    }
}
