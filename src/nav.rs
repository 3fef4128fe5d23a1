//! Page-link sequence construction for a pagination control.

use crate::item::{join_styles, PageLinkItem, ELLIPSIS_LABEL};
use crate::options::PaginateOptions;
use crate::page::{has_leading_block, has_trailing_block, is_degenerate, page_window};

/// Build the ordered page-link sequence for a pagination control.
///
/// The sequence always starts with the previous item and ends with the next
/// item; between them sit the optional `1, 2, …` shortcut block, the
/// numbered window around the current page, and the optional `…, N-1, N`
/// shortcut block. In reduced mode only the two boundary items are emitted.
///
/// `link_for` maps a 1-based page number to a URL and is invoked once per
/// navigable item; disabled, active, and ellipsis items carry the inert
/// reference instead.
///
/// Out-of-range state (`total_pages == 0`, `current_page == 0`, or
/// `current_page > total_pages`) yields an empty sequence: a malformed
/// control is suppressed entirely rather than rendered partially.
pub fn build_page_links<F>(
    current_page: usize,
    total_pages: usize,
    options: &PaginateOptions,
    link_for: F,
) -> Vec<PageLinkItem>
where
    F: Fn(usize) -> String,
{
    if is_degenerate(current_page, total_pages) {
        return Vec::new();
    }

    let mut items = Vec::new();

    if current_page == 1 {
        items.push(PageLinkItem::inert(
            join_styles(&options.previous_class, &options.disabled_class),
            options.previous_text.clone(),
        ));
    } else {
        items.push(PageLinkItem::link(
            options.previous_class.clone(),
            link_for(current_page - 1),
            options.previous_text.clone(),
        ));
    }

    if !options.only_previous_and_next {
        if has_leading_block(current_page) {
            items.push(PageLinkItem::numbered(link_for(1), 1));
            items.push(PageLinkItem::numbered(link_for(2), 2));
            items.push(PageLinkItem::inert(
                options.disabled_class.clone(),
                ELLIPSIS_LABEL,
            ));
        }

        let (start, end) = page_window(current_page, total_pages);
        for page in start..=end {
            if page == current_page {
                items.push(PageLinkItem::inert(
                    options.active_class.clone(),
                    page.to_string(),
                ));
            } else {
                items.push(PageLinkItem::numbered(link_for(page), page));
            }
        }

        if has_trailing_block(current_page, total_pages) {
            items.push(PageLinkItem::inert(
                options.disabled_class.clone(),
                ELLIPSIS_LABEL,
            ));
            items.push(PageLinkItem::numbered(
                link_for(total_pages - 1),
                total_pages - 1,
            ));
            items.push(PageLinkItem::numbered(link_for(total_pages), total_pages));
        }
    }

    if current_page == total_pages {
        items.push(PageLinkItem::inert(
            join_styles(&options.next_class, &options.disabled_class),
            options.next_text.clone(),
        ));
    } else {
        items.push(PageLinkItem::link(
            options.next_class.clone(),
            link_for(current_page + 1),
            options.next_text.clone(),
        ));
    }

    items
}
