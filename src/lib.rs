//! Pagination navigation models for server-rendered views.
//!
//! Given the current page, the total page count, and a page-number→URL
//! mapping, this crate produces the ordered sequence of [`PageLinkItem`]s
//! (previous link, numbered links, ellipsis markers, next link) that a view
//! template iterates to render a pagination control.
//!
//! The crate performs no I/O and integrates with no specific template
//! engine: callers bind the computed sequence into their rendering context
//! through the [`RenderScope`] trait.
//!
//! ```
//! use pagenav::{build_page_links, PaginateOptions, PageUrlBuilder};
//!
//! let options = PaginateOptions::default();
//! let urls = PageUrlBuilder::new("/articles");
//! let items = build_page_links(5, 20, &options, |page| urls.url_for(page));
//!
//! // prev, pages 1..=9 (5 active), …, 19, 20, next
//! assert_eq!(items.len(), 14);
//! assert_eq!(items[5].label, "5");
//! assert_eq!(items[5].style, "active");
//! ```

/// Page-link item value type and style-token helpers.
pub mod item;
/// Per-page URL construction from request path and query state.
pub mod link;
/// Page-link sequence construction for a pagination control.
pub mod nav;
/// Pagination control configuration with the classic defaults.
pub mod options;
/// Pure pagination math and page-window shaping helpers.
pub mod page;
/// Rendering-scope binding for computed page links.
pub mod scope;
/// Polymorphic page-source abstraction over paged query results.
pub mod source;

pub use item::{PageLinkItem, ELLIPSIS_LABEL, INERT_HREF};
pub use link::PageUrlBuilder;
pub use nav::build_page_links;
pub use options::PaginateOptions;
pub use page::{clamp_page, page_window, total_pages};
pub use scope::{paginate_into_scope, MemoryScope, RenderScope};
pub use source::{PageSource, PageState};
