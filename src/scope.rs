//! Rendering-scope binding for computed page links.

use std::collections::HashMap;

use tracing::debug;

use crate::item::PageLinkItem;
use crate::nav::build_page_links;
use crate::options::PaginateOptions;
use crate::source::PageSource;

/// Named-slot binding surface of an external rendering context.
///
/// Template-engine adapters implement this to receive the computed item
/// sequence under a template-visible name.
pub trait RenderScope {
    /// Bind an item sequence under a name visible to the view template.
    fn set_local(&mut self, name: &str, items: Vec<PageLinkItem>);
}

/// Simple in-memory scope for tests and custom engine adapters.
#[derive(Debug, Clone, Default)]
pub struct MemoryScope {
    locals: HashMap<String, Vec<PageLinkItem>>,
}

impl MemoryScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a bound item sequence by name.
    pub fn get(&self, name: &str) -> Option<&[PageLinkItem]> {
        self.locals.get(name).map(Vec::as_slice)
    }
}

impl RenderScope for MemoryScope {
    fn set_local(&mut self, name: &str, items: Vec<PageLinkItem>) {
        self.locals.insert(name.to_owned(), items);
    }
}

/// Compute page links for a source and bind them into a rendering scope.
///
/// The sequence is bound under `options.items_name`. Degenerate pagination
/// state binds nothing, so the surrounding template block renders an empty
/// control.
pub fn paginate_into_scope<F>(
    source: &dyn PageSource,
    options: &PaginateOptions,
    link_for: F,
    scope: &mut dyn RenderScope,
) -> anyhow::Result<()>
where
    F: Fn(usize) -> String,
{
    options.validate()?;

    let current_page = source.current_page();
    let total_pages = source.total_pages();

    let items = build_page_links(current_page, total_pages, options, link_for);
    if items.is_empty() {
        debug!(current_page, total_pages, "suppressing pagination control");
        return Ok(());
    }

    scope.set_local(&options.items_name, items);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PageState;

    fn url(page: usize) -> String {
        format!("/list?page={page}")
    }

    #[test]
    fn binds_the_sequence_under_the_configured_name() {
        let options = PaginateOptions::default().with_items_name("page_links");
        let mut scope = MemoryScope::new();

        paginate_into_scope(&PageState::new(2, 5), &options, url, &mut scope).unwrap();

        let items = scope.get("page_links").unwrap();
        assert_eq!(items.len(), 7);
        assert!(scope.get("pages").is_none());
    }

    #[test]
    fn degenerate_state_binds_nothing() {
        let options = PaginateOptions::default();
        let mut scope = MemoryScope::new();

        paginate_into_scope(&PageState::new(9, 5), &options, url, &mut scope).unwrap();

        assert!(scope.get("pages").is_none());
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = PaginateOptions::default().with_items_name("");
        let mut scope = MemoryScope::new();

        let result = paginate_into_scope(&PageState::new(1, 5), &options, url, &mut scope);
        assert!(result.is_err());
    }

    #[test]
    fn rebinding_replaces_the_previous_sequence() {
        let options = PaginateOptions::default();
        let mut scope = MemoryScope::new();

        paginate_into_scope(&PageState::new(1, 5), &options, url, &mut scope).unwrap();
        paginate_into_scope(&PageState::new(3, 5), &options, url, &mut scope).unwrap();

        let items = scope.get("pages").unwrap();
        assert_eq!(items[3].style, "active");
        assert_eq!(items[3].label, "3");
    }
}
