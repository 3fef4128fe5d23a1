//! Page-link item value type and style-token helpers.

use serde::Serialize;

/// Inert placeholder reference used for disabled, active, and ellipsis items.
pub const INERT_HREF: &str = "javascript:;";

/// Label shown in place of a compressed page range.
pub const ELLIPSIS_LABEL: &str = "…";

/// One entry in a rendered pagination control.
///
/// Items are plain values built fresh on every computation; templates read
/// the three fields directly when rendering each entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinkItem {
    /// Zero or more space-joined style tokens (e.g. `"previous disabled"`).
    pub style: String,
    /// Target reference; disabled, active, and ellipsis items carry
    /// [`INERT_HREF`] instead of a real URL.
    pub url: String,
    /// Display text: a page number, an ellipsis, or previous/next text.
    pub label: String,
}

impl PageLinkItem {
    /// Create a navigable link item.
    pub fn link(
        style: impl Into<String>,
        url: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            style: style.into(),
            url: url.into(),
            label: label.into(),
        }
    }

    /// Create a non-navigating item carrying the inert reference.
    pub fn inert(style: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            url: INERT_HREF.to_owned(),
            label: label.into(),
        }
    }

    /// Create a plain numbered link for a page.
    pub fn numbered(url: impl Into<String>, page: usize) -> Self {
        Self::link("", url, page.to_string())
    }

    /// Whether activating this item navigates anywhere.
    pub fn is_navigable(&self) -> bool {
        self.url != INERT_HREF
    }
}

/// Join two style tokens with a space, skipping empty parts.
pub fn join_styles(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, true) => String::new(),
        (true, false) => second.to_owned(),
        (false, true) => first.to_owned(),
        (false, false) => format!("{first} {second}"),
    }
}
