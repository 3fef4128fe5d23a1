//! Per-page URL construction from request path and query state.

use crate::options::PaginateOptions;

/// Builds per-page URLs from a request path and its query pairs.
///
/// The page parameter is replaced on every build; all other query pairs are
/// carried over unchanged, and an optional fragment anchor is appended
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrlBuilder {
    path: String,
    query: Vec<(String, String)>,
    page_param: String,
    anchor: Option<String>,
}

impl PageUrlBuilder {
    /// Create a builder for a bare path with no extra query pairs.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            page_param: "page".to_owned(),
            anchor: None,
        }
    }

    /// Create a builder from a path and a raw query string.
    ///
    /// Pairs are split on `&` and `=`; empty fragments are skipped and
    /// bare keys are kept without a value. Any existing page parameter is
    /// carried like a normal pair and filtered out when building.
    pub fn from_query(path: impl Into<String>, raw_query: &str) -> Self {
        let query = raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_owned(), value.to_owned()),
                None => (pair.to_owned(), String::new()),
            })
            .collect();

        Self {
            query,
            ..Self::new(path)
        }
    }

    /// Create a builder matching a pagination configuration.
    ///
    /// Picks up the configured page parameter name and anchor.
    pub fn for_options(
        path: impl Into<String>,
        raw_query: &str,
        options: &PaginateOptions,
    ) -> Self {
        let mut builder =
            Self::from_query(path, raw_query).with_page_param(options.page_param.clone());

        if let Some(anchor) = &options.anchor {
            builder = builder.with_anchor(anchor.clone());
        }

        builder
    }

    /// Append a query pair carried over to every built URL.
    pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Override the page query parameter name.
    pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Append a fragment anchor (without `#`) to every built URL.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Build the URL for a 1-based page number.
    pub fn url_for(&self, page: usize) -> String {
        let mut url = self.path.clone();
        let mut separator = '?';

        for (key, value) in &self.query {
            if *key == self.page_param {
                continue;
            }

            url.push(separator);
            url.push_str(key);
            if !value.is_empty() {
                url.push('=');
                url.push_str(value);
            }
            separator = '&';
        }

        url.push(separator);
        url.push_str(&self.page_param);
        url.push('=');
        url.push_str(&page.to_string());

        if let Some(anchor) = &self.anchor {
            url.push('#');
            url.push_str(anchor);
        }

        url
    }
}
