//! Pagination control configuration with the classic defaults.

/// Configuration bundle for building a pagination control.
///
/// Defaults mirror the conventional directive parameters: `previous`,
/// `next`, `active`, and `disabled` style classes, no anchor, the full
/// numbered control, and the `pages` binding name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginateOptions {
    /// Style token for the previous boundary item.
    pub previous_class: String,
    /// Style token for the next boundary item.
    pub next_class: String,
    /// Style token for the current page's item.
    pub active_class: String,
    /// Style token for non-navigating items.
    pub disabled_class: String,
    /// Optional fragment appended to generated URLs (without `#`).
    pub anchor: Option<String>,
    /// Reduced mode: emit only the previous and next items.
    pub only_previous_and_next: bool,
    /// Label text for the previous boundary item.
    pub previous_text: String,
    /// Label text for the next boundary item.
    pub next_text: String,
    /// Name under which the item sequence is bound into the render scope.
    pub items_name: String,
    /// Query parameter carrying the page number in generated URLs.
    pub page_param: String,
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            previous_class: "previous".to_owned(),
            next_class: "next".to_owned(),
            active_class: "active".to_owned(),
            disabled_class: "disabled".to_owned(),
            anchor: None,
            only_previous_and_next: false,
            previous_text: "Previous".to_owned(),
            next_text: "Next".to_owned(),
            items_name: "pages".to_owned(),
            page_param: "page".to_owned(),
        }
    }
}

impl PaginateOptions {
    /// Override the previous/next label text, e.g. for localization.
    pub fn with_labels(
        mut self,
        previous_text: impl Into<String>,
        next_text: impl Into<String>,
    ) -> Self {
        self.previous_text = previous_text.into();
        self.next_text = next_text.into();
        self
    }

    /// Override the four style classes.
    pub fn with_classes(
        mut self,
        previous: impl Into<String>,
        next: impl Into<String>,
        active: impl Into<String>,
        disabled: impl Into<String>,
    ) -> Self {
        self.previous_class = previous.into();
        self.next_class = next.into();
        self.active_class = active.into();
        self.disabled_class = disabled.into();
        self
    }

    /// Append a fragment anchor to every generated URL.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Emit only the previous and next items.
    pub fn only_previous_and_next(mut self) -> Self {
        self.only_previous_and_next = true;
        self
    }

    /// Override the render-scope binding name.
    pub fn with_items_name(mut self, name: impl Into<String>) -> Self {
        self.items_name = name.into();
        self
    }

    /// Override the page query parameter name.
    pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    /// Check that the options can drive a render-scope binding.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.items_name.is_empty() {
            anyhow::bail!("pagination items name must not be empty");
        }

        if self.page_param.is_empty() {
            anyhow::bail!("pagination page parameter must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_directive_parameters() {
        let options = PaginateOptions::default();
        assert_eq!(options.previous_class, "previous");
        assert_eq!(options.next_class, "next");
        assert_eq!(options.active_class, "active");
        assert_eq!(options.disabled_class, "disabled");
        assert_eq!(options.anchor, None);
        assert!(!options.only_previous_and_next);
        assert_eq!(options.items_name, "pages");
        assert_eq!(options.page_param, "page");
    }

    #[test]
    fn builder_setters_compose() {
        let options = PaginateOptions::default()
            .with_labels("Zurück", "Weiter")
            .with_anchor("results")
            .with_items_name("page_links");

        assert_eq!(options.previous_text, "Zurück");
        assert_eq!(options.next_text, "Weiter");
        assert_eq!(options.anchor.as_deref(), Some("results"));
        assert_eq!(options.items_name, "page_links");
    }

    #[test]
    fn validate_rejects_empty_binding_names() {
        let options = PaginateOptions::default().with_items_name("");
        assert!(options.validate().is_err());

        let options = PaginateOptions::default().with_page_param("");
        assert!(options.validate().is_err());

        assert!(PaginateOptions::default().validate().is_ok());
    }
}
