/// Placeholder replaced by the 1-based page number
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Builds the listing URL for each page of a paginated section
///
/// Storefronts that serve their first page from a different URL than the
/// numbered pages set `first_page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrlTemplate {
    first_page: Option<String>,
    pattern: String,
}

impl PageUrlTemplate {
    /// A template where every page, including the first, follows `pattern`
    pub fn numbered(pattern: impl Into<String>) -> Self {
        Self {
            first_page: None,
            pattern: pattern.into(),
        }
    }

    /// A template with a dedicated first-page URL
    pub fn with_first_page(first_page: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            first_page: Some(first_page.into()),
            pattern: pattern.into(),
        }
    }

    /// Returns the URL of `page` (1-based)
    pub fn url_for(&self, page: u32) -> String {
        match (&self.first_page, page) {
            (Some(first), 1) => first.clone(),
            _ => self.pattern.replace(PAGE_PLACEHOLDER, &page.to_string()),
        }
    }
}
