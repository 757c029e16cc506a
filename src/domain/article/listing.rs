// src/domain/article/listing.rs
use crate::domain::article::value_objects::Category;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 6;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const FEATURED_LIMIT: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Case-insensitive substring matched against the heading.
    pub search: Option<String>,
    pub category: Option<Category>,
}

impl ArticleFilter {
    /// A blank search is dropped; any other value is matched as given,
    /// surrounding spaces included.
    pub fn new(search: Option<String>, category: Option<Category>) -> Self {
        let search = search.filter(|s| !s.trim().is_empty());
        Self { search, category }
    }
}

/// Skip/limit paging. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Missing or zero values fall back to the defaults; the limit is capped.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_six() {
        let page = PageRequest::default();
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 6);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn second_page_skips_one_full_page() {
        let page = PageRequest::new(Some(2), Some(6));
        assert_eq!(page.offset(), 6);
    }

    #[test]
    fn zero_values_fall_back_to_defaults() {
        assert_eq!(PageRequest::new(Some(0), Some(0)), PageRequest::default());
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(PageRequest::new(None, Some(5_000)).limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn blank_search_is_dropped() {
        let filter = ArticleFilter::new(Some("   ".into()), None);
        assert!(filter.search.is_none());
        let filter = ArticleFilter::new(Some(" rust ".into()), Some(Category::Health));
        assert_eq!(filter.search.as_deref(), Some(" rust "));
        assert_eq!(filter.category, Some(Category::Health));
    }
}
