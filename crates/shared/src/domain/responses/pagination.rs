use crate::domain::{
    requests::PageTokenOptions,
    responses::{PageControls, PageToken},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const DEFAULT_PAGE_SIZE: i32 = 10;

/// Meta block attached to every paged list response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    pub page: i32,
    pub page_size: i32,
    pub total_items: i64,
    pub total_pages: i32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Meta for a list of `total_items` entries; non-positive page and page
    /// size fall back to 1 and 10.
    pub fn new(page: i32, page_size: i32, total_items: i64) -> Self {
        let page = if page > 0 { page } else { 1 };
        let page_size = if page_size > 0 {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        let total_items = total_items.max(0);
        let page_size_wide = i64::from(page_size);
        let pages = total_items.saturating_add(page_size_wide - 1) / page_size_wide;

        Self {
            page,
            page_size,
            total_items,
            total_pages: i32::try_from(pages).unwrap_or(i32::MAX),
        }
    }

    pub fn page_tokens(&self, options: &PageTokenOptions) -> Vec<PageToken> {
        options.build(self.page, self.total_pages)
    }

    pub fn controls(&self, options: &PageTokenOptions) -> PageControls {
        PageControls::new(self.page, self.total_pages, options)
    }
}
