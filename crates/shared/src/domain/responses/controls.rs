use crate::{
    domain::{requests::PageTokenOptions, responses::PageToken},
    utils::clamp_page,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything a renderer needs to draw a page control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageControls {
    pub page: i32,
    pub total_pages: i32,
    #[schema(value_type = Vec<Object>, example = json!([1, "...", 8, 9, 10, 11, 12, "...", 20]))]
    pub tokens: Vec<PageToken>,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<i32>,
    pub next_page: Option<i32>,
}

impl PageControls {
    pub fn new(page: i32, total_pages: i32, options: &PageTokenOptions) -> Self {
        let total_pages = total_pages.max(1);
        let page = clamp_page(page, total_pages);

        let has_previous = page > 1;
        let has_next = page < total_pages;

        Self {
            page,
            total_pages,
            tokens: options.build(page, total_pages),
            has_previous,
            has_next,
            previous_page: has_previous.then_some(page - 1),
            next_page: has_next.then_some(page + 1),
        }
    }

    /// The page a click on any control resolves to.
    pub fn clamp_target(&self, target: i32) -> i32 {
        clamp_page(target, self.total_pages)
    }
}

/// Result of a bare token request, echoing the inputs after clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageTokensResponse {
    pub page: i32,
    pub total_pages: i32,
    pub max_pages_to_show: u32,
    pub window_size: u32,
    #[schema(value_type = Vec<Object>, example = json!([1, 2, 3, "...", 20]))]
    pub tokens: Vec<PageToken>,
}

impl PageTokensResponse {
    pub fn new(page: i32, total_pages: i32, options: PageTokenOptions) -> Self {
        let total_pages = total_pages.max(1);
        let page = clamp_page(page, total_pages);

        Self {
            page,
            total_pages,
            max_pages_to_show: options.max_pages_to_show,
            window_size: options.window_size,
            tokens: options.build(page, total_pages),
        }
    }
}
