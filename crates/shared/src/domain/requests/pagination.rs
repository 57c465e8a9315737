use crate::{
    domain::responses::PageToken,
    utils::{DEFAULT_MAX_PAGES_TO_SHOW, DEFAULT_WINDOW_SIZE, build_page_tokens},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Upper bound accepted from callers for `max_pages_to_show`.
pub const MAX_PAGES_TO_SHOW_LIMIT: u32 = 100;

/// Upper bound accepted from callers for `window_size`.
pub const MAX_WINDOW_SIZE: u32 = 50;

/// Display tuning for page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageTokenOptions {
    pub max_pages_to_show: u32,
    pub window_size: u32,
}

impl Default for PageTokenOptions {
    fn default() -> Self {
        Self {
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl PageTokenOptions {
    pub fn new(max_pages_to_show: u32, window_size: u32) -> Self {
        Self {
            max_pages_to_show,
            window_size,
        }
    }

    pub fn build(&self, page: i32, total_pages: i32) -> Vec<PageToken> {
        build_page_tokens(page, total_pages, self.max_pages_to_show, self.window_size)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageTokensRequest {
    /// Currently selected page; clamped into range.
    #[serde(default = "default_page")]
    pub page: i64,

    /// Total pages of the list; values below 1 are treated as 1.
    #[serde(default)]
    pub total_pages: i64,

    #[validate(range(min = 1, max = MAX_PAGES_TO_SHOW_LIMIT))]
    pub max_pages_to_show: Option<u32>,

    #[validate(range(max = MAX_WINDOW_SIZE))]
    pub window_size: Option<u32>,
}

impl PageTokensRequest {
    pub fn new(page: i64, total_pages: i64) -> Self {
        Self {
            page,
            total_pages,
            max_pages_to_show: None,
            window_size: None,
        }
    }

    /// `(page, total_pages)` narrowed to the page-number range, saturating
    /// at the `i32` bounds so oversized values still clamp instead of failing.
    pub fn page_bounds(&self) -> (i32, i32) {
        (saturate_i32(self.page), saturate_i32(self.total_pages))
    }

    /// Resolve the tuning for this request, falling back to `defaults`.
    pub fn options(&self, defaults: PageTokenOptions) -> PageTokenOptions {
        PageTokenOptions {
            max_pages_to_show: self.max_pages_to_show.unwrap_or(defaults.max_pages_to_show),
            window_size: self.window_size.unwrap_or(defaults.window_size),
        }
    }
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

fn default_page() -> i64 {
    1
}
