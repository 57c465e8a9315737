use crate::{
    abstract_trait::PaginationServiceTrait,
    domain::{
        requests::{PageTokenOptions, PageTokensRequest},
        responses::{ApiResponse, PageControls, PageTokensResponse, Pagination},
    },
    errors::{ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, info};
use validator::Validate;

pub struct PaginationService {
    defaults: PageTokenOptions,
}

impl PaginationService {
    pub fn new(defaults: PageTokenOptions) -> Self {
        Self { defaults }
    }
}

#[async_trait]
impl PaginationServiceTrait for PaginationService {
    async fn page_tokens(
        &self,
        req: &PageTokensRequest,
    ) -> Result<ApiResponse<PageTokensResponse>, ServiceError> {
        if let Err(errors) = req.validate() {
            let message = format_validation_errors(&errors);
            error!("❌ Invalid page token request: {message}");
            return Err(ServiceError::Validation(vec![message]));
        }

        let options = req.options(self.defaults);
        let (page, total_pages) = req.page_bounds();

        info!(
            "📄 Building page tokens | Page: {}, Total pages: {}, Max shown: {}, Window: {}",
            req.page, req.total_pages, options.max_pages_to_show, options.window_size
        );

        let response = PageTokensResponse::new(page, total_pages, options);

        debug!(
            "✅ Built {} tokens for page {}/{}",
            response.tokens.len(),
            response.page,
            response.total_pages
        );

        Ok(ApiResponse::success(
            "Page tokens built successfully",
            response,
        ))
    }

    async fn page_controls(
        &self,
        meta: &Pagination,
    ) -> Result<ApiResponse<PageControls>, ServiceError> {
        info!(
            "📄 Building page controls | Page: {}, Size: {}, Items: {}, Total pages: {}",
            meta.page, meta.page_size, meta.total_items, meta.total_pages
        );

        let controls = meta.controls(&self.defaults);

        debug!(
            "✅ Controls for page {}/{} | prev: {:?}, next: {:?}",
            controls.page, controls.total_pages, controls.previous_page, controls.next_page
        );

        Ok(ApiResponse::success(
            "Page controls built successfully",
            controls,
        ))
    }
}
