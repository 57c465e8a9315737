use crate::{
    domain::{
        requests::PageTokensRequest,
        responses::{ApiResponse, PageControls, PageTokensResponse, Pagination},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaginationService = Arc<dyn PaginationServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaginationServiceTrait {
    async fn page_tokens(
        &self,
        req: &PageTokensRequest,
    ) -> Result<ApiResponse<PageTokensResponse>, ServiceError>;
    async fn page_controls(
        &self,
        meta: &Pagination,
    ) -> Result<ApiResponse<PageControls>, ServiceError>;
}
