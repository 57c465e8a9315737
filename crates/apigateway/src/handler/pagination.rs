use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynPaginationService,
    domain::{
        requests::PageTokensRequest,
        responses::{ApiResponse, PageControls, PageTokensResponse, Pagination},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/pagination/tokens",
    tag = "Pagination",
    params(PageTokensRequest),
    responses(
        (status = 200, description = "Page tokens for the requested page", body = ApiResponse<PageTokensResponse>),
        (status = 400, description = "Invalid display tuning", body = ErrorResponse)
    )
)]
pub async fn get_page_tokens(
    Extension(service): Extension<DynPaginationService>,
    Query(params): Query<PageTokensRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.page_tokens(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/pagination/controls",
    tag = "Pagination",
    request_body = Pagination,
    responses(
        (status = 200, description = "Page controls for a list meta block", body = ApiResponse<PageControls>),
        (status = 422, description = "Malformed meta block")
    )
)]
pub async fn post_page_controls(
    Extension(service): Extension<DynPaginationService>,
    Json(body): Json<Pagination>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.page_controls(&body).await?;
    Ok(Json(response))
}

pub fn pagination_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/pagination/tokens", get(get_page_tokens))
        .route("/api/pagination/controls", post(post_page_controls))
        .layer(Extension(app_state.pagination_service.clone()))
}
