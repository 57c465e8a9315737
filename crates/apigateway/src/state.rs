use shared::{
    abstract_trait::DynPaginationService, config::Config, domain::requests::PageTokenOptions,
    service::PaginationService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pagination_service: DynPaginationService,
}

impl AppState {
    pub fn new(defaults: PageTokenOptions) -> Self {
        let pagination_service = Arc::new(PaginationService::new(defaults)) as DynPaginationService;

        Self { pagination_service }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pagination.options())
    }
}
