mod pagination;

pub use self::pagination::{DynPaginationService, PaginationServiceTrait};
