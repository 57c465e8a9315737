mod pagination;

pub use self::pagination::PaginationService;
