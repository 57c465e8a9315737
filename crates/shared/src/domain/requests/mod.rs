mod pagination;

pub use self::pagination::{
    MAX_PAGES_TO_SHOW_LIMIT, MAX_WINDOW_SIZE, PageTokenOptions, PageTokensRequest,
};
