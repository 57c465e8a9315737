mod api;
mod controls;
mod page_token;
mod pagination;

pub use self::api::ApiResponse;
pub use self::controls::{PageControls, PageTokensResponse};
pub use self::page_token::{ELLIPSIS, PageToken};
pub use self::pagination::Pagination;
