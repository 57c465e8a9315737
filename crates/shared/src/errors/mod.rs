mod errors;
mod http;
mod service;
mod validate;

pub use self::errors::ErrorResponse;
pub use self::http::AppErrorHttp;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
