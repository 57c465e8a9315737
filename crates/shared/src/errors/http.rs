use crate::errors::{errors::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        self.0.log();

        let (status, msg) = match self.0 {
            ServiceError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.join("\n")),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn validation_maps_to_bad_request() {
        let response =
            AppErrorHttp(ServiceError::Validation(vec!["page: bad".into()])).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_messages_are_joined_into_error_body() {
        let response = AppErrorHttp::from(ServiceError::Validation(vec![
            "max_pages_to_show: too small".into(),
            "window_size: too large".into(),
        ]))
        .into_response();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.status, "error");
        assert_eq!(
            body.message,
            "max_pages_to_show: too small\nwindow_size: too large"
        );
    }
}
