use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
}

impl ServiceError {
    pub fn log(&self) {
        match self {
            ServiceError::Validation(_) => warn!("📝 {}", self),
        }
    }
}
