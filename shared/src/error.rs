use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error(transparent)]
    TransportError(#[from] reqwest::Error),
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
    #[error("{0}")]
    DocumentStoreError(String),
    #[error("{0}")]
    BlobStoreError(String),
    #[error("{0}")]
    GeolocationError(String),
}

pub type AppResult<T> = Result<T, AppError>;
