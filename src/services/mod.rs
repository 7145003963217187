use thiserror::Error;

use crate::fetcher::FetchError;

pub mod data;
pub mod users;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
