use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod member_search;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
