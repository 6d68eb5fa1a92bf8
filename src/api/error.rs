// ==========================================
// Ювелирный MES - ошибки API-слоя
// ==========================================
// Ошибки нижних слоёв приводятся к сообщениям,
// пригодным для показа оператору.
// ==========================================

use crate::engine::LifecycleError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("не найдено: {0}")]
    NotFound(String),

    #[error("недопустимый переход статуса: {0}")]
    InvalidTransition(String),

    #[error("некорректный ввод: {0}")]
    InvalidInput(String),

    #[error("внутренняя ошибка: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, code } => {
                ApiError::NotFound(format!("{entity} {code}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::JobNotFound(code) => ApiError::NotFound(format!("наряд {code}")),
            LifecycleError::InvalidTransition { .. } => {
                ApiError::InvalidTransition(err.to_string())
            }
            LifecycleError::Repository(e) => e.into(),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}
