// ==========================================
// Ювелирный MES - ошибки слоя пулов
// ==========================================
// Инструмент: thiserror
// ==========================================

use thiserror::Error;

/// Ошибки доступа к пулам
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("запись не найдена: {entity} с кодом {code}")]
    NotFound { entity: String, code: String },

    #[error("не удалось захватить блокировку пула: {0}")]
    LockError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    /// Ошибка захвата отравленного мьютекса пула
    pub fn poisoned(pool: &str) -> Self {
        RepositoryError::LockError(format!("пул {pool}: мьютекс отравлен"))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
