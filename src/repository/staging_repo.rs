// ==========================================
// Ювелирный MES - зона комплектования ёлок
// ==========================================
// Оператор складывает сюда коды закрытых нарядов перед сборкой.
// Очищается при успешной сборке или явным сбросом.
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::Mutex;

pub struct AssemblyStagingRepository {
    codes: Mutex<Vec<String>>,
}

impl AssemblyStagingRepository {
    pub fn new() -> Self {
        Self {
            codes: Mutex::new(Vec::new()),
        }
    }

    /// Кладёт код наряда в зону комплектования; повтор игнорируется
    pub fn stage(&self, job_code: &str) -> RepositoryResult<bool> {
        let mut codes = self
            .codes
            .lock()
            .map_err(|_| RepositoryError::poisoned("assembly_staging"))?;
        if codes.iter().any(|c| c == job_code) {
            return Ok(false);
        }
        codes.push(job_code.to_string());
        Ok(true)
    }

    /// Убирает код наряда из зоны комплектования
    pub fn unstage(&self, job_code: &str) -> RepositoryResult<bool> {
        let mut codes = self
            .codes
            .lock()
            .map_err(|_| RepositoryError::poisoned("assembly_staging"))?;
        let before = codes.len();
        codes.retain(|c| c != job_code);
        Ok(codes.len() != before)
    }

    /// Забирает всё содержимое, опустошая зону
    pub fn drain(&self) -> RepositoryResult<Vec<String>> {
        let mut codes = self
            .codes
            .lock()
            .map_err(|_| RepositoryError::poisoned("assembly_staging"))?;
        Ok(std::mem::take(&mut *codes))
    }

    /// Явный сброс зоны комплектования
    pub fn clear(&self) -> RepositoryResult<()> {
        let mut codes = self
            .codes
            .lock()
            .map_err(|_| RepositoryError::poisoned("assembly_staging"))?;
        codes.clear();
        Ok(())
    }

    /// Текущее содержимое без изменения
    pub fn list(&self) -> RepositoryResult<Vec<String>> {
        let codes = self
            .codes
            .lock()
            .map_err(|_| RepositoryError::poisoned("assembly_staging"))?;
        Ok(codes.clone())
    }
}

impl Default for AssemblyStagingRepository {
    fn default() -> Self {
        Self::new()
    }
}
