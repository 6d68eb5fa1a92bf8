// ==========================================
// Ювелирный MES - пул восковых ёлок
// ==========================================
// Ёлки только добавляются; после создания не меняются.
// ==========================================

use crate::domain::CastingTree;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::Mutex;

pub struct TreeRepository {
    trees: Mutex<Vec<CastingTree>>,
}

impl TreeRepository {
    pub fn new() -> Self {
        Self {
            trees: Mutex::new(Vec::new()),
        }
    }

    /// Добавляет собранные ёлки в пул
    pub fn append_all(&self, new_trees: Vec<CastingTree>) -> RepositoryResult<()> {
        let mut trees = self
            .trees
            .lock()
            .map_err(|_| RepositoryError::poisoned("trees"))?;
        trees.extend(new_trees);
        Ok(())
    }

    /// Снимок всех ёлок
    pub fn list(&self) -> RepositoryResult<Vec<CastingTree>> {
        let trees = self
            .trees
            .lock()
            .map_err(|_| RepositoryError::poisoned("trees"))?;
        Ok(trees.clone())
    }

    pub fn count(&self) -> RepositoryResult<usize> {
        let trees = self
            .trees
            .lock()
            .map_err(|_| RepositoryError::poisoned("trees"))?;
        Ok(trees.len())
    }
}

impl Default for TreeRepository {
    fn default() -> Self {
        Self::new()
    }
}
