// ==========================================
// Ювелирный MES - пул проведённых заказов
// ==========================================
// Ключ - код заказа. Вставка идемпотентна: повторная подача
// того же кода возвращает существующую запись без изменений.
// ==========================================

use crate::domain::OrderRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Результат идемпотентной вставки
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// Запись вставлена впервые
    Inserted,
    /// Запись с таким кодом уже существовала; возвращена как есть
    Existing(OrderRecord),
}

pub struct OrderRepository {
    records: Mutex<HashMap<String, OrderRecord>>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Идемпотентная вставка: существующая запись никогда не перезаписывается
    pub fn insert_if_absent(&self, record: OrderRecord) -> RepositoryResult<InsertOutcome> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::poisoned("orders"))?;

        if let Some(existing) = records.get(&record.order_code) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        records.insert(record.order_code.clone(), record);
        Ok(InsertOutcome::Inserted)
    }

    /// Запись по коду заказа
    pub fn get(&self, order_code: &str) -> RepositoryResult<Option<OrderRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::poisoned("orders"))?;
        Ok(records.get(order_code).cloned())
    }

    /// Коды всех проведённых заказов
    pub fn list_codes(&self) -> RepositoryResult<Vec<String>> {
        let records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::poisoned("orders"))?;
        let mut codes: Vec<String> = records.keys().cloned().collect();
        codes.sort();
        Ok(codes)
    }

    pub fn count(&self) -> RepositoryResult<usize> {
        let records = self
            .records
            .lock()
            .map_err(|_| RepositoryError::poisoned("orders"))?;
        Ok(records.len())
    }
}

impl Default for OrderRepository {
    fn default() -> Self {
        Self::new()
    }
}
