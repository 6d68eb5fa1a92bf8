// ==========================================
// Ювелирный MES - приём заказа из формы ввода
// ==========================================
// Заказ приходит логической JSON-формой:
// { "number": "00ЮП-000123" | отсутствует,
//   "rows": [ { article, qty, weight, metal, hallmark, color, size } ] }
// Сомнительные строки дают предупреждения, а не отказ приёма.
// ==========================================

use crate::domain::Order;
use std::path::Path;
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("некорректный JSON заказа: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("не удалось прочитать файл заказа {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Принятый заказ с предупреждениями валидации
#[derive(Debug, Clone)]
pub struct ImportedOrder {
    pub order: Order,
    pub warnings: Vec<String>,
}

// ==========================================
// OrderImporter
// ==========================================
pub struct OrderImporter;

impl OrderImporter {
    pub fn new() -> Self {
        Self
    }

    /// Разбирает заказ из JSON-строки.
    ///
    /// Нулевое количество и нечисловой вес не отклоняют заказ:
    /// такая строка даст ноль единиц либо нулевой вес, о чём
    /// оператор предупреждается.
    #[instrument(skip(self, json))]
    pub fn parse(&self, json: &str) -> Result<ImportedOrder, ImportError> {
        let order: Order = serde_json::from_str(json)?;

        let mut warnings = Vec::new();
        for (idx, row) in order.rows.iter().enumerate() {
            if row.qty == 0 {
                warnings.push(format!(
                    "строка {} (артикул {}): нулевое количество, единицы не будут созданы",
                    idx + 1,
                    row.article
                ));
            }
            if !row.weight.is_finite() || row.weight < 0.0 {
                warnings.push(format!(
                    "строка {} (артикул {}): подозрительный вес {}",
                    idx + 1,
                    row.article,
                    row.weight
                ));
            }
        }
        for w in &warnings {
            warn!(warning = %w, "предупреждение приёма заказа");
        }

        Ok(ImportedOrder { order, warnings })
    }

    /// Читает и разбирает заказ из файла
    pub fn load_file(&self, path: &Path) -> Result<ImportedOrder, ImportError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.parse(&raw)
    }
}

impl Default for OrderImporter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Нумерация заказов
// ==========================================

/// Следующий номер заказа в формате «00ЮП-NNNNNN».
///
/// На нечитаемом последнем номере последовательность
/// начинается заново с 00ЮП-000001.
pub fn next_order_number(last: &str) -> String {
    let mut parts = last.rsplitn(2, '-');
    let tail = parts.next().unwrap_or("");
    let prefix = parts.next().unwrap_or("");
    match (prefix.is_empty(), tail.parse::<u32>()) {
        (false, Ok(num)) => format!("{}-{:06}", prefix, num + 1),
        _ => "00ЮП-000001".to_string(),
    }
}
