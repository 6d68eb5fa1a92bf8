// ==========================================
// Ювелирный MES - конфигурация приложения
// ==========================================
// JSON-файл с пообъектными значениями по умолчанию:
// отсутствующий файл или отсутствующее поле не ошибка.
// ==========================================

use crate::domain::WaxMethod;
use crate::engine::MethodClassifier;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

fn default_weight_precision() -> u32 {
    3
}

fn default_erp_timeout_secs() -> u64 {
    5
}

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Знаков после запятой в весовых агрегатах
    #[serde(default = "default_weight_precision")]
    pub weight_precision: u32,

    /// Таймаут вызова моста 1С, секунды
    #[serde(default = "default_erp_timeout_secs")]
    pub erp_timeout_secs: u64,

    /// Явные переопределения метода изготовления по артикулу
    /// (для артикулов, которые эвристика по букве «д»/"d" ведёт не туда)
    #[serde(default)]
    pub method_overrides: HashMap<String, WaxMethod>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weight_precision: default_weight_precision(),
            erp_timeout_secs: default_erp_timeout_secs(),
            method_overrides: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Читает конфигурацию из JSON-файла.
    ///
    /// Отсутствующий файл даёт конфигурацию по умолчанию;
    /// синтаксическая ошибка в существующем файле - ошибка.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "файл конфигурации не найден, используются значения по умолчанию");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("не удалось прочитать конфигурацию {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("некорректный JSON конфигурации {}", path.display()))?;
        Ok(config)
    }

    /// Классификатор методов с переопределениями из конфигурации
    pub fn method_classifier(&self) -> MethodClassifier {
        MethodClassifier::with_overrides(self.method_overrides.clone())
    }

    /// Таймаут моста 1С
    pub fn erp_timeout(&self) -> Duration {
        Duration::from_secs(self.erp_timeout_secs)
    }
}

/// Путь файла конфигурации по умолчанию
/// (каталог конфигурации пользователя, иначе текущий каталог)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jewelry-wax-mes")
        .join("config.json")
}
