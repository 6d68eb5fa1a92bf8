// ==========================================
// Ювелирный MES - ядро воскового передела
// ==========================================
// Разворот заказов в прослеживаемые единицы, партии
// металлургического учёта, восковые наряды с жизненным
// циклом и сборка восковых ёлок. GUI и COM-мост в 1С -
// внешние слои поверх этой библиотеки.
// ==========================================

// ==========================================
// Объявление модулей
// ==========================================

// Доменная модель - сущности и типы
pub mod domain;

// Слой пулов - хранение в памяти
pub mod repository;

// Слой движков - бизнес-правила
pub mod engine;

// Приём внешних данных - заказы из формы ввода
pub mod importer;

// Конфигурация
pub mod config;

// Мост в 1С - внешний канал
pub mod erp;

// Логирование
pub mod logging;

// API-слой - фасад для GUI
pub mod api;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные типы
pub use domain::{
    round_weight, Batch, BatchMapping, CastGroupKey, CastingTree, JobEvent, JobStatus,
    JobSummary, Order, OrderRecord, OrderRow, Unit, WaxJob, WaxMethod,
};

// Движки
pub use engine::{
    BatchGrouper, JobBuilder, LifecycleEngine, LifecycleError, MethodClassifier,
    ProductionOrchestrator, TreeAssembler, UnitExpander,
};

// Пулы
pub use repository::{
    AssemblyStagingRepository, OrderRepository, ProductionRepositories, RepositoryError,
    TreeRepository, WaxJobRepository,
};

// Мост в 1С
pub use erp::{ErpBridge, ErpError, OfflineBridge, TimeoutBridge};

// Конфигурация и API
pub use api::{OrderApi, WaxApi};
pub use config::AppConfig;

// ==========================================
// Константы
// ==========================================

// Версия системы
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Название системы
pub const APP_NAME: &str = "Ювелирный MES - восковой передел";

// Знаков после запятой в весовых агрегатах по умолчанию
pub const DEFAULT_WEIGHT_PRECISION: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
