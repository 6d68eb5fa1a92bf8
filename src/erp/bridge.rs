// ==========================================
// Ювелирный MES - контракт моста в 1С
// ==========================================
// Ядро вызывает мост только чтобы отразить уже посчитанное
// локально состояние; от вычислений на стороне ERP оно
// не зависит. Любой отказ моста не фатален.
// ==========================================

use crate::domain::JobSummary;
use thiserror::Error;

/// Ошибки стороннего канала в ERP
#[derive(Error, Debug)]
pub enum ErpError {
    #[error("мост 1С не ответил за {secs} с")]
    Timeout { secs: u64 },

    #[error("мост 1С недоступен: {0}")]
    Unavailable(String),

    #[error("канал моста 1С разорван")]
    Disconnected,
}

/// Мост в 1С со стороны воскового передела.
///
/// Единственная операция, нужная ядру: создать документ
/// «Наряд восковые изделия» по принятому наряду и вернуть
/// его номер.
pub trait ErpBridge: Send + Sync {
    fn create_work_order(&self, job: &JobSummary) -> Result<String, ErpError>;
}

// ==========================================
// OfflineBridge - заглушка без подключения
// ==========================================
// Рабочий режим без 1С: каждый вызов завершается отказом,
// локальные переходы статусов при этом проходят штатно.
pub struct OfflineBridge;

impl ErpBridge for OfflineBridge {
    fn create_work_order(&self, _job: &JobSummary) -> Result<String, ErpError> {
        Err(ErpError::Unavailable("работа без подключения к 1С".to_string()))
    }
}
