// ==========================================
// Ювелирный MES - таймаут вызовов моста 1С
// ==========================================
// COM-вызов может зависнуть вместе с базой 1С; обёртка
// выполняет его на вспомогательном потоке и ждёт не дольше
// заданного таймаута. Зависший поток доработает в фоне,
// его результат отбрасывается.
// ==========================================

use crate::domain::JobSummary;
use crate::erp::bridge::{ErpBridge, ErpError};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::warn;

pub struct TimeoutBridge {
    inner: Arc<dyn ErpBridge>,
    timeout: Duration,
}

impl TimeoutBridge {
    pub fn new(inner: Arc<dyn ErpBridge>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl ErpBridge for TimeoutBridge {
    fn create_work_order(&self, job: &JobSummary) -> Result<String, ErpError> {
        let inner = Arc::clone(&self.inner);
        let job = job.clone();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(inner.create_work_order(&job));
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let secs = self.timeout.as_secs();
                warn!(timeout_secs = secs, "мост 1С не ответил вовремя");
                Err(ErpError::Timeout { secs })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ErpError::Disconnected),
        }
    }
}
