// ==========================================
// Ювелирный MES - пул восковых нарядов
// ==========================================
// Плоский список строк нарядов. Строки одного логического
// наряда разделяют job_code и изменяются одним захватом
// блокировки, чтобы наряд не наблюдался в смешанном статусе.
// ==========================================

use crate::domain::{JobStatus, WaxJob};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::Mutex;

/// Исход условной правки строк наряда
#[derive(Debug, Clone, PartialEq)]
pub enum LineUpdate {
    /// Строк с таким кодом в пуле нет
    Missing,
    /// Текущий статус не совпал с ожидаемым; пул не изменён
    StatusMismatch(JobStatus),
    /// Правка применена к указанному числу строк
    Applied(usize),
}

pub struct WaxJobRepository {
    jobs: Mutex<Vec<WaxJob>>,
}

impl WaxJobRepository {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    /// Добавляет строки нарядов (при проведении заказа)
    pub fn extend(&self, lines: Vec<WaxJob>) -> RepositoryResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        jobs.extend(lines);
        Ok(())
    }

    /// Все строки логического наряда по его коду
    pub fn lines(&self, job_code: &str) -> RepositoryResult<Vec<WaxJob>> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        Ok(jobs.iter().filter(|j| j.job_code == job_code).cloned().collect())
    }

    /// Применяет правку ко всем строкам наряда под одной блокировкой.
    ///
    /// Возвращает число затронутых строк; 0 означает неизвестный код,
    /// при этом пул не изменён.
    pub fn update_lines<F>(&self, job_code: &str, mut apply: F) -> RepositoryResult<usize>
    where
        F: FnMut(&mut WaxJob),
    {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        let mut touched = 0;
        for job in jobs.iter_mut().filter(|j| j.job_code == job_code) {
            apply(job);
            touched += 1;
        }
        Ok(touched)
    }

    /// Проверка статуса и правка всех строк наряда одним захватом.
    ///
    /// Строки одного кода всегда разделяют статус, поэтому проверка
    /// выполняется по первой найденной строке. При несовпадении
    /// статуса пул остаётся нетронутым.
    pub fn transition_lines<F>(
        &self,
        job_code: &str,
        expected: JobStatus,
        mut apply: F,
    ) -> RepositoryResult<LineUpdate>
    where
        F: FnMut(&mut WaxJob),
    {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;

        let current = match jobs.iter().find(|j| j.job_code == job_code) {
            Some(job) => job.status,
            None => return Ok(LineUpdate::Missing),
        };
        if current != expected {
            return Ok(LineUpdate::StatusMismatch(current));
        }

        let mut touched = 0;
        for job in jobs.iter_mut().filter(|j| j.job_code == job_code) {
            apply(job);
            touched += 1;
        }
        Ok(LineUpdate::Applied(touched))
    }

    /// Снимок всех строк пула
    pub fn all(&self) -> RepositoryResult<Vec<WaxJob>> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        Ok(jobs.clone())
    }

    /// Коды логических нарядов в порядке первого появления
    pub fn job_codes(&self) -> RepositoryResult<Vec<String>> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        let mut codes: Vec<String> = Vec::new();
        for job in jobs.iter() {
            if !codes.contains(&job.job_code) {
                codes.push(job.job_code.clone());
            }
        }
        Ok(codes)
    }

    /// Число строк в пуле
    pub fn count(&self) -> RepositoryResult<usize> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|_| RepositoryError::poisoned("wax_jobs"))?;
        Ok(jobs.len())
    }
}

impl Default for WaxJobRepository {
    fn default() -> Self {
        Self::new()
    }
}
