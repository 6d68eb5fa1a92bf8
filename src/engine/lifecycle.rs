// ==========================================
// Ювелирный MES - жизненный цикл наряда
// ==========================================
// created → given → done → accepted → tree_ready
// Каждый переход пишет запись в журнал наряда. Статус
// tree_ready выставляется сборкой ёлки, прямого перехода нет.
// Обратных переходов нет - исправления вне этого движка.
// Выгрузка в 1С при приёмке выполняется по возможности:
// отказ моста никогда не откатывает локальный переход.
// ==========================================

use crate::domain::{JobEvent, JobStatus, JobSummary, WaxJob};
use crate::erp::ErpBridge;
use crate::repository::{LineUpdate, RepositoryError, WaxJobRepository};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

// Этапы журнала наряда
pub const STAGE_GIVEN: &str = "given";
pub const STAGE_DONE: &str = "done";
pub const STAGE_ACCEPTED: &str = "accepted";
pub const STAGE_SYNCED_TO_ERP: &str = "synced_to_erp";
pub const STAGE_TREE_READY: &str = "tree_ready";

// ==========================================
// Ошибки жизненного цикла
// ==========================================
#[derive(Error, Debug)]
pub enum LifecycleError {
    // Неизвестный код - восстановимая ситуация: пулы не изменены
    #[error("наряд не найден: {0}")]
    JobNotFound(String),

    #[error("недопустимый переход наряда {job_code}: {from} → {to}")]
    InvalidTransition {
        job_code: String,
        from: JobStatus,
        to: JobStatus,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Итог приёмки: локальный переход уже состоялся,
/// номер документа 1С есть только при удавшейся выгрузке
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptOutcome {
    pub erp_doc_number: Option<String>,
}

// ==========================================
// LifecycleEngine - переходы статусов наряда
// ==========================================
pub struct LifecycleEngine {
    jobs: Arc<WaxJobRepository>,
    erp: Arc<dyn ErpBridge>,
    precision: u32,
}

impl LifecycleEngine {
    pub fn new(jobs: Arc<WaxJobRepository>, erp: Arc<dyn ErpBridge>, precision: u32) -> Self {
        Self { jobs, erp, precision }
    }

    /// Выдача наряда исполнителю (created → given)
    #[instrument(skip(self))]
    pub fn give(&self, job_code: &str, executor: &str) -> Result<(), LifecycleError> {
        self.transition(job_code, JobStatus::Created, JobStatus::Given, |job| {
            job.assigned_to = Some(executor.to_string());
            job.status = JobStatus::Given;
            job.events.push(JobEvent::new(STAGE_GIVEN, Some(executor), None));
        })?;
        info!(job_code, executor, "наряд выдан");
        Ok(())
    }

    /// Сдача наряда (given → done).
    ///
    /// Фактический вес воска может отсутствовать - весов под рукой
    /// может не быть; это не препятствие для сдачи.
    #[instrument(skip(self))]
    pub fn complete(
        &self,
        job_code: &str,
        executor: &str,
        measured_weight: Option<f64>,
    ) -> Result<(), LifecycleError> {
        self.transition(job_code, JobStatus::Given, JobStatus::Done, |job| {
            job.completed_by = Some(executor.to_string());
            job.measured_wax_weight = measured_weight;
            job.status = JobStatus::Done;
            job.events.push(JobEvent::new(
                STAGE_DONE,
                Some(executor),
                Some(json!({ "weight_wax": measured_weight })),
            ));
        })?;
        info!(job_code, executor, ?measured_weight, "наряд сдан");
        Ok(())
    }

    /// Приёмка контролем (done → accepted) с попыткой выгрузки в 1С.
    ///
    /// Локальный переход завершается всегда; отказ моста лишь
    /// оставляет наряд без номера документа, выгрузку можно
    /// повторить позже через `sync_to_erp`.
    #[instrument(skip(self))]
    pub fn accept(&self, job_code: &str, inspector: &str) -> Result<AcceptOutcome, LifecycleError> {
        self.transition(job_code, JobStatus::Done, JobStatus::Accepted, |job| {
            job.accepted_by = Some(inspector.to_string());
            job.status = JobStatus::Accepted;
            job.events.push(JobEvent::new(STAGE_ACCEPTED, Some(inspector), None));
        })?;
        info!(job_code, inspector, "наряд принят");

        let erp_doc_number = self.push_to_erp(job_code, Some(inspector))?;
        Ok(AcceptOutcome { erp_doc_number })
    }

    /// Повторная выгрузка наряда в 1С (кнопка «В 1С»).
    ///
    /// Возвращает номер документа при успехе; отказ моста
    /// логируется и даёт `None`, состояние наряда не меняется.
    #[instrument(skip(self))]
    pub fn sync_to_erp(&self, job_code: &str) -> Result<Option<String>, LifecycleError> {
        let lines = self.jobs.lines(job_code)?;
        if lines.is_empty() {
            return Err(LifecycleError::JobNotFound(job_code.to_string()));
        }
        Ok(self.push_to_erp(job_code, None)?)
    }

    /// Отметка «собран в ёлку»; вызывается сборщиком ёлок
    pub fn mark_tree_ready(&self, job_code: &str, tree_code: &str) -> Result<(), LifecycleError> {
        let touched = self.jobs.update_lines(job_code, |job| {
            job.status = JobStatus::TreeReady;
            job.events.push(JobEvent::new(
                STAGE_TREE_READY,
                None,
                Some(json!({ "tree_code": tree_code })),
            ));
        })?;
        if touched == 0 {
            return Err(LifecycleError::JobNotFound(job_code.to_string()));
        }
        Ok(())
    }

    /// Логический наряд целиком (для отображения и выгрузки)
    pub fn summary(&self, job_code: &str) -> Result<JobSummary, LifecycleError> {
        let lines = self.jobs.lines(job_code)?;
        JobSummary::from_lines(&lines, self.precision)
            .ok_or_else(|| LifecycleError::JobNotFound(job_code.to_string()))
    }

    // ==========================================
    // Внутреннее
    // ==========================================

    /// Общий переход: проверка статуса и правка всех строк
    /// наряда под одной блокировкой пула
    fn transition<F>(
        &self,
        job_code: &str,
        expected: JobStatus,
        target: JobStatus,
        apply: F,
    ) -> Result<usize, LifecycleError>
    where
        F: FnMut(&mut WaxJob),
    {
        match self.jobs.transition_lines(job_code, expected, apply)? {
            LineUpdate::Missing => Err(LifecycleError::JobNotFound(job_code.to_string())),
            LineUpdate::StatusMismatch(from) => Err(LifecycleError::InvalidTransition {
                job_code: job_code.to_string(),
                from,
                to: target,
            }),
            LineUpdate::Applied(touched) => Ok(touched),
        }
    }

    /// Выгрузка наряда в 1С по возможности
    fn push_to_erp(
        &self,
        job_code: &str,
        user: Option<&str>,
    ) -> Result<Option<String>, RepositoryError> {
        let lines = self.jobs.lines(job_code)?;
        let summary = match JobSummary::from_lines(&lines, self.precision) {
            Some(summary) => summary,
            None => return Ok(None),
        };

        match self.erp.create_work_order(&summary) {
            Ok(doc_number) => {
                self.jobs.update_lines(job_code, |job| {
                    job.erp_doc_number = Some(doc_number.clone());
                    job.events.push(JobEvent::new(
                        STAGE_SYNCED_TO_ERP,
                        user,
                        Some(json!({ "doc_num": doc_number.clone() })),
                    ));
                })?;
                info!(job_code, %doc_number, "наряд выгружен в 1С");
                Ok(Some(doc_number))
            }
            Err(e) => {
                // не фатально: наряд остаётся в локальном статусе,
                // выгрузку можно повторить
                warn!(job_code, error = %e, "выгрузка наряда в 1С не удалась");
                Ok(None)
            }
        }
    }
}
